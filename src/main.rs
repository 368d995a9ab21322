use anyhow::{Context, Result};
use clap::Parser;
use rasid::{
    create_router, AppState, Config, Orchestrator, SenderFactory, StoreFactory, TurnLimits,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// WhatsApp field-reporting service for voting observation
#[derive(Debug, Parser)]
#[command(name = "rasid", version)]
struct Args {
    /// Configuration file (basename; extension inferred)
    #[arg(long, default_value = "config/rasid")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("rasid v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!("Message provider: {}", cfg.provider.kind);
    info!("Store backend: {}", cfg.store.kind);

    let stores = StoreFactory::create(&cfg.store)?;
    let sender = SenderFactory::create(&cfg.provider)?;

    let limits = TurnLimits {
        store_timeout: Duration::from_millis(cfg.store.call_timeout_ms),
        send_timeout: Duration::from_millis(cfg.provider.send_timeout_ms),
    };
    let orchestrator = Arc::new(Orchestrator::new(
        stores.sessions,
        stores.records,
        stores.logs,
        sender.clone(),
        limits,
    ));

    let state = AppState {
        orchestrator,
        sender,
        service_name: cfg.service.name.clone(),
        verify_token: cfg.service.verify_token.clone(),
    };
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await.context("HTTP server exited")?;

    Ok(())
}
