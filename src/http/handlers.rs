use super::state::AppState;
use super::webhook::WebhookPayload;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TestSendRequest {
    /// Destination phone number
    pub to: String,

    /// Message body
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TestSendResponse {
    pub success: bool,
    pub sent_to: String,
    pub message_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Plain status page
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>🗳️ {}</h1>\n<p>✅ الخادم يعمل بنجاح!</p>\n<p>🔗 Webhook: POST /webhook</p>",
        state.service_name
    ))
}

/// GET /webhook
/// Meta hub verification: echo the challenge when the token matches
pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let mode = params.get("hub.mode");
    let token = params.get("hub.verify_token");
    let challenge = params.get("hub.challenge");

    match (mode, token) {
        (Some(mode), Some(token)) => {
            if mode == "subscribe" && *token == state.verify_token {
                info!("Webhook verified");
                (StatusCode::OK, challenge.cloned().unwrap_or_default()).into_response()
            } else {
                warn!("Webhook verification failed");
                StatusCode::FORBIDDEN.into_response()
            }
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// POST /webhook
/// Inbound messages from the provider. Always acknowledged with 200 so the
/// provider does not redeliver; conversation failures surface to the
/// reporter as the apology message, not to the webhook response.
pub async fn receive_webhook(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> impl IntoResponse {
    let mut handled = 0usize;

    for (from, body) in payload.text_messages() {
        info!("Inbound message from {}", from);
        state.orchestrator.handle_incoming(from, body).await;
        handled += 1;
    }

    if handled == 0 {
        warn!("Webhook payload contained no text messages");
    }

    (
        StatusCode::OK,
        Json(WebhookAck {
            status: "success".to_string(),
        }),
    )
}

/// POST /test-send
/// Delivery probe straight through the configured provider
pub async fn test_send(
    State(state): State<AppState>,
    Json(req): Json<TestSendRequest>,
) -> impl IntoResponse {
    info!("Test send to {}", req.to);

    match state.sender.send(&req.to, &req.message).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(TestSendResponse {
                success: true,
                sent_to: req.to,
                message_id: receipt.message_id,
            }),
        )
            .into_response(),
        Err(err) => {
            error!("Test send failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to send: {err}"),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
