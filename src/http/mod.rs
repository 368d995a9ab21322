//! HTTP transport for the chat provider webhook
//!
//! This module wires the conversation core to the wire:
//! - GET  /webhook - provider verification handshake
//! - POST /webhook - inbound user messages (WhatsApp Cloud payload)
//! - POST /test-send - delivery probe through the configured provider
//! - GET  /health - health check
//! - GET  / - status page

mod handlers;
mod routes;
mod state;
pub mod webhook;

pub use routes::create_router;
pub use state::AppState;
