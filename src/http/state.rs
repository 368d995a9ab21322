use crate::orchestrator::Orchestrator;
use crate::sender::MessageSender;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Conversation driver handling every inbound message
    pub orchestrator: Arc<Orchestrator>,

    /// Direct sender handle for the delivery probe endpoint
    pub sender: Arc<dyn MessageSender>,

    /// Service name shown on the index page
    pub service_name: String,

    /// Token expected on webhook verification requests
    pub verify_token: String,
}
