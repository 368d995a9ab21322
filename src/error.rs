use thiserror::Error;

/// Classified failures of one conversation turn.
///
/// Validation rejections never appear here: invalid input is a normal
/// re-prompt outcome inside the state machine, and a corrupted persisted
/// step is recovered by an in-machine reset. What remains is the
/// infrastructure: stores and the delivery provider.
#[derive(Debug, Error)]
pub enum TurnError {
    /// A store call failed or exceeded its deadline.
    #[error("store unavailable during {op}: {cause}")]
    StoreUnavailable {
        op: &'static str,
        cause: anyhow::Error,
    },

    /// The delivery provider rejected a send or exceeded its deadline.
    #[error("delivery to {identity} failed: {cause}")]
    DeliveryFailed {
        identity: String,
        cause: anyhow::Error,
    },
}
