pub mod config;
pub mod conversation;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod report;
pub mod sender;
pub mod store;
pub mod text;

pub use config::Config;
pub use conversation::{
    is_restart_command, transition, ReporterSession, SessionPatch, Step, TurnOutcome,
};
pub use error::TurnError;
pub use http::{create_router, AppState};
pub use orchestrator::{Orchestrator, TurnLimits};
pub use report::{assemble, VotingRecord};
pub use sender::{DeliveryReceipt, Dialog360Sender, MessageSender, SenderFactory, TwilioSender};
pub use store::{
    ConversationLogEntry, LogDirection, LogStore, MemoryStore, RecordStore, SessionStore,
    StoreFactory, Stores,
};
