//! Persistence capabilities
//!
//! Three narrow contracts back the conversation core:
//! - `SessionStore`: per-identity conversation state (read/upsert/patch)
//! - `RecordStore`: immutable final voting records
//! - `LogStore`: append-only conversation audit trail
//!
//! The production database implements these same traits out of process;
//! `MemoryStore` is the in-process backend used for development and tests.

pub mod memory;

pub use memory::MemoryStore;

use crate::config::StoreConfig;
use crate::conversation::{ReporterSession, SessionPatch, Step};
use crate::report::VotingRecord;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Direction of a logged conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogDirection {
    Inbound,
    Outbound,
}

/// Append-only audit row for one chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationLogEntry {
    pub id: Uuid,
    pub identity: String,
    pub direction: LogDirection,

    /// Step the message was processed under (inbound entries only)
    pub step: Option<Step>,

    pub body: String,
    pub at: DateTime<Utc>,
}

impl ConversationLogEntry {
    pub fn inbound(identity: &str, step: Step, body: &str, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            identity: identity.to_string(),
            direction: LogDirection::Inbound,
            step: Some(step),
            body: body.to_string(),
            at,
        }
    }

    pub fn outbound(identity: &str, body: &str, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            identity: identity.to_string(),
            direction: LogDirection::Outbound,
            step: None,
            body: body.to_string(),
            at,
        }
    }
}

/// Per-identity conversation state store.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the session for an identity; absence is not an error.
    async fn get(&self, identity: &str) -> Result<Option<ReporterSession>>;

    /// Full upsert keyed by `session.identity`.
    async fn put(&self, session: &ReporterSession) -> Result<()>;

    /// Apply a partial update to an existing session.
    async fn patch(&self, identity: &str, patch: SessionPatch) -> Result<()>;
}

/// Store for immutable final voting records.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, record: &VotingRecord) -> Result<()>;
}

/// Append-only conversation audit log.
#[async_trait::async_trait]
pub trait LogStore: Send + Sync {
    async fn append(&self, entry: &ConversationLogEntry) -> Result<()>;
}

/// The three store capabilities of one configured backend.
#[derive(Clone)]
pub struct Stores {
    pub sessions: Arc<dyn SessionStore>,
    pub records: Arc<dyn RecordStore>,
    pub logs: Arc<dyn LogStore>,
}

/// Store backend factory.
pub struct StoreFactory;

impl StoreFactory {
    /// Create the store backend named by the configuration.
    pub fn create(config: &StoreConfig) -> Result<Stores> {
        match config.kind.as_str() {
            "memory" => {
                let store = Arc::new(MemoryStore::new());
                Ok(Stores {
                    sessions: store.clone(),
                    records: store.clone(),
                    logs: store,
                })
            }
            other => anyhow::bail!("Unsupported store backend: {other}"),
        }
    }
}
