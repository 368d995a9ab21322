use super::{ConversationLogEntry, LogStore, RecordStore, SessionStore};
use crate::conversation::{ReporterSession, SessionPatch};
use crate::report::VotingRecord;
use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory store backend.
///
/// Backs development and tests; implements all three store capabilities
/// over `RwLock`-guarded maps. The snapshot accessors exist for test
/// assertions and operator inspection.
pub struct MemoryStore {
    sessions: RwLock<HashMap<String, ReporterSession>>,
    records: RwLock<Vec<VotingRecord>>,
    logs: RwLock<Vec<ConversationLogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            records: RwLock::new(Vec::new()),
            logs: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of all stored voting records.
    pub async fn records(&self) -> Vec<VotingRecord> {
        self.records.read().await.clone()
    }

    /// Snapshot of the conversation log, in append order.
    pub async fn log_entries(&self) -> Vec<ConversationLogEntry> {
        self.logs.read().await.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, identity: &str) -> Result<Option<ReporterSession>> {
        Ok(self.sessions.read().await.get(identity).cloned())
    }

    async fn put(&self, session: &ReporterSession) -> Result<()> {
        self.sessions
            .write()
            .await
            .insert(session.identity.clone(), session.clone());
        Ok(())
    }

    async fn patch(&self, identity: &str, patch: SessionPatch) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(identity)
            .ok_or_else(|| anyhow::anyhow!("No session for identity {identity}"))?;
        patch.apply(session, Utc::now());
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, record: &VotingRecord) -> Result<()> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl LogStore for MemoryStore {
    async fn append(&self, entry: &ConversationLogEntry) -> Result<()> {
        self.logs.write().await.push(entry.clone());
        Ok(())
    }
}
