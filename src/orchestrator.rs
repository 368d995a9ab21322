use crate::conversation::{self, script, Step};
use crate::error::TurnError;
use crate::report;
use crate::sender::MessageSender;
use crate::store::{ConversationLogEntry, LogStore, RecordStore, SessionStore};
use crate::text;
use anyhow::anyhow;
use chrono::Utc;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Call deadlines for one conversation turn.
#[derive(Debug, Clone)]
pub struct TurnLimits {
    /// Deadline for each session/record/log store call
    pub store_timeout: Duration,

    /// Deadline for each outbound delivery
    pub send_timeout: Duration,
}

impl Default for TurnLimits {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
            send_timeout: Duration::from_secs(10),
        }
    }
}

/// Top-level conversation driver; one instance serves all identities.
///
/// Each inbound message is one short-lived turn: load the session, run the
/// pure state machine, persist, assemble the record on completion, log, and
/// deliver the replies. Turns for the same identity are serialized by a
/// per-identity lock; different identities run fully concurrently.
pub struct Orchestrator {
    sessions: Arc<dyn SessionStore>,
    records: Arc<dyn RecordStore>,
    logs: Arc<dyn LogStore>,
    sender: Arc<dyn MessageSender>,
    limits: TurnLimits,

    /// Per-identity turn locks guarding the read-modify-write cycle
    turn_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Orchestrator {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        records: Arc<dyn RecordStore>,
        logs: Arc<dyn LogStore>,
        sender: Arc<dyn MessageSender>,
        limits: TurnLimits,
    ) -> Self {
        Self {
            sessions,
            records,
            logs,
            sender,
            limits,
            turn_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Process one inbound message and deliver the replies.
    ///
    /// Never fails: a turn error is logged with full context and collapses
    /// into the generic retry-or-restart apology.
    pub async fn handle_incoming(&self, identity: &str, raw_message: &str) -> Vec<String> {
        let lock = self.turn_lock(identity).await;
        let _guard = lock.lock().await;

        match self.run_turn(identity, raw_message).await {
            Ok(replies) => replies,
            Err(err) => {
                error!("Conversation turn failed for {}: {}", identity, err);

                // Best effort: a failure of the apology itself is only logged
                if let Err(send_err) = self.deliver(identity, script::APOLOGY).await {
                    warn!("Failed to deliver apology to {}: {}", identity, send_err);
                }

                vec![script::APOLOGY.to_string()]
            }
        }
    }

    async fn run_turn(&self, identity: &str, raw_message: &str) -> Result<Vec<String>, TurnError> {
        let message = text::normalize(raw_message);

        let existing = self
            .bounded_store("session load", self.sessions.get(identity))
            .await?;

        // Step the inbound message is processed under, for the audit trail
        let processed_step = if conversation::is_restart_command(&message) {
            Step::Start
        } else {
            existing
                .as_ref()
                .map(|session| session.current_step)
                .unwrap_or(Step::Start)
        };

        info!(
            "Processing message from {} at step {}",
            identity, processed_step
        );

        let now = Utc::now();
        let outcome = conversation::transition(existing, identity, &message, now);

        self.bounded_store("session save", self.sessions.put(&outcome.session))
            .await?;

        let mut replies = outcome.replies;
        if outcome.completed {
            let (record, summary) = report::assemble(&outcome.session, now);
            self.bounded_store("record insert", self.records.insert(&record))
                .await?;
            info!("Voting record {} stored for {}", record.id, identity);
            replies.push(summary);
        }

        self.append_log(ConversationLogEntry::inbound(
            identity,
            processed_step,
            &message,
            now,
        ))
        .await;

        for body in &replies {
            self.deliver(identity, body).await?;
            self.append_log(ConversationLogEntry::outbound(identity, body, Utc::now()))
                .await;
        }

        Ok(replies)
    }

    /// Run a store call under the configured deadline.
    async fn bounded_store<T>(
        &self,
        op: &'static str,
        call: impl Future<Output = anyhow::Result<T>>,
    ) -> Result<T, TurnError> {
        match tokio::time::timeout(self.limits.store_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(cause)) => Err(TurnError::StoreUnavailable { op, cause }),
            Err(_) => Err(TurnError::StoreUnavailable {
                op,
                cause: anyhow!("timed out after {:?}", self.limits.store_timeout),
            }),
        }
    }

    /// Deliver one message under the configured deadline.
    async fn deliver(&self, identity: &str, body: &str) -> Result<(), TurnError> {
        match tokio::time::timeout(self.limits.send_timeout, self.sender.send(identity, body)).await
        {
            Ok(Ok(receipt)) => {
                info!(
                    "Message delivered to {} via {} (id: {})",
                    identity,
                    self.sender.name(),
                    receipt.message_id.as_deref().unwrap_or("n/a")
                );
                Ok(())
            }
            Ok(Err(cause)) => Err(TurnError::DeliveryFailed {
                identity: identity.to_string(),
                cause,
            }),
            Err(_) => Err(TurnError::DeliveryFailed {
                identity: identity.to_string(),
                cause: anyhow!("timed out after {:?}", self.limits.send_timeout),
            }),
        }
    }

    /// Append an audit entry; failures are tolerated so the audit trail
    /// never takes a turn down with it.
    async fn append_log(&self, entry: ConversationLogEntry) {
        match tokio::time::timeout(self.limits.store_timeout, self.logs.append(&entry)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(
                "Failed to append conversation log for {}: {}",
                entry.identity, err
            ),
            Err(_) => warn!("Conversation log append timed out for {}", entry.identity),
        }
    }

    async fn turn_lock(&self, identity: &str) -> Arc<Mutex<()>> {
        let mut locks = self.turn_locks.lock().await;
        locks
            .entry(identity.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
