use crate::conversation::{script, ReporterSession};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable snapshot of one completed conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingRecord {
    pub id: Uuid,

    /// Canonical phone number of the reporter
    pub identity: String,

    pub full_name: String,
    pub area_name: String,
    pub voting_center: String,
    pub has_voted: bool,
    pub voters_count: u32,
    pub user_report: String,

    /// When the record was assembled
    pub recorded_at: DateTime<Utc>,
}

/// Build the final record and the reporter-facing summary from a completed
/// session. Unset optionals get their documented defaults: count 0, report
/// the "no report" sentinel, text fields a dash.
///
/// Calling this twice on the same session yields equivalent output; invoking
/// it at most once per completion is the orchestrator's responsibility.
pub fn assemble(session: &ReporterSession, now: DateTime<Utc>) -> (VotingRecord, String) {
    let record = VotingRecord {
        id: Uuid::new_v4(),
        identity: session.identity.clone(),
        full_name: field_or_dash(&session.full_name),
        area_name: field_or_dash(&session.area_name),
        voting_center: field_or_dash(&session.voting_center),
        has_voted: session.has_voted.unwrap_or(false),
        voters_count: session.voters_count.unwrap_or(0),
        user_report: session
            .user_report
            .clone()
            .unwrap_or_else(|| script::NO_REPORT.to_string()),
        recorded_at: now,
    };

    let summary = script::final_report(&record);
    (record, summary)
}

fn field_or_dash(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| "-".to_string())
}
