use super::step::Step;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conversation state for one reporter, keyed by phone-number identity.
///
/// Fields fill in step order as the survey advances; a restart command
/// re-initializes the whole row. Sessions are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterSession {
    /// Canonical phone number (unique key)
    pub identity: String,

    /// Current stage of the survey
    pub current_step: Step,

    /// Reporter's full (three-part) name
    pub full_name: Option<String>,

    /// Area the reporter observes
    pub area_name: Option<String>,

    /// Voting center within the area
    pub voting_center: Option<String>,

    /// Whether the reporter has voted
    pub has_voted: Option<bool>,

    /// How many people voted alongside the reporter
    pub voters_count: Option<u32>,

    /// Free-text observation report
    pub user_report: Option<String>,

    /// Last mutation time
    pub updated_at: DateTime<Utc>,
}

impl ReporterSession {
    /// Fresh session with every answer cleared, positioned at `Start`.
    pub fn new(identity: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            identity: identity.into(),
            current_step: Step::Start,
            full_name: None,
            area_name: None,
            voting_center: None,
            has_voted: None,
            voters_count: None,
            user_report: None,
            updated_at: now,
        }
    }
}

/// Partial update for a stored session; unset fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionPatch {
    pub current_step: Option<Step>,
    pub full_name: Option<String>,
    pub area_name: Option<String>,
    pub voting_center: Option<String>,
    pub has_voted: Option<bool>,
    pub voters_count: Option<u32>,
    pub user_report: Option<String>,
}

impl SessionPatch {
    pub fn apply(self, session: &mut ReporterSession, now: DateTime<Utc>) {
        if let Some(step) = self.current_step {
            session.current_step = step;
        }
        if let Some(name) = self.full_name {
            session.full_name = Some(name);
        }
        if let Some(area) = self.area_name {
            session.area_name = Some(area);
        }
        if let Some(center) = self.voting_center {
            session.voting_center = Some(center);
        }
        if let Some(voted) = self.has_voted {
            session.has_voted = Some(voted);
        }
        if let Some(count) = self.voters_count {
            session.voters_count = Some(count);
        }
        if let Some(report) = self.user_report {
            session.user_report = Some(report);
        }
        session.updated_at = now;
    }
}
