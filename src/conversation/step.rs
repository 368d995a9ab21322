use serde::{Deserialize, Serialize};
use std::fmt;

/// One stage of the fixed survey sequence.
///
/// Persisted as a lowercase string; a stored value that no longer matches
/// any stage deserializes to `Unknown` and is recovered by a defensive
/// session reset in the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Start,
    Name,
    Area,
    Center,
    Voted,
    Count,
    Report,
    Completed,
    #[serde(other)]
    Unknown,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::Name => "name",
            Step::Area => "area",
            Step::Center => "center",
            Step::Voted => "voted",
            Step::Count => "count",
            Step::Report => "report",
            Step::Completed => "completed",
            Step::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
