use super::script;
use super::session::ReporterSession;
use super::step::Step;
use crate::text;
use chrono::{DateTime, Utc};

/// Commands that force a session reset regardless of current step.
pub const RESTART_COMMANDS: [&str; 4] = ["بداية", "ابدأ", "تصويت", "start"];

/// Outcome of processing one inbound message.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Session state after the turn, ready to persist
    pub session: ReporterSession,

    /// Replies to deliver, in order. On completion the orchestrator appends
    /// the assembled final report as the last reply.
    pub replies: Vec<String>,

    /// True exactly when this turn moved the session into `Completed`
    pub completed: bool,
}

/// Whether the trimmed, lower-cased message is one of the restart commands.
pub fn is_restart_command(message: &str) -> bool {
    let token = text::command_token(message);
    RESTART_COMMANDS.iter().any(|command| token == *command)
}

/// Pure transition function: decides the reply and the next step for one
/// inbound message. No I/O, deterministic given `now`.
///
/// A restart command, or the absence of a session, discards any prior state
/// before step dispatch. The message that triggers a restart is consumed by
/// the welcome turn, not interpreted as an answer.
pub fn transition(
    existing: Option<ReporterSession>,
    identity: &str,
    message: &str,
    now: DateTime<Utc>,
) -> TurnOutcome {
    let session = match existing {
        Some(session) if !is_restart_command(message) => session,
        _ => ReporterSession::new(identity, now),
    };

    dispatch(session, message, now)
}

fn dispatch(mut session: ReporterSession, message: &str, now: DateTime<Utc>) -> TurnOutcome {
    session.updated_at = now;

    match session.current_step {
        Step::Start => {
            session.current_step = Step::Name;
            reply(session, script::WELCOME)
        }
        Step::Name => handle_name(session, message),
        Step::Area => handle_area(session, message),
        Step::Center => handle_center(session, message),
        Step::Voted => handle_voted(session, message),
        Step::Count => handle_count(session, message),
        Step::Report => handle_report(session, message),
        Step::Completed => reply(session, script::RESTART_HINT),
        Step::Unknown => {
            // Corrupted persisted step: reset instead of wedging the reporter.
            let mut fresh = ReporterSession::new(session.identity, now);
            fresh.current_step = Step::Name;
            reply(fresh, script::WELCOME)
        }
    }
}

fn handle_name(mut session: ReporterSession, message: &str) -> TurnOutcome {
    let name = message.trim();

    // Full three-part names; counted in characters, not bytes
    if name.chars().count() < 6 {
        return reply(session, script::NAME_REPROMPT);
    }

    session.full_name = Some(name.to_string());
    session.current_step = Step::Area;
    let ack = script::name_saved(name);
    reply(session, ack)
}

fn handle_area(mut session: ReporterSession, message: &str) -> TurnOutcome {
    let area = message.trim();

    if area.chars().count() < 2 {
        return reply(session, script::AREA_REPROMPT);
    }

    session.area_name = Some(area.to_string());
    session.current_step = Step::Center;
    let ack = script::area_saved(area);
    reply(session, ack)
}

fn handle_center(mut session: ReporterSession, message: &str) -> TurnOutcome {
    let center = message.trim();

    session.voting_center = Some(center.to_string());
    session.current_step = Step::Voted;
    let ack = script::center_saved(center);
    reply(session, ack)
}

fn handle_voted(mut session: ReporterSession, message: &str) -> TurnOutcome {
    // Loose substring match, affirmative first ("yesss" counts as yes)
    let answer = message.to_lowercase();

    if answer.contains("نعم") || answer.contains("yes") {
        session.has_voted = Some(true);
        session.current_step = Step::Count;
        reply(session, script::VOTED_YES_ACK)
    } else if answer.contains("لا") || answer.contains("no") {
        // Negative answer skips the count and report steps entirely
        session.has_voted = Some(false);
        session.voters_count = Some(0);
        session.user_report = Some(script::DID_NOT_VOTE.to_string());
        session.current_step = Step::Completed;
        TurnOutcome {
            session,
            replies: Vec::new(),
            completed: true,
        }
    } else {
        reply(session, script::VOTED_REPROMPT)
    }
}

fn handle_count(mut session: ReporterSession, message: &str) -> TurnOutcome {
    let count = match text::parse_count(message) {
        Some(count) => count,
        None => return reply(session, script::COUNT_REPROMPT),
    };

    session.voters_count = Some(count);
    session.current_step = Step::Report;
    reply(session, script::count_saved(count))
}

fn handle_report(mut session: ReporterSession, message: &str) -> TurnOutcome {
    let report = message.trim();

    if report.is_empty() {
        return reply(session, script::REPORT_REPROMPT);
    }

    session.user_report = Some(report.to_string());
    session.current_step = Step::Completed;
    let ack = script::report_saved(report);
    TurnOutcome {
        session,
        replies: vec![ack],
        completed: true,
    }
}

fn reply(session: ReporterSession, text: impl Into<String>) -> TurnOutcome {
    TurnOutcome {
        session,
        replies: vec![text.into()],
        completed: false,
    }
}
