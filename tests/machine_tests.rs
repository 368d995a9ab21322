// Integration tests for the conversation state machine
//
// These drive the pure transition function through the survey script and
// verify the step-ordering, restart, and validation properties.

use chrono::Utc;
use rasid::conversation::{script, transition, ReporterSession, Step, TurnOutcome};
use rasid::text;

const IDENTITY: &str = "9647700000001";

fn turn(session: Option<ReporterSession>, message: &str) -> TurnOutcome {
    transition(session, IDENTITY, &text::normalize(message), Utc::now())
}

fn session_at(step: Step) -> ReporterSession {
    let mut session = ReporterSession::new(IDENTITY, Utc::now());
    session.current_step = step;
    session
}

#[test]
fn test_first_contact_sends_welcome() {
    let outcome = turn(None, "مرحبا");

    assert_eq!(outcome.session.current_step, Step::Name);
    assert_eq!(outcome.replies, vec![script::WELCOME.to_string()]);
    assert!(!outcome.completed);
    assert!(outcome.session.full_name.is_none());
}

#[test]
fn test_restart_command_resets_mid_sequence() {
    let mut session = session_at(Step::Voted);
    session.full_name = Some("Ali Hassan Mohammed".to_string());
    session.area_name = Some("Baghdad".to_string());
    session.voting_center = Some("Center 5".to_string());

    let outcome = turn(Some(session), "بداية");

    assert_eq!(outcome.session.current_step, Step::Name);
    assert!(outcome.session.full_name.is_none());
    assert!(outcome.session.area_name.is_none());
    assert!(outcome.session.voting_center.is_none());
    assert_eq!(outcome.replies, vec![script::WELCOME.to_string()]);
}

#[test]
fn test_every_restart_command_resets_from_completed() {
    for command in ["بداية", "ابدأ", "تصويت", "start", "  START  "] {
        let outcome = turn(Some(session_at(Step::Completed)), command);
        assert_eq!(
            outcome.session.current_step,
            Step::Name,
            "command {command:?} should reset"
        );
    }
}

#[test]
fn test_short_name_reprompts_without_advancing() {
    let outcome = turn(Some(session_at(Step::Name)), "علي");

    assert_eq!(outcome.session.current_step, Step::Name);
    assert!(outcome.session.full_name.is_none());
    assert_eq!(outcome.replies, vec![script::NAME_REPROMPT.to_string()]);
}

#[test]
fn test_short_area_reprompts_without_advancing() {
    let mut session = session_at(Step::Area);
    session.full_name = Some("Ali Hassan Mohammed".to_string());

    let outcome = turn(Some(session), "ب");

    assert_eq!(outcome.session.current_step, Step::Area);
    assert!(outcome.session.area_name.is_none());
    assert_eq!(outcome.replies, vec![script::AREA_REPROMPT.to_string()]);
}

#[test]
fn test_happy_path_walks_all_steps_in_order() {
    let o1 = turn(None, "بداية");
    assert_eq!(o1.session.current_step, Step::Name);

    let o2 = turn(Some(o1.session), "Ali Hassan Mohammed");
    assert_eq!(o2.session.current_step, Step::Area);
    assert_eq!(o2.session.full_name.as_deref(), Some("Ali Hassan Mohammed"));

    let o3 = turn(Some(o2.session), "Baghdad");
    assert_eq!(o3.session.current_step, Step::Center);
    assert_eq!(o3.session.area_name.as_deref(), Some("Baghdad"));

    let o4 = turn(Some(o3.session), "Center 5");
    assert_eq!(o4.session.current_step, Step::Voted);
    assert_eq!(o4.session.voting_center.as_deref(), Some("Center 5"));

    let o5 = turn(Some(o4.session), "نعم");
    assert_eq!(o5.session.current_step, Step::Count);
    assert_eq!(o5.session.has_voted, Some(true));

    let o6 = turn(Some(o5.session), "3");
    assert_eq!(o6.session.current_step, Step::Report);
    assert_eq!(o6.session.voters_count, Some(3));

    let o7 = turn(Some(o6.session), "Calm day");
    assert_eq!(o7.session.current_step, Step::Completed);
    assert_eq!(o7.session.user_report.as_deref(), Some("Calm day"));
    assert!(o7.completed);
}

#[test]
fn test_voted_no_skips_count_and_report() {
    let mut session = session_at(Step::Voted);
    session.full_name = Some("Ali Hassan Mohammed".to_string());

    let outcome = turn(Some(session), "لا");

    assert_eq!(outcome.session.current_step, Step::Completed);
    assert_eq!(outcome.session.has_voted, Some(false));
    assert_eq!(outcome.session.voters_count, Some(0));
    assert_eq!(
        outcome.session.user_report.as_deref(),
        Some(script::DID_NOT_VOTE)
    );
    assert!(outcome.completed);
    // The only reply for this turn is the final summary, appended later
    assert!(outcome.replies.is_empty());
}

#[test]
fn test_voted_answer_is_substring_matched() {
    let outcome = turn(Some(session_at(Step::Voted)), "yesss");
    assert_eq!(outcome.session.has_voted, Some(true));

    let outcome = turn(Some(session_at(Step::Voted)), "نعم صوتت اليوم");
    assert_eq!(outcome.session.has_voted, Some(true));

    let outcome = turn(Some(session_at(Step::Voted)), "No, I did not");
    assert_eq!(outcome.session.has_voted, Some(false));
}

#[test]
fn test_voted_unrecognized_answer_reprompts() {
    let outcome = turn(Some(session_at(Step::Voted)), "ربما");

    assert_eq!(outcome.session.current_step, Step::Voted);
    assert!(outcome.session.has_voted.is_none());
    assert_eq!(outcome.replies, vec![script::VOTED_REPROMPT.to_string()]);
}

#[test]
fn test_count_accepts_arabic_indic_digits() {
    let mut session = session_at(Step::Count);
    session.has_voted = Some(true);

    let outcome = turn(Some(session), "٣");

    assert_eq!(outcome.session.voters_count, Some(3));
    assert_eq!(outcome.session.current_step, Step::Report);
}

#[test]
fn test_count_rejects_non_numeric_input() {
    let outcome = turn(Some(session_at(Step::Count)), "كثير");

    assert_eq!(outcome.session.current_step, Step::Count);
    assert!(outcome.session.voters_count.is_none());
    assert_eq!(outcome.replies, vec![script::COUNT_REPROMPT.to_string()]);
}

#[test]
fn test_empty_report_reprompts() {
    let outcome = turn(Some(session_at(Step::Report)), "   ");

    assert_eq!(outcome.session.current_step, Step::Report);
    assert!(outcome.session.user_report.is_none());
    assert_eq!(outcome.replies, vec![script::REPORT_REPROMPT.to_string()]);
    assert!(!outcome.completed);
}

#[test]
fn test_completed_session_only_hints_restart() {
    let mut session = session_at(Step::Completed);
    session.full_name = Some("Ali Hassan Mohammed".to_string());

    let outcome = turn(Some(session), "شكرا");

    assert_eq!(outcome.session.current_step, Step::Completed);
    assert!(!outcome.completed);
    assert_eq!(outcome.replies, vec![script::RESTART_HINT.to_string()]);
    // No field is touched after completion
    assert_eq!(
        outcome.session.full_name.as_deref(),
        Some("Ali Hassan Mohammed")
    );
}

#[test]
fn test_unknown_step_resets_defensively() {
    let mut session = session_at(Step::Unknown);
    session.full_name = Some("stale".to_string());

    let outcome = turn(Some(session), "anything");

    assert_eq!(outcome.session.current_step, Step::Name);
    assert!(outcome.session.full_name.is_none());
    assert_eq!(outcome.replies, vec![script::WELCOME.to_string()]);
}

#[test]
fn test_corrupted_persisted_step_deserializes_to_unknown() {
    let json = r#"{
        "identity": "9647700000001",
        "current_step": "paused",
        "full_name": null,
        "area_name": null,
        "voting_center": null,
        "has_voted": null,
        "voters_count": null,
        "user_report": null,
        "updated_at": "2026-08-06T10:00:00Z"
    }"#;

    let session: ReporterSession = serde_json::from_str(json).unwrap();
    assert_eq!(session.current_step, Step::Unknown);
}
