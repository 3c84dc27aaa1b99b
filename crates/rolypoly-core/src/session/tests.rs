use std::sync::Mutex;

use jiff::Timestamp;

use super::*;
use crate::{
    error::Result,
    models::{ActivityBlueprint, DayTemplate, Mutation},
    notify::Notifier,
};

fn at(hhmm: &str) -> Timestamp {
    format!("2025-01-06T{hhmm}:00Z").parse().unwrap()
}

fn template(id: &str) -> DayTemplate {
    DayTemplate {
        id: id.to_string(),
        name: format!("Template {id}"),
        activities: [("a1", 30), ("a2", 20), ("a3", 40)]
            .into_iter()
            .enumerate()
            .map(|(i, (id, duration))| ActivityBlueprint {
                id: id.to_string(),
                name: id.to_uppercase(),
                duration,
                order: i as u32,
            })
            .collect(),
    }
}

#[derive(Default)]
struct Recording(Mutex<Vec<String>>);

impl Recording {
    fn bodies(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for Recording {
    fn notify(&self, _title: &str, body: &str) -> Result<()> {
        self.0.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

fn started() -> DaySession {
    let mut session = DaySession::new();
    assert!(session.apply(Command::StartDay(template("t")), at("10:00")));
    session
}

#[test]
fn test_new_session_has_no_day() {
    let session = DaySession::new();
    assert!(!session.has_day());
    assert!(session.current_activity(at("10:00")).is_none());
    assert!(session.template().is_none());
}

#[test]
fn test_start_day_builds_schedule() {
    let session = started();
    assert!(session.has_day());
    assert_eq!(session.template().map(|t| t.id.as_str()), Some("t"));
    assert_eq!(session.current_activity(at("10:05")).unwrap().id, "a1");
}

#[test]
fn test_noop_mutation_reports_unchanged() {
    let mut session = started();
    let complete = Command::Mutate(Mutation::Complete {
        id: "a1".to_string(),
    });

    assert!(session.apply(complete.clone(), at("10:10")));
    assert!(!session.apply(complete, at("10:12")));
    assert!(!session.apply(
        Command::Mutate(Mutation::Skip {
            id: "missing".to_string()
        }),
        at("10:12")
    ));
}

#[test]
fn test_pause_keeps_first_instant() {
    let mut session = started();
    assert!(session.apply(Command::Pause, at("10:10")));
    assert!(!session.apply(Command::Pause, at("10:20")));
    assert_eq!(session.paused_at(), Some(at("10:10")));
}

#[test]
fn test_resume_without_pause_is_noop() {
    let mut session = started();
    let before = session.schedule().clone();
    assert!(!session.apply(Command::Resume, at("10:20")));
    assert_eq!(session.schedule(), &before);
}

#[test]
fn test_pause_resume_shifts_schedule() {
    let mut session = started();
    session.apply(Command::Pause, at("10:10"));
    session.apply(Command::Resume, at("10:25"));

    assert!(!session.is_paused());
    let first = session.schedule().get("a1").unwrap();
    assert_eq!(first.start_time, Some(at("10:15")));
    assert_eq!(first.end_time, Some(at("10:45")));
}

#[test]
fn test_resume_at_end_of_time_keeps_times() {
    let mut session = started();
    let before = session.schedule().clone();
    session.apply(Command::Pause, at("10:10"));

    let far: Timestamp = "9999-12-30T21:00:00Z".parse().unwrap();
    assert!(session.apply(Command::Resume, far));
    assert!(!session.is_paused());
    assert_eq!(session.schedule(), &before);
}

#[test]
fn test_tick_does_not_fire_while_paused() {
    let mut session = started();
    let notifier = Recording::default();
    session.apply(Command::Pause, at("10:20"));

    assert!(session.tick(at("11:00"), &notifier).is_empty());
    assert!(notifier.bodies().is_empty());

    // Resuming shifts A1 to end at 11:10, so it is still running.
    session.apply(Command::Resume, at("11:00"));
    assert!(session.tick(at("11:01"), &notifier).is_empty());
}

#[test]
fn test_tick_completes_and_notifies_once() {
    let mut session = started();
    let notifier = Recording::default();

    let expired = session.tick(at("10:30"), &notifier);
    assert_eq!(expired.len(), 1);
    assert!(session.schedule().get("a1").unwrap().completed);
    assert_eq!(
        session.schedule().get("a2").unwrap().start_time,
        Some(at("10:30"))
    );

    assert!(session.tick(at("10:31"), &notifier).is_empty());
    assert_eq!(notifier.bodies(), vec!["Activity \"A1\" is finished"]);
}

#[test]
fn test_start_day_clears_notified_and_pause() {
    let mut session = started();
    let notifier = Recording::default();
    session.tick(at("10:31"), &notifier);
    session.apply(Command::Pause, at("10:32"));

    session.apply(Command::StartDay(template("t")), at("12:00"));
    assert!(!session.is_paused());

    let expired = session.tick(at("12:30"), &notifier);
    assert_eq!(expired.len(), 1);
    assert_eq!(notifier.bodies().len(), 2);
}

#[test]
fn test_snapshot_restores_session() {
    let mut session = started();
    let notifier = Recording::default();
    session.tick(at("10:31"), &notifier);
    session.apply(Command::Pause, at("10:40"));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.notified, vec!["a1".to_string()]);

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored = DaySession::restore(serde_json::from_str(&json).unwrap());

    assert_eq!(restored.schedule(), session.schedule());
    assert_eq!(restored.paused_at(), Some(at("10:40")));
    assert_eq!(restored.snapshot(), snapshot);
}

#[test]
fn test_restored_session_does_not_renotify() {
    let mut session = started();
    let notifier = Recording::default();
    session.tick(at("10:31"), &notifier);
    session.apply(
        Command::Mutate(Mutation::Uncomplete {
            id: "a1".to_string(),
        }),
        at("10:32"),
    );

    let mut restored = DaySession::restore(session.snapshot());
    let expired = restored.tick(at("12:00"), &notifier);

    assert!(expired.iter().all(|a| a.id != "a1"));
}

#[test]
fn test_summary_tracks_progress() {
    let mut session = started();
    session.apply(
        Command::Mutate(Mutation::Complete {
            id: "a1".to_string(),
        }),
        at("10:20"),
    );

    let summary = session.summary();
    assert_eq!(summary.completed_activities, 1);
    assert_eq!(summary.remaining_minutes, 60);
    assert_eq!(summary.planned_finish, Some(at("11:20")));
    assert_eq!(session.pending_activities(at("10:20")).len(), 2);
}
