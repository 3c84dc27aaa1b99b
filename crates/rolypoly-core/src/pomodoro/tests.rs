use jiff::{civil::date, Timestamp};

use super::*;

fn at(hhmmss: &str) -> Timestamp {
    format!("2025-01-06T{hhmmss}Z").parse().unwrap()
}

#[test]
fn test_new_timer_waits_at_full_work_time() {
    let timer = FocusTimer::default();
    assert_eq!(timer.preset(), TimerPreset::Classic);
    assert_eq!(timer.phase(), Phase::Work);
    assert!(!timer.is_running());
    assert_eq!(timer.remaining_at(at("10:00:00")), 25 * 60);
}

#[test]
fn test_countdown_follows_wall_clock() {
    let mut timer = FocusTimer::default();
    assert!(timer.start(at("10:00:00")));
    assert!(!timer.start(at("10:01:00")));

    assert_eq!(timer.remaining_at(at("10:10:00")), 15 * 60);
    assert!(timer.pause(at("10:10:00")));
    assert!(!timer.pause(at("10:11:00")));

    // Time does not pass while paused.
    assert_eq!(timer.remaining_at(at("10:30:00")), 15 * 60);

    timer.start(at("10:30:00"));
    assert_eq!(timer.remaining_at(at("10:35:30")), 9 * 60 + 30);
}

#[test]
fn test_tick_finishes_work_phase() {
    let mut timer = FocusTimer::default();
    timer.start(at("10:00:00"));

    assert!(timer.tick(at("10:24:59")).is_none());

    let change = timer.tick(at("10:25:00")).unwrap();
    assert_eq!(change.finished, Phase::Work);
    assert_eq!(change.next, Phase::Break);
    assert_eq!(change.title(), "Break time!");
    assert_eq!(timer.completed_sessions(), 1);
    assert_eq!(timer.phase(), Phase::Break);
    assert!(!timer.is_running());
    assert_eq!(timer.remaining_at(at("10:40:00")), 5 * 60);

    // A stopped timer never finishes again on its own.
    assert!(timer.tick(at("12:00:00")).is_none());
}

#[test]
fn test_break_phase_returns_to_work_without_counting() {
    let mut timer = FocusTimer::new(TimerPreset::Long);
    timer.skip_phase();
    assert_eq!(timer.phase(), Phase::Break);
    assert_eq!(timer.remaining_at(at("10:00:00")), 10 * 60);

    timer.start(at("10:00:00"));
    let change = timer.tick(at("10:20:00")).unwrap();
    assert_eq!(change.finished, Phase::Break);
    assert_eq!(change.body(), "Break is over. Time to focus.");
    assert_eq!(timer.phase(), Phase::Work);
    assert_eq!(timer.completed_sessions(), 1);
    assert_eq!(timer.remaining_at(at("10:20:00")), 50 * 60);
}

#[test]
fn test_set_preset_stops_and_resets() {
    let mut timer = FocusTimer::default();
    timer.start(at("10:00:00"));
    timer.skip_phase();

    timer.set_preset(TimerPreset::Deep);
    assert!(!timer.is_running());
    assert_eq!(timer.phase(), Phase::Work);
    assert_eq!(timer.remaining_at(at("11:00:00")), 90 * 60);
}

#[test]
fn test_set_remaining_restarts_running_anchor() {
    let mut timer = FocusTimer::default();
    timer.start(at("10:00:00"));
    timer.set_remaining(60, at("10:05:00"));

    assert_eq!(timer.remaining_at(at("10:05:30")), 30);
    assert!(timer.tick(at("10:06:00")).is_some());

    timer.set_remaining(-5, at("10:07:00"));
    assert_eq!(timer.remaining_at(at("10:07:00")), 0);
}

#[test]
fn test_session_count_resets_on_new_day() {
    let mut timer = FocusTimer::default();
    timer.roll_date(date(2025, 1, 6));
    timer.skip_phase();
    timer.skip_phase();
    timer.skip_phase();
    assert_eq!(timer.completed_sessions(), 2);

    timer.roll_date(date(2025, 1, 6));
    assert_eq!(timer.completed_sessions(), 2);

    timer.roll_date(date(2025, 1, 7));
    assert_eq!(timer.completed_sessions(), 0);
}

#[test]
fn test_preset_parsing_and_serialization() {
    assert_eq!("50/10".parse::<TimerPreset>().unwrap(), TimerPreset::Long);
    assert!("45/5".parse::<TimerPreset>().is_err());

    let json = serde_json::to_value(FocusTimer::new(TimerPreset::Deep)).unwrap();
    assert_eq!(json["preset"], "90/15");
    assert_eq!(json["phase"], "work");
    assert_eq!(json["remainingSecs"], 5400);
}

#[test]
fn test_progress() {
    let mut timer = FocusTimer::default();
    assert_eq!(timer.progress_at(at("10:00:00")), 0.0);
    timer.start(at("10:00:00"));
    let progress = timer.progress_at(at("10:12:30"));
    assert!((progress - 0.5).abs() < f64::EPSILON);
}
