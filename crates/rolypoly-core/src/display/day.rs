//! Views of the current day and the focus timer.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use super::datetime::{Countdown, LocalTime, Minutes};
use crate::{
    engine,
    models::{Activity, ActivityStatus, DaySummary},
    pomodoro::FocusTimer,
    session::DaySnapshot,
};

/// The whole day as a markdown table with a progress header.
pub struct DayView<'a> {
    day: &'a DaySnapshot,
    now: Timestamp,
    tz: TimeZone,
}

impl<'a> DayView<'a> {
    pub fn new(day: &'a DaySnapshot, now: Timestamp) -> Self {
        Self {
            day,
            now,
            tz: TimeZone::system(),
        }
    }

    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.tz = tz;
        self
    }

    fn time<'t>(&self, timestamp: &'t Timestamp) -> LocalTime<'t> {
        LocalTime::in_zone(timestamp, self.tz.clone())
    }

    fn window(&self, activity: &Activity) -> String {
        match (&activity.start_time, &activity.end_time) {
            (Some(start), Some(end)) => format!("{}–{}", self.time(start), self.time(end)),
            _ => "--:--".to_string(),
        }
    }
}

impl fmt::Display for DayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = &self.day.schedule;
        if schedule.is_empty() {
            return writeln!(f, "No active day. Start one from a template.");
        }

        let title = self
            .day
            .template
            .as_ref()
            .map_or("Today", |t| t.name.as_str());
        writeln!(f, "# {title}")?;
        writeln!(f)?;

        let summary = DaySummary::from_schedule(schedule);
        writeln!(
            f,
            "- Progress: {}/{} done ({}%)",
            summary.completed_activities,
            summary.total_activities,
            summary.completion_percentage()
        )?;
        if schedule.is_finished() {
            writeln!(f, "- All activities done")?;
        } else {
            write!(
                f,
                "- Remaining: {}",
                Minutes(i64::from(summary.remaining_minutes))
            )?;
            if let Some(finish) = &summary.planned_finish {
                write!(f, " (planned finish {})", self.time(finish))?;
            }
            writeln!(f)?;
        }
        if let Some(paused_at) = &self.day.paused_at {
            writeln!(f, "- Paused since {}", self.time(paused_at))?;
        }
        writeln!(f)?;

        let current_id = engine::current_activity(schedule, self.now).map(|a| a.id.as_str());
        writeln!(f, "| | Time | Activity | ID | Length |")?;
        writeln!(f, "|:-:|:-|:-|:-|-:|")?;
        for activity in schedule {
            let status = ActivityStatus::of(activity, current_id);
            writeln!(
                f,
                "| {} | {} | {} | `{}` | {} |",
                status.icon(),
                self.window(activity),
                activity.name,
                activity.id,
                Minutes(i64::from(activity.duration))
            )?;
        }
        Ok(())
    }
}

/// The activity in progress, with its time left.
pub struct CurrentView<'a> {
    activity: Option<&'a Activity>,
    now: Timestamp,
    tz: TimeZone,
}

impl<'a> CurrentView<'a> {
    pub fn new(activity: Option<&'a Activity>, now: Timestamp) -> Self {
        Self {
            activity,
            now,
            tz: TimeZone::system(),
        }
    }

    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.tz = tz;
        self
    }

    fn time<'t>(&self, timestamp: &'t Timestamp) -> LocalTime<'t> {
        LocalTime::in_zone(timestamp, self.tz.clone())
    }
}

impl fmt::Display for CurrentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(activity) = self.activity else {
            return writeln!(f, "Nothing left to do today.");
        };

        writeln!(f, "## {} {}", ActivityStatus::Current.icon(), activity.name)?;
        writeln!(f)?;

        let (Some(start), Some(end)) = (&activity.start_time, &activity.end_time) else {
            return writeln!(f, "- Not scheduled yet");
        };
        writeln!(f, "- {}–{}", self.time(start), self.time(end))?;

        if activity.contains(self.now) {
            if let Some(left) = activity.remaining_at(self.now) {
                writeln!(f, "- Time left: {}", Countdown::from_duration(left))?;
            }
        } else if *start > self.now {
            writeln!(f, "- Starts at {}", self.time(start))?;
        } else {
            writeln!(f, "- Overdue since {}", self.time(end))?;
        }
        Ok(())
    }
}

/// Focus timer state.
pub struct FocusView<'a> {
    timer: &'a FocusTimer,
    now: Timestamp,
}

impl<'a> FocusView<'a> {
    pub fn new(timer: &'a FocusTimer, now: Timestamp) -> Self {
        Self { timer, now }
    }
}

impl fmt::Display for FocusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timer = self.timer;
        writeln!(f, "## Focus: {} ({})", timer.phase(), timer.preset())?;
        writeln!(f)?;
        writeln!(
            f,
            "- Remaining: {}",
            Countdown(timer.remaining_at(self.now))
        )?;
        writeln!(
            f,
            "- State: {}",
            if timer.is_running() { "running" } else { "stopped" }
        )?;
        writeln!(f, "- Sessions today: {}", timer.completed_sessions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{apply_mutation, build_schedule},
        models::{ActivityBlueprint, DayTemplate, Mutation},
    };

    fn at(hhmm: &str) -> Timestamp {
        format!("2025-01-06T{hhmm}:00Z").parse().unwrap()
    }

    fn day() -> DaySnapshot {
        let template = DayTemplate {
            id: "short".to_string(),
            name: "Short day".to_string(),
            activities: vec![
                ActivityBlueprint {
                    id: "1".to_string(),
                    name: "Read".to_string(),
                    duration: 30,
                    order: 0,
                },
                ActivityBlueprint {
                    id: "2".to_string(),
                    name: "Walk".to_string(),
                    duration: 20,
                    order: 1,
                },
            ],
        };
        DaySnapshot {
            schedule: build_schedule(&template, at("10:00")),
            template: Some(template),
            ..Default::default()
        }
    }

    #[test]
    fn test_day_view() {
        let day = day();
        let output = DayView::new(&day, at("10:40"))
            .with_time_zone(TimeZone::UTC)
            .to_string();

        assert!(output.starts_with("# Short day"));
        assert!(output.contains("- Progress: 0/2 done (0%)"));
        assert!(output.contains("- Remaining: 50m (planned finish 10:50)"));
        assert!(output.contains("| ○ | 10:00–10:30 | Read | `1` | 30m |"));
        assert!(output.contains("| ➤ | 10:30–10:50 | Walk | `2` | 20m |"));
    }

    #[test]
    fn test_day_view_finished() {
        let mut day = day();
        for id in ["1", "2"] {
            day.schedule = apply_mutation(
                &day.schedule,
                &Mutation::Complete { id: id.to_string() },
                at("10:20"),
            );
        }
        let output = DayView::new(&day, at("10:21"))
            .with_time_zone(TimeZone::UTC)
            .to_string();

        assert!(output.contains("- Progress: 2/2 done (100%)"));
        assert!(output.contains("- All activities done"));
        assert!(!output.contains("- Remaining:"));
    }

    #[test]
    fn test_day_view_empty_and_paused() {
        let empty = DaySnapshot::default();
        assert!(DayView::new(&empty, at("10:00"))
            .to_string()
            .starts_with("No active day"));

        let mut day = day();
        day.paused_at = Some(at("10:05"));
        let output = DayView::new(&day, at("10:06"))
            .with_time_zone(TimeZone::UTC)
            .to_string();
        assert!(output.contains("- Paused since 10:05"));
    }

    #[test]
    fn test_current_view() {
        let day = day();
        let walk = day.schedule.get("2");

        let output = CurrentView::new(walk, at("10:35"))
            .with_time_zone(TimeZone::UTC)
            .to_string();
        assert!(output.contains("## ➤ Walk"));
        assert!(output.contains("- 10:30–10:50"));
        assert!(output.contains("- Time left: 15:00"));

        let later = CurrentView::new(walk, at("10:10"))
            .with_time_zone(TimeZone::UTC)
            .to_string();
        assert!(later.contains("- Starts at 10:30"));

        assert_eq!(
            CurrentView::new(None, at("10:10")).to_string(),
            "Nothing left to do today.\n"
        );
    }

    #[test]
    fn test_focus_view() {
        let mut timer = FocusTimer::default();
        timer.start(at("10:00"));
        let output = FocusView::new(&timer, at("10:10")).to_string();

        assert!(output.contains("## Focus: work (25/5)"));
        assert!(output.contains("- Remaining: 15:00"));
        assert!(output.contains("- State: running"));
    }
}
