//! Focus timer operations for the Planner.

use jiff::{tz::TimeZone, Timestamp};
use log::error;

use super::Planner;
use crate::{
    display::{Countdown, OperationStatus},
    error::{PlannerError, Result},
    models::MAX_DURATION_MINUTES,
    notify::Notifier,
    params::{FocusPreset, FocusRemaining},
    pomodoro::{FocusTimer, PhaseChange, TimerPreset},
};

fn announce(notifier: &dyn Notifier, change: &PhaseChange) {
    if let Err(e) = notifier.notify(change.title(), change.body()) {
        error!("Failed to notify focus phase change: {e}");
    }
}

impl Planner {
    /// The focus timer, with its session count rolled over to the local
    /// date of `now`.
    pub fn focus_timer(&mut self, now: Timestamp) -> &FocusTimer {
        self.roll_focus_date(now);
        &self.focus
    }

    fn roll_focus_date(&mut self, now: Timestamp) {
        let today = now.to_zoned(TimeZone::system()).date();
        self.focus.roll_date(today);
    }

    pub async fn focus_start(&mut self, now: Timestamp) -> OperationStatus {
        self.roll_focus_date(now);
        let changed = self.focus.start(now);
        if changed {
            self.persist_focus().await;
        }
        OperationStatus::from_change(
            changed,
            format!("Focus timer started ({})", self.focus.phase()),
            "Focus timer is already running",
        )
    }

    pub async fn focus_pause(&mut self, now: Timestamp) -> OperationStatus {
        let changed = self.focus.pause(now);
        if changed {
            self.persist_focus().await;
        }
        OperationStatus::from_change(changed, "Focus timer paused", "Focus timer is not running")
    }

    pub async fn focus_reset(&mut self) -> OperationStatus {
        self.focus.reset();
        self.persist_focus().await;
        OperationStatus::success(format!(
            "Focus timer reset to a {} minute work phase",
            self.focus.preset().work_minutes()
        ))
    }

    /// Ends the current phase now and announces the next one.
    pub async fn focus_skip(&mut self, now: Timestamp, notifier: &dyn Notifier) -> PhaseChange {
        self.roll_focus_date(now);
        let change = self.focus.skip_phase();
        self.persist_focus().await;
        announce(notifier, &change);
        change
    }

    /// Switches preset, stopping the timer.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for an unknown preset label.
    pub async fn focus_set_preset(&mut self, params: &FocusPreset) -> Result<OperationStatus> {
        let preset: TimerPreset = params
            .preset
            .parse()
            .map_err(|reason: String| PlannerError::invalid_input("preset").with_reason(reason))?;

        self.focus.set_preset(preset);
        self.persist_focus().await;
        Ok(OperationStatus::success(format!("Focus preset set to {preset}")))
    }

    /// Overrides the time left in the current phase. A running timer keeps
    /// running from `now`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when `minutes` is negative or
    /// longer than a day.
    pub async fn focus_set_remaining(
        &mut self,
        params: &FocusRemaining,
        now: Timestamp,
    ) -> Result<OperationStatus> {
        if !(0..=i64::from(MAX_DURATION_MINUTES)).contains(&params.minutes) {
            return Err(PlannerError::invalid_input("minutes").with_reason(format!(
                "{} is not between 0 and {MAX_DURATION_MINUTES}",
                params.minutes
            )));
        }

        self.roll_focus_date(now);
        let secs = params.minutes * 60;
        self.focus.set_remaining(secs, now);
        self.persist_focus().await;
        Ok(OperationStatus::success(format!(
            "Focus time left set to {}",
            Countdown(secs)
        )))
    }

    /// Finishes the running phase once its time is up.
    pub async fn tick_focus(
        &mut self,
        now: Timestamp,
        notifier: &dyn Notifier,
    ) -> Option<PhaseChange> {
        self.roll_focus_date(now);
        let change = self.focus.tick(now)?;
        self.persist_focus().await;
        announce(notifier, &change);
        Some(change)
    }
}
