//! Focus timer alternating work and break phases.
//!
//! A wall-clock state machine: it keeps no thread and reads no clock. The
//! remaining time is folded from `running_since` whenever the caller passes
//! in a new instant, and [`FocusTimer::tick`] reports a [`PhaseChange`] once
//! the running phase has run out.
//!
//! ```text
//! Work ──(runs out / skip)──▶ Break ──(runs out / skip)──▶ Work
//!   └── completed_sessions += 1
//! ```

use std::{fmt, str::FromStr};

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Work/break lengths in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerPreset {
    #[default]
    #[serde(rename = "25/5")]
    Classic,
    #[serde(rename = "50/10")]
    Long,
    #[serde(rename = "90/15")]
    Deep,
}

impl TimerPreset {
    pub const ALL: [TimerPreset; 3] = [TimerPreset::Classic, TimerPreset::Long, TimerPreset::Deep];

    pub fn work_minutes(&self) -> i64 {
        match self {
            TimerPreset::Classic => 25,
            TimerPreset::Long => 50,
            TimerPreset::Deep => 90,
        }
    }

    pub fn break_minutes(&self) -> i64 {
        match self {
            TimerPreset::Classic => 5,
            TimerPreset::Long => 10,
            TimerPreset::Deep => 15,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimerPreset::Classic => "25/5",
            TimerPreset::Long => "50/10",
            TimerPreset::Deep => "90/15",
        }
    }

    /// Full length of `phase` in seconds.
    pub fn phase_secs(&self, phase: Phase) -> i64 {
        match phase {
            Phase::Work => self.work_minutes() * 60,
            Phase::Break => self.break_minutes() * 60,
        }
    }
}

impl fmt::Display for TimerPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimerPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimerPreset::ALL
            .into_iter()
            .find(|p| p.label() == s.trim())
            .ok_or_else(|| format!("Unknown preset '{s}', expected one of 25/5, 50/10, 90/15"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Work,
    Break,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Break => "break",
        }
    }
}

/// Emitted when a phase ends, either by running out or by being skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub finished: Phase,
    pub next: Phase,
}

impl PhaseChange {
    /// Notification title announcing the new phase.
    pub fn title(&self) -> &'static str {
        match self.finished {
            Phase::Work => "Break time!",
            Phase::Break => "Back to work!",
        }
    }

    pub fn body(&self) -> &'static str {
        match self.finished {
            Phase::Work => "Work session complete. Time to rest.",
            Phase::Break => "Break is over. Time to focus.",
        }
    }
}

/// Pomodoro-style focus timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusTimer {
    preset: TimerPreset,
    phase: Phase,
    /// Seconds left as of `running_since` (or now, when stopped)
    remaining_secs: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    running_since: Option<Timestamp>,
    completed_sessions: u32,
    /// Local date the session count belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sessions_date: Option<Date>,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(TimerPreset::default())
    }
}

impl FocusTimer {
    pub fn new(preset: TimerPreset) -> Self {
        Self {
            preset,
            phase: Phase::Work,
            remaining_secs: preset.phase_secs(Phase::Work),
            running_since: None,
            completed_sessions: 0,
            sessions_date: None,
        }
    }

    pub fn preset(&self) -> TimerPreset {
        self.preset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    /// Seconds left in the current phase at `now`, never negative.
    pub fn remaining_at(&self, now: Timestamp) -> i64 {
        match self.running_since {
            Some(since) => {
                let elapsed = since.duration_until(now).as_secs().max(0);
                (self.remaining_secs - elapsed).max(0)
            }
            None => self.remaining_secs,
        }
    }

    /// Fraction of the current phase already elapsed, in `0.0..=1.0`.
    pub fn progress_at(&self, now: Timestamp) -> f64 {
        let total = self.preset.phase_secs(self.phase);
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_at(now) as f64 / total as f64)
    }

    /// Resets the session count when `today` differs from the date it was
    /// recorded on.
    pub fn roll_date(&mut self, today: Date) {
        if self.sessions_date != Some(today) {
            self.completed_sessions = 0;
            self.sessions_date = Some(today);
        }
    }

    /// Switches preset; stops the timer and restarts the work phase.
    pub fn set_preset(&mut self, preset: TimerPreset) {
        self.preset = preset;
        self.reset();
    }

    /// Starts or continues the countdown. Returns false when already running.
    pub fn start(&mut self, now: Timestamp) -> bool {
        if self.is_running() {
            return false;
        }
        self.running_since = Some(now);
        true
    }

    /// Stops the countdown, keeping the time left.
    pub fn pause(&mut self, now: Timestamp) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remaining_secs = self.remaining_at(now);
        self.running_since = None;
        true
    }

    /// Stops the timer and restarts the work phase of the current preset.
    pub fn reset(&mut self) {
        self.running_since = None;
        self.phase = Phase::Work;
        self.remaining_secs = self.preset.phase_secs(Phase::Work);
    }

    /// Ends the current phase immediately, as if it had run out.
    pub fn skip_phase(&mut self) -> PhaseChange {
        self.finish_phase()
    }

    /// Overrides the time left in the current phase.
    pub fn set_remaining(&mut self, secs: i64, now: Timestamp) {
        self.remaining_secs = secs.max(0);
        if self.is_running() {
            self.running_since = Some(now);
        }
    }

    /// Checks the countdown at `now`, finishing the phase when it ran out.
    pub fn tick(&mut self, now: Timestamp) -> Option<PhaseChange> {
        if self.is_running() && self.remaining_at(now) == 0 {
            Some(self.finish_phase())
        } else {
            None
        }
    }

    fn finish_phase(&mut self) -> PhaseChange {
        let finished = self.phase;
        let next = match finished {
            Phase::Work => {
                self.completed_sessions += 1;
                Phase::Break
            }
            Phase::Break => Phase::Work,
        };

        self.running_since = None;
        self.phase = next;
        self.remaining_secs = self.preset.phase_secs(next);
        PhaseChange { finished, next }
    }
}
