//! Activity model definition and related functionality.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// Shortest duration an activity may have, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 1;

/// Longest duration accepted for a single activity, in minutes (one day).
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Clamps a requested duration into
/// `[MIN_DURATION_MINUTES, MAX_DURATION_MINUTES]`.
///
/// # Examples
///
/// ```rust
/// use rolypoly_core::models::clamp_duration;
///
/// assert_eq!(clamp_duration(-5), 1);
/// assert_eq!(clamp_duration(0), 1);
/// assert_eq!(clamp_duration(45), 45);
/// assert_eq!(clamp_duration(10_000), 1440);
/// ```
pub fn clamp_duration(minutes: i64) -> u32 {
    let clamped = minutes.clamp(
        i64::from(MIN_DURATION_MINUTES),
        i64::from(MAX_DURATION_MINUTES),
    );
    // In range by construction.
    clamped as u32
}

/// A single scheduled activity of the current day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Identifier copied from the template blueprint, unique within a schedule
    pub id: String,

    /// Display name
    pub name: String,

    /// Planned length in whole minutes (always >= 1)
    pub duration: u32,

    /// Wall-clock start, set once the activity is scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,

    /// Wall-clock end, always `start_time + duration` for live activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,

    /// Whether the activity has been completed or skipped
    #[serde(default)]
    pub completed: bool,

    /// Position of the activity within the schedule (0-indexed)
    pub order: u32,
}

impl Activity {
    /// The planned length as a signed duration.
    pub fn length(&self) -> SignedDuration {
        SignedDuration::from_mins(i64::from(self.duration))
    }

    /// Places the activity at `start` and returns its new end.
    ///
    /// Returns `None` and leaves the activity untouched when the end would
    /// fall outside the representable time range.
    pub fn schedule_at(&mut self, start: Timestamp) -> Option<Timestamp> {
        let end = start.checked_add(self.length()).ok()?;
        self.start_time = Some(start);
        self.end_time = Some(end);
        Some(end)
    }

    /// Returns true when both start and end are set.
    pub fn is_scheduled(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// Returns true when `now` falls inside `[start_time, end_time)`.
    pub fn contains(&self, now: Timestamp) -> bool {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => start <= now && now < end,
            _ => false,
        }
    }

    /// Time left until the activity ends, never negative.
    ///
    /// Returns `None` for activities that are not scheduled.
    pub fn remaining_at(&self, now: Timestamp) -> Option<SignedDuration> {
        let end = self.end_time?;
        let remaining = now.duration_until(end);
        Some(if remaining.is_negative() {
            SignedDuration::ZERO
        } else {
            remaining
        })
    }

    /// Shifts both start and end by `offset`, leaving unscheduled fields
    /// untouched.
    ///
    /// Returns `false` without changing anything when either instant would
    /// overflow.
    pub(crate) fn shift(&mut self, offset: SignedDuration) -> bool {
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return true;
        };
        match (start.checked_add(offset), end.checked_add(offset)) {
            (Ok(start), Ok(end)) => {
                self.start_time = Some(start);
                self.end_time = Some(end);
                true
            }
            _ => false,
        }
    }
}
