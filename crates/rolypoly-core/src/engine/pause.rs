//! Pause/resume translation.

use jiff::{SignedDuration, Timestamp};

use crate::models::Schedule;

/// Wall-clock time spent paused, never negative.
pub fn paused_for(paused_at: Timestamp, now: Timestamp) -> SignedDuration {
    let elapsed = paused_at.duration_until(now);
    if elapsed.is_negative() {
        SignedDuration::ZERO
    } else {
        elapsed
    }
}

/// Shifts every scheduled activity, completed ones included, forward by the
/// time spent paused.
///
/// This is a uniform translation rather than a cascade: gaps and durations
/// are preserved exactly, so the remaining time of the running activity is
/// the same as when the day was paused. Returns `None` when the shift would
/// overflow the time range.
pub fn resume_schedule(
    schedule: &Schedule,
    paused_at: Timestamp,
    now: Timestamp,
) -> Option<Schedule> {
    translate(schedule, paused_for(paused_at, now))
}

/// Moves every scheduled activity by `offset`, or returns `None` if any of
/// them would leave the representable time range.
pub fn translate(schedule: &Schedule, offset: SignedDuration) -> Option<Schedule> {
    let mut activities = schedule.activities().to_vec();
    if !offset.is_zero() && !activities.iter_mut().all(|activity| activity.shift(offset)) {
        return None;
    }
    Some(Schedule::new(activities))
}
