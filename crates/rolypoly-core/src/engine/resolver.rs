//! Read-only queries over a schedule.

use jiff::Timestamp;

use crate::models::{Activity, PendingActivity, Schedule};

/// Resolves the activity considered in progress at `now`.
///
/// 1. The first non-completed activity whose `[start, end)` contains `now`.
/// 2. Otherwise the first non-completed activity in list order, so there is
///    always something to show as "next up" (e.g. after a pause or in a gap).
/// 3. `None` once every activity is completed or the schedule is empty.
pub fn current_activity(schedule: &Schedule, now: Timestamp) -> Option<&Activity> {
    schedule
        .iter()
        .find(|a| !a.completed && a.contains(now))
        .or_else(|| schedule.iter().find(|a| !a.completed))
}

/// Non-completed activities that end after `now`, for server-side backup
/// notifications.
pub fn pending_activities(schedule: &Schedule, now: Timestamp) -> Vec<PendingActivity> {
    schedule
        .iter()
        .filter(|a| !a.completed)
        .filter_map(|a| {
            let end_time = a.end_time.filter(|end| *end > now)?;
            Some(PendingActivity {
                id: a.id.clone(),
                name: a.name.clone(),
                end_time,
            })
        })
        .collect()
}
