//! Turns a day template into a time-stamped schedule.

use jiff::Timestamp;

use crate::models::{clamp_duration, Activity, DayTemplate, Schedule};

/// Builds today's schedule from `template`, anchored at `now`.
///
/// The first activity starts at `now` and every following activity starts
/// when the previous one ends. An empty template yields an empty schedule.
/// Activities that would end past the last representable instant are left
/// unscheduled.
pub fn build_schedule(template: &DayTemplate, now: Timestamp) -> Schedule {
    let mut anchor = Some(now);
    let activities = template
        .activities
        .iter()
        .enumerate()
        .map(|(index, blueprint)| {
            let mut activity = Activity {
                id: blueprint.id.clone(),
                name: blueprint.name.clone(),
                duration: clamp_duration(i64::from(blueprint.duration)),
                start_time: None,
                end_time: None,
                completed: false,
                order: index as u32,
            };
            anchor = anchor.and_then(|start| activity.schedule_at(start));
            activity
        })
        .collect();

    Schedule::new(activities)
}
