//! Cascading time adjustment for schedule mutations.
//!
//! Every mutation kind has its own anchor rule:
//!
//! | Mutation     | Anchor                                   | Cascades through       |
//! |--------------|------------------------------------------|------------------------|
//! | `Complete`   | now, from the activity after the target  | non-completed only     |
//! | `Skip`       | same as `Complete`                       | non-completed only     |
//! | `Uncomplete` | end of nearest live predecessor, or now  | every later activity   |
//! | `Resize`     | the target's own (or explicit) start     | every later activity   |
//! | `Reorder`    | now, at the first live activity          | non-completed only     |
//!
//! All arithmetic is instant + duration; a cascade never re-derives times
//! from sums of durations. A cascade that would run past the last
//! representable instant is abandoned and the mutation becomes a no-op.

use std::collections::HashMap;

use jiff::Timestamp;
use log::debug;

use crate::models::{clamp_duration, Activity, Mutation, Schedule};

/// Applies `mutation` at instant `now` and returns the resulting schedule.
///
/// Mutations that do not apply (unknown id, completing an already completed
/// activity, an order that is not a permutation, a cascade that overflows
/// the time range) return an unchanged copy of `schedule`.
pub fn apply_mutation(schedule: &Schedule, mutation: &Mutation, now: Timestamp) -> Schedule {
    try_apply_mutation(schedule, mutation, now).unwrap_or_else(|| schedule.clone())
}

/// Like [`apply_mutation`], but returns `None` when the mutation is a no-op.
pub fn try_apply_mutation(
    schedule: &Schedule,
    mutation: &Mutation,
    now: Timestamp,
) -> Option<Schedule> {
    let mut activities = schedule.activities().to_vec();

    let changed = match mutation {
        Mutation::Complete { id } | Mutation::Skip { id } => complete(&mut activities, id, now),
        Mutation::Uncomplete { id } => uncomplete(&mut activities, id, now),
        Mutation::Resize {
            id,
            duration,
            start_time,
        } => resize(&mut activities, id, *duration, *start_time),
        Mutation::Reorder { order } => reorder(&mut activities, order, now),
    };

    if !changed {
        debug!("{} mutation left the schedule unchanged", mutation.kind());
        return None;
    }

    renumber(&mut activities);
    Some(Schedule::new(activities))
}

/// Marks every listed activity completed and restarts the remaining ones at
/// `now`, recomputing downstream times once for the whole batch.
///
/// Returns `None` when none of the ids refers to a live activity.
pub fn complete_batch(schedule: &Schedule, ids: &[String], now: Timestamp) -> Option<Schedule> {
    let mut activities = schedule.activities().to_vec();
    let mut changed = false;

    for id in ids {
        if let Some(activity) = activities.iter_mut().find(|a| &a.id == id && !a.completed) {
            activity.completed = true;
            changed = true;
        }
    }

    if !changed || !restart_pending(&mut activities, now) {
        return None;
    }

    Some(Schedule::new(activities))
}

/// Computes the id order produced by moving `id` to list index `position`.
///
/// Positions past the end move the activity to the end. Returns `None` when
/// the id is unknown.
pub fn move_order(schedule: &Schedule, id: &str, position: usize) -> Option<Vec<String>> {
    let from = schedule.position(id)?;
    let mut order: Vec<String> = schedule.iter().map(|a| a.id.clone()).collect();
    let moved = order.remove(from);
    let to = position.min(order.len());
    order.insert(to, moved);
    Some(order)
}

fn complete(activities: &mut [Activity], id: &str, now: Timestamp) -> bool {
    let Some(index) = activities.iter().position(|a| a.id == id) else {
        return false;
    };
    if activities[index].completed {
        return false;
    }

    activities[index].completed = true;
    restart_pending(&mut activities[index + 1..], now)
}

fn uncomplete(activities: &mut [Activity], id: &str, now: Timestamp) -> bool {
    let Some(index) = activities.iter().position(|a| a.id == id) else {
        return false;
    };
    if !activities[index].completed {
        return false;
    }

    let start = activities[..index]
        .iter()
        .rev()
        .filter(|a| !a.completed)
        .find_map(|a| a.end_time)
        .unwrap_or(now);

    let target = &mut activities[index];
    target.completed = false;
    target.schedule_at(start).is_some() && rechain_from(activities, index + 1)
}

fn resize(
    activities: &mut [Activity],
    id: &str,
    duration: Option<i64>,
    start_time: Option<Timestamp>,
) -> bool {
    let Some(index) = activities.iter().position(|a| a.id == id) else {
        return false;
    };
    if duration.is_none() && start_time.is_none() {
        return false;
    }

    let target = &mut activities[index];
    if let Some(minutes) = duration {
        target.duration = clamp_duration(minutes);
    }

    match start_time.or(target.start_time) {
        Some(start) => {
            target.schedule_at(start).is_some() && rechain_from(activities, index + 1)
        }
        None => {
            debug!("activity {id} is not scheduled; only its duration changed");
            true
        }
    }
}

fn reorder(activities: &mut Vec<Activity>, order: &[String], now: Timestamp) -> bool {
    if order.len() != activities.len() {
        return false;
    }

    let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(activities.len());
    for (index, activity) in activities.iter().enumerate() {
        by_id.insert(activity.id.as_str(), index);
    }

    let mut indices = Vec::with_capacity(order.len());
    for id in order {
        match by_id.remove(id.as_str()) {
            Some(index) => indices.push(index),
            None => return false,
        }
    }

    let mut slots: Vec<Option<Activity>> = activities.drain(..).map(Some).collect();
    activities.extend(indices.into_iter().filter_map(|index| slots[index].take()));

    restart_pending(activities, now)
}

/// Places every non-completed activity back to back starting at `anchor`.
/// Completed activities keep their frozen times.
///
/// Returns `false` when the chain runs out of representable time.
fn restart_pending(activities: &mut [Activity], anchor: Timestamp) -> bool {
    let mut next = anchor;
    for activity in activities.iter_mut().filter(|a| !a.completed) {
        match activity.schedule_at(next) {
            Some(end) => next = end,
            None => return false,
        }
    }
    true
}

/// Chains every activity from `from` onwards to its predecessor's end,
/// regardless of completion. An unscheduled predecessor is never used as an
/// anchor; the chain resumes at the next scheduled activity.
///
/// Returns `false` when the chain runs out of representable time.
fn rechain_from(activities: &mut [Activity], from: usize) -> bool {
    if from == 0 || from >= activities.len() {
        return true;
    }

    let mut anchor = activities[from - 1].end_time;
    for activity in &mut activities[from..] {
        anchor = match anchor {
            Some(start) => match activity.schedule_at(start) {
                Some(end) => Some(end),
                None => return false,
            },
            None => activity.end_time,
        };
    }
    true
}

fn renumber(activities: &mut [Activity]) {
    for (index, activity) in activities.iter_mut().enumerate() {
        activity.order = index as u32;
    }
}
