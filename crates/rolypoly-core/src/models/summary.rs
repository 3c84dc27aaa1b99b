//! Day progress summary.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Schedule;

/// Aggregated progress of the current day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// Number of activities in the schedule
    pub total_activities: usize,

    /// Number of completed (or skipped) activities
    pub completed_activities: usize,

    /// Number of activities still to do
    pub remaining_activities: usize,

    /// Planned minutes of the activities still to do
    pub remaining_minutes: u32,

    /// Latest end among the activities still to do
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_finish: Option<Timestamp>,
}

impl DaySummary {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let remaining = schedule.iter().filter(|a| !a.completed);
        let (remaining_activities, remaining_minutes, planned_finish) = remaining.fold(
            (0usize, 0u32, None::<Timestamp>),
            |(count, minutes, finish), activity| {
                let finish = match (finish, activity.end_time) {
                    (Some(current), Some(end)) => Some(current.max(end)),
                    (current, end) => current.or(end),
                };
                (count + 1, minutes + activity.duration, finish)
            },
        );

        Self {
            total_activities: schedule.len(),
            completed_activities: schedule.len() - remaining_activities,
            remaining_activities,
            remaining_minutes,
            planned_finish,
        }
    }

    /// Percentage of completed activities, 0 for an empty day.
    pub fn completion_percentage(&self) -> u32 {
        if self.total_activities == 0 {
            return 0;
        }
        (self.completed_activities * 100 / self.total_activities) as u32
    }
}
