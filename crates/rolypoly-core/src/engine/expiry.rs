//! Detection of elapsed activities.
//!
//! The trigger is polled with the current instant; it never reads a clock and
//! never delivers notifications itself. It only decides which activities are
//! newly expired and what the schedule looks like once they are completed.

use std::collections::HashSet;

use jiff::Timestamp;

use super::recompute::complete_batch;
use crate::models::{Activity, Schedule};

/// Result of one expiry check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expiry {
    /// Activities that expired since the previous check, as they were before
    /// being completed
    pub expired: Vec<Activity>,

    /// The schedule after completing all expired activities in one batch, or
    /// `None` when nothing changed
    pub schedule: Option<Schedule>,
}

impl Expiry {
    pub fn is_empty(&self) -> bool {
        self.expired.is_empty()
    }
}

/// Remembers which activities were already reported in this session.
#[derive(Debug, Clone, Default)]
pub struct ExpiryTrigger {
    notified: HashSet<String>,
}

impl ExpiryTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a trigger that already reported the given activities.
    pub fn with_notified<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            notified: ids.into_iter().collect(),
        }
    }

    /// Reported ids, sorted for stable persistence.
    pub fn notified_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.notified.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Forgets every reported activity. Called when a new day starts, since
    /// activity ids are reused across templates.
    pub fn clear(&mut self) {
        self.notified.clear();
    }

    /// Finds live activities whose end is at or before `now` and that were not
    /// reported yet, records them, and completes them together.
    ///
    /// Downstream times are recomputed once for the whole batch so several
    /// activities expiring in the same check do not compound "now" anchors.
    pub fn check(&mut self, schedule: &Schedule, now: Timestamp) -> Expiry {
        let expired: Vec<Activity> = schedule
            .iter()
            .filter(|a| !a.completed && !self.notified.contains(&a.id))
            .filter(|a| a.end_time.is_some_and(|end| end <= now))
            .cloned()
            .collect();

        if expired.is_empty() {
            return Expiry::default();
        }

        let ids: Vec<String> = expired.iter().map(|a| a.id.clone()).collect();
        self.notified.extend(ids.iter().cloned());

        Expiry {
            schedule: complete_batch(schedule, &ids, now),
            expired,
        }
    }
}
