//! Display status of scheduled activities.

use serde::{Deserialize, Serialize};

use super::Activity;

/// Where an activity stands relative to the current moment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Completed or skipped
    Done,

    /// The activity the resolver currently reports
    Current,

    /// Not started yet
    Upcoming,
}

impl ActivityStatus {
    /// Classifies an activity given the id of the current one.
    pub fn of(activity: &Activity, current_id: Option<&str>) -> Self {
        if activity.completed {
            ActivityStatus::Done
        } else if current_id == Some(activity.id.as_str()) {
            ActivityStatus::Current
        } else {
            ActivityStatus::Upcoming
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Done => "done",
            ActivityStatus::Current => "current",
            ActivityStatus::Upcoming => "upcoming",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rolypoly_core::models::ActivityStatus;
    ///
    /// assert_eq!(ActivityStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(ActivityStatus::Current.with_icon(), "➤ Now");
    /// assert_eq!(ActivityStatus::Upcoming.with_icon(), "○ Next");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ActivityStatus::Done => "✓ Done",
            ActivityStatus::Current => "➤ Now",
            ActivityStatus::Upcoming => "○ Next",
        }
    }

    /// The icon alone, for compact list rows.
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityStatus::Done => "✓",
            ActivityStatus::Current => "➤",
            ActivityStatus::Upcoming => "○",
        }
    }
}
