//! Day template model definition.

use serde::{Deserialize, Serialize};

/// Blueprint of a single activity inside a [`DayTemplate`].
///
/// Blueprints carry no time or completion information; those are assigned
/// when a schedule is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityBlueprint {
    /// Identifier reused by the scheduled activity
    pub id: String,

    /// Display name
    pub name: String,

    /// Planned length in minutes
    pub duration: u32,

    /// Position within the template (0-indexed)
    pub order: u32,
}

/// An ordered, reusable blueprint of named durations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayTemplate {
    /// Unique identifier of the template (e.g. `work-day`)
    pub id: String,

    /// Human readable name
    pub name: String,

    /// Activities in the order they should run
    #[serde(default)]
    pub activities: Vec<ActivityBlueprint>,
}

impl DayTemplate {
    /// Total planned minutes across all activities.
    pub fn total_minutes(&self) -> u32 {
        self.activities.iter().map(|a| a.duration).sum()
    }
}
