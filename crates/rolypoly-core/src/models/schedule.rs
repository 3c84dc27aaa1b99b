//! Schedule collection type.

use serde::{Deserialize, Serialize};

use super::Activity;

/// The time-stamped list of today's activities, in list order.
///
/// A schedule is only ever replaced wholesale by the engine; callers receive
/// clones and never mutate activities in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Schedule(pub(crate) Vec<Activity>);

impl Schedule {
    /// Wraps an already ordered list of activities.
    pub fn new(activities: Vec<Activity>) -> Self {
        Self(activities)
    }

    pub fn activities(&self) -> &[Activity] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finds an activity by id.
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.id == id)
    }

    /// List index of the activity with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|a| a.id == id)
    }

    /// True when every activity is completed (vacuously true when empty).
    pub fn is_finished(&self) -> bool {
        self.0.iter().all(|a| a.completed)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
