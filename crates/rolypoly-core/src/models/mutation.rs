//! Typed schedule mutations.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single semantic change to the schedule.
///
/// Each variant is routed to its own cascade rule by
/// [`crate::engine::apply_mutation`]; there is no way to combine two kinds of
/// change in one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Mutation {
    /// Mark an activity completed; following activities restart from now
    Complete { id: String },

    /// Reopen a completed activity and chain it after its predecessor
    Uncomplete { id: String },

    /// Change the duration and/or the explicit start of an activity
    #[serde(rename_all = "camelCase")]
    Resize {
        id: String,
        #[serde(default)]
        duration: Option<i64>,
        #[serde(default)]
        start_time: Option<Timestamp>,
    },

    /// Replace the list order with the given sequence of ids
    Reorder { order: Vec<String> },

    /// Force-complete an activity without notifying
    Skip { id: String },
}

impl Mutation {
    /// Short lowercase name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::Complete { .. } => "complete",
            Mutation::Uncomplete { .. } => "uncomplete",
            Mutation::Resize { .. } => "resize",
            Mutation::Reorder { .. } => "reorder",
            Mutation::Skip { .. } => "skip",
        }
    }
}
