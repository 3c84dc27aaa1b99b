//! Read-only export consumed by the remote notification scheduler.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A non-completed activity that will end in the future.
///
/// Serializes as `{"id", "name", "endTime"}` with an RFC 3339 end time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingActivity {
    pub id: String,
    pub name: String,
    pub end_time: Timestamp,
}
