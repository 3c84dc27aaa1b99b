//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Outcome of a day operation, shown as a one-line confirmation.
///
/// Day operations never fail on unknown ids or repeated requests; they
/// report [`OperationStatus::unchanged`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub changed: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: true,
        }
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: false,
        }
    }

    /// Picks the success or unchanged message depending on `changed`.
    pub fn from_change(
        changed: bool,
        success: impl Into<String>,
        unchanged: impl Into<String>,
    ) -> Self {
        if changed {
            Self::success(success)
        } else {
            Self::unchanged(unchanged)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.changed { "Done:" } else { "No change:" },
            self.message
        )
    }
}
