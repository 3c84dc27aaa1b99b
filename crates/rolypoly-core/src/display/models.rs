//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay free of
//! presentation logic. All output is markdown.

use std::fmt;

use super::datetime::Minutes;
use crate::{
    models::{ActivityBlueprint, ActivityStatus, DayTemplate},
    pomodoro::{Phase, PhaseChange},
};

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PhaseChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}** {}", self.title(), self.body())
    }
}

impl fmt::Display for ActivityBlueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, Minutes(i64::from(self.duration)))
    }
}

impl fmt::Display for DayTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (`{}`)", self.name, self.id)?;
        writeln!(f)?;

        if self.activities.is_empty() {
            writeln!(f, "No activities in this template.")?;
            return Ok(());
        }

        for (index, activity) in self.activities.iter().enumerate() {
            writeln!(f, "{}. {activity}", index + 1)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total: {}",
            Minutes(i64::from(self.total_minutes()))
        )
    }
}
