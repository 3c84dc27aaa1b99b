//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::datetime::Minutes;
use crate::models::DayTemplate;

/// Newtype wrapper for displaying the template library.
///
/// # Examples
///
/// ```rust
/// use rolypoly_core::{display::Templates, templates::default_templates};
///
/// let output = Templates(default_templates()).to_string();
/// assert!(output.contains("## Work day (`work-day`)"));
/// ```
pub struct Templates(pub Vec<DayTemplate>);

impl Templates {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayTemplate> {
        self.0.iter()
    }
}

impl Index<usize> for Templates {
    type Output = DayTemplate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Templates {
    type Item = DayTemplate;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Templates {
    type Item = &'a DayTemplate;
    type IntoIter = std::slice::Iter<'a, DayTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No templates found.");
        }

        for template in &self.0 {
            writeln!(f, "## {} (`{}`)", template.name, template.id)?;
            writeln!(f)?;
            writeln!(
                f,
                "- {} activities, {}",
                template.activities.len(),
                Minutes(i64::from(template.total_minutes()))
            )?;
            let names: Vec<&str> = template.activities.iter().map(|a| a.name.as_str()).collect();
            writeln!(f, "- {}", names.join(" → "))?;
            writeln!(f)?;
        }
        Ok(())
    }
}
