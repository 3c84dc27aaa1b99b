//! Built-in day templates seeded into an empty template library.

use crate::models::{ActivityBlueprint, DayTemplate};

type Row = (&'static str, u32);

const WORK_DAY: &[Row] = &[
    ("Morning routine", 30),
    ("Deep work", 120),
    ("Lunch", 60),
    ("Meetings", 90),
    ("Focused work", 90),
    ("Exercise", 60),
    ("Evening routine", 30),
];

const CREATIVE_DAY: &[Row] = &[
    ("Morning pages", 30),
    ("Creative session", 150),
    ("Walk", 45),
    ("Lunch", 60),
    ("Inspiration", 90),
    ("Reflection", 30),
];

const WEEKEND: &[Row] = &[
    ("Slow morning", 60),
    ("Hobby", 120),
    ("Family lunch", 90),
    ("Rest", 120),
    ("Evening walk", 45),
];

const INTENSIVE: &[Row] = &[
    ("Quick start", 15),
    ("Sprint 1", 90),
    ("Short break", 15),
    ("Sprint 2", 90),
    ("Lunch", 45),
    ("Sprint 3", 90),
    ("Final push", 60),
    ("Recovery", 30),
];

const STUDY_DAY: &[Row] = &[
    ("Wake up and breakfast", 45),
    ("Study", 120),
    ("Break", 15),
    ("Study", 120),
    ("Lunch", 60),
    ("Study", 60),
    ("Break", 15),
    ("Review and practice", 60),
    ("Daily wrap-up", 15),
    ("Free time", 120),
    ("Dinner", 60),
    ("Growth or rest", 120),
    ("Wind down", 60),
];

fn template(id: &str, name: &str, rows: &[Row]) -> DayTemplate {
    DayTemplate {
        id: id.to_string(),
        name: name.to_string(),
        activities: rows
            .iter()
            .enumerate()
            .map(|(index, (name, duration))| ActivityBlueprint {
                id: (index + 1).to_string(),
                name: (*name).to_string(),
                duration: *duration,
                order: index as u32,
            })
            .collect(),
    }
}

/// The templates a fresh installation starts with.
pub fn default_templates() -> Vec<DayTemplate> {
    vec![
        template("work-day", "Work day", WORK_DAY),
        template("creative-day", "Creative day", CREATIVE_DAY),
        template("weekend", "Weekend", WEEKEND),
        template("intensive", "Intensive", INTENSIVE),
        template("study-day", "Study day", STUDY_DAY),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_templates_are_well_formed() {
        let templates = default_templates();
        assert_eq!(templates.len(), 5);

        let ids: HashSet<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), templates.len());

        for template in &templates {
            assert!(!template.activities.is_empty());
            for (index, activity) in template.activities.iter().enumerate() {
                assert_eq!(activity.order as usize, index);
                assert!(activity.duration >= 1);
            }
        }
    }

    #[test]
    fn test_work_day_length() {
        let templates = default_templates();
        let work_day = templates.iter().find(|t| t.id == "work-day").unwrap();
        assert_eq!(work_day.total_minutes(), 480);
    }
}
