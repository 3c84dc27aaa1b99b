//! Input parsing and validation shared by the CLI and the MCP server.

use std::collections::HashSet;

use jiff::{civil, tz::TimeZone, SignedDuration, Timestamp};

use crate::{
    models::{clamp_duration, ActivityBlueprint, DayTemplate, Mutation, MAX_DURATION_MINUTES},
    params::{CreateTemplate, ResizeActivity, TemplateActivity},
    PlannerError, Result,
};

/// Parses a start time given either as RFC 3339 or as local `HH:MM` on the
/// day of `now`, in the system time zone.
pub fn parse_clock_time(input: &str, now: Timestamp) -> Result<Timestamp> {
    parse_clock_time_in(input, now, &TimeZone::system())
}

/// Like [`parse_clock_time`] with an explicit time zone.
///
/// # Examples
///
/// ```rust
/// use jiff::{tz::TimeZone, Timestamp};
/// use rolypoly_core::operations::parse_clock_time_in;
///
/// let now: Timestamp = "2025-01-06T08:00:00Z".parse().unwrap();
/// let start = parse_clock_time_in("14:30", now, &TimeZone::UTC).unwrap();
/// assert_eq!(start.to_string(), "2025-01-06T14:30:00Z");
/// ```
pub fn parse_clock_time_in(input: &str, now: Timestamp, tz: &TimeZone) -> Result<Timestamp> {
    let input = input.trim();
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return fits_longest_activity(timestamp);
    }

    let invalid = || {
        PlannerError::invalid_input("start")
            .with_reason(format!("'{input}' is neither HH:MM nor an RFC 3339 timestamp"))
    };

    let (hour, minute) = input.split_once(':').ok_or_else(invalid)?;
    let hour: i8 = hour.parse().map_err(|_| invalid())?;
    let minute: i8 = minute.parse().map_err(|_| invalid())?;
    let time = civil::Time::new(hour, minute, 0, 0).map_err(|_| invalid())?;

    let date = now.to_zoned(tz.clone()).date();
    let zoned = date
        .to_datetime(time)
        .to_zoned(tz.clone())
        .map_err(|e| PlannerError::invalid_input("start").with_reason(e.to_string()))?;
    fits_longest_activity(zoned.timestamp())
}

/// Rejects starts too close to the end of the time range to hold an
/// activity of the maximum duration.
fn fits_longest_activity(start: Timestamp) -> Result<Timestamp> {
    let longest = SignedDuration::from_mins(i64::from(MAX_DURATION_MINUTES));
    start.checked_add(longest).map(|_| start).map_err(|_| {
        PlannerError::invalid_input("start").with_reason(format!("'{start}' is too far in the future"))
    })
}

/// Parses a `Name:minutes` activity specification.
///
/// The name may itself contain colons; the duration is taken after the last
/// one.
pub fn parse_activity_spec(spec: &str) -> Result<TemplateActivity> {
    let (name, minutes) = spec.rsplit_once(':').ok_or_else(|| {
        PlannerError::invalid_input("activity")
            .with_reason(format!("'{spec}' must look like Name:minutes"))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(PlannerError::invalid_input("activity")
            .with_reason(format!("'{spec}' has an empty name")));
    }

    let duration = minutes.trim().parse::<i64>().map_err(|_| {
        PlannerError::invalid_input("activity")
            .with_reason(format!("'{minutes}' is not a number of minutes"))
    })?;

    Ok(TemplateActivity {
        name: name.to_string(),
        duration,
    })
}

/// Builds blueprints from template activity parameters, numbering ids from 1.
pub fn blueprints_from(activities: &[TemplateActivity]) -> Vec<ActivityBlueprint> {
    activities
        .iter()
        .enumerate()
        .map(|(index, activity)| ActivityBlueprint {
            id: (index + 1).to_string(),
            name: activity.name.trim().to_string(),
            duration: clamp_duration(activity.duration),
            order: index as u32,
        })
        .collect()
}

/// Converts creation parameters into a validated template.
pub fn template_from_params(params: &CreateTemplate) -> Result<DayTemplate> {
    validate_template(DayTemplate {
        id: params.id.trim().to_string(),
        name: params.name.trim().to_string(),
        activities: blueprints_from(&params.activities),
    })
}

/// Checks a template and normalizes it for storage.
///
/// Requires a non-empty id and name, at least one activity, non-empty
/// activity names and unique activity ids. Durations are clamped and
/// `order` is set to the list index.
pub fn validate_template(mut template: DayTemplate) -> Result<DayTemplate> {
    if template.id.trim().is_empty() {
        return Err(PlannerError::invalid_input("id").with_reason("Template ID cannot be empty"));
    }
    if template.name.trim().is_empty() {
        return Err(
            PlannerError::invalid_input("name").with_reason("Template name cannot be empty")
        );
    }
    if template.activities.is_empty() {
        return Err(PlannerError::invalid_input("activities")
            .with_reason("A template needs at least one activity"));
    }

    let mut seen = HashSet::new();
    for (index, activity) in template.activities.iter_mut().enumerate() {
        if activity.name.trim().is_empty() {
            return Err(PlannerError::invalid_input("activities")
                .with_reason(format!("Activity {} has an empty name", index + 1)));
        }
        if !seen.insert(activity.id.clone()) {
            return Err(PlannerError::invalid_input("activities")
                .with_reason(format!("Duplicate activity id '{}'", activity.id)));
        }
        activity.duration = clamp_duration(i64::from(activity.duration));
        activity.order = index as u32;
    }

    Ok(template)
}

/// Turns resize parameters into a [`Mutation::Resize`], resolving the start
/// against `now`.
pub fn resize_mutation(params: &ResizeActivity, now: Timestamp) -> Result<Mutation> {
    let start_time = params
        .start
        .as_deref()
        .map(|start| parse_clock_time(start, now))
        .transpose()?;

    Ok(Mutation::Resize {
        id: params.id.clone(),
        duration: params.duration,
        start_time,
    })
}
