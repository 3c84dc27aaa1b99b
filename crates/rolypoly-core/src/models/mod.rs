//! Data models for templates, activities and the day schedule.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay free of
//! presentation logic.
//!
//! # Model Overview
//!
//! - [`DayTemplate`] / [`ActivityBlueprint`]: immutable blueprints of a day
//! - [`Activity`]: a blueprint placed on the clock, with completion state
//! - [`Schedule`]: today's ordered list of activities
//! - [`Mutation`]: the closed set of changes the engine knows how to cascade
//! - [`DaySummary`], [`ActivityStatus`], [`PendingActivity`]: derived views
//!
//! # Examples
//!
//! ```rust
//! use rolypoly_core::models::{Activity, ActivityStatus};
//! use jiff::Timestamp;
//!
//! let mut activity = Activity {
//!     id: "1".to_string(),
//!     name: "Deep work".to_string(),
//!     duration: 90,
//!     start_time: None,
//!     end_time: None,
//!     completed: false,
//!     order: 0,
//! };
//!
//! let start: Timestamp = "2025-01-06T09:00:00Z".parse().unwrap();
//! let end = activity.schedule_at(start).unwrap();
//! assert_eq!(end.to_string(), "2025-01-06T10:30:00Z");
//! assert_eq!(ActivityStatus::of(&activity, Some("1")), ActivityStatus::Current);
//! ```

pub mod activity;
pub mod export;
pub mod mutation;
pub mod schedule;
pub mod status;
pub mod summary;
pub mod template;

#[cfg(test)]
mod tests;

pub use activity::{clamp_duration, Activity, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES};
pub use export::PendingActivity;
pub use mutation::Mutation;
pub use schedule::Schedule;
pub use status::ActivityStatus;
pub use summary::DaySummary;
pub use template::{ActivityBlueprint, DayTemplate};
