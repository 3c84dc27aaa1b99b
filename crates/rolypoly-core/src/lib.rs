//! Core library for the Roly-Poly day planner.
//!
//! A day is built from a [`DayTemplate`]: an ordered list of named durations
//! laid back to back from the moment the day starts. Completing, skipping,
//! resizing or reordering an activity cascades through the rest of the
//! schedule so the plan always reflects the current time.
//!
//! # Layers
//!
//! - [`engine`]: pure functions from `(schedule, mutation, now)` to a new
//!   schedule, plus expiry detection and pause translation
//! - [`session`]: today's schedule with its pause and notification state
//! - [`db`]: SQLite storage for templates and the saved day
//! - [`planner`]: async facade tying the session to the database
//! - [`display`]: markdown views for terminals and MCP clients
//! - [`pomodoro`]: the focus timer that runs next to the day
//!
//! Everything that depends on the current time takes an explicit
//! [`jiff::Timestamp`], so the engine is deterministic under test.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::Timestamp;
//! use rolypoly_core::{
//!     engine::build_schedule, models::Mutation, templates::default_templates,
//! };
//!
//! let template = &default_templates()[0];
//! let start: Timestamp = "2025-01-06T09:00:00Z".parse().unwrap();
//! let schedule = build_schedule(template, start);
//!
//! let first = schedule.activities()[0].id.clone();
//! let now: Timestamp = "2025-01-06T09:10:00Z".parse().unwrap();
//! let schedule = rolypoly_core::engine::apply_mutation(
//!     &schedule,
//!     &Mutation::Complete { id: first },
//!     now,
//! );
//! assert_eq!(schedule.activities()[1].start_time, Some(now));
//! ```

pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod notify;
pub mod operations;
pub mod params;
pub mod planner;
pub mod pomodoro;
pub mod session;
pub mod templates;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, Templates, UpdateResult};
pub use error::{PlannerError, Result};
pub use models::{
    Activity, ActivityBlueprint, ActivityStatus, DaySummary, DayTemplate, Mutation,
    PendingActivity, Schedule,
};
pub use notify::{LogNotifier, Notifier};
pub use planner::{Planner, PlannerBuilder};
pub use pomodoro::{FocusTimer, Phase, PhaseChange, TimerPreset};
pub use session::{Command, DaySession, DaySnapshot};
