//! The schedule engine.
//!
//! Pure, total functions over a [`Schedule`](crate::models::Schedule). Every
//! entry point takes the current instant explicitly, so the engine never
//! reads the system clock and is deterministic under test.
//!
//! ```text
//! DayTemplate ──build_schedule──▶ Schedule ──apply_mutation──▶ Schedule
//!                                    │
//!                                    ├── current_activity / pending_activities
//!                                    ├── resume_schedule (pause translation)
//!                                    └── ExpiryTrigger::check
//! ```
//!
//! # Example
//!
//! ```rust
//! use jiff::Timestamp;
//! use rolypoly_core::{
//!     engine::{apply_mutation, build_schedule, current_activity},
//!     models::{ActivityBlueprint, DayTemplate, Mutation},
//! };
//!
//! let template = DayTemplate {
//!     id: "short".to_string(),
//!     name: "Short day".to_string(),
//!     activities: vec![
//!         ActivityBlueprint { id: "1".into(), name: "Read".into(), duration: 30, order: 0 },
//!         ActivityBlueprint { id: "2".into(), name: "Walk".into(), duration: 20, order: 1 },
//!     ],
//! };
//!
//! let start: Timestamp = "2025-01-06T10:00:00Z".parse().unwrap();
//! let schedule = build_schedule(&template, start);
//!
//! let later: Timestamp = "2025-01-06T10:35:00Z".parse().unwrap();
//! let schedule = apply_mutation(&schedule, &Mutation::Complete { id: "1".into() }, later);
//!
//! let current = current_activity(&schedule, later).unwrap();
//! assert_eq!(current.id, "2");
//! assert_eq!(current.start_time, Some(later));
//! ```

pub mod builder;
pub mod expiry;
pub mod pause;
pub mod recompute;
pub mod resolver;


pub use builder::build_schedule;
pub use expiry::{Expiry, ExpiryTrigger};
pub use pause::{paused_for, resume_schedule, translate};
pub use recompute::{apply_mutation, complete_batch, move_order, try_apply_mutation};
pub use resolver::{current_activity, pending_activities};
