//! Markdown formatting for days, templates and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly where there is a
//! single obvious rendering (templates, statuses). Anything that depends on
//! the current instant or a time zone is a view wrapper built at the call
//! site (`DayView`, `CurrentView`, `FocusView`).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Views & Result │    │   Markdown      │
//! │ (Schedule, ...) │───▶│    Wrappers     │───▶│ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`day`]: the schedule table, the current activity and the focus timer
//! - [`collections`]: the template library listing
//! - [`results`]: template create/update/delete confirmations
//! - [`status`]: one-line day operation outcomes
//! - [`datetime`]: local clock times, minute and countdown formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod day;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Templates;
pub use datetime::{Countdown, LocalTime, Minutes};
pub use day::{CurrentView, DayView, FocusView};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
