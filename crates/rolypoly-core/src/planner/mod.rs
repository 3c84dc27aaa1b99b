//! High-level planner API.
//!
//! [`Planner`] owns today's [`DaySession`] and the focus timer, and talks to
//! the SQLite database for the template library and for saving the day.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (template_      │───▶│ (day_ops,       │───▶│   (via db/)     │
//! │  handlers)      │    │  template_ops)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Display types       Business logic         Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: opens the database, seeds templates, restores the day
//! - [`day_ops`]: start, mutate, pause/resume and tick today's schedule
//! - [`focus_ops`]: focus timer commands
//! - [`template_ops`]: template library CRUD
//! - [`template_handlers`]: template operations returning display wrappers
//!
//! Day state changes are applied in memory first and then saved. A failed
//! save is logged and does not undo the change; template operations
//! propagate their errors.
//!
//! # Example
//!
//! ```rust,no_run
//! use jiff::Timestamp;
//! use rolypoly_core::{params::StartDay, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/rolypoly.db"))
//!     .build()
//!     .await?;
//!
//! let now = Timestamp::now();
//! planner
//!     .start_day(&StartDay { template_id: "work-day".to_string() }, now)
//!     .await?;
//! if let Some(activity) = planner.current_activity(now) {
//!     println!("Now: {}", activity.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::error;
use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
    pomodoro::FocusTimer,
    session::DaySession,
};

pub mod builder;
pub mod day_ops;
pub mod focus_ops;
pub mod template_handlers;
pub mod template_ops;


pub use builder::PlannerBuilder;

/// Main planner interface.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) session: DaySession,
    pub(crate) focus: FocusTimer,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, session: DaySession, focus: FocusTimer) -> Self {
        Self {
            db_path,
            session,
            focus,
        }
    }

    /// Path of the database file backing this planner.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(PlannerError::join)?
    }

    /// Saves the day snapshot, logging failures.
    pub(crate) async fn persist_day(&self) {
        let snapshot = self.session.snapshot();
        if let Err(e) = self.with_db(move |db| db.save_day(&snapshot)).await {
            error!("Failed to save day state: {e}");
        }
    }

    /// Saves the focus timer, logging failures.
    pub(crate) async fn persist_focus(&self) {
        let timer = self.focus.clone();
        if let Err(e) = self.with_db(move |db| db.save_focus_timer(&timer)).await {
            error!("Failed to save focus timer: {e}");
        }
    }
}
