//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    session::DaySession,
    templates::default_templates,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/rolypoly/rolypoly.db` or
    /// `~/.local/share/rolypoly/rolypoly.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the database, seeds the built-in templates into an empty
    /// library, and restores the saved day.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the database directory cannot be
    /// created, `PlannerError::XdgDirectory` if no default location exists,
    /// and `PlannerError::Database` if initialization or loading fails.
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let path = db_path.clone();
        let (snapshot, focus) = task::spawn_blocking(move || {
            let mut db = Database::new(&path)?;
            let inserted = db.seed_templates(&default_templates())?;
            if inserted > 0 {
                info!("Seeded {inserted} default templates");
            }
            Ok::<_, PlannerError>((db.load_day()?, db.load_focus_timer()?))
        })
        .await
        .map_err(PlannerError::join)??;

        debug!(
            "Opened planner at {} with {} scheduled activities",
            db_path.display(),
            snapshot.schedule.len()
        );

        Ok(Planner::new(
            db_path,
            DaySession::restore(snapshot),
            focus.unwrap_or_default(),
        ))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("rolypoly")
            .place_data_file("rolypoly.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
