//! SQLite storage for the template library and the saved day.
//!
//! The template library is reference data with full CRUD. The day itself is
//! stored as a snapshot: the schedule table is replaced wholesale on every
//! save, and scalar state lives in a small key/value table.

use std::path::Path;

use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod schedule_queries;
pub mod template_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Maps a parse failure of column `index` into a rusqlite conversion error.
pub(crate) fn conversion_error<E>(index: usize, error: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error))
}
