use jiff::Timestamp;
use rolypoly_core::{Planner, PlannerBuilder};
use tempfile::TempDir;

/// Parses a clock time on a fixed Monday in UTC.
pub fn at(hhmm: &str) -> Timestamp {
    format!("2025-01-06T{hhmm}:00Z")
        .parse()
        .expect("Failed to parse test timestamp")
}

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = open_planner(&temp_dir).await;
    (temp_dir, planner)
}

/// Opens (or reopens) the planner stored in `temp_dir`.
pub async fn open_planner(temp_dir: &TempDir) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to create planner")
}
