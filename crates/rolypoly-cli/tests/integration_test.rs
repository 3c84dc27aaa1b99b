//! Integration tests comparing CLI and direct Display implementations
//!
//! The CLI and the MCP server render through the same Display types, so in
//! plain mode the CLI output must match them byte for byte.

use std::process::Command;

use jiff::Timestamp;
use rolypoly_core::{params::TemplateId, Planner, PlannerBuilder};
use tempfile::TempDir;

const AT: &str = "2025-01-06T09:00:00Z";

/// Helper function to create a test planner with temporary database
async fn create_test_planner() -> (Planner, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    (planner, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(temp_dir: &TempDir, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rp"));
    cmd.env("TZ", "UTC")
        .arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("test.db"))
        .arg("--at")
        .arg(AT)
        .args(args);

    let output = cmd.output().expect("Failed to execute CLI command");
    assert!(
        output.status.success(),
        "CLI command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("CLI output is not UTF-8")
}

#[tokio::test]
async fn test_template_show_matches_display() {
    let (planner, temp_dir) = create_test_planner().await;

    let template = planner
        .show_template(&TemplateId {
            id: "work-day".to_string(),
        })
        .await
        .expect("Failed to load template");
    drop(planner);

    let cli_output = run_cli_command(&temp_dir, &["template", "show", "work-day"]);
    assert_eq!(cli_output, template.to_string());
}

#[tokio::test]
async fn test_template_list_matches_display() {
    let (planner, temp_dir) = create_test_planner().await;

    let templates = planner
        .list_templates_view()
        .await
        .expect("Failed to list templates");
    drop(planner);

    let cli_output = run_cli_command(&temp_dir, &["template", "list"]);
    assert_eq!(cli_output, templates.to_string());
}

#[tokio::test]
async fn test_export_matches_planner() {
    let (planner, temp_dir) = create_test_planner().await;
    drop(planner);

    run_cli_command(&temp_dir, &["day", "start", "study-day"]);
    let cli_output = run_cli_command(&temp_dir, &["day", "export"]);

    // The day started by the CLI is visible to a fresh planner
    let reopened = PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to reopen planner");
    let now: Timestamp = AT.parse().expect("Failed to parse timestamp");
    let pending = reopened.export_pending(now);
    assert!(!pending.is_empty());

    let from_cli: serde_json::Value =
        serde_json::from_str(&cli_output).expect("CLI export is not JSON");
    let direct = serde_json::to_value(&pending).expect("Failed to serialize export");
    assert_eq!(from_cli, direct);
}
