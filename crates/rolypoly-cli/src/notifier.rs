//! Terminal delivery of activity and focus timer announcements.

use std::io::{self, Write};

use log::info;
use rolypoly_core::{error::Result, Notifier, PlannerError};

/// Rings the terminal bell and prints the announcement on stderr, keeping
/// stdout free for command output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<()> {
        info!("Notification: {title} {body}");

        let mut stderr = io::stderr().lock();
        writeln!(stderr, "\x07🔔 {title} {body}").map_err(|e| PlannerError::Configuration {
            message: format!("Failed to write notification: {e}"),
        })
    }
}
