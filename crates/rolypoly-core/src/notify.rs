//! Notification transport seam.
//!
//! The engine only decides *that* something should be announced; delivery
//! is best-effort and owned by whatever implements [`Notifier`].

use log::{error, info};

use crate::{error::Result, models::Activity};

/// Delivers a short user-facing message.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Title used for expired-activity notifications.
pub const ACTIVITY_EXPIRED_TITLE: &str = "Time's up!";

/// Body used for an expired activity.
pub fn activity_expired_body(activity: &Activity) -> String {
    format!("Activity \"{}\" is finished", activity.name)
}

/// Announces every expired activity, logging delivery failures instead of
/// propagating them.
pub fn announce_expired(notifier: &dyn Notifier, expired: &[Activity]) {
    for activity in expired {
        if let Err(e) = notifier.notify(ACTIVITY_EXPIRED_TITLE, &activity_expired_body(activity)) {
            error!("Failed to notify expiry of activity {}: {e}", activity.id);
        }
    }
}

/// Notifier that writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<()> {
        info!("{title} {body}");
        Ok(())
    }
}
