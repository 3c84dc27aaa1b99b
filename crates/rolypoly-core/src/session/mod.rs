//! The owned state of "today".
//!
//! [`DaySession`] is the single writer of the schedule. Every change, whether
//! it comes from the user or from the expiry trigger, goes through
//! [`DaySession::apply`] or [`DaySession::tick`], so mutations are serialized
//! by `&mut self` and the schedule is only ever replaced by a consistent
//! result of the engine.

use jiff::Timestamp;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    engine::{self, ExpiryTrigger},
    models::{Activity, DaySummary, DayTemplate, Mutation, PendingActivity, Schedule},
    notify::{announce_expired, Notifier},
};

#[cfg(test)]
mod tests;

/// A request to change the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace today with a fresh schedule built from the template
    StartDay(DayTemplate),
    /// Apply one schedule mutation
    Mutate(Mutation),
    /// Stop the clock
    Pause,
    /// Restart the clock, shifting the schedule by the paused time
    Resume,
}

/// Serializable copy of everything a session needs to be restored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaySnapshot {
    pub schedule: Schedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<DayTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused_at: Option<Timestamp>,
    /// Activities already announced as expired
    #[serde(default)]
    pub notified: Vec<String>,
}

/// Today's schedule together with the state that governs it.
#[derive(Debug, Clone, Default)]
pub struct DaySession {
    schedule: Schedule,
    template: Option<DayTemplate>,
    paused_at: Option<Timestamp>,
    expiry: ExpiryTrigger,
}

impl DaySession {
    /// A session with no active day.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore(snapshot: DaySnapshot) -> Self {
        Self {
            schedule: snapshot.schedule,
            template: snapshot.template,
            paused_at: snapshot.paused_at,
            expiry: ExpiryTrigger::with_notified(snapshot.notified),
        }
    }

    pub fn snapshot(&self) -> DaySnapshot {
        DaySnapshot {
            schedule: self.schedule.clone(),
            template: self.template.clone(),
            paused_at: self.paused_at,
            notified: self.expiry.notified_ids(),
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The template today was started from.
    pub fn template(&self) -> Option<&DayTemplate> {
        self.template.as_ref()
    }

    pub fn paused_at(&self) -> Option<Timestamp> {
        self.paused_at
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Whether a non-empty schedule exists.
    pub fn has_day(&self) -> bool {
        !self.schedule.is_empty()
    }

    pub fn current_activity(&self, now: Timestamp) -> Option<&Activity> {
        engine::current_activity(&self.schedule, now)
    }

    pub fn pending_activities(&self, now: Timestamp) -> Vec<PendingActivity> {
        engine::pending_activities(&self.schedule, now)
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary::from_schedule(&self.schedule)
    }

    /// Applies a command at `now`. Returns whether the session changed.
    pub fn apply(&mut self, command: Command, now: Timestamp) -> bool {
        match command {
            Command::StartDay(template) => {
                info!(
                    "Starting day from template '{}' with {} activities",
                    template.id,
                    template.activities.len()
                );
                self.schedule = engine::build_schedule(&template, now);
                self.template = Some(template);
                self.paused_at = None;
                self.expiry.clear();
                true
            }
            Command::Mutate(mutation) => {
                match engine::try_apply_mutation(&self.schedule, &mutation, now) {
                    Some(schedule) => {
                        debug!("Applied {} mutation", mutation.kind());
                        self.schedule = schedule;
                        true
                    }
                    None => false,
                }
            }
            Command::Pause => {
                if self.paused_at.is_some() {
                    debug!("Day already paused");
                    return false;
                }
                self.paused_at = Some(now);
                true
            }
            Command::Resume => {
                let Some(paused_at) = self.paused_at.take() else {
                    debug!("Resume requested while not paused");
                    return false;
                };
                debug!(
                    "Resuming after {:?} paused",
                    engine::paused_for(paused_at, now)
                );
                match engine::resume_schedule(&self.schedule, paused_at, now) {
                    Some(schedule) => self.schedule = schedule,
                    None => warn!("Pause of the day cannot be applied at {now}; times kept"),
                }
                true
            }
        }
    }

    /// Runs one expiry check at `now`.
    ///
    /// Newly expired activities are completed in one batch, then announced
    /// through `notifier`. Nothing fires while the day is paused. Returns the
    /// expired activities as they were before completion.
    pub fn tick(&mut self, now: Timestamp, notifier: &dyn Notifier) -> Vec<Activity> {
        if self.is_paused() {
            return Vec::new();
        }

        let expiry = self.expiry.check(&self.schedule, now);
        if let Some(schedule) = expiry.schedule {
            self.schedule = schedule;
        }

        if !expiry.expired.is_empty() {
            info!("{} activities expired", expiry.expired.len());
            announce_expired(notifier, &expiry.expired);
        }
        expiry.expired
    }
}
