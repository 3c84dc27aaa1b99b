//! Day operations for the Planner.
//!
//! Every change goes through [`Planner::execute`], which applies a
//! [`Command`] to the session and saves the day only when something changed.

use jiff::Timestamp;
use log::info;

use super::Planner;
use crate::{
    display::OperationStatus,
    engine,
    error::{PlannerError, Result},
    models::{Activity, DaySummary, Mutation, PendingActivity},
    notify::Notifier,
    operations::resize_mutation,
    params::{ActivityId, MoveActivity, ResizeActivity, StartDay},
    session::{Command, DaySession, DaySnapshot},
};

impl Planner {
    pub fn session(&self) -> &DaySession {
        &self.session
    }

    /// A copy of today's state for display or export.
    pub fn day(&self) -> DaySnapshot {
        self.session.snapshot()
    }

    pub fn summary(&self) -> DaySummary {
        self.session.summary()
    }

    pub fn current_activity(&self, now: Timestamp) -> Option<Activity> {
        self.session.current_activity(now).cloned()
    }

    /// Non-completed activities ending after `now`, for remote reminders.
    pub fn export_pending(&self, now: Timestamp) -> Vec<PendingActivity> {
        self.session.pending_activities(now)
    }

    /// Applies `command` and saves the day if it changed anything.
    pub async fn execute(&mut self, command: Command, now: Timestamp) -> bool {
        let changed = self.session.apply(command, now);
        if changed {
            self.persist_day().await;
        }
        changed
    }

    /// Builds today's schedule from a stored template, replacing any
    /// existing day.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::TemplateNotFound` when no template has the id.
    pub async fn start_day(&mut self, params: &StartDay, now: Timestamp) -> Result<DaySnapshot> {
        let id = params.template_id.clone();
        let template = self
            .with_db(move |db| db.get_template(&id))
            .await?
            .ok_or_else(|| PlannerError::template_not_found(&params.template_id))?;

        self.execute(Command::StartDay(template), now).await;
        Ok(self.day())
    }

    fn activity_label(&self, id: &str) -> Option<String> {
        self.session
            .schedule()
            .get(id)
            .map(|a| format!("\"{}\"", a.name))
    }

    fn not_found(id: &str) -> OperationStatus {
        OperationStatus::unchanged(format!("No activity with ID '{id}' today"))
    }

    /// Marks an activity completed; the ones after it restart from now.
    pub async fn complete_activity(&mut self, params: &ActivityId, now: Timestamp) -> OperationStatus {
        let Some(label) = self.activity_label(&params.id) else {
            return Self::not_found(&params.id);
        };
        let changed = self
            .execute(Command::Mutate(Mutation::Complete { id: params.id.clone() }), now)
            .await;
        OperationStatus::from_change(
            changed,
            format!("Completed {label}"),
            format!("{label} is already completed"),
        )
    }

    /// Reopens a completed activity.
    pub async fn uncomplete_activity(&mut self, params: &ActivityId, now: Timestamp) -> OperationStatus {
        let Some(label) = self.activity_label(&params.id) else {
            return Self::not_found(&params.id);
        };
        let changed = self
            .execute(Command::Mutate(Mutation::Uncomplete { id: params.id.clone() }), now)
            .await;
        OperationStatus::from_change(
            changed,
            format!("Reopened {label}"),
            format!("{label} is not completed"),
        )
    }

    /// Completes an activity without it counting as expired.
    pub async fn skip_activity(&mut self, params: &ActivityId, now: Timestamp) -> OperationStatus {
        let Some(label) = self.activity_label(&params.id) else {
            return Self::not_found(&params.id);
        };
        let changed = self
            .execute(Command::Mutate(Mutation::Skip { id: params.id.clone() }), now)
            .await;
        OperationStatus::from_change(
            changed,
            format!("Skipped {label}"),
            format!("{label} is already completed"),
        )
    }

    /// Changes the duration and/or start of an activity.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the start cannot be parsed.
    pub async fn resize_activity(
        &mut self,
        params: &ResizeActivity,
        now: Timestamp,
    ) -> Result<OperationStatus> {
        let mutation = resize_mutation(params, now)?;
        let Some(label) = self.activity_label(&params.id) else {
            return Ok(Self::not_found(&params.id));
        };
        let changed = self.execute(Command::Mutate(mutation), now).await;
        Ok(OperationStatus::from_change(
            changed,
            format!("Adjusted {label}"),
            "Nothing to change: give a duration or a start time",
        ))
    }

    /// Moves an activity to another position in the list.
    pub async fn move_activity(&mut self, params: &MoveActivity, now: Timestamp) -> OperationStatus {
        let Some(order) =
            engine::move_order(self.session.schedule(), &params.id, params.position as usize)
        else {
            return Self::not_found(&params.id);
        };
        self.reorder_activities(order, now).await
    }

    /// Replaces the list order with `order`, which must be a permutation of
    /// today's activity ids.
    pub async fn reorder_activities(&mut self, order: Vec<String>, now: Timestamp) -> OperationStatus {
        let changed = self
            .execute(Command::Mutate(Mutation::Reorder { order }), now)
            .await;
        OperationStatus::from_change(
            changed,
            "Reordered today's activities",
            "The new order must list every activity exactly once",
        )
    }

    pub async fn pause_day(&mut self, now: Timestamp) -> OperationStatus {
        let changed = self.execute(Command::Pause, now).await;
        OperationStatus::from_change(changed, "Day paused", "The day is already paused")
    }

    pub async fn resume_day(&mut self, now: Timestamp) -> OperationStatus {
        let changed = self.execute(Command::Resume, now).await;
        OperationStatus::from_change(changed, "Day resumed", "The day is not paused")
    }

    /// Completes activities whose time is up and announces them.
    ///
    /// Returns the expired activities. The day is saved only when something
    /// expired.
    pub async fn tick(&mut self, now: Timestamp, notifier: &dyn Notifier) -> Vec<Activity> {
        let expired = self.session.tick(now, notifier);
        if !expired.is_empty() {
            info!("Completed {} expired activities", expired.len());
            self.persist_day().await;
        }
        expired
    }
}
