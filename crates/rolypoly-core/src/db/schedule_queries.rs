//! Saved day: schedule rows plus key/value day state.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::conversion_error;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Activity, DayTemplate, Schedule},
    pomodoro::FocusTimer,
    session::DaySnapshot,
};

const SELECT_SCHEDULE_SQL: &str = "SELECT id, name, duration, start_time, end_time, completed, sort_order FROM schedule_activities ORDER BY sort_order";
const DELETE_SCHEDULE_SQL: &str = "DELETE FROM schedule_activities";
const INSERT_SCHEDULE_ACTIVITY_SQL: &str = "INSERT INTO schedule_activities (id, name, duration, start_time, end_time, completed, sort_order) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_STATE_SQL: &str = "SELECT value FROM day_state WHERE key = ?1";
const UPSERT_STATE_SQL: &str = "INSERT INTO day_state (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_STATE_SQL: &str = "DELETE FROM day_state WHERE key = ?1";

const CURRENT_TEMPLATE_KEY: &str = "current_template";
const PAUSED_AT_KEY: &str = "paused_at";
const NOTIFIED_KEY: &str = "notified";
const FOCUS_TIMER_KEY: &str = "focus_timer";

fn parse_timestamp(index: usize, value: Option<String>) -> rusqlite::Result<Option<Timestamp>> {
    value
        .map(|s| s.parse::<Timestamp>().map_err(|e| conversion_error(index, e)))
        .transpose()
}

impl super::Database {
    fn build_activity_from_row(row: &rusqlite::Row) -> rusqlite::Result<Activity> {
        Ok(Activity {
            id: row.get(0)?,
            name: row.get(1)?,
            duration: row.get::<_, i64>(2)? as u32,
            start_time: parse_timestamp(3, row.get(3)?)?,
            end_time: parse_timestamp(4, row.get(4)?)?,
            completed: row.get(5)?,
            order: row.get::<_, i64>(6)? as u32,
        })
    }

    fn get_state(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_STATE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read day state")
    }

    /// Loads the saved schedule in list order.
    pub fn load_schedule(&self) -> Result<Schedule> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SCHEDULE_SQL)
            .db_context("Failed to prepare schedule query")?;

        let activities = stmt
            .query_map([], Self::build_activity_from_row)
            .db_context("Failed to query schedule")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read scheduled activity")?;

        Ok(Schedule::new(activities))
    }

    /// Loads everything needed to restore the day session.
    pub fn load_day(&self) -> Result<DaySnapshot> {
        let schedule = self.load_schedule()?;

        let template = self
            .get_state(CURRENT_TEMPLATE_KEY)?
            .map(|json| serde_json::from_str::<DayTemplate>(&json))
            .transpose()?;

        let paused_at = self
            .get_state(PAUSED_AT_KEY)?
            .map(|s| s.parse::<Timestamp>().map_err(|e| conversion_error(0, e)))
            .transpose()
            .db_context("Failed to parse pause instant")?;

        let notified = self
            .get_state(NOTIFIED_KEY)?
            .map(|json| serde_json::from_str::<Vec<String>>(&json))
            .transpose()?
            .unwrap_or_default();

        Ok(DaySnapshot {
            schedule,
            template,
            paused_at,
            notified,
        })
    }

    /// Replaces the saved day with `snapshot` in a single transaction.
    pub fn save_day(&mut self, snapshot: &DaySnapshot) -> Result<()> {
        let template_json = snapshot
            .template
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let notified_json = serde_json::to_string(&snapshot.notified)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_SCHEDULE_SQL, [])
            .db_context("Failed to clear schedule")?;
        {
            let mut stmt = tx
                .prepare(INSERT_SCHEDULE_ACTIVITY_SQL)
                .db_context("Failed to prepare schedule insert")?;
            for activity in &snapshot.schedule {
                stmt.execute(params![
                    &activity.id,
                    &activity.name,
                    i64::from(activity.duration),
                    activity.start_time.map(|t| t.to_string()),
                    activity.end_time.map(|t| t.to_string()),
                    activity.completed,
                    i64::from(activity.order),
                ])
                .db_context("Failed to insert scheduled activity")?;
            }
        }

        let scalar_state = [
            (CURRENT_TEMPLATE_KEY, template_json),
            (PAUSED_AT_KEY, snapshot.paused_at.map(|t| t.to_string())),
            (NOTIFIED_KEY, Some(notified_json)),
        ];
        for (key, value) in scalar_state {
            match value {
                Some(value) => tx
                    .execute(UPSERT_STATE_SQL, params![key, value])
                    .db_context("Failed to save day state")?,
                None => tx
                    .execute(DELETE_STATE_SQL, params![key])
                    .db_context("Failed to clear day state")?,
            };
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Loads the saved focus timer, if any.
    pub fn load_focus_timer(&self) -> Result<Option<FocusTimer>> {
        Ok(self
            .get_state(FOCUS_TIMER_KEY)?
            .map(|json| serde_json::from_str(&json))
            .transpose()?)
    }

    pub fn save_focus_timer(&self, timer: &FocusTimer) -> Result<()> {
        let json = serde_json::to_string(timer)?;
        self.connection
            .execute(UPSERT_STATE_SQL, params![FOCUS_TIMER_KEY, json])
            .db_context("Failed to save focus timer")?;
        Ok(())
    }
}
