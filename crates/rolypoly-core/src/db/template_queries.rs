//! Template library CRUD operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Transaction};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{ActivityBlueprint, DayTemplate},
};

const COUNT_TEMPLATES_SQL: &str = "SELECT COUNT(*) FROM templates";
const CHECK_TEMPLATE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM templates WHERE id = ?1)";
const SELECT_TEMPLATE_SQL: &str = "SELECT id, name FROM templates WHERE id = ?1";
const SELECT_TEMPLATES_SQL: &str = "SELECT id, name FROM templates ORDER BY rowid";
const SELECT_TEMPLATE_ACTIVITIES_SQL: &str = "SELECT id, name, duration, sort_order FROM template_activities WHERE template_id = ?1 ORDER BY sort_order";
const INSERT_TEMPLATE_SQL: &str =
    "INSERT INTO templates (id, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TEMPLATE_SQL: &str = "UPDATE templates SET name = ?1, updated_at = ?2 WHERE id = ?3";
const INSERT_TEMPLATE_ACTIVITY_SQL: &str = "INSERT INTO template_activities (template_id, id, name, duration, sort_order) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_TEMPLATE_ACTIVITIES_SQL: &str = "DELETE FROM template_activities WHERE template_id = ?1";
const DELETE_TEMPLATE_SQL: &str = "DELETE FROM templates WHERE id = ?1";

impl super::Database {
    fn build_blueprint_from_row(row: &rusqlite::Row) -> rusqlite::Result<ActivityBlueprint> {
        Ok(ActivityBlueprint {
            id: row.get(0)?,
            name: row.get(1)?,
            duration: row.get::<_, i64>(2)? as u32,
            order: row.get::<_, i64>(3)? as u32,
        })
    }

    fn load_blueprints(&self, template_id: &str) -> Result<Vec<ActivityBlueprint>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TEMPLATE_ACTIVITIES_SQL)
            .db_context("Failed to prepare template activities query")?;

        let rows = stmt
            .query_map(params![template_id], Self::build_blueprint_from_row)
            .db_context("Failed to query template activities")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read template activity")
    }

    fn insert_blueprints(tx: &Transaction<'_>, template: &DayTemplate) -> Result<()> {
        let mut stmt = tx
            .prepare(INSERT_TEMPLATE_ACTIVITY_SQL)
            .db_context("Failed to prepare template activity insert")?;

        for (index, activity) in template.activities.iter().enumerate() {
            stmt.execute(params![
                &template.id,
                &activity.id,
                &activity.name,
                i64::from(activity.duration),
                index as i64,
            ])
            .db_context("Failed to insert template activity")?;
        }
        Ok(())
    }

    /// Number of templates in the library.
    pub fn count_templates(&self) -> Result<usize> {
        self.connection
            .query_row(COUNT_TEMPLATES_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as usize)
            .db_context("Failed to count templates")
    }

    /// Retrieves a template with its activities in order.
    pub fn get_template(&self, id: &str) -> Result<Option<DayTemplate>> {
        let header = self
            .connection
            .query_row(SELECT_TEMPLATE_SQL, params![id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .optional()
            .db_context("Failed to query template")?;

        let Some((id, name)) = header else {
            return Ok(None);
        };

        let activities = self.load_blueprints(&id)?;
        Ok(Some(DayTemplate {
            id,
            name,
            activities,
        }))
    }

    /// Lists every template in creation order.
    pub fn list_templates(&self) -> Result<Vec<DayTemplate>> {
        let headers = {
            let mut stmt = self
                .connection
                .prepare(SELECT_TEMPLATES_SQL)
                .db_context("Failed to prepare templates query")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
                .db_context("Failed to query templates")?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
                .db_context("Failed to read template")?
        };

        headers
            .into_iter()
            .map(|(id, name)| {
                let activities = self.load_blueprints(&id)?;
                Ok(DayTemplate {
                    id,
                    name,
                    activities,
                })
            })
            .collect()
    }

    /// Inserts a new template. Fails with `InvalidInput` when the id is taken.
    pub fn create_template(&mut self, template: &DayTemplate) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_TEMPLATE_EXISTS_SQL, params![&template.id], |row| row.get(0))
            .db_context("Failed to check template existence")?;
        if exists {
            return Err(PlannerError::invalid_input("id")
                .with_reason(format!("a template with id '{}' already exists", template.id)));
        }

        let now = Timestamp::now().to_string();
        tx.execute(
            INSERT_TEMPLATE_SQL,
            params![&template.id, &template.name, &now, &now],
        )
        .db_context("Failed to insert template")?;
        Self::insert_blueprints(&tx, template)?;

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Replaces the name and activities of an existing template.
    pub fn update_template(&mut self, template: &DayTemplate) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let updated = tx
            .execute(
                UPDATE_TEMPLATE_SQL,
                params![&template.name, Timestamp::now().to_string(), &template.id],
            )
            .db_context("Failed to update template")?;
        if updated == 0 {
            return Err(PlannerError::template_not_found(&template.id));
        }

        tx.execute(DELETE_TEMPLATE_ACTIVITIES_SQL, params![&template.id])
            .db_context("Failed to clear template activities")?;
        Self::insert_blueprints(&tx, template)?;

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Deletes a template and its activities.
    pub fn delete_template(&mut self, id: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_TEMPLATE_ACTIVITIES_SQL, params![id])
            .db_context("Failed to delete template activities")?;
        let deleted = tx
            .execute(DELETE_TEMPLATE_SQL, params![id])
            .db_context("Failed to delete template")?;
        if deleted == 0 {
            return Err(PlannerError::template_not_found(id));
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Inserts `templates` when the library is empty. Returns how many were
    /// inserted.
    pub fn seed_templates(&mut self, templates: &[DayTemplate]) -> Result<usize> {
        if self.count_templates()? > 0 {
            return Ok(0);
        }
        for template in templates {
            self.create_template(template)?;
        }
        Ok(templates.len())
    }
}
