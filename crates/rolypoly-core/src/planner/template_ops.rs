//! Template library operations for the Planner.
//!
//! Templates are copied into the session when a day starts, so editing or
//! deleting one never touches today's schedule.

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::DayTemplate,
    operations::{blueprints_from, template_from_params, validate_template},
    params::{CreateTemplate, TemplateId, UpdateTemplate},
};

impl Planner {
    /// Lists all templates, oldest first.
    pub async fn list_templates(&self) -> Result<Vec<DayTemplate>> {
        self.with_db(|db| db.list_templates()).await
    }

    /// Retrieves a template by its ID.
    pub async fn get_template(&self, params: &TemplateId) -> Result<Option<DayTemplate>> {
        let id = params.id.clone();
        self.with_db(move |db| db.get_template(&id)).await
    }

    /// Validates and stores a new template.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for an empty id, name or activity
    /// list, or when the id is already taken.
    pub async fn create_template(&self, params: &CreateTemplate) -> Result<DayTemplate> {
        let template = template_from_params(params)?;
        let stored = template.clone();
        self.with_db(move |db| db.create_template(&stored)).await?;
        Ok(template)
    }

    /// Replaces the name and/or activity list of a template.
    pub async fn update_template(&self, params: &UpdateTemplate) -> Result<DayTemplate> {
        let mut template = self
            .get_template(&TemplateId {
                id: params.id.clone(),
            })
            .await?
            .ok_or_else(|| PlannerError::template_not_found(&params.id))?;

        if let Some(name) = &params.name {
            template.name = name.trim().to_string();
        }
        if let Some(activities) = &params.activities {
            template.activities = blueprints_from(activities);
        }
        let template = validate_template(template)?;

        let stored = template.clone();
        self.with_db(move |db| db.update_template(&stored)).await?;
        Ok(template)
    }

    /// Deletes a template, returning what was removed.
    pub async fn delete_template(&self, params: &TemplateId) -> Result<DayTemplate> {
        let template = self
            .get_template(params)
            .await?
            .ok_or_else(|| PlannerError::template_not_found(&params.id))?;

        let id = template.id.clone();
        self.with_db(move |db| db.delete_template(&id)).await?;
        Ok(template)
    }
}
