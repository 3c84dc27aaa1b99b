//! Template operations that return display wrappers for the Planner.
//!
//! The CLI and the MCP server both render these, so they share wording.

use super::Planner;
use crate::{
    display::{CreateResult, DeleteResult, Minutes, Templates, UpdateResult},
    error::{PlannerError, Result},
    models::DayTemplate,
    params::{CreateTemplate, TemplateId, UpdateTemplate},
};

impl Planner {
    /// Lists the template library.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use rolypoly_core::PlannerBuilder;
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let templates = planner.list_templates_view().await?;
    /// print!("{templates}");
    /// # Result::<(), rolypoly_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_templates_view(&self) -> Result<Templates> {
        Ok(Templates(self.list_templates().await?))
    }

    /// Retrieves a template, failing when it does not exist.
    pub async fn show_template(&self, params: &TemplateId) -> Result<DayTemplate> {
        self.get_template(params)
            .await?
            .ok_or_else(|| PlannerError::template_not_found(&params.id))
    }

    pub async fn create_template_result(
        &self,
        params: &CreateTemplate,
    ) -> Result<CreateResult<DayTemplate>> {
        self.create_template(params).await.map(CreateResult::new)
    }

    /// Updates a template and describes what changed.
    pub async fn update_template_result(
        &self,
        params: &UpdateTemplate,
    ) -> Result<UpdateResult<DayTemplate>> {
        let before = self.show_template(&TemplateId { id: params.id.clone() }).await?;
        let after = self.update_template(params).await?;

        let mut changes = Vec::new();
        if before.name != after.name {
            changes.push(format!("Name: '{}' → '{}'", before.name, after.name));
        }
        if before.activities != after.activities {
            changes.push(format!(
                "Activities: {} ({}) → {} ({})",
                before.activities.len(),
                Minutes(i64::from(before.total_minutes())),
                after.activities.len(),
                Minutes(i64::from(after.total_minutes())),
            ));
        }

        Ok(UpdateResult::with_changes(after, changes))
    }

    pub async fn delete_template_result(
        &self,
        params: &TemplateId,
    ) -> Result<DeleteResult<DayTemplate>> {
        self.delete_template(params).await.map(DeleteResult::new)
    }
}
