//! MCP tool handlers implementation
//!
//! Tool parameters are the core parameter types themselves; the CLI crate
//! enables `rolypoly-core`'s `schema` feature so they derive `JsonSchema`.

use std::sync::Arc;

use jiff::Timestamp;
use log::debug;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use rolypoly_core::{
    display::{CreateResult, CurrentView, DayView, DeleteResult},
    params::{ActivityId, CreateTemplate, MoveActivity, ResizeActivity, StartDay, TemplateId},
    Planner,
};
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(markdown.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn show_day(&self) -> McpResult {
        debug!("show_day");
        let planner = self.planner.lock().await;
        let day = planner.day();
        text(DayView::new(&day, Timestamp::now()).to_string())
    }

    pub async fn start_day(&self, params: StartDay) -> McpResult {
        debug!("start_day: {params:?}");
        let now = Timestamp::now();
        let day = self
            .planner
            .lock()
            .await
            .start_day(&params, now)
            .await
            .map_err(|e| to_mcp_error("Failed to start day", &e))?;
        text(DayView::new(&day, now).to_string())
    }

    pub async fn current_activity(&self) -> McpResult {
        debug!("current_activity");
        let now = Timestamp::now();
        let current = self.planner.lock().await.current_activity(now);
        text(CurrentView::new(current.as_ref(), now).to_string())
    }

    pub async fn complete_activity(&self, params: ActivityId) -> McpResult {
        debug!("complete_activity: {params:?}");
        let status = self
            .planner
            .lock()
            .await
            .complete_activity(&params, Timestamp::now())
            .await;
        text(status.to_string())
    }

    pub async fn uncomplete_activity(&self, params: ActivityId) -> McpResult {
        debug!("uncomplete_activity: {params:?}");
        let status = self
            .planner
            .lock()
            .await
            .uncomplete_activity(&params, Timestamp::now())
            .await;
        text(status.to_string())
    }

    pub async fn skip_activity(&self, params: ActivityId) -> McpResult {
        debug!("skip_activity: {params:?}");
        let status = self
            .planner
            .lock()
            .await
            .skip_activity(&params, Timestamp::now())
            .await;
        text(status.to_string())
    }

    pub async fn resize_activity(&self, params: ResizeActivity) -> McpResult {
        debug!("resize_activity: {params:?}");
        let status = self
            .planner
            .lock()
            .await
            .resize_activity(&params, Timestamp::now())
            .await
            .map_err(|e| to_mcp_error("Failed to resize activity", &e))?;
        text(status.to_string())
    }

    pub async fn move_activity(&self, params: MoveActivity) -> McpResult {
        debug!("move_activity: {params:?}");
        let status = self
            .planner
            .lock()
            .await
            .move_activity(&params, Timestamp::now())
            .await;
        text(status.to_string())
    }

    pub async fn pause_day(&self) -> McpResult {
        debug!("pause_day");
        let status = self.planner.lock().await.pause_day(Timestamp::now()).await;
        text(status.to_string())
    }

    pub async fn resume_day(&self) -> McpResult {
        debug!("resume_day");
        let status = self.planner.lock().await.resume_day(Timestamp::now()).await;
        text(status.to_string())
    }

    pub async fn export_pending(&self) -> McpResult {
        debug!("export_pending");
        let pending = self.planner.lock().await.export_pending(Timestamp::now());
        let json = serde_json::to_string_pretty(&pending).map_err(|e| {
            ErrorData::internal_error(format!("Failed to serialize pending activities: {e}"), None)
        })?;
        text(json)
    }

    pub async fn list_templates(&self) -> McpResult {
        debug!("list_templates");
        let templates = self
            .planner
            .lock()
            .await
            .list_templates_view()
            .await
            .map_err(|e| to_mcp_error("Failed to list templates", &e))?;
        text(format!("# Templates\n\n{templates}"))
    }

    pub async fn show_template(&self, params: TemplateId) -> McpResult {
        debug!("show_template: {params:?}");
        let template = self
            .planner
            .lock()
            .await
            .show_template(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to show template", &e))?;
        text(template.to_string())
    }

    pub async fn create_template(&self, params: CreateTemplate) -> McpResult {
        debug!("create_template: {params:?}");
        let template = self
            .planner
            .lock()
            .await
            .create_template(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to create template", &e))?;
        text(CreateResult::new(template).to_string())
    }

    pub async fn delete_template(&self, params: TemplateId) -> McpResult {
        debug!("delete_template: {params:?}");
        let template = self
            .planner
            .lock()
            .await
            .delete_template(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete template", &e))?;
        text(DeleteResult::new(template).to_string())
    }
}
