//! MCP server implementation for Roly-Poly
//!
//! Exposes today's schedule and the template library to AI assistants over
//! the Model Context Protocol. While the server runs, a background task
//! completes expired activities so the schedule stays current between tool
//! calls.

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use jiff::Timestamp;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use rolypoly_core::{
    params::{ActivityId, CreateTemplate, MoveActivity, ResizeActivity, StartDay, TemplateId},
    LogNotifier, Planner,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::McpResult;
use handlers::McpHandlers;

/// How often the server checks for expired activities.
const EXPIRY_POLL: Duration = Duration::from_secs(5);

/// MCP server for Roly-Poly
#[derive(Clone)]
pub struct RolyPolyMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RolyPolyMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "show_day",
        description = "Show today's schedule as a table: each activity's status (done, current, upcoming), start and end time, name, ID and length, plus overall progress and the planned finish time. Activity IDs from this table are used by the other activity tools."
    )]
    async fn show_day(&self) -> McpResult {
        self.handlers().show_day().await
    }

    #[tool(
        name = "start_day",
        description = "Start today's schedule from a template (see list_templates). Activities are laid back to back starting now. Replaces any day already in progress."
    )]
    async fn start_day(&self, Parameters(params): Parameters<StartDay>) -> McpResult {
        self.handlers().start_day(params).await
    }

    #[tool(
        name = "current_activity",
        description = "Show the activity running right now with its time window and time left, or the next one if nothing is running."
    )]
    async fn current_activity(&self) -> McpResult {
        self.handlers().current_activity().await
    }

    #[tool(
        name = "complete_activity",
        description = "Mark an activity as done. Every unfinished activity after it restarts from now, so finishing early pulls the rest of the day forward and finishing late pushes it back."
    )]
    async fn complete_activity(&self, Parameters(params): Parameters<ActivityId>) -> McpResult {
        self.handlers().complete_activity(params).await
    }

    #[tool(
        name = "uncomplete_activity",
        description = "Reopen a completed activity. It is placed right after the nearest unfinished activity before it (or starts now), and every later activity, completed ones included, follows back to back."
    )]
    async fn uncomplete_activity(&self, Parameters(params): Parameters<ActivityId>) -> McpResult {
        self.handlers().uncomplete_activity(params).await
    }

    #[tool(
        name = "skip_activity",
        description = "Skip an activity: it counts as done without a time's-up notification, and the rest of the day restarts from now."
    )]
    async fn skip_activity(&self, Parameters(params): Parameters<ActivityId>) -> McpResult {
        self.handlers().skip_activity(params).await
    }

    #[tool(
        name = "resize_activity",
        description = "Change an activity's duration in minutes (1 to 1440) and/or its start (local \"HH:MM\" or RFC 3339). Later activities move so the day stays back to back."
    )]
    async fn resize_activity(&self, Parameters(params): Parameters<ResizeActivity>) -> McpResult {
        self.handlers().resize_activity(params).await
    }

    #[tool(
        name = "move_activity",
        description = "Move an activity to another 0-based position in today's list. Unfinished activities are then laid out again starting now."
    )]
    async fn move_activity(&self, Parameters(params): Parameters<MoveActivity>) -> McpResult {
        self.handlers().move_activity(params).await
    }

    #[tool(
        name = "pause_day",
        description = "Pause the day, e.g. for an unplanned interruption. Nothing expires while paused."
    )]
    async fn pause_day(&self) -> McpResult {
        self.handlers().pause_day().await
    }

    #[tool(
        name = "resume_day",
        description = "Resume a paused day. Every activity is shifted later by the time spent paused."
    )]
    async fn resume_day(&self) -> McpResult {
        self.handlers().resume_day().await
    }

    #[tool(
        name = "export_pending",
        description = "List unfinished activities that end in the future as JSON ({id, name, endTime}), for scheduling reminders elsewhere."
    )]
    async fn export_pending(&self) -> McpResult {
        self.handlers().export_pending().await
    }

    #[tool(
        name = "list_templates",
        description = "List the template library: each template's ID, name, total length and activities in order."
    )]
    async fn list_templates(&self) -> McpResult {
        self.handlers().list_templates().await
    }

    #[tool(
        name = "show_template",
        description = "Show one template with its numbered activities and durations."
    )]
    async fn show_template(&self, Parameters(params): Parameters<TemplateId>) -> McpResult {
        self.handlers().show_template(params).await
    }

    #[tool(
        name = "create_template",
        description = "Create a template from an ID, a name and an ordered list of activities ({name, duration} with duration in minutes). The ID must be new."
    )]
    async fn create_template(&self, Parameters(params): Parameters<CreateTemplate>) -> McpResult {
        self.handlers().create_template(params).await
    }

    #[tool(
        name = "delete_template",
        description = "Delete a template from the library. A day already started from it keeps running."
    )]
    async fn delete_template(&self, Parameters(params): Parameters<TemplateId>) -> McpResult {
        self.handlers().delete_template(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for RolyPolyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "rolypoly".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Roly-Poly is a day planner. A day is started from a template, an ordered list of named activities with durations, and the activities are laid back to back from the start time.

## Core Concepts
- **Templates**: reusable blueprints of a day (list_templates, show_template, create_template, delete_template)
- **Today's schedule**: the activities of the running day with start/end times and a done flag
- **Cascading**: completing, skipping, resizing or moving an activity re-times the rest of the day so it always starts from the present

## Typical Flow
1. `list_templates` and `start_day` with a template ID
2. `current_activity` or `show_day` to see where the day stands
3. `complete_activity` when something is finished, `skip_activity` to drop it
4. `resize_activity` when something needs more or less time
5. `pause_day` / `resume_day` around interruptions

Activities whose time runs out are completed automatically."#.to_string()),
        }
    }
}

/// Completes expired activities until the task is aborted.
async fn expire_activities(planner: Arc<Mutex<Planner>>) {
    let mut interval = tokio::time::interval(EXPIRY_POLL);
    loop {
        interval.tick().await;
        let expired = planner.lock().await.tick(Timestamp::now(), &LogNotifier).await;
        if !expired.is_empty() {
            debug!("Background tick completed {} activities", expired.len());
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: RolyPolyMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Roly-Poly MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let ticker = tokio::spawn(expire_activities(server.planner.clone()));

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    ticker.abort();
    info!("MCP server shutdown complete");
    Ok(())
}
