//! Roly-Poly CLI Application
//!
//! Command-line interface and MCP server for the Roly-Poly day planner.

mod args;
mod cli;
mod mcp;
mod notifier;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, RolyPolyMcpServer};
use rolypoly_core::PlannerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        at,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Roly-Poly started");

    match command {
        Some(Day { command }) => {
            Cli::new(planner, renderer, at)
                .handle_day_command(command)
                .await
        }
        Some(Activity { command }) => {
            Cli::new(planner, renderer, at)
                .handle_activity_command(command)
                .await
        }
        Some(Template { command }) => {
            Cli::new(planner, renderer, at)
                .handle_template_command(command)
                .await
        }
        Some(Focus { command }) => {
            Cli::new(planner, renderer, at)
                .handle_focus_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Roly-Poly MCP server");
            run_stdio_server(RolyPolyMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer, at).show_today().await,
    }
}
