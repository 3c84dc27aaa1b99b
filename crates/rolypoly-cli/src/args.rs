use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Timestamp;

use crate::cli::{ActivityCommands, DayCommands, FocusCommands, TemplateCommands};

/// Plan your day from a template and keep it on track
///
/// Roly-Poly lays a template's activities back to back from the moment you
/// start the day. Finishing early, running late, pausing or reordering
/// cascades through the rest of the schedule. It can also run as an MCP
/// (Model Context Protocol) server so AI assistants can manage the day.
#[derive(Parser)]
#[command(version, about, name = "rp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/rolypoly/rolypoly.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Evaluate the command at this RFC 3339 instant instead of the system
    /// clock
    #[arg(long, global = true, value_name = "TIMESTAMP")]
    pub at: Option<Timestamp>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Without a command, `rp` shows today's schedule.
#[derive(Subcommand)]
pub enum Commands {
    /// Start, inspect, pause and watch today's schedule
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Complete, skip, resize or move activities of today
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Manage the template library
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Control the focus timer
    #[command(alias = "f")]
    Focus {
        #[command(subcommand)]
        command: FocusCommands,
    },
    /// Start the MCP server
    Serve,
}
