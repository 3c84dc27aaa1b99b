//! Command definitions and their handlers.
//!
//! Argument structs carry the clap derives and convert into the plain
//! parameter types of `rolypoly_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] owns the planner for one invocation. Every command first catches
//! up on expired activities and a finished focus phase, so a schedule left
//! alone while the tool was not running is brought up to date before it is
//! shown or changed.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jiff::Timestamp;
use log::{debug, info};
use rolypoly_core::{
    display::{CurrentView, DayView, FocusView},
    operations::parse_activity_spec,
    params::*,
    Planner,
};
use tokio::signal::unix::{signal, SignalKind};

use crate::{notifier::TerminalNotifier, renderer::TerminalRenderer};

/// Default expiry poll, in seconds.
const DEFAULT_WATCH_INTERVAL: u64 = 5;

// ============================================================================
// Day
// ============================================================================

/// Start today's schedule from a template
#[derive(Args)]
pub struct StartDayArgs {
    #[arg(help = "ID of the template to start (see `rp template list`)")]
    pub template_id: String,
}

impl From<StartDayArgs> for StartDay {
    fn from(val: StartDayArgs) -> Self {
        StartDay {
            template_id: val.template_id,
        }
    }
}

/// Keep the day running in the foreground
///
/// Polls for expired activities and a finished focus phase, announcing each
/// one in the terminal. Follows the system clock; stop with Ctrl-C.
#[derive(Args)]
pub struct WatchArgs {
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WATCH_INTERVAL,
        help = "Seconds between checks"
    )]
    pub interval: u64,
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Start today's schedule from a template
    #[command(alias = "s")]
    Start(StartDayArgs),
    /// Show today's schedule
    #[command(aliases = ["l", "ls"])]
    Show,
    /// Show the activity running now
    #[command(alias = "c")]
    Current,
    /// Pause the day; resuming shifts everything by the paused time
    #[command(alias = "p")]
    Pause,
    /// Resume a paused day
    #[command(alias = "r")]
    Resume,
    /// Print pending activities as JSON for remote reminders
    Export,
    /// Keep the day running in the foreground
    #[command(alias = "w")]
    Watch(WatchArgs),
}

// ============================================================================
// Activities
// ============================================================================

/// Identify an activity of today's schedule
#[derive(Args)]
pub struct ActivityIdArgs {
    #[arg(help = "ID of the activity (shown in `rp day show`)")]
    pub id: String,
}

impl From<ActivityIdArgs> for ActivityId {
    fn from(val: ActivityIdArgs) -> Self {
        ActivityId { id: val.id }
    }
}

/// Change the duration and/or start of an activity
///
/// The activities after it are moved so the day stays back to back.
#[derive(Args)]
pub struct ResizeActivityArgs {
    #[arg(help = "ID of the activity to change")]
    pub id: String,
    #[arg(short, long, help = "New duration in minutes (1 to 1440)")]
    pub duration: Option<i64>,
    #[arg(
        short,
        long,
        help = "New start, as local HH:MM or an RFC 3339 timestamp"
    )]
    pub start: Option<String>,
}

impl From<ResizeActivityArgs> for ResizeActivity {
    fn from(val: ResizeActivityArgs) -> Self {
        ResizeActivity {
            id: val.id,
            duration: val.duration,
            start: val.start,
        }
    }
}

/// Move an activity to another position
#[derive(Args)]
pub struct MoveActivityArgs {
    #[arg(help = "ID of the activity to move")]
    pub id: String,
    #[arg(help = "0-based target position; past the end moves it last")]
    pub position: u32,
}

impl From<MoveActivityArgs> for MoveActivity {
    fn from(val: MoveActivityArgs) -> Self {
        MoveActivity {
            id: val.id,
            position: val.position,
        }
    }
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Mark an activity as done; the rest of the day starts now
    #[command(aliases = ["c", "done"])]
    Complete(ActivityIdArgs),
    /// Reopen a completed activity
    #[command(alias = "u")]
    Uncomplete(ActivityIdArgs),
    /// Skip an activity without being notified
    #[command(alias = "s")]
    Skip(ActivityIdArgs),
    /// Change the duration and/or start of an activity
    #[command(alias = "r")]
    Resize(ResizeActivityArgs),
    /// Move an activity to another position
    #[command(alias = "m")]
    Move(MoveActivityArgs),
}

// ============================================================================
// Templates
// ============================================================================

fn parse_activity(spec: &str) -> std::result::Result<TemplateActivity, String> {
    parse_activity_spec(spec).map_err(|e| e.to_string())
}

/// Identify a template
#[derive(Args)]
pub struct TemplateIdArgs {
    #[arg(help = "Template ID")]
    pub id: String,
}

impl From<TemplateIdArgs> for TemplateId {
    fn from(val: TemplateIdArgs) -> Self {
        TemplateId { id: val.id }
    }
}

/// Create a template
#[derive(Args)]
pub struct CreateTemplateArgs {
    #[arg(help = "Unique template ID (e.g. deep-friday)")]
    pub id: String,
    #[arg(help = "Human readable name")]
    pub name: String,
    #[arg(
        short,
        long = "activity",
        value_name = "NAME:MINUTES",
        required = true,
        value_parser = parse_activity,
        help = "Activity as \"Name:minutes\"; repeat in running order"
    )]
    pub activities: Vec<TemplateActivity>,
}

impl From<CreateTemplateArgs> for CreateTemplate {
    fn from(val: CreateTemplateArgs) -> Self {
        CreateTemplate {
            id: val.id,
            name: val.name,
            activities: val.activities,
        }
    }
}

/// Update a template's name and/or activities
#[derive(Args)]
pub struct UpdateTemplateArgs {
    #[arg(help = "ID of the template to update")]
    pub id: String,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(
        short,
        long = "activity",
        value_name = "NAME:MINUTES",
        value_parser = parse_activity,
        help = "Replacement activity as \"Name:minutes\"; repeat in running order"
    )]
    pub activities: Vec<TemplateActivity>,
}

impl From<UpdateTemplateArgs> for UpdateTemplate {
    fn from(val: UpdateTemplateArgs) -> Self {
        UpdateTemplate {
            id: val.id,
            name: val.name,
            activities: (!val.activities.is_empty()).then_some(val.activities),
        }
    }
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List all templates
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a template
    #[command(alias = "s")]
    Show(TemplateIdArgs),
    /// Create a template
    #[command(alias = "c")]
    Create(CreateTemplateArgs),
    /// Update a template's name and/or activities
    #[command(alias = "u")]
    Update(UpdateTemplateArgs),
    /// Delete a template; a day already started from it keeps running
    #[command(aliases = ["d", "rm"])]
    Delete(TemplateIdArgs),
}

// ============================================================================
// Focus timer
// ============================================================================

/// Switch the focus timer preset
#[derive(Args)]
pub struct FocusPresetArgs {
    #[arg(help = "Work/break minutes: 25/5, 50/10 or 90/15")]
    pub preset: String,
}

impl From<FocusPresetArgs> for FocusPreset {
    fn from(val: FocusPresetArgs) -> Self {
        FocusPreset { preset: val.preset }
    }
}

/// Override the time left in the current phase
#[derive(Args)]
pub struct FocusRemainingArgs {
    #[arg(help = "Minutes left (0 to 1440)")]
    pub minutes: i64,
}

impl From<FocusRemainingArgs> for FocusRemaining {
    fn from(val: FocusRemainingArgs) -> Self {
        FocusRemaining {
            minutes: val.minutes,
        }
    }
}

#[derive(Subcommand)]
pub enum FocusCommands {
    /// Show the focus timer
    #[command(alias = "st")]
    Status,
    /// Start or continue the countdown
    Start,
    /// Pause the countdown
    #[command(alias = "p")]
    Pause,
    /// Stop and go back to a full work phase
    Reset,
    /// End the current phase now
    Skip,
    /// Switch the preset (stops the timer)
    Preset(FocusPresetArgs),
    /// Set the minutes left in the current phase
    Set(FocusRemainingArgs),
}

// ============================================================================
// Handler
// ============================================================================

/// Runs one command against the planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    notifier: TerminalNotifier,
    at: Option<Timestamp>,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, at: Option<Timestamp>) -> Self {
        Self {
            planner,
            renderer,
            notifier: TerminalNotifier,
            at,
        }
    }

    fn now(&self) -> Timestamp {
        self.at.unwrap_or_else(Timestamp::now)
    }

    /// Completes expired activities and a finished focus phase.
    async fn catch_up(&mut self) {
        let now = self.now();
        let expired = self.planner.tick(now, &self.notifier).await;
        if !expired.is_empty() {
            debug!("Caught up on {} expired activities", expired.len());
        }
        self.catch_up_focus().await;
    }

    async fn catch_up_focus(&mut self) {
        self.planner.tick_focus(self.now(), &self.notifier).await;
    }

    /// Shows today's schedule, the default when no command is given.
    pub async fn show_today(&mut self) -> Result<()> {
        self.catch_up().await;
        self.show_day()
    }

    pub async fn handle_day_command(&mut self, command: DayCommands) -> Result<()> {
        // The day being replaced is not caught up first.
        if matches!(command, DayCommands::Start(_)) {
            self.catch_up_focus().await;
        } else {
            self.catch_up().await;
        }
        match command {
            DayCommands::Start(args) => {
                let now = self.now();
                let params: StartDay = args.into();
                self.planner
                    .start_day(&params, now)
                    .await
                    .with_context(|| format!("Failed to start day from '{}'", params.template_id))?;
                self.show_day()
            }
            DayCommands::Show => self.show_day(),
            DayCommands::Current => self.show_current(self.now()),
            DayCommands::Pause => {
                let status = self.planner.pause_day(self.now()).await;
                self.renderer.render(&status.to_string())
            }
            DayCommands::Resume => {
                let status = self.planner.resume_day(self.now()).await;
                self.renderer.render(&status.to_string())
            }
            DayCommands::Export => {
                let pending = self.planner.export_pending(self.now());
                let json = serde_json::to_string_pretty(&pending)
                    .context("Failed to serialize pending activities")?;
                println!("{json}");
                Ok(())
            }
            DayCommands::Watch(args) => self.watch(&args).await,
        }
    }

    pub async fn handle_activity_command(&mut self, command: ActivityCommands) -> Result<()> {
        self.catch_up().await;
        let now = self.now();
        let status = match command {
            ActivityCommands::Complete(args) => {
                self.planner.complete_activity(&args.into(), now).await
            }
            ActivityCommands::Uncomplete(args) => {
                self.planner.uncomplete_activity(&args.into(), now).await
            }
            ActivityCommands::Skip(args) => self.planner.skip_activity(&args.into(), now).await,
            ActivityCommands::Resize(args) => self
                .planner
                .resize_activity(&args.into(), now)
                .await
                .context("Failed to resize activity")?,
            ActivityCommands::Move(args) => self.planner.move_activity(&args.into(), now).await,
        };
        self.renderer.render(&status.to_string())
    }

    pub async fn handle_template_command(&mut self, command: TemplateCommands) -> Result<()> {
        self.catch_up().await;
        match command {
            TemplateCommands::List => {
                let templates = self
                    .planner
                    .list_templates_view()
                    .await
                    .context("Failed to list templates")?;
                self.renderer.render(&templates.to_string())
            }
            TemplateCommands::Show(args) => {
                let template = self
                    .planner
                    .show_template(&args.into())
                    .await
                    .context("Failed to show template")?;
                self.renderer.render(&template.to_string())
            }
            TemplateCommands::Create(args) => {
                let result = self
                    .planner
                    .create_template_result(&args.into())
                    .await
                    .context("Failed to create template")?;
                self.renderer.render(&result.to_string())
            }
            TemplateCommands::Update(args) => {
                let result = self
                    .planner
                    .update_template_result(&args.into())
                    .await
                    .context("Failed to update template")?;
                self.renderer.render(&result.to_string())
            }
            TemplateCommands::Delete(args) => {
                let result = self
                    .planner
                    .delete_template_result(&args.into())
                    .await
                    .context("Failed to delete template")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_focus_command(&mut self, command: FocusCommands) -> Result<()> {
        self.catch_up().await;
        let now = self.now();
        match command {
            FocusCommands::Status => {}
            FocusCommands::Start => {
                let status = self.planner.focus_start(now).await;
                self.renderer.render(&status.to_string())?;
            }
            FocusCommands::Pause => {
                let status = self.planner.focus_pause(now).await;
                self.renderer.render(&status.to_string())?;
            }
            FocusCommands::Reset => {
                let status = self.planner.focus_reset().await;
                self.renderer.render(&status.to_string())?;
            }
            FocusCommands::Skip => {
                let change = self.planner.focus_skip(now, &self.notifier).await;
                self.renderer.render(&format!("{change}\n"))?;
            }
            FocusCommands::Preset(args) => {
                let status = self
                    .planner
                    .focus_set_preset(&args.into())
                    .await
                    .context("Failed to switch focus preset")?;
                self.renderer.render(&status.to_string())?;
            }
            FocusCommands::Set(args) => {
                let status = self
                    .planner
                    .focus_set_remaining(&args.into(), now)
                    .await
                    .context("Failed to set focus time")?;
                self.renderer.render(&status.to_string())?;
            }
        }

        let view = FocusView::new(self.planner.focus_timer(now), now).to_string();
        self.renderer.render(&view)
    }

    fn show_day(&self) -> Result<()> {
        let day = self.planner.day();
        let view = DayView::new(&day, self.now()).to_string();
        self.renderer.render(&view)
    }

    fn show_current(&self, now: Timestamp) -> Result<()> {
        let current = self.planner.current_activity(now);
        let view = CurrentView::new(current.as_ref(), now).to_string();
        self.renderer.render(&view)
    }

    /// Ticks the day and the focus timer until interrupted.
    async fn watch(&mut self, args: &WatchArgs) -> Result<()> {
        let mut interval = tokio::time::interval(Duration::from_secs(args.interval.max(1)));
        let mut sigint = signal(SignalKind::interrupt()).context("Failed to listen for SIGINT")?;
        let mut sigterm =
            signal(SignalKind::terminate()).context("Failed to listen for SIGTERM")?;

        info!("Watching the day every {}s", args.interval.max(1));
        self.show_current(Timestamp::now())?;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let now = Timestamp::now();
                    let expired = self.planner.tick(now, &self.notifier).await;
                    let phase = self.planner.tick_focus(now, &self.notifier).await;
                    if !expired.is_empty() || phase.is_some() {
                        self.show_current(now)?;
                    }
                }
                _ = sigint.recv() => {
                    info!("Received SIGINT, stopping watch");
                    break;
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, stopping watch");
                    break;
                }
            }
        }

        Ok(())
    }
}
