//! Parameter structures for planner operations.
//!
//! Shared between the CLI and the MCP server. They carry plain strings and
//! numbers, so interface layers can wrap them with their own derives (clap
//! arguments, transparent MCP requests) and the core keeps its own parsing
//! in [`crate::operations`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema derives are only compiled with the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for starting a day from a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StartDay {
    /// ID of the template to build today's schedule from (e.g. "work-day")
    pub template_id: String,
}

/// Parameters for operations on a single scheduled activity.
///
/// Used by complete, uncomplete and skip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ActivityId {
    /// ID of the activity in today's schedule
    pub id: String,
}

/// Parameters for changing the length or start of an activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResizeActivity {
    /// ID of the activity in today's schedule
    pub id: String,
    /// New duration in minutes (clamped to 1..=1440)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// New start, either local "HH:MM" or an RFC 3339 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// Parameters for moving an activity to another list position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveActivity {
    /// ID of the activity to move
    pub id: String,
    /// Target position (0-indexed); positions past the end move it last
    pub position: u32,
}

/// Parameters for operations on a single template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TemplateId {
    /// Template ID
    pub id: String,
}

/// One activity of a template being created or updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TemplateActivity {
    /// Display name
    pub name: String,
    /// Duration in minutes
    pub duration: i64,
}

/// Parameters for creating a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTemplate {
    /// Unique template ID (e.g. "deep-friday")
    pub id: String,
    /// Human readable name
    pub name: String,
    /// Activities in the order they should run
    pub activities: Vec<TemplateActivity>,
}

/// Parameters for updating a template. Omitted fields are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTemplate {
    /// ID of the template to update
    pub id: String,
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement activity list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<TemplateActivity>>,
}

/// Parameters for switching the focus timer preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FocusPreset {
    /// One of "25/5", "50/10" or "90/15"
    pub preset: String,
}

/// Parameters for overriding the time left in the current focus phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FocusRemaining {
    /// Minutes left in the current phase (0 to 1440)
    pub minutes: i64,
}
