//! Error handling utilities for MCP server

use rolypoly_core::PlannerError;
use rmcp::ErrorData;

/// Converts a planner error into an MCP error.
///
/// Bad requests (unknown template, invalid input) are reported as invalid
/// parameters so the client can correct them; everything else is internal.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PlannerError::TemplateNotFound { .. } | PlannerError::InvalidInput { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}
