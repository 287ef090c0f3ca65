//! Error types for the MCP server

use phosphor_core::Weight;
use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the icon pipeline
    #[error(transparent)]
    Core(#[from] phosphor_core::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument provided
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Upstream has no such icon; carries catalog suggestions
    #[error(
        "Icon \"{name}\" was not found for weight \"{weight}\". {}",
        not_found_hint(.suggestions)
    )]
    IconNotFound {
        name: String,
        weight: Weight,
        suggestions: Vec<String>,
    },

    /// Unknown tool requested
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Unknown resource requested
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn not_found_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        "Use search-icons to browse available names.".to_string()
    } else {
        format!("Did you mean: {}?", suggestions.join(", "))
    }
}
