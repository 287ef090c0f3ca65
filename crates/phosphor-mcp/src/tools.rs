//! MCP Tool definitions
//!
//! # Tools
//!
//! - `get-icon` - Fetch one icon as SVG, optionally recolored and resized
//! - `get-multiple-icons` - Fetch up to 50 icons in one call
//! - `search-icons` - Search the catalog by name, category or tag
//! - `list-categories` - List catalog categories with icon counts

use phosphor_core::Weight;
use phosphor_core::style::{MAX_SIZE, MIN_SIZE};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::handlers::{MAX_BATCH_NAMES, MAX_SEARCH_LIMIT};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

fn weight_schema(default_weight: Weight) -> Value {
    json!({
        "type": "string",
        "enum": Weight::ALL.map(|w| w.as_str()),
        "description": format!("Icon weight (style variant). Defaults to \"{default_weight}\"")
    })
}

fn color_schema() -> Value {
    json!({
        "type": "string",
        "description": "Color applied to the icon: hex (#FF0000), rgb()/rgba(), hsl(), a named color, currentColor or var(--custom-property)"
    })
}

fn size_schema() -> Value {
    json!({
        "type": "integer",
        "minimum": MIN_SIZE,
        "maximum": MAX_SIZE,
        "description": "Width and height in pixels"
    })
}

/// Get all available tool definitions
///
/// The weight schemas name `default_weight` as the fallback.
pub fn get_tool_definitions(default_weight: Weight) -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "get-icon".to_string(),
            description: "Fetch a Phosphor icon as SVG markup, optionally recolored and resized"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Icon name in kebab-case (e.g. \"arrow-left\", \"heart\")"
                    },
                    "weight": weight_schema(default_weight),
                    "color": color_schema(),
                    "size": size_schema()
                },
                "required": ["name"]
            }),
        },
        ToolDefinition {
            name: "get-multiple-icons".to_string(),
            description: format!(
                "Fetch up to {MAX_BATCH_NAMES} Phosphor icons at once with the same weight, color and size"
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "names": {
                        "type": "array",
                        "items": { "type": "string" },
                        "minItems": 1,
                        "maxItems": MAX_BATCH_NAMES,
                        "description": "Icon names in kebab-case"
                    },
                    "weight": weight_schema(default_weight),
                    "color": color_schema(),
                    "size": size_schema()
                },
                "required": ["names"]
            }),
        },
        ToolDefinition {
            name: "search-icons".to_string(),
            description: "Search Phosphor icons by name, category or tag".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Text to look for in icon names, categories and tags"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": MAX_SEARCH_LIMIT,
                        "default": 10,
                        "description": "Maximum number of results"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "list-categories".to_string(),
            description: "List icon categories with the number of icons in each".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}
