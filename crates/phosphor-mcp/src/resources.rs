//! MCP Resource definitions
//!
//! Resources provide read-only reference data about the icon set.
//!
//! # Available Resources
//!
//! | URI | Description | Content-Type |
//! |-----|-------------|--------------|
//! | `phosphor://catalog` | Every catalog entry with category and tags | application/json |
//! | `phosphor://weights` | The six icon weights and how colors apply | text/markdown |

use serde::{Deserialize, Serialize};

pub const CATALOG_URI: &str = "phosphor://catalog";
pub const WEIGHTS_URI: &str = "phosphor://weights";

/// Resource definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

/// Content returned by `resources/read`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// Get all available resource definitions
pub fn get_resource_definitions() -> Vec<ResourceDefinition> {
    vec![
        ResourceDefinition {
            uri: CATALOG_URI.to_string(),
            name: "Icon catalog".to_string(),
            description: "All known Phosphor icons with their category and tags".to_string(),
            mime_type: "application/json".to_string(),
        },
        ResourceDefinition {
            uri: WEIGHTS_URI.to_string(),
            name: "Icon weights".to_string(),
            description: "The six Phosphor weights and how color overrides apply to each"
                .to_string(),
            mime_type: "text/markdown".to_string(),
        },
    ]
}
