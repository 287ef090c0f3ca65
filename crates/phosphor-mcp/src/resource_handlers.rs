//! MCP Resource Handlers
//!
//! Read-only views of the catalog and the weight table.

use phosphor_core::{IconService, Weight};

use crate::resources::{CATALOG_URI, ResourceContent, WEIGHTS_URI};
use crate::{Error, Result};

/// Read a resource by URI
///
/// # Errors
///
/// Returns `Error::UnknownResource` if the URI is not recognized.
pub async fn read_resource(service: &IconService, uri: &str) -> Result<ResourceContent> {
    match uri {
        CATALOG_URI => read_catalog(service),
        WEIGHTS_URI => Ok(read_weights(service)),
        _ => Err(Error::UnknownResource(uri.to_string())),
    }
}

fn read_catalog(service: &IconService) -> Result<ResourceContent> {
    Ok(ResourceContent {
        uri: CATALOG_URI.to_string(),
        mime_type: "application/json".to_string(),
        text: service.catalog().to_json()?,
    })
}

fn read_weights(service: &IconService) -> ResourceContent {
    let mut text = String::from("# Phosphor Icon Weights\n\n");
    text.push_str("| Weight | File suffix | Description |\n");
    text.push_str("|--------|-------------|-------------|\n");
    for weight in Weight::ALL {
        let suffix = match weight.file_suffix() {
            s if s.is_empty() => "(none)".to_string(),
            s => format!("`{s}`"),
        };
        let marker = if weight == service.default_weight() {
            " (default)"
        } else {
            ""
        };
        text.push_str(&format!(
            "| {weight}{marker} | {suffix} | {} |\n",
            weight.description()
        ));
    }
    text.push_str(
        "\nColor overrides replace `fill` attributes for the `fill` weight, and both `fill` and `stroke` attributes for every other weight.\n",
    );

    ResourceContent {
        uri: WEIGHTS_URI.to_string(),
        mime_type: "text/markdown".to_string(),
        text,
    }
}
