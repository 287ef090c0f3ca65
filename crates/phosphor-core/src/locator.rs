//! Upstream asset URLs
//!
//! The Phosphor core repository stores one directory per weight. Regular
//! icons use the bare name as filename; every other weight appends
//! `-{weight}`:
//!
//! ```text
//! assets/regular/heart.svg
//! assets/bold/heart-bold.svg
//! assets/duotone/heart-duotone.svg
//! ```

use crate::{IconName, Weight};

/// Default upstream location of the Phosphor SVG assets.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/phosphor-icons/core/main/assets";

/// Builds the upstream URL of an icon asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocator {
    base_url: String,
}

impl Default for AssetLocator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl AssetLocator {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Filename of the asset, e.g. `heart-bold.svg`.
    pub fn file_name(name: &IconName, weight: Weight) -> String {
        format!("{}{}.svg", name, weight.file_suffix())
    }

    /// Fully qualified asset URL: `{base}/{weight}/{file_name}`.
    ///
    /// No escaping is applied; [`IconName`] only admits `[a-z0-9-]`.
    pub fn resolve(&self, name: &IconName, weight: Weight) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            weight,
            Self::file_name(name, weight)
        )
    }
}
