//! Icon catalog
//!
//! A read-only table of icon metadata (category and tags) used for search and
//! for suggesting alternatives when a lookup misses. The catalog never decides
//! whether an icon exists; the upstream repository is authoritative.
//!
//! The built-in catalog is embedded at compile time from `data/catalog.toml`.
//! A catalog file with the same shape can replace it at startup:
//!
//! ```toml
//! [[icons]]
//! name = "heart"
//! category = "health"
//! tags = ["love", "like"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::name::sanitize;
use crate::{Error, Result};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Category label used for entries that carry none.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Metadata for one icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogEntry {
    /// Whether the lowercase `needle` occurs in the name, category or any tag.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(needle))
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    icons: Vec<CatalogEntry>,
}

/// Immutable, insertion-ordered collection of [`CatalogEntry`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries, keeping their order.
    ///
    /// Entry names must already be valid icon identifiers.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        if let Some(bad) = entries
            .iter()
            .find(|e| e.name.is_empty() || sanitize(&e.name) != e.name)
        {
            return Err(Error::Config(format!(
                "catalog entry \"{}\" is not a valid icon name",
                bad.name
            )));
        }
        Ok(Self { entries })
    }

    /// Parse a catalog from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.icons)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CATALOG)
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(?path, "Loading catalog file");
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose name, category or tags contain `query`
    /// (case-insensitive), in catalog order, at most `limit` of them.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&CatalogEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.mentions(&needle))
            .take(limit)
            .collect()
    }

    /// Distinct categories with their entry counts, sorted by name.
    pub fn categories(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            let category = entry.category.as_deref().unwrap_or(UNCATEGORIZED);
            *counts.entry(category).or_insert(0) += 1;
        }
        counts
    }

    /// Pretty JSON dump of every entry.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
