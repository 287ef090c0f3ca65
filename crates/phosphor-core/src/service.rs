//! Icon lookup pipeline
//!
//! [`IconService`] ties the pieces together: name validation, URL
//! resolution, fetching and styling. It is built once at startup and shared;
//! nothing in it is mutated afterwards.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::{DEFAULT_BATCH_CONCURRENCY, Settings};
use crate::fetch::{AssetSource, FetchOutcome, HttpAssetSource};
use crate::locator::AssetLocator;
use crate::style::{StyleOptions, apply_style};
use crate::suggest::suggest;
use crate::{Error, IconName, Result, Weight};

/// Outcome of one name in a batch lookup, in request order.
#[derive(Debug)]
pub struct BatchItem {
    /// The name as the caller sent it
    pub requested: String,
    /// Styled markup, or why this name failed
    pub result: Result<String>,
}

/// Shared, read-only icon lookup service.
#[derive(Clone)]
pub struct IconService {
    catalog: Arc<Catalog>,
    locator: AssetLocator,
    source: Arc<dyn AssetSource>,
    default_weight: Weight,
    batch_concurrency: usize,
}

impl std::fmt::Debug for IconService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconService")
            .field("catalog_len", &self.catalog.len())
            .field("locator", &self.locator)
            .field("default_weight", &self.default_weight)
            .field("batch_concurrency", &self.batch_concurrency)
            .finish_non_exhaustive()
    }
}

impl IconService {
    pub fn new(catalog: Arc<Catalog>, locator: AssetLocator, source: Arc<dyn AssetSource>) -> Self {
        Self {
            catalog,
            locator,
            source,
            default_weight: Weight::default(),
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }

    /// Build the production service: HTTP source, built-in or configured
    /// catalog.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let catalog = match settings.catalog_path {
            Some(ref path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        let source = HttpAssetSource::new(&settings.user_agent, settings.timeout)?;

        tracing::info!(
            icons = catalog.len(),
            base_url = %settings.base_url,
            default_weight = %settings.default_weight,
            "Icon service ready"
        );

        Ok(Self::new(
            Arc::new(catalog),
            AssetLocator::new(settings.base_url.clone()),
            Arc::new(source),
        )
        .with_default_weight(settings.default_weight)
        .with_batch_concurrency(settings.batch_concurrency))
    }

    pub fn with_default_weight(mut self, weight: Weight) -> Self {
        self.default_weight = weight;
        self
    }

    /// Concurrent fetches in [`IconService::fetch_many`]; clamped to at least 1.
    pub fn with_batch_concurrency(mut self, concurrency: usize) -> Self {
        self.batch_concurrency = concurrency.max(1);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_weight(&self) -> Weight {
        self.default_weight
    }

    /// The explicit weight, or the configured default.
    pub fn weight_or_default(&self, weight: Option<Weight>) -> Weight {
        weight.unwrap_or(self.default_weight)
    }

    /// Catalog entries related to `query`, for "did you mean" hints.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<&CatalogEntry> {
        suggest(&self.catalog, query, limit)
    }

    /// Fetch one icon and apply the style overrides.
    pub async fn fetch_icon(
        &self,
        name: &IconName,
        weight: Weight,
        style: &StyleOptions,
    ) -> Result<String> {
        let url = self.locator.resolve(name, weight);
        match self.source.fetch(&url).await? {
            FetchOutcome::Found(svg) if style.is_empty() => Ok(svg),
            FetchOutcome::Found(svg) => Ok(apply_style(&svg, weight, style)),
            FetchOutcome::Missing { status } => {
                tracing::debug!(%name, %weight, status, "Icon missing upstream");
                Err(Error::NotFound {
                    name: name.to_string(),
                    weight,
                    url,
                })
            }
        }
    }

    /// Fetch several icons independently.
    ///
    /// Each name is validated and fetched on its own; a failure is recorded
    /// in that name's [`BatchItem`] and never affects the others. Up to
    /// `batch_concurrency` fetches run at once; the result order always
    /// matches `names`.
    pub async fn fetch_many(
        &self,
        names: &[String],
        weight: Weight,
        style: &StyleOptions,
    ) -> Vec<BatchItem> {
        stream::iter(names)
            .map(|requested| async move {
                let result = match IconName::parse(requested) {
                    Ok(name) => self.fetch_icon(&name, weight, style).await,
                    Err(e) => Err(e),
                };
                BatchItem {
                    requested: requested.clone(),
                    result,
                }
            })
            .buffered(self.batch_concurrency)
            .collect()
            .await
    }
}
