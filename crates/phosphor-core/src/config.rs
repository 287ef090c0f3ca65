//! Server settings
//!
//! Settings are resolved from layers, later layers overriding earlier ones:
//!
//! 1. **Built-in defaults**
//! 2. **Config file** - an explicit path, or `<config_dir>/phosphor-mcp/config.toml`
//!    when it exists
//! 3. **Command line / environment** - applied by the binary as a final
//!    [`SettingsLayer`]
//!
//! Config files use camelCase keys:
//!
//! ```toml
//! defaultWeight = "bold"
//! timeoutSecs = 5
//! batchConcurrency = 8
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::fetch::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::locator::DEFAULT_BASE_URL;
use crate::{Error, Result, Weight};

/// Default number of concurrent fetches in a batch lookup.
pub const DEFAULT_BATCH_CONCURRENCY: usize = 4;

/// Upper bound for `batchConcurrency`; also the largest accepted batch.
pub const MAX_BATCH_CONCURRENCY: usize = 50;

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Weight used when a request does not name one
    pub default_weight: Weight,
    /// Upstream asset root
    pub base_url: String,
    /// Bound on a single asset fetch
    pub timeout: Duration,
    /// `User-Agent` header for upstream requests
    pub user_agent: String,
    /// Concurrent fetches in a batch lookup
    pub batch_concurrency: usize,
    /// Catalog file replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_weight: Weight::Regular,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
            catalog_path: None,
        }
    }
}

/// One partial source of settings; unset fields leave the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsLayer {
    pub default_weight: Option<Weight>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub batch_concurrency: Option<usize>,
    pub catalog_path: Option<PathBuf>,
}

impl SettingsLayer {
    /// Parse a layer from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Settings {
    /// Overlay every field the layer sets.
    pub fn merge(&mut self, layer: &SettingsLayer) {
        if let Some(weight) = layer.default_weight {
            self.default_weight = weight;
        }
        if let Some(ref base_url) = layer.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(secs) = layer.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(ref user_agent) = layer.user_agent {
            self.user_agent = user_agent.clone();
        }
        if let Some(concurrency) = layer.batch_concurrency {
            self.batch_concurrency = concurrency;
        }
        if let Some(ref path) = layer.catalog_path {
            self.catalog_path = Some(path.clone());
        }
    }

    /// Check value ranges after all layers are merged.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::Config("timeoutSecs must be at least 1".to_string()));
        }
        if !(1..=MAX_BATCH_CONCURRENCY).contains(&self.batch_concurrency) {
            return Err(Error::Config(format!(
                "batchConcurrency must be between 1 and {MAX_BATCH_CONCURRENCY}, got {}",
                self.batch_concurrency
            )));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "baseUrl must be an http(s) URL, got \"{}\"",
                self.base_url
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::Config("userAgent must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Resolves [`Settings`] from defaults and a config file.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    /// Config file named on the command line; must exist when set.
    explicit_file: Option<PathBuf>,

    /// Override for the user config directory (used for testing).
    /// When `None`, `dirs::config_dir()` is used.
    config_dir_override: Option<PathBuf>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of looking in the user config directory.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Look for `phosphor-mcp/config.toml` under `dir` instead of the
    /// platform config directory.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir_override = Some(dir.into());
        self
    }

    fn default_file(&self) -> Option<PathBuf> {
        let dir = match self.config_dir_override {
            Some(ref dir) => dir.clone(),
            None => dirs::config_dir()?,
        };
        Some(dir.join("phosphor-mcp").join("config.toml"))
    }

    /// Defaults merged with the config file, if any.
    ///
    /// A missing default file is skipped; a missing explicit file, unreadable
    /// file or invalid TOML is an error.
    pub fn load(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(ref path) = self.explicit_file {
            tracing::debug!(?path, "Loading config file");
            settings.merge(&read_layer(path)?);
        } else if let Some(path) = self.default_file() {
            if path.is_file() {
                tracing::debug!(?path, "Loading user config file");
                settings.merge(&read_layer(&path)?);
            } else {
                tracing::debug!(?path, "No user config file found, using defaults");
            }
        }

        Ok(settings)
    }
}

fn read_layer(path: &Path) -> Result<SettingsLayer> {
    let content = fs::read_to_string(path)?;
    SettingsLayer::parse(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}
