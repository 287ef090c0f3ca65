//! Error types for phosphor-core

use std::time::Duration;

use crate::Weight;

/// Result type for phosphor-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, fetching or styling an icon
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller supplied a malformed or out-of-range value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Upstream has no asset at the resolved location
    #[error("icon \"{name}\" not found for weight \"{weight}\"")]
    NotFound {
        name: String,
        weight: Weight,
        url: String,
    },

    /// The bounded wait elapsed before the upstream answered
    #[error(
        "timed out after {:?} fetching {url}; the icon host may be unavailable, try again later",
        .timeout
    )]
    Timeout { url: String, timeout: Duration },

    /// Upstream answered, but the body is not SVG markup
    #[error("upstream returned content that is not SVG markup: {url}")]
    InvalidUpstreamContent { url: String },

    /// Any other network failure
    #[error("could not reach the icon host for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    // Transparent wrappers for underlying crate errors
    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error means the asset simply does not exist upstream.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
