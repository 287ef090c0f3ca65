//! Asset retrieval
//!
//! [`AssetSource`] is the seam between the icon pipeline and the network.
//! [`HttpAssetSource`] is the production implementation: a single GET per
//! asset, bounded by a timeout, never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Default bound on a single fetch, request and body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Identifying `User-Agent` sent with every upstream request.
pub const DEFAULT_USER_AGENT: &str = concat!("phosphor-mcp/", env!("CARGO_PKG_VERSION"));

/// Result of a fetch that reached the upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The asset body, already checked to look like SVG markup.
    Found(String),
    /// Upstream answered with a non-success status.
    Missing { status: u16 },
}

/// Something that can retrieve raw SVG assets by URL.
///
/// Timeouts, transport failures and non-SVG bodies are errors; a missing
/// asset is an ordinary [`FetchOutcome::Missing`].
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome>;
}

/// Whether a body starts with an `<svg` root tag once leading whitespace is
/// dropped.
pub fn looks_like_svg(body: &str) -> bool {
    body.trim_start().starts_with("<svg")
}

/// [`AssetSource`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpAssetSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// One GET; the body is read only for success statuses.
    async fn get(&self, url: &str) -> reqwest::Result<(StatusCode, Option<String>)> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Ok((status, None));
        }
        let body = response.text().await?;
        Ok((status, Some(body)))
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        debug!(%url, "Fetching asset");

        // The timer is owned by this future and dropped on every exit path.
        let response = match tokio::time::timeout(self.timeout, self.get(url)).await {
            Ok(response) => response,
            Err(_) => {
                warn!(%url, timeout_secs = self.timeout.as_secs(), "Asset fetch timed out");
                return Err(Error::Timeout {
                    url: url.to_string(),
                    timeout: self.timeout,
                });
            }
        };

        match response {
            Ok((status, Some(body))) => {
                if looks_like_svg(&body) {
                    debug!(%url, bytes = body.len(), "Asset fetched");
                    Ok(FetchOutcome::Found(body))
                } else {
                    warn!(%url, %status, "Upstream body is not SVG markup");
                    Err(Error::InvalidUpstreamContent {
                        url: url.to_string(),
                    })
                }
            }
            Ok((status, None)) => {
                debug!(%url, %status, "Asset not found upstream");
                Ok(FetchOutcome::Missing {
                    status: status.as_u16(),
                })
            }
            Err(e) if e.is_timeout() => Err(Error::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }),
            Err(e) => {
                warn!(%url, error = %e, "Asset fetch failed");
                Err(Error::Transport {
                    url: url.to_string(),
                    source: e,
                })
            }
        }
    }
}
