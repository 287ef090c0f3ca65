//! [`MockUpstream`]: a local stand-in for the Phosphor asset host.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures;

/// Path prefix mirroring the upstream `.../assets` directory.
pub const ASSETS_PREFIX: &str = "/assets";

/// A running mock asset host.
///
/// Paths that were not mounted answer `404`, like the real host does for
/// unknown icons.
///
/// # Example
///
/// ```rust,no_run
/// use phosphor_test_utils::upstream::MockUpstream;
///
/// # async fn demo() {
/// let upstream = MockUpstream::with_fixtures().await;
/// let base_url = upstream.base_url(); // http://127.0.0.1:<port>/assets
/// # }
/// ```
pub struct MockUpstream {
    server: MockServer,
}

impl MockUpstream {
    /// Start an empty host.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Start a host serving every asset in [`fixtures::ALL`].
    pub async fn with_fixtures() -> Self {
        let upstream = Self::start().await;
        for (weight, file, body) in fixtures::ALL {
            upstream.mount_svg(weight, file, body).await;
        }
        upstream
    }

    /// Base URL to configure the asset locator with.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), ASSETS_PREFIX)
    }

    fn asset_path(weight: &str, file: &str) -> String {
        format!("{ASSETS_PREFIX}/{weight}/{file}")
    }

    /// Serve `body` at `{weight}/{file}` with status 200.
    pub async fn mount_svg(&self, weight: &str, file: &str, body: &str) {
        self.mount(weight, file, ResponseTemplate::new(200).set_body_string(body))
            .await;
    }

    /// Serve `body` at `{weight}/{file}` after `delay`.
    pub async fn mount_delayed(&self, weight: &str, file: &str, body: &str, delay: Duration) {
        self.mount(
            weight,
            file,
            ResponseTemplate::new(200)
                .set_body_string(body)
                .set_delay(delay),
        )
        .await;
    }

    /// Answer `{weight}/{file}` with an arbitrary status and body.
    pub async fn mount_status(&self, weight: &str, file: &str, status: u16, body: &str) {
        self.mount(
            weight,
            file,
            ResponseTemplate::new(status).set_body_string(body),
        )
        .await;
    }

    async fn mount(&self, weight: &str, file: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(Self::asset_path(weight, file)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Every request the host has received so far.
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
