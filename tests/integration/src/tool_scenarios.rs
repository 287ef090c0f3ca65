//! End-to-end tool scenarios
//!
//! Each test drives a fully wired server through `tools/call` against a
//! mock icon host and checks the text a client would see.

use std::sync::Arc;
use std::sync::LazyLock;
use std::time::Duration;

use phosphor_core::{AssetLocator, Catalog, HttpAssetSource, IconService, Weight};
use phosphor_mcp::PhosphorMcpServer;
use phosphor_test_utils::fixtures;
use phosphor_test_utils::upstream::MockUpstream;
use pretty_assertions::assert_eq;
use regex::Regex;
use serde_json::{Value, json};

static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());

static CATEGORY_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\| ([a-z-]+) \| (\d+) \|$").unwrap());

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Server wired to a mock host, with knobs for the settings under test.
struct Harness {
    upstream: MockUpstream,
    server: PhosphorMcpServer,
}

impl Harness {
    async fn new() -> Self {
        Self::with(MockUpstream::with_fixtures().await, Duration::from_secs(5), 4).await
    }

    async fn with(upstream: MockUpstream, timeout: Duration, concurrency: usize) -> Self {
        let service = IconService::new(
            Arc::new(Catalog::builtin().unwrap()),
            AssetLocator::new(upstream.base_url()),
            Arc::new(HttpAssetSource::new("integration-tests", timeout).unwrap()),
        )
        .with_batch_concurrency(concurrency);
        let mut server = PhosphorMcpServer::new(service);
        server.initialize();
        Self { upstream, server }
    }

    /// Call a tool; returns `(text, is_error)`.
    async fn call(&self, tool: &str, arguments: Value) -> (String, bool) {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": tool, "arguments": arguments }
        });
        let response: Value = serde_json::from_str(
            &self.server.handle_message(&request.to_string()).await.unwrap(),
        )
        .unwrap();
        assert!(response.get("error").is_none(), "{response}");

        let result = &response["result"];
        let text = result["content"][0]["text"].as_str().unwrap().to_string();
        (text, result["isError"] == true)
    }
}

fn headings(text: &str) -> Vec<&str> {
    SECTION_HEADING
        .captures_iter(text)
        .map(|c| c.get(1).unwrap().as_str())
        .collect()
}

// =============================================================================
// get-icon
// =============================================================================

#[tokio::test]
async fn fill_weight_recolors_every_fill() {
    let h = Harness::new().await;
    let (text, is_error) = h
        .call(
            "get-icon",
            json!({"name": "heart", "weight": "fill", "color": "#FF0000"}),
        )
        .await;

    assert!(!is_error, "{text}");
    assert!(!text.contains("currentColor"));
    assert!(text.contains(r##"fill="#FF0000""##));
}

#[tokio::test]
async fn duotone_color_rewrites_fill_and_stroke() {
    let h = Harness::new().await;
    let (text, is_error) = h
        .call(
            "get-icon",
            json!({"name": "heart", "weight": "duotone", "color": "#112233"}),
        )
        .await;

    assert!(!is_error, "{text}");
    assert!(text.contains(r##"fill="#112233""##));
    assert!(text.contains(r##"stroke="#112233""##));
    assert!(!text.contains("currentColor"));
    // Attributes that merely share a prefix are left alone.
    assert!(text.contains(r#"stroke-width="16""#));
    assert!(text.contains(r#"stroke-linecap="round""#));
}

#[tokio::test]
async fn size_replaces_existing_dimensions() {
    let h = Harness::new().await;
    let (text, _) = h
        .call("get-icon", json!({"name": "star", "weight": "bold", "size": 64}))
        .await;

    assert!(text.contains(r#"width="64" height="64""#), "{text}");
    assert!(!text.contains(r#"width="256""#));
    assert!(text.contains(r#"stroke-width="24""#));
}

#[tokio::test]
async fn size_is_injected_when_root_has_none() {
    let h = Harness::new().await;
    let (text, _) = h
        .call("get-icon", json!({"name": "heart", "weight": "fill", "size": 48}))
        .await;

    let svg = &text[text.find("<svg").unwrap()..];
    let start_tag = &svg[..svg.find('>').unwrap()];
    assert!(start_tag.ends_with(r#" width="48" height="48""#), "{start_tag}");
}

#[tokio::test]
async fn regular_size_rewrites_the_sizing_rect() {
    let h = Harness::new().await;
    let (text, is_error) = h.call("get-icon", json!({"name": "heart", "size": 32})).await;
    assert!(!is_error, "{text}");

    let svg = &text[text.find("<svg").unwrap()..];
    let root_tag = &svg[..=svg.find('>').unwrap()];
    assert_eq!(
        root_tag,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256">"#
    );
    assert!(svg.contains(r#"<rect width="32" height="32" fill="none"/>"#));
    assert!(!svg.contains(r#"width="256""#));
}

#[tokio::test]
async fn timeout_is_reported_differently_from_not_found() {
    let upstream = MockUpstream::start().await;
    upstream
        .mount_delayed(
            "regular",
            "heart.svg",
            fixtures::HEART_REGULAR,
            Duration::from_secs(5),
        )
        .await;
    let h = Harness::with(upstream, Duration::from_millis(200), 4).await;

    let (text, is_error) = h.call("get-icon", json!({"name": "heart"})).await;

    assert!(is_error);
    assert!(text.contains("timed out"), "{text}");
    assert!(!text.contains("not found"));
}

#[tokio::test]
async fn non_svg_body_is_reported_as_invalid_content() {
    let upstream = MockUpstream::start().await;
    upstream
        .mount_status("regular", "heart.svg", 200, "<html>maintenance</html>")
        .await;
    let h = Harness::with(upstream, Duration::from_secs(5), 4).await;

    let (text, is_error) = h.call("get-icon", json!({"name": "heart"})).await;

    assert!(is_error);
    assert!(text.contains("not SVG markup"), "{text}");
}

// =============================================================================
// get-multiple-icons
// =============================================================================

#[tokio::test]
async fn batch_partial_failure_is_not_a_call_error() {
    let h = Harness::new().await;
    let (text, is_error) = h
        .call(
            "get-multiple-icons",
            json!({"names": ["heart", "not-a-real-icon-zzz"]}),
        )
        .await;

    assert!(!is_error, "{text}");
    assert!(text.starts_with("Fetched 1 of 2 icons (weight: regular)"));
    assert_eq!(headings(&text), ["heart", "not-a-real-icon-zzz"]);
    assert!(text.contains(
        "Error: Icon \"not-a-real-icon-zzz\" was not found for weight \"regular\"."
    ));
    assert_eq!(text.matches("<svg").count(), 1);
}

#[tokio::test]
async fn batch_reports_invalid_names_inline() {
    let h = Harness::new().await;
    let (text, is_error) = h
        .call("get-multiple-icons", json!({"names": ["heart", "Bad Name!"]}))
        .await;

    assert!(!is_error);
    assert_eq!(headings(&text), ["heart", "Bad Name!"]);
    assert!(text.contains("Error: invalid argument"));
    assert_eq!(h.upstream.received_requests().await.len(), 1);
}

#[tokio::test]
async fn batch_output_keeps_input_order_under_concurrency() {
    let upstream = MockUpstream::start().await;
    upstream
        .mount_delayed(
            "regular",
            "heart.svg",
            fixtures::HEART_REGULAR,
            Duration::from_millis(400),
        )
        .await;
    for name in ["x", "at", "house"] {
        upstream
            .mount_svg("regular", &format!("{name}.svg"), fixtures::HEART_REGULAR)
            .await;
    }
    let h = Harness::with(upstream, Duration::from_secs(5), 4).await;

    let (text, is_error) = h
        .call("get-multiple-icons", json!({"names": ["heart", "x", "at", "house"]}))
        .await;

    assert!(!is_error);
    assert!(text.starts_with("Fetched 4 of 4 icons"));
    assert_eq!(headings(&text), ["heart", "x", "at", "house"]);
}

#[tokio::test]
async fn batch_applies_shared_style_to_every_icon() {
    let h = Harness::new().await;
    let (text, _) = h
        .call(
            "get-multiple-icons",
            json!({"names": ["heart", "heart"], "weight": "fill", "color": "red", "size": 20}),
        )
        .await;

    assert!(text.starts_with("Fetched 2 of 2 icons (weight: fill, color: red, size: 20px)"));
    assert_eq!(text.matches(r#"fill="red""#).count(), 2);
    assert_eq!(text.matches(r#"width="20" height="20""#).count(), 2);
}

#[tokio::test]
async fn batch_accepts_fifty_names_and_rejects_fifty_one() {
    let h = Harness::new().await;

    let fifty: Vec<String> = (0..50).map(|i| format!("missing-{i}")).collect();
    let (text, is_error) = h.call("get-multiple-icons", json!({ "names": fifty })).await;
    assert!(!is_error, "{text}");
    assert!(text.starts_with("Fetched 0 of 50 icons"));
    assert_eq!(headings(&text).len(), 50);

    let before = h.upstream.received_requests().await.len();
    let fifty_one: Vec<String> = (0..51).map(|i| format!("missing-{i}")).collect();
    let (text, is_error) = h.call("get-multiple-icons", json!({ "names": fifty_one })).await;
    assert!(is_error);
    assert!(text.contains("at most 50"), "{text}");
    assert_eq!(h.upstream.received_requests().await.len(), before);
}

#[tokio::test]
async fn batch_size_is_validated_once_for_the_whole_call() {
    let h = Harness::new().await;
    let (text, is_error) = h
        .call("get-multiple-icons", json!({"names": ["heart"], "size": 9000}))
        .await;

    assert!(is_error);
    assert!(text.contains("between 1 and 4096"), "{text}");
    assert!(h.upstream.received_requests().await.is_empty());
}

// =============================================================================
// search-icons / list-categories
// =============================================================================

#[tokio::test]
async fn search_limit_bounds() {
    let h = Harness::new().await;

    for limit in [0, 101] {
        let (text, is_error) = h
            .call("search-icons", json!({"query": "arrow", "limit": limit}))
            .await;
        assert!(is_error, "limit {limit}: {text}");
        assert!(text.contains("between 1 and 100"));
    }

    let (one, _) = h
        .call("search-icons", json!({"query": "arrow", "limit": 1}))
        .await;
    assert_eq!(one.lines().filter(|l| l.starts_with("- ")).count(), 1);

    let (all, _) = h
        .call("search-icons", json!({"query": "arrow", "limit": 100}))
        .await;
    let expected = Catalog::builtin().unwrap().search("arrow", 100).len();
    assert_eq!(all.lines().filter(|l| l.starts_with("- ")).count(), expected);
}

#[tokio::test]
async fn search_never_contacts_the_host() {
    let h = Harness::new().await;
    let (text, is_error) = h.call("search-icons", json!({"query": "HEART"})).await;

    assert!(!is_error);
    assert!(text.starts_with("Found 2 icons matching \"HEART\""));
    assert!(h.upstream.received_requests().await.is_empty());
}

#[tokio::test]
async fn category_counts_sum_to_catalog_size() {
    let h = Harness::new().await;
    let (text, is_error) = h.call("list-categories", json!({})).await;
    assert!(!is_error);

    let counts: Vec<(String, usize)> = CATEGORY_ROW
        .captures_iter(&text)
        .map(|c| (c[1].to_string(), c[2].parse().unwrap()))
        .collect();
    let catalog = Catalog::builtin().unwrap();

    assert_eq!(counts.len(), catalog.categories().len());
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), catalog.len());
    assert!(text.ends_with(&format!(
        "Total: {} icons in {} categories\n",
        catalog.len(),
        counts.len()
    )));
}

// =============================================================================
// Resources
// =============================================================================

#[tokio::test]
async fn weights_resource_marks_configured_default() {
    let upstream = MockUpstream::start().await;
    let service = IconService::new(
        Arc::new(Catalog::builtin().unwrap()),
        AssetLocator::new(upstream.base_url()),
        Arc::new(HttpAssetSource::new("integration-tests", Duration::from_secs(5)).unwrap()),
    )
    .with_default_weight(Weight::Light);
    let server = PhosphorMcpServer::new(service);

    let response: Value = serde_json::from_str(
        &server
            .handle_message(
                r#"{"jsonrpc":"2.0","id":1,"method":"resources/read","params":{"uri":"phosphor://weights"}}"#,
            )
            .await
            .unwrap(),
    )
    .unwrap();

    let text = response["result"]["contents"][0]["text"].as_str().unwrap();
    assert!(text.contains("| light (default) |"), "{text}");
    assert!(!text.contains("| regular (default) |"));
}
