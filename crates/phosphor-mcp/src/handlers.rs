//! MCP Tool Handlers
//!
//! Each handler validates its arguments, runs the icon pipeline and renders a
//! human-readable text answer. Failures come back as [`Error`] and are turned
//! into error tool results by the server; nothing here panics on bad input.

use std::fmt::Write as _;

use phosphor_core::suggest::{BATCH_LOOKUP_SUGGESTIONS, SINGLE_LOOKUP_SUGGESTIONS};
use phosphor_core::{BatchItem, IconName, IconService, IconSize, StyleOptions, Weight};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// Largest accepted `names` list for `get-multiple-icons`.
pub const MAX_BATCH_NAMES: usize = 50;

/// Largest accepted `limit` for `search-icons`.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// `limit` used by `search-icons` when none is given.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(
    service: &IconService,
    tool_name: &str,
    arguments: Value,
) -> Result<String> {
    match tool_name {
        "get-icon" => handle_get_icon(service, arguments).await,
        "get-multiple-icons" => handle_get_multiple_icons(service, arguments).await,
        "search-icons" => handle_search_icons(service, arguments).await,
        "list-categories" => Ok(handle_list_categories(service)),
        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T> {
    // Clients may omit `arguments` entirely; treat that as an empty object.
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| Error::InvalidArgument(format!("{tool}: {e}")))
}

fn style_options(color: Option<String>, size: Option<i64>) -> Result<StyleOptions> {
    let size = size.map(IconSize::new).transpose()?;
    Ok(StyleOptions { color, size })
}

fn not_found(service: &IconService, name: &IconName, weight: Weight, limit: usize) -> Error {
    Error::IconNotFound {
        name: name.to_string(),
        weight,
        suggestions: service
            .suggestions(name.as_str(), limit)
            .into_iter()
            .map(|e| e.name.clone())
            .collect(),
    }
}

/// One line summarizing the style that was applied.
fn describe_style(weight: Weight, style: &StyleOptions) -> String {
    let mut line = format!("weight: {weight}");
    if let Some(ref color) = style.color {
        let _ = write!(line, ", color: {color}");
    }
    if let Some(size) = style.size {
        let _ = write!(line, ", size: {size}px");
    }
    line
}

// ============================================================================
// get-icon
// ============================================================================

#[derive(Debug, Deserialize)]
struct GetIconArgs {
    name: String,
    #[serde(default)]
    weight: Option<Weight>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    size: Option<i64>,
}

/// Handle get-icon - Fetch one icon, restyled
async fn handle_get_icon(service: &IconService, arguments: Value) -> Result<String> {
    let args: GetIconArgs = parse_args("get-icon", arguments)?;
    let name = IconName::parse(&args.name)?;
    let style = style_options(args.color, args.size)?;
    let weight = service.weight_or_default(args.weight);

    match service.fetch_icon(&name, weight, &style).await {
        Ok(svg) => Ok(format!(
            "Icon \"{name}\" ({})\n\n{}",
            describe_style(weight, &style),
            svg.trim()
        )),
        Err(e) if e.is_not_found() => {
            Err(not_found(service, &name, weight, SINGLE_LOOKUP_SUGGESTIONS))
        }
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// get-multiple-icons
// ============================================================================

#[derive(Debug, Deserialize)]
struct GetMultipleIconsArgs {
    names: Vec<String>,
    #[serde(default)]
    weight: Option<Weight>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    size: Option<i64>,
}

/// Handle get-multiple-icons - Fetch a batch; per-name failures stay inline
async fn handle_get_multiple_icons(service: &IconService, arguments: Value) -> Result<String> {
    let args: GetMultipleIconsArgs = parse_args("get-multiple-icons", arguments)?;

    if args.names.is_empty() {
        return Err(Error::InvalidArgument(
            "names must contain at least one icon name".to_string(),
        ));
    }
    if args.names.len() > MAX_BATCH_NAMES {
        return Err(Error::InvalidArgument(format!(
            "names accepts at most {MAX_BATCH_NAMES} icons per call, got {}",
            args.names.len()
        )));
    }

    let style = style_options(args.color, args.size)?;
    let weight = service.weight_or_default(args.weight);

    let items = service.fetch_many(&args.names, weight, &style).await;
    let succeeded = items.iter().filter(|i| i.result.is_ok()).count();

    tracing::debug!(
        requested = items.len(),
        succeeded,
        %weight,
        "Batch icon lookup finished"
    );

    let mut out = format!(
        "Fetched {succeeded} of {} icons ({})\n",
        items.len(),
        describe_style(weight, &style)
    );
    for item in items {
        out.push('\n');
        out.push_str(&render_batch_item(service, weight, item));
    }
    Ok(out)
}

fn render_batch_item(service: &IconService, weight: Weight, item: BatchItem) -> String {
    let BatchItem { requested, result } = item;
    match result {
        Ok(svg) => format!("### {requested}\n{}\n", svg.trim()),
        Err(e) => {
            let error = match IconName::parse(&requested) {
                Ok(name) if e.is_not_found() => {
                    not_found(service, &name, weight, BATCH_LOOKUP_SUGGESTIONS)
                }
                _ => Error::Core(e),
            };
            format!("### {requested}\nError: {error}\n")
        }
    }
}

// ============================================================================
// search-icons
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchIconsArgs {
    query: String,
    #[serde(default)]
    limit: Option<i64>,
}

/// Handle search-icons - Substring search over the catalog
async fn handle_search_icons(service: &IconService, arguments: Value) -> Result<String> {
    let args: SearchIconsArgs = parse_args("search-icons", arguments)?;

    let query = args.query.trim();
    if query.is_empty() {
        return Err(Error::InvalidArgument(
            "query must not be empty".to_string(),
        ));
    }

    let limit = args.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
        return Err(Error::InvalidArgument(format!(
            "limit must be between 1 and {MAX_SEARCH_LIMIT}, got {limit}"
        )));
    }

    let matches = service.catalog().search(query, usize::MAX);
    if matches.is_empty() {
        return Ok(format!(
            "No icons found matching \"{query}\". Try a shorter or broader term, or use list-categories to browse."
        ));
    }

    let total = matches.len();
    let shown = &matches[..total.min(limit as usize)];

    let mut out = if shown.len() < total {
        format!(
            "Found {total} icons matching \"{query}\" (showing first {}):\n\n",
            shown.len()
        )
    } else {
        format!("Found {total} icons matching \"{query}\":\n\n")
    };
    for entry in shown {
        let _ = write!(out, "- {}", entry.name);
        if let Some(ref category) = entry.category {
            let _ = write!(out, " [{category}]");
        }
        if !entry.tags.is_empty() {
            let _ = write!(out, " tags: {}", entry.tags.join(", "));
        }
        out.push('\n');
    }
    Ok(out)
}

// ============================================================================
// list-categories
// ============================================================================

/// Handle list-categories - Category table with counts
fn handle_list_categories(service: &IconService) -> String {
    let categories = service.catalog().categories();

    let mut out = String::from("| Category | Icons |\n|----------|-------|\n");
    for (category, count) in &categories {
        let _ = writeln!(out, "| {category} | {count} |");
    }
    let _ = write!(
        out,
        "\nTotal: {} icons in {} categories\n",
        service.catalog().len(),
        categories.len()
    );
    out
}
