//! "Did you mean" suggestions for names the upstream does not know.

use crate::catalog::{Catalog, CatalogEntry};

/// Suggestions offered by a single-icon lookup.
pub const SINGLE_LOOKUP_SUGGESTIONS: usize = 5;

/// Suggestions offered per failed entry of a batch lookup.
pub const BATCH_LOOKUP_SUGGESTIONS: usize = 3;

/// Find up to `limit` catalog entries loosely related to `query`.
///
/// An entry matches when, ignoring case:
/// - its name contains the query, or the query contains its name;
/// - one of its hyphen-separated name tokens is contained in the query, or
///   contains the query;
/// - its category or one of its tags contains the query.
///
/// Results keep catalog order; they are not ranked.
pub fn suggest<'a>(catalog: &'a Catalog, query: &str, limit: usize) -> Vec<&'a CatalogEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    catalog
        .entries()
        .iter()
        .filter(|entry| is_related(entry, &query))
        .take(limit)
        .collect()
}

fn is_related(entry: &CatalogEntry, query: &str) -> bool {
    let name = entry.name.to_lowercase();
    if name.contains(query) || query.contains(name.as_str()) {
        return true;
    }

    let token_match = name
        .split('-')
        .filter(|token| !token.is_empty())
        .any(|token| query.contains(token) || token.contains(query));

    token_match || entry.mentions(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::parse(
            r#"
[[icons]]
name = "arrow-left"
category = "arrows"
tags = ["back"]

[[icons]]
name = "heart"
category = "health"
tags = ["love"]

[[icons]]
name = "heart-break"
category = "health"
tags = ["sad"]

[[icons]]
name = "house"
category = "objects"
tags = ["home"]
"#,
        )
        .unwrap()
    }

    fn names(entries: Vec<&CatalogEntry>) -> Vec<&str> {
        entries.into_iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn name_contains_query() {
        assert_eq!(names(suggest(&catalog(), "hear", 5)), vec!["heart", "heart-break"]);
    }

    #[test]
    fn query_contains_name() {
        assert_eq!(names(suggest(&catalog(), "big-house-icon", 5)), vec!["house"]);
    }

    #[test]
    fn token_contained_in_query() {
        assert_eq!(names(suggest(&catalog(), "leftish", 5)), vec!["arrow-left"]);
    }

    #[test]
    fn matches_tags_and_category() {
        assert_eq!(names(suggest(&catalog(), "LOVE", 5)), vec!["heart"]);
        assert_eq!(names(suggest(&catalog(), "objects", 5)), vec!["house"]);
    }

    #[test]
    fn respects_limit_and_catalog_order() {
        assert_eq!(names(suggest(&catalog(), "heart-arrow", 2)), vec!["arrow-left", "heart"]);
    }

    #[test]
    fn nothing_for_unrelated_or_empty_query() {
        assert!(suggest(&catalog(), "zzzz", 5).is_empty());
        assert!(suggest(&catalog(), "", 5).is_empty());
        assert!(suggest(&catalog(), "heart", 0).is_empty());
    }
}
