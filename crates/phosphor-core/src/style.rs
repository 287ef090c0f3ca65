//! SVG restyling by text substitution
//!
//! Markup is never parsed. Attribute values are rewritten with regular
//! expressions anchored on whitespace before the attribute name, so
//! `stroke-width` or `fill-rule` are never mistaken for `width` or `fill`.
//!
//! Colors go to every matching attribute. Sizes go to the first `width` and
//! the first `height` in document order. In regular-weight assets those sit
//! on the transparent sizing `<rect>`, so the root `<svg>` keeps no explicit
//! size there; the size is injected into the root tag only when no `width`
//! exists anywhere.
//!
//! Colors are inserted verbatim. A color containing `"` will break the
//! attribute it lands in.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{Error, Result, Weight};

static FILL_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)fill="[^"]*""#).expect("valid fill pattern"));
static STROKE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)stroke="[^"]*""#).expect("valid stroke pattern"));
static WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)width="[^"]*""#).expect("valid width pattern"));
static HEIGHT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)height="[^"]*""#).expect("valid height pattern"));
static SVG_START_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<svg\b[^>]*?)(\s*/?>)").expect("valid svg tag pattern"));

/// Smallest accepted pixel size.
pub const MIN_SIZE: u32 = 1;
/// Largest accepted pixel size.
pub const MAX_SIZE: u32 = 4096;

/// Pixel size applied to both width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize(u32);

impl IconSize {
    /// Validate a requested size against `[1, 4096]`.
    pub fn new(value: i64) -> Result<Self> {
        if (MIN_SIZE as i64..=MAX_SIZE as i64).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(Error::InvalidArgument(format!(
                "size must be between {MIN_SIZE} and {MAX_SIZE} pixels, got {value}"
            )))
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional color and size overrides for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOptions {
    pub color: Option<String>,
    pub size: Option<IconSize>,
}

impl StyleOptions {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.size.is_none()
    }
}

/// Rewrite `svg` with the requested color and size.
///
/// With the `fill` weight only `fill` attributes take the color; every other
/// weight recolors both `fill` and `stroke`.
pub fn apply_style(svg: &str, weight: Weight, options: &StyleOptions) -> String {
    let mut out = svg.to_string();

    if let Some(color) = options.color.as_deref() {
        out = replace_all_attr(&FILL_ATTR, &out, "fill", color);
        if weight.colors_stroke() {
            out = replace_all_attr(&STROKE_ATTR, &out, "stroke", color);
        }
    }

    if let Some(size) = options.size {
        out = apply_size(&out, size);
    }

    out
}

fn replace_all_attr(pattern: &Regex, svg: &str, attr: &str, value: &str) -> String {
    pattern
        .replace_all(svg, |caps: &Captures| format!("{}{attr}=\"{value}\"", &caps[1]))
        .into_owned()
}

fn replace_first_attr<'a>(pattern: &Regex, svg: &'a str, attr: &str, value: &str) -> Cow<'a, str> {
    pattern.replace(svg, |caps: &Captures| format!("{}{attr}=\"{value}\"", &caps[1]))
}

fn apply_size(svg: &str, size: IconSize) -> String {
    let value = size.to_string();

    if WIDTH_ATTR.is_match(svg) {
        let resized = replace_first_attr(&WIDTH_ATTR, svg, "width", &value);
        return replace_first_attr(&HEIGHT_ATTR, &resized, "height", &value).into_owned();
    }

    SVG_START_TAG
        .replace(svg, |caps: &Captures| {
            format!(
                "{} width=\"{value}\" height=\"{value}\"{}",
                &caps[1], &caps[2]
            )
        })
        .into_owned()
}
