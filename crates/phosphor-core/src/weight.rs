//! Icon weights
//!
//! Phosphor ships every icon in six visual styles. The weight decides both
//! the upstream directory/filename of the asset and how a color is applied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A named visual style variant of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Thin,
    Light,
    #[default]
    Regular,
    Bold,
    Fill,
    Duotone,
}

impl Weight {
    /// Every weight, in the order Phosphor documents them.
    pub const ALL: [Weight; 6] = [
        Weight::Thin,
        Weight::Light,
        Weight::Regular,
        Weight::Bold,
        Weight::Fill,
        Weight::Duotone,
    ];

    /// Lowercase name, also the upstream directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Thin => "thin",
            Weight::Light => "light",
            Weight::Regular => "regular",
            Weight::Bold => "bold",
            Weight::Fill => "fill",
            Weight::Duotone => "duotone",
        }
    }

    /// Filename suffix appended to the icon name; empty for `regular`.
    pub fn file_suffix(&self) -> String {
        match self {
            Weight::Regular => String::new(),
            other => format!("-{}", other.as_str()),
        }
    }

    /// Whether a requested color is applied to `stroke` attributes too.
    ///
    /// Only the solid `fill` weight leaves strokes untouched.
    pub fn colors_stroke(&self) -> bool {
        !matches!(self, Weight::Fill)
    }

    /// One-line description used by the weights resource.
    pub fn description(&self) -> &'static str {
        match self {
            Weight::Thin => "Thinnest 1px-equivalent strokes, for large display sizes",
            Weight::Light => "Light strokes, a softer take on regular",
            Weight::Regular => "Standard stroke weight, the default outline style",
            Weight::Bold => "Heavy strokes that stay legible at small sizes",
            Weight::Fill => "Solid filled shapes instead of outlines",
            Weight::Duotone => "Outline plus a translucent secondary fill layer",
        }
    }
}

impl FromStr for Weight {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Weight::ALL
            .into_iter()
            .find(|w| w.as_str() == needle)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown weight \"{}\", expected one of: {}",
                    s,
                    Weight::ALL.map(|w| w.as_str()).join(", ")
                ))
            })
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
