//! Icon name sanitizing
//!
//! Icon names end up inside an upstream URL path, so they are restricted to
//! lowercase ASCII letters, digits and hyphens. Names carrying anything else
//! are rejected outright instead of being cleaned, so a typo can never turn
//! into a request for a different asset.

use std::fmt;

use serde::Serialize;

use crate::{Error, Result};

/// Normalize a raw name: trim, lowercase, and drop every character outside
/// `[a-z0-9-]`.
///
/// The result may be empty. Applying `sanitize` twice yields the same value.
pub fn sanitize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
        .collect()
}

/// A validated kebab-case icon identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconName(String);

impl IconName {
    /// Validate a user-supplied name.
    ///
    /// Surrounding whitespace and upper case are accepted. Any other
    /// character outside `[a-z0-9-]` fails with [`Error::InvalidArgument`],
    /// as does a name that is empty after trimming.
    pub fn parse(input: &str) -> Result<Self> {
        let lowered = input.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(Error::InvalidArgument(
                "icon name must not be empty".to_string(),
            ));
        }

        let sanitized = sanitize(&lowered);
        if sanitized != lowered {
            return Err(Error::InvalidArgument(format!(
                "icon name \"{}\" contains invalid characters; use lowercase letters, digits and hyphens only (e.g. \"arrow-left\")",
                input.trim()
            )));
        }

        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
