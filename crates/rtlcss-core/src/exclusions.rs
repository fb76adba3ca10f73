//! Per-selector exclusion table
//!
//! Maps a selector to the set of bare property names that must never be
//! mirrored for that selector. The textual format is one `property:selector`
//! pair per line; blank lines and `#` comments are skipped.

use crate::error::RtlcssError;
use crate::result::Result;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Selector → set of excluded bare property names
#[derive(Debug, Clone, Default)]
pub struct ExclusionTable {
    map: HashMap<String, HashSet<String>>,
}

impl ExclusionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude a property for a selector
    pub fn add(&mut self, selector: impl Into<String>, property: impl Into<String>) {
        self.map
            .entry(selector.into())
            .or_default()
            .insert(property.into());
    }

    /// Check whether a bare property is excluded for a selector
    ///
    /// A directional longhand is also excluded when its shorthand base is:
    /// excluding `margin` for a selector suppresses `margin-left` and
    /// `margin-right` overrides there, and excluding `border-radius` covers
    /// the four physical corner longhands.
    pub fn is_excluded(&self, selector: &str, property: &str) -> bool {
        let Some(set) = self.map.get(selector) else {
            return false;
        };
        if set.contains(property) {
            return true;
        }
        if property.starts_with("border-") && property.ends_with("-radius") {
            return set.contains("border-radius");
        }
        if property.contains("-left") || property.contains("-right") {
            let base = property.replace("-left", "").replace("-right", "");
            return set.contains(&base);
        }
        false
    }

    /// Parse the line-oriented exclusion format
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((property, selector)) = line.split_once(':') else {
                return Err(RtlcssError::exclusions_error(format!(
                    "line {}: expected 'property:selector', got {:?}",
                    number + 1,
                    line
                )));
            };
            table.add(selector.trim(), property.trim());
        }
        Ok(table)
    }

    /// Load and parse an exclusion list from a file
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|err| RtlcssError::io_error(path, err))?;
        let table = Self::parse(&text)?;
        debug!("loaded {} exclusion selectors from {}", table.map.len(), path.display());
        Ok(table)
    }
}
