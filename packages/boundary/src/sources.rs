//! Compile-time registry of boundary source configurations.
//!
//! Each administrative level has one polygon dataset, defined in a TOML
//! file under `sources/` and embedded at compile time. The city and town
//! endpoints are keyed by a two-digit prefecture code (see
//! [`crate::prefcode`]); the prefecture endpoint is a single nationwide
//! file. `name_keys` lists the feature property names to try, in order,
//! when extracting an area name from heterogeneous `GeoJSON` schemas.

use photo_map_spatial_models::AdminLevel;
use serde::Deserialize;

/// A boundary source configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundarySource {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Administrative level this source covers.
    pub level: AdminLevel,
    /// Download URL; `{code}` expands to a two-digit prefecture code.
    pub url_template: String,
    /// Feature property names carrying the area name, in fallback order.
    pub name_keys: Vec<String>,
}

impl BoundarySource {
    /// Expands the URL template for one region code.
    #[must_use]
    pub fn url_for_region(&self, code: &str) -> String {
        self.url_template.replace("{code}", code)
    }

    /// Returns `true` when the endpoint is keyed per region code.
    #[must_use]
    pub fn is_regional(&self) -> bool {
        self.url_template.contains("{code}")
    }
}

const SOURCE_TOMLS: &[(&str, &str)] = &[
    ("prefecture", include_str!("../sources/prefecture.toml")),
    ("city", include_str!("../sources/city.toml")),
    ("town", include_str!("../sources/town.toml")),
];

/// Returns all boundary source configurations.
///
/// # Panics
///
/// Panics if any embedded TOML is malformed (a compile-time guarantee in
/// practice since the configs ship with the crate).
#[must_use]
pub fn all_sources() -> Vec<BoundarySource> {
    SOURCE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse boundary source '{name}': {e}"))
        })
        .collect()
}

/// Returns the source configuration for one administrative level.
#[must_use]
pub fn source_for_level(level: AdminLevel) -> BoundarySource {
    all_sources()
        .into_iter()
        .find(|s| s.level == level)
        .unwrap_or_else(|| panic!("No boundary source configured for level {level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_all_sources() {
        assert_eq!(all_sources().len(), 3);
    }

    #[test]
    fn every_level_has_a_source() {
        for level in [AdminLevel::Prefecture, AdminLevel::City, AdminLevel::Town] {
            let source = source_for_level(level);
            assert_eq!(source.level, level);
            assert!(!source.url_template.is_empty());
            assert!(!source.name_keys.is_empty());
        }
    }

    #[test]
    fn regional_templates_expand_the_code() {
        let source = source_for_level(AdminLevel::City);
        assert!(source.is_regional());
        let url = source.url_for_region("13");
        assert!(url.contains("13"));
        assert!(!url.contains("{code}"));
    }

    #[test]
    fn prefecture_source_is_nationwide() {
        let source = source_for_level(AdminLevel::Prefecture);
        assert!(!source.is_regional());
    }
}
