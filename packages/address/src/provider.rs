//! Typed adapter for the reverse-geocoding provider payload.
//!
//! The provider returns a ranked feature list where each feature carries a
//! `place_type` category array, a short `text` name, an optional free-text
//! `place_name` line, and a `context` chain of ancestor tags whose ids are
//! `"<category>.<subid>"`. Categories used downstream: `region`,
//! `district`, `place`, `locality`, `neighborhood`, `address`. Every field
//! is optional on the wire; missing pieces deserialize to empty defaults
//! instead of failing the whole response.

use serde::Deserialize;

/// Top-level reverse-geocoding response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    /// Ranked place features, most specific first.
    #[serde(default)]
    pub features: Vec<PlaceFeature>,
}

/// One ranked place feature.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceFeature {
    /// Categories this feature belongs to (usually one).
    #[serde(default)]
    pub place_type: Vec<String>,
    /// Short display name, e.g. "中野区".
    #[serde(default)]
    pub text: String,
    /// Full free-text address line, e.g. "東京都中野区弥生町３丁目１３番".
    #[serde(default)]
    pub place_name: Option<String>,
    /// Ancestor tags from coarser administrative levels.
    #[serde(default)]
    pub context: Vec<ContextEntry>,
}

impl PlaceFeature {
    /// Returns `true` when this feature carries the given category.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.place_type.iter().any(|t| t == category)
    }

    /// The free-text line for address features, falling back to `text`.
    #[must_use]
    pub fn free_text_line(&self) -> &str {
        self.place_name.as_deref().unwrap_or(&self.text)
    }
}

/// One ancestor tag in a feature's context chain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContextEntry {
    /// Tag id of the form `"<category>.<subid>"`.
    #[serde(default)]
    pub id: String,
    /// Display name for this ancestor.
    #[serde(default)]
    pub text: String,
}

impl ContextEntry {
    /// The category prefix of the tag id (empty when the id has no dot).
    #[must_use]
    pub fn category(&self) -> &str {
        self.id.split('.').next().unwrap_or("")
    }
}
