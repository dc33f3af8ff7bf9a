//! Administrative classification of a reverse-geocoding response.
//!
//! Providers are inconsistent about where a special ward (区) appears: it
//! may be tagged `locality` or `district`, and for some municipalities the
//! prefecture name repeats at the `place` level. The precedence rules in
//! [`classify_city_town`] normalize all observed shapes into a single
//! prefecture / city-or-ward / town-or-block triple. A category missing
//! upstream simply propagates `None`; resolution never fails.

use photo_map_spatial_models::AdminAddress;

use crate::normalize::normalize_chome;
use crate::provider::PlaceFeature;

/// First-seen names per category, collected from the ranked feature list
/// and back-filled from context chains.
#[derive(Debug, Default)]
struct CategorySlots {
    region: Option<String>,
    district: Option<String>,
    place: Option<String>,
    locality: Option<String>,
    neighborhood: Option<String>,
    /// Free-text line of the first address-category feature.
    address_line: Option<String>,
}

impl CategorySlots {
    fn slot(&mut self, category: &str) -> Option<&mut Option<String>> {
        match category {
            "region" => Some(&mut self.region),
            "district" => Some(&mut self.district),
            "place" => Some(&mut self.place),
            "locality" => Some(&mut self.locality),
            "neighborhood" => Some(&mut self.neighborhood),
            _ => None,
        }
    }

    fn fill(&mut self, category: &str, name: &str) {
        if name.is_empty() {
            return;
        }
        if let Some(slot) = self.slot(category)
            && slot.is_none()
        {
            *slot = Some(name.to_string());
        }
    }
}

/// Resolves a ranked provider feature list into an [`AdminAddress`].
///
/// A fully unresolved `{None, None, None}` address is valid output.
#[must_use]
pub fn resolve(features: &[PlaceFeature]) -> AdminAddress {
    let mut slots = CategorySlots::default();

    // First-seen name per category from the primary feature list.
    for feature in features {
        for category in &feature.place_type {
            slots.fill(category, &feature.text);
        }
        if feature.has_category("address") && slots.address_line.is_none() {
            let line = feature.free_text_line();
            if !line.is_empty() {
                slots.address_line = Some(line.to_string());
            }
        }
    }

    // Back-fill still-missing categories from context chains, never
    // overwriting anything the primary pass found.
    for feature in features {
        for entry in &feature.context {
            slots.fill(entry.category(), &entry.text);
        }
    }

    let chome = slots
        .address_line
        .as_deref()
        .map(normalize_chome)
        .filter(|c| c.contains("丁目"));

    let prefecture = slots.region.clone();
    let (city, mut town) = classify_city_town(&slots, chome);

    if town == city {
        town = None;
    }

    AdminAddress {
        prefecture,
        city,
        town,
    }
}

/// Ward/city precedence rules, in order:
///
/// a. a 区-suffixed `locality` is the city; town from neighborhood/chome.
/// b. a 区-suffixed `district` is the city; town may also fall back to
///    the locality.
/// c. a `place` distinct from the region is the city.
/// d. `place` repeating the region with a locality present: the locality
///    is the city (prefecture-level municipalities).
/// e. otherwise the first of place/district/locality is the city.
fn classify_city_town(
    slots: &CategorySlots,
    chome: Option<String>,
) -> (Option<String>, Option<String>) {
    let is_ward = |name: &Option<String>| {
        name.as_deref().is_some_and(|n| n.ends_with('区'))
    };

    if is_ward(&slots.locality) {
        let town = slots.neighborhood.clone().or(chome);
        return (slots.locality.clone(), town);
    }

    if is_ward(&slots.district) {
        let town = slots
            .neighborhood
            .clone()
            .or(chome)
            .or_else(|| slots.locality.clone());
        return (slots.district.clone(), town);
    }

    if let Some(place) = &slots.place {
        if slots.region.as_deref() != Some(place.as_str()) {
            let town = slots
                .neighborhood
                .clone()
                .or(chome)
                .or_else(|| slots.locality.clone());
            return (Some(place.clone()), town);
        }
        if slots.locality.is_some() {
            let town = slots.neighborhood.clone().or(chome);
            return (slots.locality.clone(), town);
        }
    }

    let city = slots
        .place
        .clone()
        .or_else(|| slots.district.clone())
        .or_else(|| slots.locality.clone());
    let town = slots.neighborhood.clone().or(chome);
    (city, town)
}

#[cfg(test)]
mod tests {
    use crate::provider::ContextEntry;

    use super::*;

    fn feature(place_type: &[&str], text: &str) -> PlaceFeature {
        PlaceFeature {
            place_type: place_type.iter().map(ToString::to_string).collect(),
            text: text.to_string(),
            place_name: None,
            context: Vec::new(),
        }
    }

    fn context(category: &str, text: &str) -> ContextEntry {
        ContextEntry {
            id: format!("{category}.1"),
            text: text.to_string(),
        }
    }

    #[test]
    fn ward_locality_beats_place_region_fallback() {
        let features = vec![
            feature(&["locality"], "中野区"),
            feature(&["place"], "東京都"),
            feature(&["region"], "東京都"),
        ];
        let address = resolve(&features);
        assert_eq!(address.prefecture.as_deref(), Some("東京都"));
        assert_eq!(address.city.as_deref(), Some("中野区"));
    }

    #[test]
    fn ward_district_with_locality_town_fallback() {
        let features = vec![
            feature(&["district"], "港区"),
            feature(&["locality"], "芝浦"),
            feature(&["region"], "東京都"),
        ];
        let address = resolve(&features);
        assert_eq!(address.city.as_deref(), Some("港区"));
        assert_eq!(address.town.as_deref(), Some("芝浦"));
    }

    #[test]
    fn distinct_place_becomes_city() {
        let features = vec![
            feature(&["neighborhood"], "本町"),
            feature(&["place"], "横浜市"),
            feature(&["region"], "神奈川県"),
        ];
        let address = resolve(&features);
        assert_eq!(address.prefecture.as_deref(), Some("神奈川県"));
        assert_eq!(address.city.as_deref(), Some("横浜市"));
        assert_eq!(address.town.as_deref(), Some("本町"));
    }

    #[test]
    fn place_repeating_region_falls_to_locality() {
        let features = vec![
            feature(&["place"], "京都府"),
            feature(&["locality"], "京都市"),
            feature(&["region"], "京都府"),
        ];
        let address = resolve(&features);
        assert_eq!(address.city.as_deref(), Some("京都市"));
    }

    #[test]
    fn chome_from_address_line_fills_town() {
        let mut address_feature = feature(&["address"], "弥生町３丁目");
        address_feature.place_name = Some("弥生町３丁目１３番".to_string());
        let features = vec![
            address_feature,
            feature(&["locality"], "中野区"),
            feature(&["region"], "東京都"),
        ];
        let address = resolve(&features);
        assert_eq!(address.city.as_deref(), Some("中野区"));
        assert_eq!(address.town.as_deref(), Some("弥生町3丁目"));
    }

    #[test]
    fn context_back_fills_missing_region() {
        let features = vec![PlaceFeature {
            place_type: vec!["locality".to_string()],
            text: "中野区".to_string(),
            place_name: None,
            context: vec![context("region", "東京都")],
        }];
        let address = resolve(&features);
        assert_eq!(address.prefecture.as_deref(), Some("東京都"));
        assert_eq!(address.city.as_deref(), Some("中野区"));
    }

    #[test]
    fn context_never_overwrites_primary() {
        let features = vec![
            feature(&["region"], "東京都"),
            PlaceFeature {
                place_type: vec!["locality".to_string()],
                text: "中野区".to_string(),
                place_name: None,
                context: vec![context("region", "埼玉県")],
            },
        ];
        let address = resolve(&features);
        assert_eq!(address.prefecture.as_deref(), Some("東京都"));
    }

    #[test]
    fn town_equal_to_city_is_nulled() {
        let features = vec![
            feature(&["locality"], "府中市"),
            feature(&["neighborhood"], "府中市"),
            feature(&["region"], "東京都"),
        ];
        let address = resolve(&features);
        assert_eq!(address.city.as_deref(), Some("府中市"));
        assert_eq!(address.town, None);
    }

    #[test]
    fn empty_input_resolves_to_empty_address() {
        let address = resolve(&[]);
        assert!(address.is_empty());
    }

    #[test]
    fn first_seen_name_wins_within_category() {
        let features = vec![
            feature(&["neighborhood"], "弥生町"),
            feature(&["neighborhood"], "本町"),
            feature(&["place"], "中野区"),
            feature(&["region"], "東京都"),
        ];
        let address = resolve(&features);
        assert_eq!(address.town.as_deref(), Some("弥生町"));
    }
}
