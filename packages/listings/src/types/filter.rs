//! Filter state and its query-parameter mapping.
//!
//! A filter is a set of optional constraints. An absent key means "no
//! constraint", never "match empty". The remote API treats a missing
//! parameter the same way.

use serde::{Deserialize, Serialize};

/// Applied filter constraints for a listing query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// "apartment", "house", "commercial", "land"
    pub property_type: Option<String>,
    /// "sale", "rent", "daily_rent"
    pub listing_type: Option<String>,
    /// Region/district identifiers; empty means unconstrained.
    #[serde(default)]
    pub regions: Vec<String>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub rooms_min: Option<u32>,
    pub rooms_max: Option<u32>,
    /// Free-text search term.
    pub search: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize into flat query pairs for the remote API.
    ///
    /// Every defined key becomes exactly one parameter; `regions` repeats
    /// its key once per value.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(ref value) = self.property_type {
            pairs.push(("propertyType".to_string(), value.clone()));
        }
        if let Some(ref value) = self.listing_type {
            pairs.push(("listingType".to_string(), value.clone()));
        }
        for region in &self.regions {
            pairs.push(("region".to_string(), region.clone()));
        }
        if let Some(value) = self.price_min {
            pairs.push(("priceMin".to_string(), value.to_string()));
        }
        if let Some(value) = self.price_max {
            pairs.push(("priceMax".to_string(), value.to_string()));
        }
        if let Some(value) = self.area_min {
            pairs.push(("areaMin".to_string(), value.to_string()));
        }
        if let Some(value) = self.area_max {
            pairs.push(("areaMax".to_string(), value.to_string()));
        }
        if let Some(value) = self.rooms_min {
            pairs.push(("roomsMin".to_string(), value.to_string()));
        }
        if let Some(value) = self.rooms_max {
            pairs.push(("roomsMax".to_string(), value.to_string()));
        }
        if let Some(ref value) = self.search {
            pairs.push(("search".to_string(), value.clone()));
        }
        pairs
    }

    /// Seed a filter from a landing URL's query string.
    ///
    /// Unknown keys and unparsable numeric values are ignored, so a stale
    /// or hand-edited URL degrades to a looser filter instead of an error.
    pub fn from_query_str(query: &str) -> Self {
        let mut filter = FilterState::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "propertyType" => filter.property_type = non_empty(&value),
                "listingType" => filter.listing_type = non_empty(&value),
                "region" => {
                    if !value.is_empty() {
                        filter.regions.push(value.to_string());
                    }
                }
                "priceMin" => filter.price_min = value.parse().ok(),
                "priceMax" => filter.price_max = value.parse().ok(),
                "areaMin" => filter.area_min = value.parse().ok(),
                "areaMax" => filter.area_max = value.parse().ok(),
                "roomsMin" => filter.rooms_min = value.parse().ok(),
                "roomsMax" => filter.rooms_max = value.parse().ok(),
                "search" => filter.search = non_empty(&value),
                _ => {}
            }
        }
        filter
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ============================================================================
// Draft filter (two-phase edit)
// ============================================================================

/// An in-progress filter edit, distinct from the applied filter.
///
/// The filter panel mutates a draft while the user types; nothing reaches
/// the pipeline until `apply` hands the finished state over. Discarding
/// the draft leaves the applied filter untouched.
#[derive(Debug, Clone, Default)]
pub struct FilterDraft {
    inner: FilterState,
}

impl FilterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing from the currently applied filter.
    pub fn from_applied(applied: &FilterState) -> Self {
        Self {
            inner: applied.clone(),
        }
    }

    pub fn set_property_type(&mut self, value: Option<String>) -> &mut Self {
        self.inner.property_type = value;
        self
    }

    pub fn set_listing_type(&mut self, value: Option<String>) -> &mut Self {
        self.inner.listing_type = value;
        self
    }

    pub fn set_regions(&mut self, regions: Vec<String>) -> &mut Self {
        self.inner.regions = regions;
        self
    }

    pub fn set_price_range(&mut self, min: Option<u64>, max: Option<u64>) -> &mut Self {
        self.inner.price_min = min;
        self.inner.price_max = max;
        self
    }

    pub fn set_area_range(&mut self, min: Option<f64>, max: Option<f64>) -> &mut Self {
        self.inner.area_min = min;
        self.inner.area_max = max;
        self
    }

    pub fn set_rooms_range(&mut self, min: Option<u32>, max: Option<u32>) -> &mut Self {
        self.inner.rooms_min = min;
        self.inner.rooms_max = max;
        self
    }

    pub fn set_search(&mut self, value: Option<String>) -> &mut Self {
        self.inner.search = value;
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.inner = FilterState::new();
        self
    }

    /// Commit the draft, producing the filter to apply.
    pub fn apply(self) -> FilterState {
        self.inner
    }

    /// Peek at the draft state without committing.
    pub fn current(&self) -> &FilterState {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_serializes_to_no_pairs() {
        assert!(FilterState::new().to_query_pairs().is_empty());
    }

    #[test]
    fn test_regions_serialize_as_repeated_keys() {
        let filter = FilterState {
            regions: vec!["kentron".to_string(), "arabkir".to_string()],
            ..Default::default()
        };
        let pairs = filter.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("region".to_string(), "kentron".to_string()),
                ("region".to_string(), "arabkir".to_string()),
            ]
        );
    }

    #[test]
    fn test_defined_keys_become_single_pairs() {
        let filter = FilterState {
            property_type: Some("apartment".to_string()),
            price_min: Some(50_000),
            price_max: Some(120_000),
            rooms_min: Some(2),
            ..Default::default()
        };
        let pairs = filter.to_query_pairs();
        assert_eq!(pairs.len(), 4);
        assert!(pairs.contains(&("propertyType".to_string(), "apartment".to_string())));
        assert!(pairs.contains(&("priceMin".to_string(), "50000".to_string())));
    }

    #[test]
    fn test_from_query_str_round_trip() {
        let filter =
            FilterState::from_query_str("propertyType=house&region=kentron&region=avan&roomsMin=3");
        assert_eq!(filter.property_type.as_deref(), Some("house"));
        assert_eq!(filter.regions, vec!["kentron", "avan"]);
        assert_eq!(filter.rooms_min, Some(3));
    }

    #[test]
    fn test_from_query_str_ignores_junk() {
        let filter = FilterState::from_query_str("priceMin=cheap&utm_source=ad&propertyType=");
        assert_eq!(filter.price_min, None);
        assert_eq!(filter.property_type, None);
    }

    #[test]
    fn test_draft_does_not_touch_applied_until_commit() {
        let applied = FilterState {
            property_type: Some("apartment".to_string()),
            ..Default::default()
        };
        let mut draft = FilterDraft::from_applied(&applied);
        draft
            .set_property_type(Some("house".to_string()))
            .set_price_range(Some(10_000), None);

        assert_eq!(applied.property_type.as_deref(), Some("apartment"));

        let committed = draft.apply();
        assert_eq!(committed.property_type.as_deref(), Some("house"));
        assert_eq!(committed.price_min, Some(10_000));
    }
}
