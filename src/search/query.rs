// src/search/query.rs
//
// Mirrors filter criteria to and from the search page's query string.
// Keys: city (or location), lp, hp, bd, ba, pt, status.

use super::filter::{FilterCriteria, PRICE_CEILING};
use crate::domain::{ListingStatus, PropertyCategory};
use std::collections::HashMap;
use url::form_urlencoded;

const KEY_CITY: &str = "city";
const KEY_LOCATION: &str = "location";
const KEY_MIN_PRICE: &str = "lp";
const KEY_MAX_PRICE: &str = "hp";
const KEY_BEDS: &str = "bd";
const KEY_BATHS: &str = "ba";
const KEY_TYPE: &str = "pt";
const KEY_STATUS: &str = "status";

// Page state carried next to the criteria, never written by `to_query`.
const KEY_SHOWN: &str = "shown";
const KEY_SELECTED: &str = "selected";

/// Decodes a raw query string. Later duplicates win.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

impl FilterCriteria {
    /// Seeds criteria from a query string. Missing, empty, or unparseable
    /// values fall back to the default for that field.
    pub fn from_query(query: &str) -> Self {
        Self::from_params(&parse_query(query))
    }

    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };
        let defaults = FilterCriteria::default();

        FilterCriteria {
            location: text(KEY_CITY)
                .or_else(|| text(KEY_LOCATION))
                .unwrap_or_default()
                .to_string(),
            min_price: text(KEY_MIN_PRICE)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_price),
            max_price: text(KEY_MAX_PRICE)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_price),
            min_bedrooms: text(KEY_BEDS)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_bedrooms),
            min_bathrooms: text(KEY_BATHS)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_bathrooms),
            property_type: text(KEY_TYPE).and_then(PropertyCategory::from_slug),
            status: text(KEY_STATUS).and_then(ListingStatus::from_slug),
        }
    }

    /// Serializes the non-default criteria; defaults are left out entirely.
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        let location = self.location.trim();
        if !location.is_empty() {
            out.append_pair(KEY_CITY, location);
        }
        if self.min_price != 0 {
            out.append_pair(KEY_MIN_PRICE, &self.min_price.to_string());
        }
        if self.max_price != PRICE_CEILING {
            out.append_pair(KEY_MAX_PRICE, &self.max_price.to_string());
        }
        if self.min_bedrooms != 0 {
            out.append_pair(KEY_BEDS, &self.min_bedrooms.to_string());
        }
        if self.min_bathrooms != 0 {
            out.append_pair(KEY_BATHS, &self.min_bathrooms.to_string());
        }
        if let Some(t) = self.property_type {
            out.append_pair(KEY_TYPE, t.slug());
        }
        if let Some(s) = self.status {
            out.append_pair(KEY_STATUS, s.slug());
        }
        out.finish()
    }
}

/// Result-window size and selected record, read alongside the criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub shown: Option<usize>,
    pub selected: Option<String>,
}

impl PageParams {
    pub fn from_query(query: &str) -> Self {
        Self::from_params(&parse_query(query))
    }

    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            shown: params.get(KEY_SHOWN).and_then(|v| v.trim().parse().ok()),
            selected: params
                .get(KEY_SELECTED)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }
}

/// `/search` link for `criteria`, plus optional page state.
pub fn search_href(criteria: &FilterCriteria, shown: Option<usize>, selected: Option<&str>) -> String {
    let mut out = form_urlencoded::Serializer::for_suffix(criteria.to_query(), 0);
    if let Some(shown) = shown {
        out.append_pair(KEY_SHOWN, &shown.to_string());
    }
    if let Some(id) = selected {
        out.append_pair(KEY_SELECTED, id);
    }

    let query = out.finish();
    if query.is_empty() {
        "/search".to_string()
    } else {
        format!("/search?{query}")
    }
}
