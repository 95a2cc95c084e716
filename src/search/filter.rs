// src/search/filter.rs

use crate::domain::{ListingStatus, PropertyCategory, PropertyRecord};
use crate::geos::region_name;

/// "No max" upper price bound.
pub const PRICE_CEILING: u64 = 999_999_999;

/// What the visitor is searching for. Every field's default means "any".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    pub location: String,
    pub min_price: u64,
    pub max_price: u64,
    pub min_bedrooms: u32,
    pub min_bathrooms: u32,
    pub property_type: Option<PropertyCategory>,
    pub status: Option<ListingStatus>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            location: String::new(),
            min_price: 0,
            max_price: PRICE_CEILING,
            min_bedrooms: 0,
            min_bathrooms: 0,
            property_type: None,
            status: None,
        }
    }
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of criteria that differ from their default.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.location.trim().is_empty(),
            self.min_price != 0,
            self.max_price != PRICE_CEILING,
            self.min_bedrooms != 0,
            self.min_bathrooms != 0,
            self.property_type.is_some(),
            self.status.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.matches_location(record)
            && (self.min_price..=self.max_price).contains(&record.price)
            && record.bedrooms >= self.min_bedrooms
            && record.bathrooms >= self.min_bathrooms
            && self.property_type.map_or(true, |t| t == record.category)
            && self.status.map_or(true, |s| s == record.status)
    }

    fn matches_location(&self, record: &PropertyRecord) -> bool {
        let term = self.location.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        record.address.to_lowercase().contains(&term)
            || record.city.to_lowercase().contains(&term)
            || record.postal_code.to_lowercase().contains(&term)
            || record.region_code.eq_ignore_ascii_case(&term)
            || region_name(&record.region_code)
                .map_or(false, |name| name.to_lowercase().contains(&term))
    }
}

/// The records matching `criteria`, in source order.
pub fn filter_records<'a>(
    records: &'a [PropertyRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PropertyRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Positions of the records matching `criteria`, in source order.
pub fn matching_indices(records: &[PropertyRecord], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(i, _)| i)
        .collect()
}
