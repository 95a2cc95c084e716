// src/domain/property.rs

use serde::Serialize;
use std::fmt;

/// A point on the map, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Where a listing sits in its sale lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListingStatus {
    ForSale,
    Pending,
    Sold,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 3] = [
        ListingStatus::ForSale,
        ListingStatus::Pending,
        ListingStatus::Sold,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::Pending => "Pending",
            ListingStatus::Sold => "Sold",
        }
    }

    /// Value used in query strings and form options.
    pub fn slug(self) -> &'static str {
        match self {
            ListingStatus::ForSale => "for-sale",
            ListingStatus::Pending => "pending",
            ListingStatus::Sold => "sold",
        }
    }

    /// Accepts the slug, the label, and "active" (the IDX name for for-sale).
    pub fn from_slug(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "for-sale" | "for sale" | "active" => Some(ListingStatus::ForSale),
            "pending" => Some(ListingStatus::Pending),
            "sold" => Some(ListingStatus::Sold),
            _ => None,
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyCategory {
    SingleFamily,
    Condo,
    Townhouse,
    Estate,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 4] = [
        PropertyCategory::SingleFamily,
        PropertyCategory::Condo,
        PropertyCategory::Townhouse,
        PropertyCategory::Estate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyCategory::SingleFamily => "Single Family",
            PropertyCategory::Condo => "Condo",
            PropertyCategory::Townhouse => "Townhouse",
            PropertyCategory::Estate => "Estate",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            PropertyCategory::SingleFamily => "single-family",
            PropertyCategory::Condo => "condo",
            PropertyCategory::Townhouse => "townhouse",
            PropertyCategory::Estate => "estate",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == value || c.label().to_ascii_lowercase() == value)
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single listing on the search page.
/// Records are produced once by the catalog generator and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: String,

    // Address fields
    pub address: String,
    pub city: String,
    pub region_code: String,
    pub postal_code: String,

    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,

    pub coordinates: Coordinates,
    pub status: ListingStatus,
    pub category: PropertyCategory,
    pub image_url: String,
}

impl PropertyRecord {
    /// "1000 Lakeshore Dr, Orlando, FL 32801"
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.region_code, self.postal_code
        )
    }
}
