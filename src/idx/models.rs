// src/idx/models.rs
//
// The IDX API answers with different field names depending on the endpoint
// and feed (camelCase, RESO PascalCase, short aliases). Everything is folded
// into one `IdxListing` here.

use serde::Serialize;
use serde_json::Value;

/// A listing as returned by the IDX API, normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdxListing {
    pub listing_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft: u32,
    pub acres: f64,
    pub photo_count: u32,
    pub photo_url: String,
    pub remarks: String,
    pub property_type: String,
    pub status: String,
    pub listing_agent_id: String,
    pub listing_office_id: String,
    pub listing_date: String,
    pub modified_date: String,
}

/// Search filters understood by `/clients/listings`. Empty fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct IdxSearchParams {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_bedrooms: Option<u32>,
    pub max_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub max_bathrooms: Option<u32>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl IdxSearchParams {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let text_fields = [
            ("city", &self.city),
            ("state", &self.state),
            ("zipcode", &self.zipcode),
        ];
        for (key, value) in text_fields {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_string()));
            }
        }

        if let Some(v) = self.min_price {
            pairs.push(("minprice", v.to_string()));
        }
        if let Some(v) = self.max_price {
            pairs.push(("maxprice", v.to_string()));
        }

        let rooms = [
            ("minbedrooms", self.min_bedrooms),
            ("maxbedrooms", self.max_bedrooms),
            ("minbathrooms", self.min_bathrooms),
            ("maxbathrooms", self.max_bathrooms),
        ];
        for (key, value) in rooms {
            if let Some(v) = value {
                pairs.push((key, v.to_string()));
            }
        }

        if let Some(v) = self.property_type.as_deref().filter(|v| !v.is_empty()) {
            pairs.push(("propertyType", v.to_string()));
        }
        if let Some(v) = self.status.as_deref().filter(|v| !v.is_empty()) {
            pairs.push(("status", v.to_string()));
        }

        pairs.push(("page", self.page.unwrap_or(1).to_string()));
        pairs.push(("per", self.per_page.unwrap_or(12).to_string()));
        pairs
    }
}

/// Missing, null, false, zero and "" all count as absent, so the next alias
/// gets a chance.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn pick<'a>(data: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| data.get(*k))
        .find(|v| is_present(v))
}

fn text(data: &Value, keys: &[&str], default: &str) -> String {
    match pick(data, keys) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => default.to_string(),
    }
}

fn number(data: &Value, keys: &[&str]) -> f64 {
    let parsed = match pick(data, keys) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(['$', ','], "").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite() && *f >= 0.0).unwrap_or(0.0)
}

fn count(data: &Value, keys: &[&str]) -> u32 {
    number(data, keys).trunc().min(f64::from(u32::MAX)) as u32
}

pub fn normalize_listing(data: &Value) -> IdxListing {
    IdxListing {
        listing_id: text(data, &["listingID", "ListingId", "id"], ""),
        address: text(data, &["address", "Address", "UnparsedAddress"], ""),
        city: text(data, &["city", "City"], ""),
        state: text(data, &["state", "StateOrProvince"], "FL"),
        zipcode: text(data, &["zipcode", "PostalCode"], ""),
        price: number(data, &["price", "ListPrice", "CurrentPrice"]),
        bedrooms: count(data, &["bedrooms", "BedroomsTotal", "Beds"]),
        bathrooms: number(data, &["bathrooms", "BathroomsTotalInteger", "Baths"]),
        sqft: count(data, &["sqft", "LivingArea", "SqFt"]),
        acres: number(data, &["acres", "LotSizeAcres"]),
        photo_count: count(data, &["photoCount", "PhotoCount"]),
        photo_url: text(data, &["photoUrl", "PhotoUrl", "image"], ""),
        remarks: text(data, &["remarks", "PublicRemarks", "description"], ""),
        property_type: text(data, &["propertyType", "PropertyType", "Type"], "Residential"),
        status: text(data, &["status", "StandardStatus", "MlsStatus"], "Active"),
        listing_agent_id: text(data, &["listingAgentID", "ListAgentMlsId"], ""),
        listing_office_id: text(data, &["listingOfficeID", "ListOfficeMlsId"], ""),
        listing_date: text(data, &["listingDate", "OnMarketDate", "ListingDate"], ""),
        modified_date: text(data, &["modifiedDate", "ModificationTimestamp"], ""),
    }
}

/// Listings out of a response body: a bare array, or an object wrapping one
/// under `data` or `results`. Any other shape yields nothing.
pub fn listings_from_body(body: &Value) -> Vec<IdxListing> {
    let items = match body {
        Value::Array(items) => Some(items),
        Value::Object(_) => ["data", "results"]
            .iter()
            .find_map(|k| body.get(*k).and_then(Value::as_array)),
        _ => None,
    };

    items
        .map(|items| items.iter().map(normalize_listing).collect())
        .unwrap_or_default()
}
