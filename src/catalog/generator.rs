// src/catalog/generator.rs

use super::fixtures::{CITY_ANCHORS, PROPERTY_IMAGES, REGION_CODE, STREET_NAMES};
use super::Catalog;
use crate::domain::{Coordinates, ListingStatus, PropertyCategory, PropertyRecord};
use rand::Rng;

pub const CATALOG_SIZE: usize = 100;

/// Max distance, in degrees, between a record and its city anchor.
const COORD_JITTER: f64 = 0.05;

/// Builds the search page's listing collection.
///
/// The shape is fixed: record `i` always takes the same city, street, street
/// number, category and photo. Only price, rooms, area and the exact map
/// position come from `rng`, so a seeded rng reproduces a catalog exactly.
pub fn generate_catalog<R: Rng>(rng: &mut R) -> Catalog {
    let records = (0..CATALOG_SIZE)
        .map(|i| generate_record(rng, i))
        .collect::<Vec<_>>();

    Catalog::from_records(records)
}

fn generate_record<R: Rng>(rng: &mut R, i: usize) -> PropertyRecord {
    let anchor = &CITY_ANCHORS[i % CITY_ANCHORS.len()];
    let street = STREET_NAMES[i % STREET_NAMES.len()];
    let category = PropertyCategory::ALL[i % PropertyCategory::ALL.len()];
    let street_number = 1000 + i * 111;
    let number = i + 1;

    let price = 250_000 + rng.gen_range(0..40u64) * 10_000; // $250k-$640k
    let bedrooms = rng.gen_range(2..6);
    let bathrooms = rng.gen_range(2..5);
    let sqft = 1200 + rng.gen_range(0..20u32) * 100;

    let coordinates = Coordinates {
        lat: anchor.lat + rng.gen_range(-COORD_JITTER..COORD_JITTER),
        lng: anchor.lng + rng.gen_range(-COORD_JITTER..COORD_JITTER),
    };

    PropertyRecord {
        id: number.to_string(),
        address: format!("{street_number} {street}"),
        city: anchor.name.to_string(),
        region_code: REGION_CODE.to_string(),
        postal_code: anchor.postal_code.to_string(),
        price,
        bedrooms,
        bathrooms,
        sqft,
        coordinates,
        status: status_for(number),
        category,
        image_url: PROPERTY_IMAGES[i % PROPERTY_IMAGES.len()].to_string(),
    }
}

/// Status by 1-based record number. Pending is checked first, so numbers
/// divisible by both 10 and 15 (30, 60, 90) come out Pending, not Sold.
pub fn status_for(number: usize) -> ListingStatus {
    if number % 10 == 0 {
        ListingStatus::Pending
    } else if number % 15 == 0 {
        ListingStatus::Sold
    } else {
        ListingStatus::ForSale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn catalog(seed: u64) -> Catalog {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_catalog(&mut rng)
    }

    #[test]
    fn generates_one_hundred_unique_records() {
        let catalog = catalog(7);
        assert_eq!(catalog.len(), CATALOG_SIZE);

        let ids: HashSet<_> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), CATALOG_SIZE);
    }

    #[test]
    fn numeric_fields_stay_in_range() {
        for record in catalog(42).records() {
            assert!((250_000..650_000).contains(&record.price), "{record:?}");
            assert_eq!(record.price % 10_000, 0);
            assert!((2..6).contains(&record.bedrooms));
            assert!((2..5).contains(&record.bathrooms));
            assert!((1200..3200).contains(&record.sqft));
        }
    }

    #[test]
    fn coordinates_stay_near_their_city_anchor() {
        for (i, record) in catalog(3).records().iter().enumerate() {
            let anchor = &CITY_ANCHORS[i % CITY_ANCHORS.len()];
            assert_eq!(record.city, anchor.name);
            assert!((record.coordinates.lat - anchor.lat).abs() <= COORD_JITTER);
            assert!((record.coordinates.lng - anchor.lng).abs() <= COORD_JITTER);
        }
    }

    #[test]
    fn same_seed_same_catalog() {
        assert_eq!(catalog(99).records(), catalog(99).records());
    }

    #[test]
    fn shape_does_not_depend_on_rng() {
        let a = catalog(1);
        let b = catalog(2);
        for (x, y) in a.records().iter().zip(b.records()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.address, y.address);
            assert_eq!(x.status, y.status);
            assert_eq!(x.category, y.category);
        }
    }

    #[test]
    fn status_overlap_resolves_to_pending() {
        assert_eq!(status_for(10), ListingStatus::Pending);
        assert_eq!(status_for(15), ListingStatus::Sold);
        assert_eq!(status_for(30), ListingStatus::Pending);
        assert_eq!(status_for(45), ListingStatus::Sold);
        assert_eq!(status_for(90), ListingStatus::Pending);
        assert_eq!(status_for(7), ListingStatus::ForSale);

        let catalog = catalog(5);
        let pending = catalog
            .records()
            .iter()
            .filter(|r| r.status == ListingStatus::Pending)
            .count();
        let sold = catalog
            .records()
            .iter()
            .filter(|r| r.status == ListingStatus::Sold)
            .count();
        // 10..=100 step 10 -> 10 pending; 15,45,75 -> 3 sold
        assert_eq!(pending, 10);
        assert_eq!(sold, 3);
    }

    #[test]
    fn first_record_matches_fixed_shape() {
        let catalog = catalog(11);
        let first = &catalog.records()[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.address, "1000 Lakeshore Dr");
        assert_eq!(first.city, "Orlando");
        assert_eq!(first.postal_code, "32801");
        assert_eq!(first.region_code, "FL");
        assert_eq!(first.category, PropertyCategory::SingleFamily);
    }
}
