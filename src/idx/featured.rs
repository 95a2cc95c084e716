// src/idx/featured.rs

use crate::catalog::Catalog;
use crate::domain::PropertyRecord;
use crate::format::{format_price, format_sqft};
use crate::idx::{IdxListing, IdxSearchParams, ListingSource};
use crate::search::{query::search_href, FilterCriteria, PAGE_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

pub const FEATURED_COUNT: usize = 10;

/// A card in the home page's featured strip.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedListing {
    pub title: String,
    pub address: String,
    pub price: String,
    pub beds: u32,
    pub baths: String,
    pub sqft: String,
    pub image_url: String,
    pub link_url: String,
}

impl FeaturedListing {
    /// `position` is the record's place in the unfiltered result list; the
    /// link opens enough pages for its card to be on screen.
    fn from_record(record: &PropertyRecord, position: usize, total: usize) -> Self {
        let shown = ((position / PAGE_SIZE + 1) * PAGE_SIZE).min(total.max(PAGE_SIZE));
        Self {
            title: format!("{} {}", record.category.label(), record.id),
            address: record.full_address(),
            price: format_price(record.price),
            beds: record.bedrooms,
            baths: record.bathrooms.to_string(),
            sqft: format_sqft(record.sqft),
            image_url: record.image_url.clone(),
            link_url: search_href(
                &FilterCriteria::default(),
                Some(shown).filter(|&n| n != PAGE_SIZE),
                Some(&record.id),
            ),
        }
    }

    pub fn from_idx(listing: &IdxListing, source: &dyn ListingSource) -> Self {
        let image_url = if !listing.photo_url.is_empty() {
            listing.photo_url.clone()
        } else {
            source.photo_url(&listing.listing_id, 0)
        };
        let criteria = FilterCriteria {
            location: listing.city.clone(),
            ..Default::default()
        };

        Self {
            title: listing.property_type.clone(),
            address: format!(
                "{}, {}, {} {}",
                listing.address, listing.city, listing.state, listing.zipcode
            ),
            price: format_price(listing.price.round() as u64),
            beds: listing.bedrooms,
            baths: listing.bathrooms.to_string(),
            sqft: format_sqft(listing.sqft),
            image_url,
            link_url: search_href(&criteria, None, None),
        }
    }
}

/// Featured listings for the home page.
///
/// Live listings come from `source` when one is configured. Any error or an
/// empty answer falls back to a shuffled pick from the local catalog; the
/// visitor never sees the failure.
pub fn featured_listings<R: Rng>(
    source: Option<&dyn ListingSource>,
    catalog: &Catalog,
    rng: &mut R,
) -> Vec<FeaturedListing> {
    if let Some(source) = source {
        let params = IdxSearchParams {
            per_page: Some(FEATURED_COUNT as u32),
            ..Default::default()
        };
        match source.fetch_listings(&params) {
            Ok(listings) if !listings.is_empty() => {
                info!(count = listings.len(), "featured listings loaded from IDX");
                return listings
                    .iter()
                    .take(FEATURED_COUNT)
                    .map(|l| FeaturedListing::from_idx(l, source))
                    .collect();
            }
            Ok(_) => warn!("IDX returned no listings, using local catalog"),
            Err(e) => warn!(error = %e, "IDX fetch failed, using local catalog"),
        }
    }

    let records = catalog.records();
    let mut picks: Vec<usize> = (0..records.len()).collect();
    picks.shuffle(rng);
    picks
        .into_iter()
        .take(FEATURED_COUNT)
        .map(|i| FeaturedListing::from_record(&records[i], i, records.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::generate_catalog;
    use crate::idx::{normalize_listing, IdxError};
    use crate::search::SearchSession;
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::json;

    struct Failing;
    struct Empty;
    struct Live;

    impl ListingSource for Failing {
        fn fetch_listings(&self, _: &IdxSearchParams) -> Result<Vec<IdxListing>, IdxError> {
            Err(IdxError::Network("connection refused".into()))
        }
        fn photo_url(&self, id: &str, index: u32) -> String {
            format!("photo/{id}/{index}")
        }
    }

    impl ListingSource for Empty {
        fn fetch_listings(&self, _: &IdxSearchParams) -> Result<Vec<IdxListing>, IdxError> {
            Ok(Vec::new())
        }
        fn photo_url(&self, id: &str, index: u32) -> String {
            format!("photo/{id}/{index}")
        }
    }

    impl ListingSource for Live {
        fn fetch_listings(&self, params: &IdxSearchParams) -> Result<Vec<IdxListing>, IdxError> {
            assert_eq!(params.per_page, Some(FEATURED_COUNT as u32));
            Ok(vec![normalize_listing(&json!({
                "listingID": "O777",
                "address": "12 Lake Ave",
                "city": "Maitland",
                "price": "525000",
                "bedrooms": 4,
                "bathrooms": 2.5,
                "sqft": 2400,
                "propertyType": "Pool Home",
            }))])
        }
        fn photo_url(&self, id: &str, index: u32) -> String {
            format!("photo/{id}/{index}")
        }
    }

    fn catalog() -> Catalog {
        generate_catalog(&mut StdRng::seed_from_u64(10))
    }

    #[test]
    fn no_source_uses_catalog() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let featured = featured_listings(None, &catalog, &mut rng);
        assert_eq!(featured.len(), FEATURED_COUNT);
        assert!(featured.iter().all(|f| f.link_url.contains("selected=")));
    }

    #[test]
    fn fallback_links_land_on_a_visible_card() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(3);

        for listing in featured_listings(None, &catalog, &mut rng) {
            let query = listing.link_url.trim_start_matches("/search?");
            let session = SearchSession::from_query(catalog.clone(), query);
            let selected = session.selection().get().expect("link selects a record");

            assert!(session.visible_results().iter().any(|r| r.id == selected));
            assert_eq!(session.canonical_href(), listing.link_url);
        }
    }

    #[test]
    fn late_records_open_extra_pages() {
        let catalog = catalog();
        let card = FeaturedListing::from_record(&catalog.records()[56], 56, catalog.len());
        assert_eq!(card.link_url, "/search?shown=72&selected=57");

        let card = FeaturedListing::from_record(&catalog.records()[3], 3, catalog.len());
        assert_eq!(card.link_url, "/search?selected=4");

        let card = FeaturedListing::from_record(&catalog.records()[99], 99, catalog.len());
        assert_eq!(card.link_url, "/search?shown=100&selected=100");
    }

    #[test]
    fn failure_and_empty_fall_back() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(featured_listings(Some(&Failing), &catalog, &mut rng).len(), FEATURED_COUNT);
        assert_eq!(featured_listings(Some(&Empty), &catalog, &mut rng).len(), FEATURED_COUNT);
    }

    #[test]
    fn live_listings_win_when_present() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let featured = featured_listings(Some(&Live), &catalog, &mut rng);

        assert_eq!(featured.len(), 1);
        let card = &featured[0];
        assert_eq!(card.title, "Pool Home");
        assert_eq!(card.price, "$525,000");
        assert_eq!(card.baths, "2.5");
        assert_eq!(card.image_url, "photo/O777/0");
        assert_eq!(card.link_url, "/search?city=Maitland");
    }
}
