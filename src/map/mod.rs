// src/map/mod.rs
//
// Projects search results onto a map. Rendering goes through the `MapView`
// trait so the page can use Leaflet while tests use a recording fake.

mod leaflet;

pub use leaflet::{LeafletMap, BOOTSTRAP_JS};

use crate::domain::{Coordinates, PropertyRecord};
use crate::format::{format_price, format_sqft};
use crate::search::Selection;
use serde::Serialize;

/// Marker cap per render.
pub const MAX_MARKERS: usize = 150;

/// Fraction of the marker box's span added on every side when fitting.
pub const BOUNDS_PADDING: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub image_url: String,
    pub price: String,
    pub address: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: String,
    pub position: Coordinates,
    pub popup: Popup,
}

impl Marker {
    pub fn for_record(record: &PropertyRecord) -> Self {
        Self {
            id: record.id.clone(),
            position: record.coordinates,
            popup: Popup {
                image_url: record.image_url.clone(),
                price: format_price(record.price),
                address: record.full_address(),
                summary: format!(
                    "{} bd | {} ba | {} sqft",
                    record.bedrooms,
                    record.bathrooms,
                    format_sqft(record.sqft)
                ),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Smallest box holding every point; `None` when there are none.
    pub fn around<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds {
                    south: p.lat,
                    west: p.lng,
                    north: p.lat,
                    east: p.lng,
                },
                Some(b) => Bounds {
                    south: b.south.min(p.lat),
                    west: b.west.min(p.lng),
                    north: b.north.max(p.lat),
                    east: b.east.max(p.lng),
                },
            })
        })
    }

    /// Extends each side by `ratio` of the box's height or width.
    pub fn pad(self, ratio: f64) -> Self {
        let dlat = (self.north - self.south) * ratio;
        let dlng = (self.east - self.west) * ratio;
        Bounds {
            south: self.south - dlat,
            west: self.west - dlng,
            north: self.north + dlat,
            east: self.east + dlng,
        }
    }

    pub fn contains(&self, p: Coordinates) -> bool {
        (self.south..=self.north).contains(&p.lat) && (self.west..=self.east).contains(&p.lng)
    }
}

/// The map library behind the search page.
pub trait MapView {
    /// Removes every existing marker and places `markers`.
    fn set_markers(&mut self, markers: Vec<Marker>);

    fn fit_bounds(&mut self, bounds: Bounds);

    /// Centers on a marker and opens its popup. False if no such marker.
    fn open_popup(&mut self, marker_id: &str) -> bool;
}

pub struct MarkerRenderer;

impl MarkerRenderer {
    /// Replaces the view's markers with the first `MAX_MARKERS` records and
    /// refits the viewport. An empty result leaves the viewport alone.
    /// Returns how many markers were placed.
    pub fn render<V: MapView + ?Sized>(view: &mut V, records: &[&PropertyRecord]) -> usize {
        let markers: Vec<Marker> = records
            .iter()
            .take(MAX_MARKERS)
            .map(|r| Marker::for_record(r))
            .collect();
        let bounds = Bounds::around(markers.iter().map(|m| m.position));
        let placed = markers.len();

        view.set_markers(markers);
        if let Some(bounds) = bounds {
            view.fit_bounds(bounds.pad(BOUNDS_PADDING));
        }

        placed
    }

    /// Opens the popup of the shared selection, if it is on the map.
    pub fn focus<V: MapView + ?Sized>(view: &mut V, selection: &Selection) -> bool {
        match selection.get() {
            Some(id) => view.open_popup(&id),
            None => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::generate_catalog;
    use rand::{rngs::StdRng, SeedableRng};

    /// Records every call instead of drawing anything.
    #[derive(Debug, Default)]
    pub struct RecordingMap {
        pub markers: Vec<Marker>,
        pub bounds: Option<Bounds>,
        pub opened: Option<String>,
        pub set_calls: usize,
        pub fit_calls: usize,
    }

    impl MapView for RecordingMap {
        fn set_markers(&mut self, markers: Vec<Marker>) {
            self.set_calls += 1;
            self.markers = markers;
        }

        fn fit_bounds(&mut self, bounds: Bounds) {
            self.fit_calls += 1;
            self.bounds = Some(bounds);
        }

        fn open_popup(&mut self, marker_id: &str) -> bool {
            if self.markers.iter().any(|m| m.id == marker_id) {
                self.opened = Some(marker_id.to_string());
                true
            } else {
                false
            }
        }
    }

    fn point(lat: f64, lng: f64) -> Coordinates {
        Coordinates { lat, lng }
    }

    #[test]
    fn bounds_pad_each_side() {
        let b = Bounds::around([point(28.0, -82.0), point(29.0, -81.0)]).unwrap();
        let padded = b.pad(0.1);
        assert!((padded.south - 27.9).abs() < 1e-9);
        assert!((padded.north - 29.1).abs() < 1e-9);
        assert!((padded.west + 82.1).abs() < 1e-9);
        assert!((padded.east + 80.9).abs() < 1e-9);
        assert_eq!(Bounds::around(Vec::new()), None);
    }

    #[test]
    fn renders_markers_and_fits_viewport() {
        let catalog = generate_catalog(&mut StdRng::seed_from_u64(8));
        let records: Vec<_> = catalog.records().iter().collect();
        let mut map = RecordingMap::default();

        let placed = MarkerRenderer::render(&mut map, &records);

        assert_eq!(placed, 100);
        assert_eq!(map.markers.len(), 100);
        let bounds = map.bounds.expect("viewport should be fitted");
        assert!(records.iter().all(|r| bounds.contains(r.coordinates)));
    }

    #[test]
    fn caps_marker_count() {
        let catalog = generate_catalog(&mut StdRng::seed_from_u64(8));
        // 200 references, cycling the catalog twice
        let records: Vec<_> = catalog.records().iter().cycle().take(200).collect();
        let mut map = RecordingMap::default();

        assert_eq!(MarkerRenderer::render(&mut map, &records), MAX_MARKERS);
        assert_eq!(map.markers.len(), MAX_MARKERS);
    }

    #[test]
    fn empty_result_clears_markers_but_keeps_viewport() {
        let catalog = generate_catalog(&mut StdRng::seed_from_u64(8));
        let records: Vec<_> = catalog.records().iter().take(3).collect();
        let mut map = RecordingMap::default();

        MarkerRenderer::render(&mut map, &records);
        let before = map.bounds;

        MarkerRenderer::render(&mut map, &[]);
        assert!(map.markers.is_empty());
        assert_eq!(map.set_calls, 2);
        assert_eq!(map.fit_calls, 1);
        assert_eq!(map.bounds, before);
    }

    #[test]
    fn focus_follows_shared_selection() {
        let catalog = generate_catalog(&mut StdRng::seed_from_u64(8));
        let records: Vec<_> = catalog.records().iter().take(5).collect();
        let mut map = RecordingMap::default();
        MarkerRenderer::render(&mut map, &records);

        let selection = Selection::new();
        assert!(!MarkerRenderer::focus(&mut map, &selection));

        selection.select("3");
        assert!(MarkerRenderer::focus(&mut map, &selection));
        assert_eq!(map.opened.as_deref(), Some("3"));

        selection.select("99");
        assert!(!MarkerRenderer::focus(&mut map, &selection));
    }

    #[test]
    fn popup_carries_price_and_address() {
        let catalog = generate_catalog(&mut StdRng::seed_from_u64(8));
        let record = &catalog.records()[0];
        let marker = Marker::for_record(record);
        assert_eq!(marker.popup.price, format_price(record.price));
        assert!(marker.popup.address.starts_with("1000 Lakeshore Dr, Orlando"));
        assert_eq!(marker.popup.image_url, record.image_url);
    }
}
