// src/map/leaflet.rs

use super::{Bounds, MapView, Marker};
use crate::domain::Coordinates;
use serde::Serialize;

/// Downtown Orlando.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 28.5383,
    lng: -81.3792,
};
pub const DEFAULT_ZOOM: u8 = 11;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Map state for the Leaflet script on the search page.
///
/// The page creates one Leaflet map per load and draws whatever this adapter
/// collected: tiles, markers, the fitted viewport and an open popup.
/// Marker clicks navigate to `select_href` with `selected=<id>` set.
#[derive(Debug, Clone, Serialize)]
pub struct LeafletMap {
    center: Coordinates,
    zoom: u8,
    tile_url: &'static str,
    attribution: &'static str,
    markers: Vec<Marker>,
    bounds: Option<Bounds>,
    open_popup: Option<String>,
    select_href: String,
}

impl LeafletMap {
    pub fn new(select_href: impl Into<String>) -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url: TILE_URL,
            attribution: TILE_ATTRIBUTION,
            markers: Vec::new(),
            bounds: None,
            open_popup: None,
            select_href: select_href.into(),
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// JSON config embedded into the page for the Leaflet bootstrap script.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        // Keep "</script>" in popups from closing the inline script block.
        serde_json::to_string(self).map(|json| json.replace("</", "<\\/"))
    }
}

impl MapView for LeafletMap {
    fn set_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
        self.open_popup = None;
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }

    fn open_popup(&mut self, marker_id: &str) -> bool {
        match self.markers.iter().find(|m| m.id == marker_id) {
            Some(marker) => {
                self.center = marker.position;
                self.open_popup = Some(marker.id.clone());
                true
            }
            None => false,
        }
    }
}

/// Bootstraps Leaflet from the JSON config in `#map-config`.
pub const BOOTSTRAP_JS: &str = r#"
(function () {
  var el = document.getElementById('map');
  var cfgEl = document.getElementById('map-config');
  if (!el || !cfgEl || typeof L === 'undefined') return;
  var cfg = JSON.parse(cfgEl.textContent);
  var map = L.map(el).setView([cfg.center.lat, cfg.center.lng], cfg.zoom);
  L.tileLayer(cfg.tile_url, { attribution: cfg.attribution }).addTo(map);
  var byId = {};
  cfg.markers.forEach(function (m) {
    var box = document.createElement('div');
    box.style.minWidth = '200px';
    var img = document.createElement('img');
    img.src = m.popup.image_url;
    img.style.cssText = 'width:100%;height:120px;object-fit:cover;border-radius:4px;margin-bottom:8px;';
    var h = document.createElement('h3');
    h.textContent = m.popup.address;
    var price = document.createElement('p');
    price.textContent = m.popup.price;
    var summary = document.createElement('p');
    summary.textContent = m.popup.summary;
    box.append(img, h, price, summary);
    var marker = L.marker([m.position.lat, m.position.lng]).addTo(map).bindPopup(box);
    marker.on('click', function () {
      var u = new URL(cfg.select_href, window.location.origin);
      u.searchParams.set('selected', m.id);
      window.location.href = u.toString();
    });
    byId[m.id] = marker;
  });
  if (cfg.bounds) {
    map.fitBounds([[cfg.bounds.south, cfg.bounds.west], [cfg.bounds.north, cfg.bounds.east]]);
  }
  if (cfg.open_popup && byId[cfg.open_popup]) {
    map.setView(byId[cfg.open_popup].getLatLng(), Math.max(map.getZoom(), 14));
    byId[cfg.open_popup].openPopup();
  }
  window.addEventListener('pagehide', function () { map.remove(); });
})();
"#;
