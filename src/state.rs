// src/state.rs

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::idx::{IdxClient, ListingSource};

/// Everything request handlers share. Read-only after startup.
pub struct AppState {
    pub catalog: Catalog,
    pub settings: Settings,
    pub idx: Option<IdxClient>,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings, idx: Option<IdxClient>) -> Self {
        Self {
            catalog,
            settings,
            idx,
        }
    }

    pub fn listing_source(&self) -> Option<&dyn ListingSource> {
        self.idx.as_ref().map(|c| c as &dyn ListingSource)
    }
}
