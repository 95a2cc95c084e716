mod fixtures;
mod generator;

pub use generator::{generate_catalog, CATALOG_SIZE};

use crate::domain::PropertyRecord;
use std::sync::Arc;

/// The immutable listing collection behind the search page.
/// Cloning is cheap; every clone shares the same records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[PropertyRecord]>,
}

impl Catalog {
    pub fn from_records(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PropertyRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}
