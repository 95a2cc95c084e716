pub mod property;

pub use property::{Coordinates, ListingStatus, PropertyCategory, PropertyRecord};
