mod client;
mod featured;
mod idx_error;
mod models;
mod proxy;

pub use client::{IdxClient, IdxConfig, ListingSource, DEFAULT_API_BASE};
pub use featured::{featured_listings, FeaturedListing, FEATURED_COUNT};
pub use idx_error::IdxError;
pub use models::{normalize_listing, IdxListing, IdxSearchParams};
pub use proxy::ProxiedResponse;
