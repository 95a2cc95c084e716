pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod format;
pub mod geos;
pub mod idx;
pub mod map;
pub mod responses;
pub mod router;
pub mod search;
pub mod state;
pub mod templates;

#[cfg(test)]
mod tests;
