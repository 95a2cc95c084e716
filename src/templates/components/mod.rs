pub mod card;
pub mod error;
pub mod filter_form;
pub mod search_box;

pub use card::{featured_card, property_card};
pub use error::html_error_response;
pub use filter_form::filter_form;
pub use search_box::search_box;
