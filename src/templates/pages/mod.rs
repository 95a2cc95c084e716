pub mod home;
pub mod idx_widget;
pub mod listing;
pub mod search;

pub use home::home_page;
pub use idx_widget::idx_widget_page;
pub use listing::listing_page;
pub use search::search_page;
