pub mod filter;
pub mod query;
pub mod results;
pub mod selection;
pub mod session;

pub use filter::{filter_records, matching_indices, FilterCriteria, PRICE_CEILING};
pub use results::{ResultWindow, PAGE_SIZE};
pub use selection::Selection;
pub use session::SearchSession;
