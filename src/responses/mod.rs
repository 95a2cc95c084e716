pub mod html;
pub mod passthrough;
pub mod redirect;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::html_response;
pub use passthrough::passthrough_response;
pub use redirect::redirect_response;
