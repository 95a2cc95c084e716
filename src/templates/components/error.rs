use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, Markup};
use tracing::{error, warn};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    match &err {
        ServerError::NotFound | ServerError::BadRequest(_) => warn!(status, error = %err, "request failed"),
        _ => error!(status, error = %err, "request failed"),
    }

    let message = match &err {
        ServerError::NotFound => "Oops! Page not found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        // Upstream details can carry provider responses; keep them in the log.
        ServerError::Upstream(_) => "Listing service unavailable".to_string(),
        ServerError::InternalError => "Internal Server Error".to_string(),
    };

    render_error(status, &message)
}

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        None,
        html! {
            main class="error-page" {
                h1 { (status) }
                p { (message) }
                p { a href="/" { "← Return to Home" } }
            }
        },
    )
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(error_page(status, message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
