// responses/passthrough.rs
use crate::errors::ServerError;
use crate::idx::ProxiedResponse;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Relays an upstream IDX response as-is.
pub fn passthrough_response(upstream: ProxiedResponse) -> ResultResp {
    ResponseBuilder::new()
        .status(upstream.status)
        .header("Content-Type", upstream.content_type)
        .header("Cache-Control", "no-store")
        .body(Body::from(upstream.body))
        .map_err(|_| ServerError::InternalError)
}
