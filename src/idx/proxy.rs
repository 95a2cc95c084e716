// src/idx/proxy.rs
//
// Server-side stand-in for the dev proxy: the browser calls /api/idx/<path>
// and we forward to the IDX API with the access key attached.

use crate::idx::{IdxClient, IdxError};
use tracing::info;

pub struct ProxiedResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl IdxClient {
    /// Forwards a GET for `path` (relative to the API base) with the raw
    /// query string. Upstream status and body are passed through untouched.
    pub fn forward(&self, path: &str, query: Option<&str>) -> Result<ProxiedResponse, IdxError> {
        let mut url = self.endpoint(path);
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(q);
        }
        info!(%path, "proxying IDX request");

        let resp = self
            .http()
            .get(&url)
            .send()
            .map_err(|e| IdxError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let body = resp
            .bytes()
            .map_err(|e| IdxError::Network(e.to_string()))?
            .to_vec();

        Ok(ProxiedResponse {
            status,
            content_type,
            body,
        })
    }
}
