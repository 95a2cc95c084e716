// src/idx/client.rs
use crate::idx::models::{listings_from_body, normalize_listing};
use crate::idx::{IdxError, IdxListing, IdxSearchParams};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.idxbroker.com";

#[derive(Debug, Clone)]
pub struct IdxConfig {
    /// REST endpoint, without a trailing slash.
    pub api_base: String,
    /// Sent as the `accesskey` header. Never exposed to the browser.
    pub access_key: Option<String>,
    /// Account subdomain, e.g. "realestate360" for realestate360.idxbroker.com.
    pub subdomain: String,
    pub timeout: Duration,
}

impl Default for IdxConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            access_key: None,
            subdomain: "realestate360".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Anything that can answer a listings search. The home page only needs this.
pub trait ListingSource {
    fn fetch_listings(&self, params: &IdxSearchParams) -> Result<Vec<IdxListing>, IdxError>;

    /// Public photo URL for a listing's `index`-th picture.
    fn photo_url(&self, listing_id: &str, index: u32) -> String;
}

pub struct IdxClient {
    client: Client,
    cfg: IdxConfig,
}

impl IdxClient {
    pub fn new(cfg: IdxConfig) -> Result<Self, IdxError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &cfg.access_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| IdxError::Config("access key is not a valid header value".into()))?;
            headers.insert("accesskey", value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| IdxError::Network(e.to_string()))?;

        Ok(Self { client, cfg })
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.cfg.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Option<Value>, IdxError> {
        debug!(%url, "IDX request");

        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| IdxError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let text = resp
            .text()
            .map_err(|e| IdxError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(IdxError::Status(status.as_u16(), text));
        }
        // IDX answers an empty 200/204 when nothing matches.
        if text.trim().is_empty() {
            return Ok(Some(Value::Array(Vec::new())));
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| IdxError::JsonParse(e.to_string()))
    }

    /// Single listing by id; `None` when the API does not know it.
    pub fn fetch_listing_by_id(&self, listing_id: &str) -> Result<Option<IdxListing>, IdxError> {
        let url = self.endpoint(&format!("clients/listing/{listing_id}"));
        Ok(self.get_json(&url, &[])?.map(|v| normalize_listing(&v)))
    }
}

impl ListingSource for IdxClient {
    fn fetch_listings(&self, params: &IdxSearchParams) -> Result<Vec<IdxListing>, IdxError> {
        let url = self.endpoint("clients/listings");
        let body = self.get_json(&url, &params.to_pairs())?;
        Ok(body.map(|b| listings_from_body(&b)).unwrap_or_default())
    }

    fn photo_url(&self, listing_id: &str, index: u32) -> String {
        format!(
            "https://{}.idxbroker.com/idx/media/photos/{listing_id}/{index}",
            self.cfg.subdomain
        )
    }
}
