use crate::catalog::generate_catalog;
use crate::config::Settings;
use crate::idx::{IdxClient, IdxConfig};
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::time::Duration;

pub const TEST_SEED: u64 = 2025;

/// App state with a seeded catalog and no IDX client.
pub fn test_state() -> AppState {
    let catalog = generate_catalog(&mut StdRng::seed_from_u64(TEST_SEED));
    AppState::new(catalog, Settings::default(), None)
}

pub fn get(state: &AppState, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    handle(req, state).unwrap_or_else(crate::templates::html_error_response)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Serves one canned HTTP response on a local port and returns the base URL.
pub fn one_shot_api(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}")
}

/// App state whose IDX client talks to `api_base`.
pub fn test_state_with_idx(api_base: String) -> AppState {
    let catalog = generate_catalog(&mut StdRng::seed_from_u64(TEST_SEED));
    let idx = IdxClient::new(IdxConfig {
        api_base,
        access_key: Some("test-key".into()),
        timeout: Duration::from_secs(5),
        ..Default::default()
    })
    .unwrap();
    AppState::new(catalog, Settings::default(), Some(idx))
}
