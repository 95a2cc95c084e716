use crate::errors::ServerError;
use crate::idx::{featured_listings, FeaturedListing};
use crate::map::LeafletMap;
use crate::responses::{html_response, passthrough_response, redirect_response, ResultResp};
use crate::search::SearchSession;
use crate::state::AppState;
use crate::templates;
use astra::Request;
use tracing::{debug, error};

const IDX_PROXY_PREFIX: &str = "/api/idx/";
const LISTING_PREFIX: &str = "/listings/";

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();
    debug!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => home(state),
        ("GET", "/search") => search(state, query.unwrap_or("")),
        ("GET", "/idx-wrapper") => idx_widget(state, "Map Search", state.settings.search_widget_id),
        ("GET", "/listings/sold") => {
            idx_widget(state, "Sold & Pending", state.settings.sold_widget_id)
        }
        ("GET", p) if p.starts_with(LISTING_PREFIX) => {
            listing(state, &p[LISTING_PREFIX.len()..])
        }
        ("GET", p) if p.starts_with(IDX_PROXY_PREFIX) => {
            idx_proxy(state, &p[IDX_PROXY_PREFIX.len()..], query)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState) -> ResultResp {
    let featured = featured_listings(
        state.listing_source(),
        &state.catalog,
        &mut rand::thread_rng(),
    );
    html_response(templates::pages::home_page(&featured))
}

fn search(state: &AppState, query: &str) -> ResultResp {
    let session = SearchSession::from_query(state.catalog.clone(), query);

    // Submitted forms carry every field; keep only the non-default ones.
    let canonical = session.canonical_href();
    let requested = if query.is_empty() {
        "/search".to_string()
    } else {
        format!("/search?{query}")
    };
    if canonical != requested {
        return redirect_response(&canonical);
    }

    let mut map = LeafletMap::new(session.state_href());
    session.render_map(&mut map);
    let map_config = map.to_json().map_err(|e| {
        error!(error = %e, "map config serialization failed");
        ServerError::InternalError
    })?;

    html_response(templates::pages::search_page(&session, &map_config))
}

fn idx_widget(state: &AppState, title: &str, widget_id: u32) -> ResultResp {
    let script_url = state.settings.widget_script_url(widget_id);
    html_response(templates::pages::idx_widget_page(title, &script_url))
}

fn listing(state: &AppState, listing_id: &str) -> ResultResp {
    let Some(client) = &state.idx else {
        return Err(ServerError::NotFound);
    };
    if listing_id.is_empty() || listing_id.contains('/') {
        return Err(ServerError::NotFound);
    }

    let found = client
        .fetch_listing_by_id(listing_id)
        .map_err(|e| ServerError::Upstream(e.to_string()))?
        .ok_or(ServerError::NotFound)?;
    let card = FeaturedListing::from_idx(&found, client);
    html_response(templates::pages::listing_page(&card))
}

fn idx_proxy(state: &AppState, path: &str, query: Option<&str>) -> ResultResp {
    let Some(client) = &state.idx else {
        return Err(ServerError::NotFound);
    };
    if path.is_empty() || path.split('/').any(|seg| seg == "..") {
        return Err(ServerError::BadRequest("invalid IDX path".into()));
    }

    let upstream = client
        .forward(path, query)
        .map_err(|e| ServerError::Upstream(e.to_string()))?;
    passthrough_response(upstream)
}
