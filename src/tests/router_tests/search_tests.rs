// src/tests/router_tests/search_tests.rs

use crate::tests::utils::{body_string, get, location, test_state};

fn card_count(body: &str) -> usize {
    body.matches("class=\"property-card").count()
}

#[test]
fn search_page_shows_first_page_of_results() {
    let state = test_state();
    let resp = get(&state, "/search");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Showing <span class=\"result-count\">100</span> properties"));
    assert_eq!(card_count(&body), 24);
    assert!(body.contains("href=\"/search?shown=48\""), "load more link missing");
    assert!(body.contains("id=\"map-config\""));
}

#[test]
fn load_more_grows_the_list() {
    let state = test_state();
    let body = body_string(get(&state, "/search?shown=48"));
    assert_eq!(card_count(&body), 48);

    let body = body_string(get(&state, "/search?shown=96"));
    assert_eq!(card_count(&body), 96);
    assert!(body.contains("href=\"/search?shown=100\""));

    let body = body_string(get(&state, "/search?shown=100"));
    assert_eq!(card_count(&body), 100);
    assert!(!body.contains("class=\"load-more\""));
}

#[test]
fn form_submission_drops_default_values() {
    let state = test_state();
    let resp = get(
        &state,
        "/search?city=Orlando&lp=0&hp=999999999&bd=3&ba=0&pt=all&status=all",
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/search?city=Orlando&bd=3");
}

#[test]
fn garbage_values_redirect_to_defaults() {
    let state = test_state();
    let resp = get(&state, "/search?lp=lots&bd=many");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/search");
}

#[test]
fn alternate_location_key_is_rewritten() {
    let state = test_state();
    let resp = get(&state, "/search?location=Oviedo");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/search?city=Oviedo");

    let resp = get(&state, "/search?city=Oviedo");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("in <strong>Oviedo</strong>"));
    assert!(body.contains("Oviedo, FL 32765"));
}

#[test]
fn empty_result_shows_reset() {
    let state = test_state();
    let resp = get(&state, "/search?city=Atlantis");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(card_count(&body), 0);

    let start = body.find("class=\"no-results\"").expect("no-results panel");
    let panel = &body[start..];
    let panel = &panel[..panel.find("</div>").expect("panel closes")];
    assert!(panel.contains("No properties found"));
    assert!(panel.contains("href=\"/search\""));
    assert!(panel.contains("Clear all filters"));

    // The reset link leads back to the full collection.
    let body = body_string(get(&state, "/search"));
    assert!(body.contains("<span class=\"result-count\">100</span>"));
}

#[test]
fn selected_card_is_highlighted() {
    let state = test_state();
    let body = body_string(get(&state, "/search?selected=3"));
    assert!(body.contains("id=\"property-3\""));
    assert_eq!(body.matches("property-card selected").count(), 1);
    assert!(body.contains("\"open_popup\":\"3\""));
}

#[test]
fn unknown_selection_is_dropped() {
    let state = test_state();
    let resp = get(&state, "/search?selected=404");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/search");
}
