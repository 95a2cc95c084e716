use crate::tests::utils::{body_string, get, one_shot_api, test_state, test_state_with_idx};

#[test]
fn home_page_falls_back_to_local_listings() {
    let state = test_state();
    let resp = get(&state, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Featured Properties"));
    assert_eq!(body.matches("class=\"featured-card\"").count(), 10);
    assert!(body.contains("action=\"/search\""));
}

#[test]
fn idx_pages_render_sentinels_and_script() {
    let state = test_state();

    let body = body_string(get(&state, "/idx-wrapper"));
    assert!(body.contains("id=\"idx-start\""));
    assert!(body.contains("id=\"idx-stop\""));
    assert!(body.contains("customshowcasejs.php?widgetid=135842"));

    let body = body_string(get(&state, "/listings/sold"));
    assert!(body.contains("customshowcasejs.php?widgetid=135840"));
}

#[test]
fn unknown_route_is_404() {
    let state = test_state();
    let resp = get(&state, "/team");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Page not found"));
}

#[test]
fn idx_proxy_disabled_without_key() {
    let state = test_state();
    let resp = get(&state, "/api/idx/clients/listings");
    assert_eq!(resp.status(), 404);
}

#[test]
fn listing_detail_needs_idx() {
    let state = test_state();
    assert_eq!(get(&state, "/listings/O6123456").status(), 404);
    // The sold showcase keeps its own route.
    assert_eq!(get(&state, "/listings/sold").status(), 200);
}

#[test]
fn listing_detail_renders_live_listing() {
    let state = test_state_with_idx(one_shot_api(
        "200 OK",
        r#"{"listingID":"O42","address":"9 Park Ave","city":"Winter Park","zipcode":"32789","price":610000,"bedrooms":3,"bathrooms":2,"sqft":1900}"#,
    ));
    let resp = get(&state, "/listings/O42");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("9 Park Ave, Winter Park, FL 32789"));
    assert!(body.contains("$610,000"));
    assert!(body.contains("href=\"/search?city=Winter+Park\""));
}

#[test]
fn listing_unknown_to_idx_is_404() {
    let state = test_state_with_idx(one_shot_api("404 Not Found", ""));
    assert_eq!(get(&state, "/listings/O404").status(), 404);
}
