// src/tests/router_tests/selector_tests.rs

use crate::tests::utils::{get, loaded_app, mock_catalog, two_skips, unloaded_app};
use httpmock::prelude::*;
use serde_json::json;

fn card_positions(body: &str, ids: &[&str]) -> Vec<usize> {
    ids.iter()
        .map(|id| {
            body.find(&format!("data-skip-id=\"{id}\""))
                .unwrap_or_else(|| panic!("card {id} missing"))
        })
        .collect()
}

#[test]
fn page_lists_skips_by_size_with_vat_prices() {
    let server = MockServer::start();
    let mock = mock_catalog(&server, two_skips());
    let app = loaded_app(&server);

    let resp = get(&app, "/");
    mock.assert();

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("2 Skips Available"));
    assert!(resp.body.contains("4 Yard Skip"));
    assert!(resp.body.contains("£240.00"));
    assert!(resp.body.contains("£360.00"));

    let pos = card_positions(&resp.body, &["1", "2"]);
    assert!(pos[0] < pos[1], "4 yard skip should come first");
}

#[test]
fn page_renders_badges_and_image_fallback() {
    let server = MockServer::start();
    mock_catalog(&server, two_skips());
    let app = loaded_app(&server);

    let body = get(&app, "/").body;
    assert!(body.contains("https://img.test/skips/8-yarder-skip.jpg"));
    assert!(body.contains("onerror="));
    assert!(body.contains("skip-placeholder hidden"));
    assert!(body.contains("Not Allowed On The Road"));
    assert!(body.contains("Small"));
    assert!(body.contains("Medium"));
    assert!(body.contains("Select Skip"));
}

#[test]
fn road_filter_hides_permit_skips() {
    let server = MockServer::start();
    mock_catalog(&server, two_skips());
    let app = loaded_app(&server);

    let body = get(&app, "/?filter=road").body;
    assert!(body.contains("1 Skip Available"));
    assert!(body.contains("data-skip-id=\"1\""));
    assert!(!body.contains("data-skip-id=\"2\""));
}

#[test]
fn price_sort_orders_by_base_price() {
    let server = MockServer::start();
    mock_catalog(
        &server,
        json!([
            { "id": 10, "size": 4, "hire_period_days": 7, "price_before_vat": 500, "vat": 0, "allowed_on_road": true },
            { "id": 11, "size": 12, "hire_period_days": 7, "price_before_vat": 100, "vat": 20, "allowed_on_road": true }
        ]),
    );
    let app = loaded_app(&server);

    let body = get(&app, "/?sort=price").body;
    let pos = card_positions(&body, &["11", "10"]);
    assert!(pos[0] < pos[1]);
    assert!(body.contains("<option value=\"price\" selected>"));
}

#[test]
fn empty_after_filter_offers_reset() {
    let server = MockServer::start();
    mock_catalog(
        &server,
        json!([
            { "id": 1, "size": 4, "hire_period_days": 14, "price_before_vat": 200, "vat": 20, "allowed_on_road": true }
        ]),
    );
    let app = loaded_app(&server);

    let body = get(&app, "/?filter=no-road").body;
    assert!(body.contains("No skips match your criteria"));
    assert!(body.contains("href=\"/reset\""));
    assert!(!body.contains("data-skip-id"));
}

#[test]
fn reset_goes_back_to_defaults() {
    let server = MockServer::start();
    mock_catalog(&server, two_skips());
    let app = loaded_app(&server);

    let resp = get(&app, "/reset");
    assert_eq!(resp.status, 303);
    assert_eq!(resp.location.as_deref(), Some("/"));
}

#[test]
fn upstream_failure_shows_error_state() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(500).body("boom");
    });
    let app = loaded_app(&server);

    let body = get(&app, "/").body;
    assert!(body.contains("Oops! Something went wrong"));
    assert!(body.contains("The skip catalog answered with HTTP 500"));
    assert!(body.contains("action=\"/reload\""));
    assert!(!body.contains("Skips Available"));
}

#[test]
fn retry_form_keeps_sort_and_filter() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });
    let app = loaded_app(&server);

    let body = get(&app, "/?sort=price&filter=road").body;
    let form = &body[body.find("action=\"/reload\"").unwrap()..];
    assert!(form.contains(r#"name="sort" value="price""#));
    assert!(form.contains(r#"name="filter" value="road""#));
}

#[test]
fn malformed_records_are_reported_not_fatal() {
    let server = MockServer::start();
    mock_catalog(
        &server,
        json!([
            { "id": 1, "size": 4, "hire_period_days": 14, "price_before_vat": 200, "vat": 20, "allowed_on_road": true },
            { "id": 2, "size": null }
        ]),
    );
    let app = loaded_app(&server);

    let body = get(&app, "/").body;
    assert!(body.contains("1 Skip Available"));
    assert!(body.contains("1 listing(s) could not be read"));
}

#[test]
fn before_first_load_page_is_loading_and_refreshes() {
    let server = MockServer::start();
    let app = unloaded_app(&server);

    let body = get(&app, "/").body;
    assert!(body.contains("Loading Skip Options"));
    assert!(body.contains("http-equiv=\"refresh\""));
}

#[test]
fn invalid_view_params_are_bad_requests() {
    let server = MockServer::start();
    mock_catalog(&server, two_skips());
    let app = loaded_app(&server);

    assert_eq!(get(&app, "/?sort=colour").status, 400);
    assert_eq!(get(&app, "/?filter=maybe").status, 400);
}

#[test]
fn unknown_route_is_not_found() {
    let server = MockServer::start();
    let app = unloaded_app(&server);

    assert_eq!(get(&app, "/admin").status, 404);
    assert_eq!(get(&app, "/health").body, "ok");
}
