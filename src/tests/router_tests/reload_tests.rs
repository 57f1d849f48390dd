use crate::catalog::SkipId;
use crate::tests::utils::{get, loaded_app, mock_catalog, post_form, two_skips};
use httpmock::prelude::*;
use serde_json::json;
use std::time::{Duration, Instant};

/// Polls until the background load has landed.
fn wait_until_loaded(app: &crate::app::App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.catalog().is_loading {
        assert!(Instant::now() < deadline, "background load never finished");
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn reload_refetches_and_redirects() {
    let server = MockServer::start();
    let mock = mock_catalog(&server, two_skips());
    let app = loaded_app(&server);

    let resp = post_form(&app, "/reload", "sort=price");
    assert_eq!(resp.status, 303);
    assert_eq!(resp.location.as_deref(), Some("/?sort=price&filter=all"));

    wait_until_loaded(&app);
    assert_eq!(mock.hits(), 2);
    assert_eq!(app.catalog().items.len(), 2);
}

#[test]
fn reload_recovers_from_error_state() {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(GET);
        then.status(502);
    });
    let app = loaded_app(&server);
    assert!(get(&app, "/").body.contains("Oops! Something went wrong"));

    failing.delete();
    mock_catalog(&server, two_skips());

    post_form(&app, "/reload", "");
    wait_until_loaded(&app);

    let body = get(&app, "/").body;
    assert!(body.contains("2 Skips Available"));
}

#[test]
fn timeout_ends_in_error_state() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .json_body(json!([]))
            .delay(Duration::from_secs(3));
    });
    let app = loaded_app(&server);

    let snap = app.catalog();
    assert!(!snap.is_loading);
    assert!(snap.items.is_empty());
    assert_eq!(
        snap.error_message.as_deref(),
        Some("The skip catalog did not respond within 1s")
    );
}

#[test]
fn reload_drops_selection_that_disappeared() {
    let server = MockServer::start();
    let mut first = mock_catalog(&server, two_skips());
    let app = loaded_app(&server);
    post_form(&app, "/select", "id=2");

    first.delete();
    mock_catalog(
        &server,
        json!([
            { "id": 1, "size": 4, "hire_period_days": 14, "price_before_vat": 210, "vat": 20, "allowed_on_road": true }
        ]),
    );

    post_form(&app, "/reload", "");
    wait_until_loaded(&app);

    assert_eq!(app.selection().current(), None);
    assert!(!get(&app, "/").body.contains("Skip Selected"));
}

#[test]
fn reload_refreshes_selected_values() {
    let server = MockServer::start();
    let mut first = mock_catalog(&server, two_skips());
    let app = loaded_app(&server);
    post_form(&app, "/select", "id=1");

    first.delete();
    mock_catalog(
        &server,
        json!([
            { "id": 1, "size": 4, "hire_period_days": 14, "price_before_vat": 250, "vat": 20, "allowed_on_road": true }
        ]),
    );

    post_form(&app, "/reload", "");
    wait_until_loaded(&app);

    let selected = app.selection().current().cloned().unwrap();
    assert_eq!(selected.id, SkipId::Number(1));
    assert_eq!(selected.price_before_vat, 250.0);
    assert!(get(&app, "/").body.contains("£300.00"));
}
