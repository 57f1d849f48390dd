use crate::tests::utils::{get, loaded_app, mock_catalog, post_form, two_skips, unloaded_app};
use httpmock::prelude::*;
use serde_json::Value;

fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[test]
fn api_returns_derived_items_with_totals() {
    let server = MockServer::start();
    mock_catalog(&server, two_skips());
    let app = loaded_app(&server);
    post_form(&app, "/select", "id=2");

    let resp = get(&app, "/api/skips?sort=size&filter=all");
    assert_eq!(resp.status, 200);

    let v = json(&resp.body);
    assert_eq!(v["state"], "populated");
    assert_eq!(v["selected_id"], 2);
    assert_eq!(v["error"], Value::Null);

    let items = v["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["category"], "Small");
    assert_eq!(items[1]["total_price"].as_f64(), Some(360.0));
    assert_eq!(items[1]["allowed_on_road"], false);
}

#[test]
fn api_reports_loading_and_errors() {
    let server = MockServer::start();
    let app = unloaded_app(&server);
    assert_eq!(json(&get(&app, "/api/skips").body)["state"], "loading");

    server.mock(|when, then| {
        when.method(GET);
        then.status(404);
    });
    app.load();

    let v = json(&get(&app, "/api/skips").body);
    assert_eq!(v["state"], "error");
    assert_eq!(v["error"], "The skip catalog answered with HTTP 404");
    assert_eq!(v["items"].as_array().map(Vec::len), Some(0));
}

#[test]
fn api_honours_filter() {
    let server = MockServer::start();
    mock_catalog(&server, two_skips());
    let app = loaded_app(&server);

    let v = json(&get(&app, "/api/skips?filter=no-road").body);
    assert_eq!(v["state"], "populated");
    assert_eq!(v["items"][0]["id"], 2);
    assert_eq!(v["filter"], "no-road");

    let v = json(&get(&app, "/api/skips?filter=road&sort=price").body);
    assert_eq!(v["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(v["items"][0]["id"], 1);
}

#[test]
fn api_rejects_bad_sort() {
    let server = MockServer::start();
    mock_catalog(&server, two_skips());
    let app = loaded_app(&server);

    assert_eq!(get(&app, "/api/skips?sort=weight").status, 400);
}
