use crate::app::{App, CatalogView, DisplayState};
use crate::catalog::{SkipId, SkipRecord};
use crate::domain::{price_with_vat, RoadFilter, SizeCategory, SortKey};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, see_other, text_response, ResultResp};
use crate::templates;
use astra::Request;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, error, warn};
use url::form_urlencoded;

const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    let result = dispatch(req, app);

    if let Err(err) = &result {
        match err {
            ServerError::Internal(_) => error!(%method, %path, error = %err, "request failed"),
            _ => warn!(%method, %path, error = %err, "request rejected"),
        }
    }

    result
}

fn dispatch(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let params = parse_query(&req);
            let (sort, filter) = parse_view(&params)?;
            let view = app.view(sort, filter);
            html_response(templates::pages::selector_page(
                &view,
                &app.config.image_base_url,
            ))
        }
        ("GET", "/api/skips") => {
            let params = parse_query(&req);
            let (sort, filter) = parse_view(&params)?;
            json_response(&ApiCatalog::from(app.view(sort, filter)))
        }
        ("POST", "/select") => {
            let form = parse_form(&mut req)?;
            let (sort, filter) = parse_view(&form)?;
            let raw_id = form
                .get("id")
                .ok_or_else(|| ServerError::BadRequest("missing skip id".into()))?;

            // only what is on screen can be picked
            let id = app
                .select_visible(raw_id, sort, filter)
                .ok_or_else(|| ServerError::BadRequest(format!("unknown skip id: {raw_id}")))?;
            debug!(%id, "skip selected");
            see_other(&view_location(sort, filter))
        }
        ("POST", "/clear") => {
            let form = parse_form(&mut req)?;
            let (sort, filter) = parse_view(&form)?;
            app.selection().clear();
            see_other(&view_location(sort, filter))
        }
        ("POST", "/reload") => {
            let form = parse_form(&mut req)?;
            let (sort, filter) = parse_view(&form)?;
            app.spawn_load();
            see_other(&view_location(sort, filter))
        }
        // filter and sort back to defaults, selection stays
        ("GET", "/reset") => see_other("/"),
        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

/// Missing keys fall back to the defaults; unknown values are rejected.
fn parse_view(params: &HashMap<String, String>) -> Result<(SortKey, RoadFilter), ServerError> {
    let sort = match params.get("sort") {
        Some(v) => v.parse::<SortKey>().map_err(ServerError::BadRequest)?,
        None => SortKey::default(),
    };
    let filter = match params.get("filter") {
        Some(v) => v.parse::<RoadFilter>().map_err(ServerError::BadRequest)?,
        None => RoadFilter::default(),
    };
    Ok((sort, filter))
}

fn view_location(sort: SortKey, filter: RoadFilter) -> String {
    if sort == SortKey::default() && filter == RoadFilter::default() {
        return "/".to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("sort", sort.as_str())
        .append_pair("filter", filter.as_str())
        .finish();
    format!("/?{query}")
}

#[derive(Serialize)]
struct ApiSkip {
    #[serde(flatten)]
    record: SkipRecord,
    total_price: f64,
    category: &'static str,
}

#[derive(Serialize)]
struct ApiCatalog {
    state: &'static str,
    error: Option<String>,
    sort: &'static str,
    filter: &'static str,
    skipped: usize,
    selected_id: Option<SkipId>,
    items: Vec<ApiSkip>,
}

impl From<CatalogView> for ApiCatalog {
    fn from(view: CatalogView) -> Self {
        let error = match &view.state {
            DisplayState::Error(msg) => Some(msg.clone()),
            _ => None,
        };

        Self {
            state: view.state.as_str(),
            error,
            sort: view.sort.as_str(),
            filter: view.filter.as_str(),
            skipped: view.skipped,
            selected_id: view.selection.current_id().cloned(),
            items: view
                .items
                .into_iter()
                .map(|record| ApiSkip {
                    total_price: price_with_vat(&record),
                    category: SizeCategory::from_size(record.size).label(),
                    record,
                })
                .collect(),
        }
    }
}
