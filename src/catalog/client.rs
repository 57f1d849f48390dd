// client.rs
use crate::catalog::{CatalogError, CatalogPage, SkipRecord};
use crate::config::AppConfig;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const ENDPOINT_PATH: &str = "/api/skips/by-location";

const USER_AGENT: &str = concat!("skip_selector/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce the skip list. The store only talks to this.
pub trait CatalogSource {
    fn fetch_catalog(&self) -> Result<CatalogPage, CatalogError>;
}

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: String,
    postcode: String,
    area: String,
    timeout_secs: u64,
}

impl CatalogClient {
    pub fn new(cfg: &AppConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", cfg.api_base_url.trim_end_matches('/'), ENDPOINT_PATH),
            postcode: cfg.postcode.clone(),
            area: cfg.area.clone(),
            timeout_secs: cfg.timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get_json(&self) -> Result<Value, CatalogError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("postcode", &self.postcode), ("area", &self.area)])
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: text.chars().take(512).collect(),
            });
        }

        serde_json::from_str(&text).map_err(|e| CatalogError::JsonParse(e.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            CatalogError::Network(err.to_string())
        }
    }

    /// Decode element by element so one bad record doesn't sink the list.
    fn extract_records(data: Value) -> Result<CatalogPage, CatalogError> {
        let arr = match data {
            Value::Null => return Ok(CatalogPage::default()),
            Value::Array(arr) => arr,
            other => {
                return Err(CatalogError::UnexpectedShape(format!(
                    "expected a JSON array, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut page = CatalogPage::default();
        for (idx, value) in arr.into_iter().enumerate() {
            match serde_json::from_value::<SkipRecord>(value) {
                Ok(record) => page.records.push(record),
                Err(e) => {
                    warn!(index = idx, error = %e, "dropping malformed skip record");
                    page.skipped += 1;
                }
            }
        }

        Ok(page)
    }
}

impl CatalogSource for CatalogClient {
    fn fetch_catalog(&self) -> Result<CatalogPage, CatalogError> {
        let start = Instant::now();
        debug!(endpoint = %self.endpoint, postcode = %self.postcode, area = %self.area, "fetching skip catalog");

        let result = self.get_json().and_then(Self::extract_records);

        match &result {
            Ok(page) => info!(
                records = page.records.len(),
                skipped = page.skipped,
                elapsed = ?start.elapsed(),
                "skip catalog fetched"
            ),
            Err(e) => warn!(error = %e, elapsed = ?start.elapsed(), "skip catalog fetch failed"),
        }

        result
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
