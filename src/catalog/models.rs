use serde::{Deserialize, Serialize};
use std::fmt;

// One element of the by-location response:
//
// [
//   {
//     "id": 17933,
//     "size": 4,
//     "hire_period_days": 14,
//     "price_before_vat": 278,
//     "vat": 20,
//     "allowed_on_road": true,
//     ...other fields we don't read
//   }
// ]

/// Upstream ids show up as numbers today, but nothing guarantees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkipId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SkipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipId::Number(n) => write!(f, "{n}"),
            SkipId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl SkipId {
    /// Compare against an id that came back through a form field.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            SkipId::Number(n) => raw.trim().parse::<i64>().map(|v| v == *n).unwrap_or(false),
            SkipId::Text(s) => s == raw,
        }
    }
}

/// A skip as returned by the catalog API. Values are passed through untouched,
/// zero or odd prices included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipRecord {
    pub id: SkipId,
    /// Volume in yards.
    pub size: i64,
    pub price_before_vat: f64,
    /// Percentage, `20` means 20%.
    pub vat: f64,
    pub hire_period_days: i64,
    pub allowed_on_road: bool,
}

/// Result of one successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    pub records: Vec<SkipRecord>,
    /// Elements of the response that could not be decoded and were dropped.
    pub skipped: usize,
}
