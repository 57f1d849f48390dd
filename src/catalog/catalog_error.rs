use thiserror::Error;

/// Why a catalog fetch produced no list. The `Display` text is what the page
/// shows on its error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("The skip catalog did not respond within {secs}s")]
    Timeout { secs: u64 },
    #[error("Could not reach the skip catalog: {0}")]
    Network(String),
    #[error("The skip catalog answered with HTTP {status}")]
    Status { status: u16, body: String },
    #[error("The skip catalog sent invalid JSON: {0}")]
    JsonParse(String),
    #[error("Unexpected catalog data shape: {0}")]
    UnexpectedShape(String),
    #[error("Could not build the HTTP client: {0}")]
    Client(String),
}
