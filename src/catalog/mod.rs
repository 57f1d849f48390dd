mod catalog_error;
mod client;
mod models;
mod state;

pub use catalog_error::CatalogError;
pub use client::{CatalogClient, CatalogSource, ENDPOINT_PATH};
pub use models::{CatalogPage, SkipId, SkipRecord};
pub use state::{CatalogSnapshot, CatalogState, CatalogStore};
