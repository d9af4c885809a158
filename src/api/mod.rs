//! API client modules for the BigCommerce platform

mod catalog;
mod client;
mod scopes;

pub use catalog::{fetch_all_products, CatalogPages};
pub use client::ApiClient;
pub use scopes::{missing_scopes, validate_scopes, REQUIRED_SCOPES};
