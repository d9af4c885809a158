//! Data models for the CLI

pub mod catalog;
pub mod credentials;
pub mod scope;

pub use catalog::{CatalogPage, RateLimitSignal};
pub use credentials::StoreCredentials;
pub use scope::ScopeResponse;
