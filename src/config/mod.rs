//! Configuration management for the BigCommerce CLI

mod settings;

pub use settings::Config;

/// Default base path for the BigCommerce API
pub const DEFAULT_API_BASE_PATH: &str = "https://api.bigcommerce.com";
