//! CLI settings with environment overrides

use crate::error::{CliError, CliResult};

use super::DEFAULT_API_BASE_PATH;

/// Configuration for the CLI
///
/// There is no on-disk config file: credentials are supplied per invocation,
/// so the only tunables are the API base path and the request timeout.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the BigCommerce API
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_PATH.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Build configuration from the environment
    ///
    /// Overrides:
    /// - `BIGCOMMERCE_API_BASE_PATH`: alternate API base URL
    /// - `BIGCOMMERCE_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> CliResult<Self> {
        let mut config = Self::default();

        if let Ok(base) = std::env::var("BIGCOMMERCE_API_BASE_PATH") {
            if base.is_empty() {
                return Err(CliError::Config(
                    "BIGCOMMERCE_API_BASE_PATH must not be empty".to_string(),
                ));
            }
            config.api_base_url = base.trim_end_matches('/').to_string();
        }

        if let Ok(timeout) = std::env::var("BIGCOMMERCE_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|_| {
                CliError::Config(format!(
                    "BIGCOMMERCE_TIMEOUT_SECS must be a number, got '{timeout}'"
                ))
            })?;
        }

        Ok(config)
    }

    /// Create a config pointing at an explicit base URL (used by tests)
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// URL of the scope-introspection GraphQL endpoint for a store
    pub fn graphql_url(&self, store_hash: &str) -> String {
        format!("{}/stores/{}/graphql", self.api_base_url, store_hash)
    }

    /// URL of the catalog products listing endpoint for a store
    pub fn products_url(&self, store_hash: &str) -> String {
        format!(
            "{}/stores/{}/v3/catalog/products",
            self.api_base_url, store_hash
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_bigcommerce() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.bigcommerce.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_graphql_url() {
        let config = Config::with_base_url("https://api.example.com");
        assert_eq!(
            config.graphql_url("abc123"),
            "https://api.example.com/stores/abc123/graphql"
        );
    }

    #[test]
    fn test_products_url() {
        let config = Config::with_base_url("https://api.example.com");
        assert_eq!(
            config.products_url("abc123"),
            "https://api.example.com/stores/abc123/v3/catalog/products"
        );
    }
}
