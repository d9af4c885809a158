//! HTTP client wrapper for the BigCommerce API

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::logging::global_logger;
use crate::models::StoreCredentials;

/// API client for making authenticated requests
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: Config) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CliError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get a reference to the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Make an authenticated GET request
    pub async fn get_authenticated(
        &self,
        url: &str,
        credentials: &StoreCredentials,
    ) -> CliResult<reqwest::Response> {
        self.log_request("GET", url, credentials, false);

        let started = Instant::now();
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header("x-auth-token", &credentials.access_token)
            .send()
            .await
            .map_err(CliError::from)?;
        self.log_response(&response, started);

        Ok(response)
    }

    /// Make an authenticated POST request with a JSON body
    pub async fn post_json<T: serde::Serialize>(
        &self,
        url: &str,
        credentials: &StoreCredentials,
        body: &T,
    ) -> CliResult<reqwest::Response> {
        self.log_request("POST", url, credentials, true);

        let started = Instant::now();
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header("x-auth-token", &credentials.access_token)
            .json(body)
            .send()
            .await
            .map_err(CliError::from)?;
        self.log_response(&response, started);

        Ok(response)
    }

    fn log_request(&self, method: &str, url: &str, credentials: &StoreCredentials, json_body: bool) {
        let Some(logger) = global_logger() else {
            return;
        };

        if logger.is_trace() {
            let mut headers = HashMap::new();
            headers.insert("accept".to_string(), "application/json".to_string());
            if json_body {
                headers.insert("content-type".to_string(), "application/json".to_string());
            }
            headers.insert(
                "x-auth-token".to_string(),
                credentials.access_token.clone(),
            );
            logger.trace_request(method, url, headers);
        } else {
            logger.debug_request(method, url);
        }
    }

    fn log_response(&self, response: &reqwest::Response, started: Instant) {
        let Some(logger) = global_logger() else {
            return;
        };

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("");
        let timing_ms = started.elapsed().as_millis() as u64;

        if logger.is_trace() {
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.to_string(), v.to_string()))
                })
                .collect();
            logger.trace_response(status.as_u16(), status_text, timing_ms, headers);
        } else {
            logger.debug_response(status.as_u16(), status_text, timing_ms);
        }
    }
}
