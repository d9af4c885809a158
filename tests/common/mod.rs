//! Shared helpers for integration tests

#![allow(dead_code)]

use bigcommerce_cli::api::ApiClient;
use bigcommerce_cli::config::Config;
use bigcommerce_cli::models::StoreCredentials;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Store hash used by all tests
pub const TEST_STORE_HASH: &str = "abc123";

/// Access token used by all tests
pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

/// Test context holding a mock API server
pub struct TestContext {
    pub server: MockServer,
}

impl TestContext {
    /// Start a fresh mock server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock server
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Config pointing the CLI at the mock server
    pub fn config(&self) -> Config {
        Config::with_base_url(self.server.uri())
    }

    /// API client pointing at the mock server
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config()).expect("Failed to create API client")
    }

    /// Credentials matching the mounted mocks
    pub fn credentials(&self) -> StoreCredentials {
        StoreCredentials::new(TEST_STORE_HASH, TEST_ACCESS_TOKEN)
    }

    /// Path of the scope-introspection endpoint
    pub fn graphql_path() -> String {
        format!("/stores/{TEST_STORE_HASH}/graphql")
    }

    /// Path of the products listing endpoint
    pub fn products_path() -> String {
        format!("/stores/{TEST_STORE_HASH}/v3/catalog/products")
    }

    /// Mount a 200 scope response granting the given scopes
    pub async fn mock_scopes(&self, scopes: &[&str]) {
        let edges: Vec<Value> = scopes.iter().map(|s| json!({ "node": s })).collect();

        Mock::given(method("POST"))
            .and(path(Self::graphql_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "client": { "scopes": { "edges": edges } } }
            })))
            .mount(&self.server)
            .await;
    }
}

/// Build a catalog page body with the given items and continuation link
pub fn page_body(items: &[Value], next: Option<&str>) -> Value {
    let links = match next {
        Some(fragment) => json!({ "next": fragment }),
        None => json!({}),
    };

    json!({
        "data": items,
        "meta": { "pagination": { "links": links } }
    })
}

/// Build an opaque product item with the given id
pub fn product(id: &str) -> Value {
    json!({ "id": id, "name": format!("Product {id}") })
}
