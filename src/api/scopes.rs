//! Access-token scope validation
//!
//! Confirms the supplied token is authorized for the catalog export before
//! any bulk work begins.

use reqwest::StatusCode;
use serde_json::json;

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::scope::ScopeResponse;
use crate::models::StoreCredentials;

/// Scopes the catalog export requires
pub const REQUIRED_SCOPES: &[&str] = &["store_v2_products"];

/// GraphQL query requesting the scopes granted to the current token
const SCOPES_QUERY: &str = "query getScopesForToken { client { scopes { edges { node } } } }";

impl ApiClient {
    /// Fetch the scopes granted to the access token
    pub async fn fetch_granted_scopes(
        &self,
        credentials: &StoreCredentials,
    ) -> CliResult<Vec<String>> {
        let url = self.config().graphql_url(&credentials.store_hash);

        let response = self
            .post_json(&url, credentials, &json!({ "query": SCOPES_QUERY }))
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CliError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.text().await.map_err(CliError::from)?;
        let parsed: ScopeResponse = serde_json::from_str(&body)?;
        Ok(parsed.granted_scopes())
    }
}

/// Compute the required scopes not satisfied by the granted set
///
/// A required scope is satisfied when it is a substring of some granted scope
/// or some granted scope is a substring of it. The match is deliberately
/// permissive to accommodate versioned and prefixed scope names.
pub fn missing_scopes<'a>(required: &[&'a str], granted: &[String]) -> Vec<&'a str> {
    required
        .iter()
        .filter(|required_scope| {
            !granted.iter().any(|granted_scope| {
                granted_scope.contains(*required_scope)
                    || required_scope.contains(granted_scope.as_str())
            })
        })
        .copied()
        .collect()
}

/// Validate that the token carries every required scope
///
/// Fails with [`CliError::MissingScopes`] listing exactly the unsatisfied
/// scopes; the caller must not proceed to fetching on failure.
pub async fn validate_scopes(
    client: &ApiClient,
    credentials: &StoreCredentials,
) -> CliResult<()> {
    let granted = client.fetch_granted_scopes(credentials).await?;
    let missing = missing_scopes(REQUIRED_SCOPES, &granted);

    if !missing.is_empty() {
        return Err(CliError::MissingScopes {
            missing: missing.into_iter().map(String::from).collect(),
        });
    }

    Ok(())
}
