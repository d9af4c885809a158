//! Scope introspection response models
//!
//! Mirrors the GraphQL response shape:
//! `{ data: { client: { scopes: { edges: [ { node: "..." } ] } } } }`

use serde::Deserialize;

/// Top-level scope introspection response
#[derive(Debug, Deserialize)]
pub struct ScopeResponse {
    pub data: ScopeData,
}

#[derive(Debug, Deserialize)]
pub struct ScopeData {
    pub client: ClientScopes,
}

#[derive(Debug, Deserialize)]
pub struct ClientScopes {
    pub scopes: ScopeConnection,
}

#[derive(Debug, Deserialize)]
pub struct ScopeConnection {
    pub edges: Vec<ScopeEdge>,
}

#[derive(Debug, Deserialize)]
pub struct ScopeEdge {
    pub node: String,
}

impl ScopeResponse {
    /// Flatten the connection into the list of granted scope names
    pub fn granted_scopes(self) -> Vec<String> {
        self.data
            .client
            .scopes
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granted_scopes_flattens_edges() {
        let body = r#"{
            "data": {
                "client": {
                    "scopes": {
                        "edges": [
                            { "node": "store_v2_products" },
                            { "node": "store_v2_orders_read_only" }
                        ]
                    }
                }
            }
        }"#;

        let response: ScopeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.granted_scopes(),
            vec!["store_v2_products", "store_v2_orders_read_only"]
        );
    }

    #[test]
    fn test_missing_nesting_fails() {
        let body = r#"{ "data": { "client": {} } }"#;
        assert!(serde_json::from_str::<ScopeResponse>(body).is_err());
    }
}
