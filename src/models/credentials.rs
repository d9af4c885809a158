//! Store credentials supplied on the command line

/// Credentials identifying a store and authorizing API access
///
/// Supplied per invocation and never persisted.
#[derive(Debug, Clone)]
pub struct StoreCredentials {
    /// Store hash identifying the target store
    pub store_hash: String,
    /// API access token sent as `x-auth-token`
    pub access_token: String,
}

impl StoreCredentials {
    /// Create credentials from the raw CLI inputs
    pub fn new(store_hash: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            store_hash: store_hash.into(),
            access_token: access_token.into(),
        }
    }
}
