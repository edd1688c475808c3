//! Header resolution for each endpoint's header policy.

use std::sync::Arc;

use tracing::warn;

use crate::token_store::{TokenKey, TokenStore};

/// Which bearer token, if any, an endpoint sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    None,
    AccessToken,
    RefreshToken,
}

impl HeaderPolicy {
    fn token_key(self) -> Option<TokenKey> {
        match self {
            HeaderPolicy::None => None,
            HeaderPolicy::AccessToken => Some(TokenKey::AccessToken),
            HeaderPolicy::RefreshToken => Some(TokenKey::RefreshToken),
        }
    }
}

/// Reads bearer tokens from the shared store. Holds no state of its own.
#[derive(Clone)]
pub struct HeaderResolver {
    store: Arc<dyn TokenStore>,
}

impl HeaderResolver {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Produce the header set for `policy`.
    ///
    /// A missing token is not an error: the header is left out and the
    /// server rejects the call.
    pub fn resolve(&self, policy: HeaderPolicy, content_type: &str) -> Vec<(String, String)> {
        let mut headers = vec![("content-type".to_string(), content_type.to_string())];
        if let Some(key) = policy.token_key() {
            match self.store.load(key) {
                Some(token) => {
                    headers.push(("authorization".to_string(), format!("Bearer {token}")))
                }
                None => warn!(
                    slot = key.slot(),
                    "no bearer token stored; sending request without authorization"
                ),
            }
        }
        headers
    }
}

impl std::fmt::Debug for HeaderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderResolver").finish_non_exhaustive()
    }
}
