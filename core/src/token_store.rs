//! Named slots for tokens and small serialized blobs.
//!
//! # Design
//! The platform keychain lives outside this crate; the core only needs the
//! `TokenStore` contract and read-after-write consistency within a process.
//! Writes are not coordinated with concurrent reads: the last write wins.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TokenStoreError;

/// The closed set of slots the client reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKey {
    AccessToken,
    RefreshToken,
    PushToken,
    UserAuthState,
    SignupDraft,
}

impl TokenKey {
    pub const ALL: [TokenKey; 5] = [
        TokenKey::AccessToken,
        TokenKey::RefreshToken,
        TokenKey::PushToken,
        TokenKey::UserAuthState,
        TokenKey::SignupDraft,
    ];

    pub fn slot(self) -> &'static str {
        match self {
            TokenKey::AccessToken => "accessToken",
            TokenKey::RefreshToken => "refreshToken",
            TokenKey::PushToken => "fcmToken",
            TokenKey::UserAuthState => "userAuthState",
            TokenKey::SignupDraft => "signupDraft",
        }
    }

    pub fn from_slot(slot: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.slot() == slot)
    }
}

pub trait TokenStore: Send + Sync {
    fn save(&self, key: TokenKey, value: &str) -> Result<(), TokenStoreError>;

    fn load(&self, key: TokenKey) -> Option<String>;

    fn delete(&self, key: TokenKey);
}

/// In-process store used by tests, the FFI handle and hosts without a keychain.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slots: RwLock<HashMap<TokenKey, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, key: TokenKey, value: &str) -> Result<(), TokenStoreError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key, value.to_string());
        Ok(())
    }

    fn load(&self, key: TokenKey) -> Option<String> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(&key).cloned()
    }

    fn delete(&self, key: TokenKey) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.remove(&key);
    }
}

/// Serialize `value` as JSON into `key`.
pub fn save_json<T: Serialize>(
    store: &dyn TokenStore,
    key: TokenKey,
    value: &T,
) -> Result<(), TokenStoreError> {
    let encoded = serde_json::to_string(value).map_err(|e| TokenStoreError::Serialization {
        slot: key.slot(),
        reason: e.to_string(),
    })?;
    store.save(key, &encoded)
}

/// Read a JSON value back from `key`. An empty slot is `Ok(None)`.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn TokenStore,
    key: TokenKey,
) -> Result<Option<T>, TokenStoreError> {
    let Some(raw) = store.load(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| TokenStoreError::Corrupt {
            slot: key.slot(),
            reason: e.to_string(),
        })
}
