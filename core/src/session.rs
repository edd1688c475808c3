//! Token and user persistence around sign-in, reissue and withdraw.

use tracing::debug;

use crate::entity::{SignInSession, TokenPair, UserInfo};
use crate::error::TokenStoreError;
use crate::token_store::{load_json, save_json, TokenKey, TokenStore};

/// Slots cleared on sign-out and withdraw. The push token and any signup
/// draft belong to the device, not the member.
const AUTH_SLOTS: [TokenKey; 3] = [
    TokenKey::AccessToken,
    TokenKey::RefreshToken,
    TokenKey::UserAuthState,
];

pub fn persist_session(
    store: &dyn TokenStore,
    session: &SignInSession,
) -> Result<(), TokenStoreError> {
    apply_reissue(store, &session.tokens)?;
    save_json(store, TokenKey::UserAuthState, &session.user)?;
    debug!(login_id = %session.user.login_id, "session persisted");
    Ok(())
}

/// User saved by the last sign-in, if any.
pub fn restore_user(store: &dyn TokenStore) -> Result<Option<UserInfo>, TokenStoreError> {
    load_json(store, TokenKey::UserAuthState)
}

/// Overwrite the stored tokens. A pair without a refresh token keeps the
/// previous one.
pub fn apply_reissue(store: &dyn TokenStore, tokens: &TokenPair) -> Result<(), TokenStoreError> {
    store.save(TokenKey::AccessToken, &tokens.access_token)?;
    if let Some(refresh) = &tokens.refresh_token {
        store.save(TokenKey::RefreshToken, refresh)?;
    }
    Ok(())
}

pub fn clear_session(store: &dyn TokenStore) {
    for key in AUTH_SLOTS {
        store.delete(key);
    }
    debug!("session cleared");
}
