//! Offline sign-in used by previews and UI tests.

use crate::dto::SignInRequest;
use crate::entity::{MemberRole, SignInSession, TokenPair, UserInfo};
use crate::error::AuthError;
use crate::repository::SignInRepository;

pub const STUB_LOGIN_ID: &str = "test";
pub const STUB_PASSWORD: &str = "123456";

/// Accepts exactly one credential pair and never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubSignInRepository;

impl SignInRepository for StubSignInRepository {
    fn sign_in(&self, request: &SignInRequest) -> Result<SignInSession, AuthError> {
        if request.login_id != STUB_LOGIN_ID || request.password != STUB_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(SignInSession {
            tokens: TokenPair {
                access_token: "stub-access-token".to_string(),
                refresh_token: Some("stub-refresh-token".to_string()),
            },
            user: UserInfo {
                id: 1,
                login_id: STUB_LOGIN_ID.to_string(),
                name: "Niro".to_string(),
                university: "Studing University".to_string(),
                department: "Computer Science".to_string(),
                role: MemberRole::User,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(login_id: &str, password: &str) -> SignInRequest {
        SignInRequest {
            login_id: login_id.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn known_pair_signs_in_as_niro() {
        let session = StubSignInRepository.sign_in(&request("test", "123456")).unwrap();
        assert_eq!(session.user.name, "Niro");
    }

    #[rstest]
    #[case("test", "wrong")]
    #[case("other", "123456")]
    #[case("", "")]
    fn anything_else_is_invalid(#[case] login_id: &str, #[case] password: &str) {
        assert_eq!(
            StubSignInRepository.sign_in(&request(login_id, password)),
            Err(AuthError::InvalidCredentials)
        );
    }
}
