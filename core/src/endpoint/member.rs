use serde::Deserialize;

use super::{encode, BodyEncoding, EncodedPayload, Endpoint, MEMBER_BASE};
use crate::dto::{CheckIdRequest, SignInRequest, SignUpRequest};
use crate::headers::HeaderPolicy;
use crate::http::HttpMethod;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "name", content = "payload", rename_all = "camelCase")]
pub enum MemberEndpoint {
    SignIn(SignInRequest),
    SignUp(SignUpRequest),
    CheckId(CheckIdRequest),
    Withdraw,
    Reissue,
}

impl Endpoint for MemberEndpoint {
    fn name(&self) -> &'static str {
        match self {
            MemberEndpoint::SignIn(_) => "member.signin",
            MemberEndpoint::SignUp(_) => "member.signup",
            MemberEndpoint::CheckId(_) => "member.checkid",
            MemberEndpoint::Withdraw => "member.withdraw",
            MemberEndpoint::Reissue => "member.reissue",
        }
    }

    fn base_path(&self) -> &'static str {
        MEMBER_BASE
    }

    fn path(&self) -> String {
        let suffix = match self {
            MemberEndpoint::SignIn(_) => "signin",
            MemberEndpoint::SignUp(_) => "signup",
            MemberEndpoint::CheckId(_) => "checkid",
            MemberEndpoint::Withdraw => "withdraw",
            MemberEndpoint::Reissue => "reissue",
        };
        format!("{MEMBER_BASE}/{suffix}")
    }

    fn method(&self) -> HttpMethod {
        match self {
            MemberEndpoint::Withdraw => HttpMethod::Delete,
            _ => HttpMethod::Post,
        }
    }

    fn encoding(&self) -> BodyEncoding {
        match self {
            MemberEndpoint::SignIn(_) | MemberEndpoint::SignUp(_) => BodyEncoding::Multipart,
            _ => BodyEncoding::Json,
        }
    }

    fn header_policy(&self) -> HeaderPolicy {
        match self {
            MemberEndpoint::Withdraw => HeaderPolicy::AccessToken,
            MemberEndpoint::Reissue => HeaderPolicy::RefreshToken,
            _ => HeaderPolicy::None,
        }
    }

    fn payload(&self) -> EncodedPayload {
        match self {
            MemberEndpoint::SignIn(request) => encode(request),
            MemberEndpoint::SignUp(request) => encode(request),
            MemberEndpoint::CheckId(request) => encode(request),
            MemberEndpoint::Withdraw | MemberEndpoint::Reissue => None,
        }
    }
}
