use serde::Deserialize;

use super::{encode, EncodedPayload, Endpoint, NOTIFICATION_BASE};
use crate::dto::FcmTokenRequest;
use crate::headers::HeaderPolicy;
use crate::http::HttpMethod;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "name", content = "payload", rename_all = "camelCase")]
pub enum NotificationEndpoint {
    RegisterToken(FcmTokenRequest),
}

impl Endpoint for NotificationEndpoint {
    fn name(&self) -> &'static str {
        "notifications.token"
    }

    fn base_path(&self) -> &'static str {
        NOTIFICATION_BASE
    }

    fn path(&self) -> String {
        format!("{NOTIFICATION_BASE}/token")
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn header_policy(&self) -> HeaderPolicy {
        HeaderPolicy::AccessToken
    }

    fn payload(&self) -> EncodedPayload {
        match self {
            NotificationEndpoint::RegisterToken(request) => encode(request),
        }
    }
}
