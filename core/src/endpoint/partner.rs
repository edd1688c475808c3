use serde::Deserialize;

use super::{encode, EncodedPayload, Endpoint, PARTNER_BASE};
use crate::dto::PartnerRequest;
use crate::headers::HeaderPolicy;
use crate::http::HttpMethod;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "name", content = "payload", rename_all = "camelCase")]
pub enum PartnerEndpoint {
    Stores(PartnerRequest),
}

impl Endpoint for PartnerEndpoint {
    fn name(&self) -> &'static str {
        "partner.stores"
    }

    fn base_path(&self) -> &'static str {
        PARTNER_BASE
    }

    fn path(&self) -> String {
        PARTNER_BASE.to_string()
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn header_policy(&self) -> HeaderPolicy {
        HeaderPolicy::AccessToken
    }

    fn payload(&self) -> EncodedPayload {
        match self {
            PartnerEndpoint::Stores(request) => encode(request),
        }
    }
}
