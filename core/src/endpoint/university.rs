use serde::Deserialize;

use super::{encode, EncodedPayload, Endpoint, UNIVERSITY_BASE};
use crate::dto::DepartmentRequest;
use crate::headers::HeaderPolicy;
use crate::http::HttpMethod;

/// Lookup data for the sign-up screens. Callable before sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "name", content = "payload", rename_all = "camelCase")]
pub enum UniversityEndpoint {
    Universities,
    Departments(DepartmentRequest),
}

impl Endpoint for UniversityEndpoint {
    fn name(&self) -> &'static str {
        match self {
            UniversityEndpoint::Universities => "university.list",
            UniversityEndpoint::Departments(_) => "university.departments",
        }
    }

    fn base_path(&self) -> &'static str {
        UNIVERSITY_BASE
    }

    fn path(&self) -> String {
        match self {
            UniversityEndpoint::Universities => format!("{UNIVERSITY_BASE}/university"),
            UniversityEndpoint::Departments(_) => format!("{UNIVERSITY_BASE}/department"),
        }
    }

    fn method(&self) -> HttpMethod {
        match self {
            UniversityEndpoint::Universities => HttpMethod::Get,
            UniversityEndpoint::Departments(_) => HttpMethod::Post,
        }
    }

    fn header_policy(&self) -> HeaderPolicy {
        HeaderPolicy::None
    }

    fn payload(&self) -> EncodedPayload {
        match self {
            UniversityEndpoint::Universities => None,
            UniversityEndpoint::Departments(request) => encode(request),
        }
    }
}
