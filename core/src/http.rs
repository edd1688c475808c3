//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `StudingClient` builds
//! `HttpRequest` values and parses `HttpResponse` values; whoever executes
//! the round-trip (a `Transport`, or a mobile host through the FFI) only has
//! to move bytes. Multipart bodies are kept structured until `to_bytes` so
//! tests can inspect individual parts.

use crate::multipart::MultipartForm;

/// HTTP method for a request. The backend never uses PUT or PATCH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Request body, already encoded for the wire except for multipart framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBody {
    Json(String),
    Multipart(MultipartForm),
}

impl HttpBody {
    /// Value for the `content-type` header.
    pub fn content_type(&self) -> String {
        match self {
            HttpBody::Json(_) => JSON_CONTENT_TYPE.to_string(),
            HttpBody::Multipart(form) => form.content_type(),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            HttpBody::Json(body) => body.as_bytes().to_vec(),
            HttpBody::Multipart(form) => form.encode(),
        }
    }
}

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<HttpBody>,
}

impl HttpRequest {
    /// First header value whose name matches `name` case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
