//! `multipart/form-data` encoding for sign-in, sign-up and notice creation.
//!
//! Payloads reach this module already flattened to a JSON object. Binary
//! fields travel through that object as base64 strings (see
//! `dto::base64_bytes`) and are decoded back into file parts here, so the
//! special-casing depends only on the field name and never on which request
//! type produced it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::NetworkError;

/// Field carrying the student-card photo uploaded at sign-up.
pub const STUDENT_CARD_IMAGE_FIELD: &str = "studentCardImage";

/// Field carrying the optional picture attached to a new notice.
pub const NOTICE_IMAGE_FIELD: &str = "image";

/// Field names that are sent as binary JPEG parts.
pub const BINARY_FIELDS: &[&str] = &[STUDENT_CARD_IMAGE_FIELD, NOTICE_IMAGE_FIELD];

const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// A single form part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Part {
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            filename: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        }
    }

    pub fn image(name: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            filename: Some(format!("{name}.jpg")),
            content_type: Some(IMAGE_CONTENT_TYPE.to_string()),
            data,
        }
    }

    pub fn is_binary(&self) -> bool {
        self.filename.is_some()
    }
}

/// An ordered list of parts plus the boundary that frames them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartForm {
    boundary: String,
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::with_boundary(&format!("studing.boundary.{}", Uuid::new_v4().simple()))
    }

    pub fn with_boundary(boundary: &str) -> Self {
        Self {
            boundary: boundary.to_string(),
            parts: Vec::new(),
        }
    }

    /// Build a form from a flattened payload.
    ///
    /// Keys are visited in map order. `null` values are skipped so optional
    /// request fields simply disappear from the form.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, NetworkError> {
        let mut form = Self::new();
        for (name, value) in fields {
            if let Some(part) = field_part(name, value)? {
                form.push(part);
            }
        }
        Ok(form)
    }

    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.name == name)
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Serialize to the RFC 7578 wire format.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for part in &self.parts {
            out.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            let disposition = match &part.filename {
                Some(filename) => format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{filename}\"\r\n",
                    part.name
                ),
                None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name),
            };
            out.extend_from_slice(disposition.as_bytes());
            if let Some(content_type) = &part.content_type {
                out.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
            }
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(&part.data);
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        out
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

fn field_part(name: &str, value: &Value) -> Result<Option<Part>, NetworkError> {
    if BINARY_FIELDS.contains(&name) {
        return match value {
            Value::Null => Ok(None),
            Value::String(encoded) => {
                let data = STANDARD.decode(encoded).map_err(|e| {
                    NetworkError::UrlEncoding(format!("field `{name}` is not base64: {e}"))
                })?;
                Ok(Some(Part::image(name, data)))
            }
            other => Err(NetworkError::UrlEncoding(format!(
                "field `{name}` must carry image bytes, got {other}"
            ))),
        };
    }

    let text = match value {
        Value::Null => return Ok(None),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested => nested.to_string(),
    };
    Ok(Some(Part::text(name, &text)))
}
