//! Stateless request builder and response parser for the Studing API.
//!
//! # Design
//! `StudingClient` holds only the base URL and a header resolver. Every call
//! is split into `build_request`, which turns an `Endpoint` into an
//! `HttpRequest`, and `parse_response`, which unwraps the envelope of an
//! `HttpResponse`. The round-trip in between belongs to the caller: a
//! `Transport` through `Dispatcher`, or a host application through the FFI.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::endpoint::{BodyEncoding, Endpoint};
use crate::envelope::{Envelope, EnvelopeData};
use crate::error::NetworkError;
use crate::headers::HeaderResolver;
use crate::http::{HttpBody, HttpRequest, HttpResponse, JSON_CONTENT_TYPE};
use crate::multipart::MultipartForm;
use crate::token_store::TokenStore;

#[derive(Debug, Clone)]
pub struct StudingClient {
    base_url: String,
    headers: HeaderResolver,
}

impl StudingClient {
    pub fn new(base_url: &str, store: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: HeaderResolver::new(store),
        }
    }

    pub fn from_config(config: &ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        Self::new(&config.base_url, store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        self.headers.store()
    }

    /// Turn a descriptor into a ready-to-send request.
    ///
    /// The payload is flattened to a JSON object first; both encodings read
    /// from that object.
    pub fn build_request<E: Endpoint + ?Sized>(
        &self,
        endpoint: &E,
    ) -> Result<HttpRequest, NetworkError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let fields = flatten_payload(endpoint)?;

        let body = match (fields, endpoint.encoding()) {
            (None, _) => None,
            (Some(fields), BodyEncoding::Json) => {
                let json = serde_json::to_string(&fields)
                    .map_err(|e| NetworkError::UrlEncoding(e.to_string()))?;
                Some(HttpBody::Json(json))
            }
            (Some(fields), BodyEncoding::Multipart) => {
                Some(HttpBody::Multipart(MultipartForm::from_fields(&fields)?))
            }
        };

        let content_type = body
            .as_ref()
            .map_or_else(|| JSON_CONTENT_TYPE.to_string(), HttpBody::content_type);
        let headers = self.headers.resolve(endpoint.header_policy(), &content_type);

        debug!(
            endpoint = endpoint.name(),
            method = endpoint.method().as_str(),
            url = %url,
            encoding = ?endpoint.encoding(),
            "built request"
        );

        Ok(HttpRequest {
            method: endpoint.method(),
            url,
            headers,
            body,
        })
    }

    /// Unwrap the envelope of a response.
    ///
    /// Any non-2xx status, undecodable body, or absent `data` for a type
    /// that requires content is `NetworkError::Unknown`.
    pub fn parse_response<T: EnvelopeData>(&self, response: HttpResponse) -> Result<T, NetworkError> {
        parse_envelope(response)
    }
}

/// Free-standing form of `StudingClient::parse_response`.
pub fn parse_envelope<T: EnvelopeData>(response: HttpResponse) -> Result<T, NetworkError> {
    if !response.is_success() {
        warn!(status = response.status, "request rejected by server");
        return Err(NetworkError::Unknown(format!(
            "HTTP {}: {}",
            response.status, response.body
        )));
    }

    let envelope: Envelope<T> = serde_json::from_str(&response.body).map_err(|e| {
        warn!(error = %e, "response body is not a valid envelope");
        NetworkError::Unknown(format!("envelope decode failed: {e}"))
    })?;
    debug!(status = envelope.status, message = %envelope.message, "decoded envelope");

    match envelope.data {
        Some(data) => Ok(data),
        None => T::absent().ok_or_else(|| {
            NetworkError::Unknown(format!(
                "envelope carried no data (status {}, message {:?})",
                envelope.status, envelope.message
            ))
        }),
    }
}

fn flatten_payload<E: Endpoint + ?Sized>(
    endpoint: &E,
) -> Result<Option<Map<String, Value>>, NetworkError> {
    match endpoint.payload() {
        None => Ok(None),
        Some(Err(e)) => Err(NetworkError::UrlEncoding(e.to_string())),
        Some(Ok(Value::Object(fields))) => Ok(Some(fields)),
        Some(Ok(other)) => Err(NetworkError::UrlEncoding(format!(
            "payload of {} is not an object: {other}",
            endpoint.name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{CategoryRequest, CheckIdRequest, NoticeDetailDto, SignUpRequest};
    use crate::endpoint::{EncodedPayload, HomeEndpoint, MemberEndpoint, NoticeEndpoint};
    use crate::envelope::Empty;
    use crate::headers::HeaderPolicy;
    use crate::http::HttpMethod;
    use crate::multipart::STUDENT_CARD_IMAGE_FIELD;
    use crate::token_store::{MemoryTokenStore, TokenKey};

    fn client() -> StudingClient {
        let store = MemoryTokenStore::new();
        store.save(TokenKey::AccessToken, "access-1").unwrap();
        StudingClient::new("http://localhost:3000", Arc::new(store))
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn get_without_payload_has_no_body() {
        let req = client().build_request(&NoticeEndpoint::Detail(3)).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/notices/3");
        assert!(req.body.is_none());
        assert_eq!(req.header("authorization"), Some("Bearer access-1"));
        assert_eq!(req.header("content-type"), Some("application/json"));
    }

    #[test]
    fn json_payload_becomes_json_body() {
        let endpoint = HomeEndpoint::RecentNotices(CategoryRequest::new("학과"));
        let req = client().build_request(&endpoint).unwrap();
        let Some(HttpBody::Json(body)) = req.body else {
            panic!("expected json body");
        };
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["categorie"], "학과");
    }

    #[test]
    fn public_endpoint_sends_no_authorization() {
        let endpoint = MemberEndpoint::CheckId(CheckIdRequest {
            login_id: "test".to_string(),
        });
        let req = client().build_request(&endpoint).unwrap();
        assert!(req.header("authorization").is_none());
    }

    #[test]
    fn sign_up_attaches_student_card_as_binary_part() {
        let endpoint = MemberEndpoint::SignUp(SignUpRequest {
            login_id: "niro".to_string(),
            password: "pw".to_string(),
            admission_number: "2021".to_string(),
            name: "Niro".to_string(),
            student_num: "20211234".to_string(),
            university_name: "Studing University".to_string(),
            department_name: "Computer Science".to_string(),
            student_card_image: vec![0xFF, 0xD8, 0xFF, 0xE0],
        });
        let req = client().build_request(&endpoint).unwrap();
        let Some(HttpBody::Multipart(form)) = &req.body else {
            panic!("expected multipart body");
        };
        let image = form.part(STUDENT_CARD_IMAGE_FIELD).unwrap();
        assert_eq!(image.data, vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(image.filename.as_deref(), Some("studentCardImage.jpg"));
        assert_eq!(form.part("name").unwrap().data, b"Niro");
        assert!(req
            .header("content-type")
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
    }

    struct ScalarPayload;

    impl Endpoint for ScalarPayload {
        fn name(&self) -> &'static str {
            "test.scalar"
        }
        fn base_path(&self) -> &'static str {
            ""
        }
        fn path(&self) -> String {
            "/scalar".to_string()
        }
        fn method(&self) -> HttpMethod {
            HttpMethod::Post
        }
        fn header_policy(&self) -> HeaderPolicy {
            HeaderPolicy::None
        }
        fn payload(&self) -> EncodedPayload {
            Some(Ok(Value::from(5)))
        }
    }

    #[test]
    fn non_object_payload_is_url_encoding_error() {
        let err = client().build_request(&ScalarPayload).unwrap_err();
        assert!(matches!(err, NetworkError::UrlEncoding(_)));
    }

    #[test]
    fn empty_envelope_is_success_for_empty_type() {
        let ack: Empty = client()
            .parse_response(response(200, r#"{"status":200,"message":"ok"}"#))
            .unwrap();
        assert_eq!(ack, Empty);
    }

    #[test]
    fn empty_envelope_is_unknown_for_content_type() {
        let err = client()
            .parse_response::<NoticeDetailDto>(response(200, r#"{"status":200,"message":"ok"}"#))
            .unwrap_err();
        assert!(matches!(err, NetworkError::Unknown(_)));
    }

    #[test]
    fn non_success_status_is_unknown() {
        let err = client()
            .parse_response::<Empty>(response(409, r#"{"status":409,"message":"duplicate"}"#))
            .unwrap_err();
        assert!(matches!(err, NetworkError::Unknown(_)));
    }

    #[test]
    fn malformed_body_is_unknown() {
        let err = client()
            .parse_response::<Vec<NoticeDetailDto>>(response(200, "<html>"))
            .unwrap_err();
        assert!(matches!(err, NetworkError::Unknown(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = StudingClient::new("http://localhost:3000/", Arc::new(MemoryTokenStore::new()));
        let req = client.build_request(&NoticeEndpoint::All).unwrap();
        assert_eq!(req.url, "http://localhost:3000/notices/all");
    }
}
