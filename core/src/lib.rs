//! Synchronous API client core for the Studing campus-notice service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! owning the network (host-does-IO pattern). A host either executes the
//! round-trip itself, or hands a `Transport` to a `Dispatcher` which then
//! drives build → send → parse for every repository call.
//!
//! # Design
//! - `StudingClient` is stateless apart from its base URL and the token
//!   store it reads bearer tokens from.
//! - Every backend call is an `Endpoint` value; the request builder only
//!   sees the trait, so the call catalogue lives in `endpoint` alone.
//! - Responses arrive in a `{status, message, data}` envelope. DTOs are
//!   decoded from `data` and mapped to `entity` values before they leave
//!   the repository layer.
//! - Types use owned `String` / `Vec` fields so they cross the FFI as JSON.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod dto;
pub mod endpoint;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod headers;
pub mod http;
pub mod mapper;
pub mod multipart;
pub mod repository;
pub mod section;
pub mod session;
pub mod signup;
pub mod stub;
pub mod token_store;
pub mod transport;
pub mod usecase;

pub use client::{parse_envelope, StudingClient};
pub use config::ClientConfig;
pub use dispatcher::Dispatcher;
pub use endpoint::{
    Endpoint, HomeEndpoint, MemberEndpoint, NoticeEndpoint, NotificationEndpoint, PartnerEndpoint,
    UniversityEndpoint,
};
pub use entity::{
    Announcement, Association, Bookmark, Department, HomeLogo, MemberRole, NoticeKind,
    SignInSession, Store, TokenPair, University, UserInfo, UserProfile,
};
pub use envelope::{Empty, Envelope, EnvelopeData};
pub use error::{AuthError, ConfigError, DraftError, NetworkError, TokenStoreError, TransportError};
pub use http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
pub use signup::{DraftField, SignupDraft};
pub use token_store::{MemoryTokenStore, TokenKey, TokenStore};
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
