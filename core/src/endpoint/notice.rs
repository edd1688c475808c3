use serde::Deserialize;

use super::{encode, BodyEncoding, EncodedPayload, Endpoint, NOTICE_BASE};
use crate::dto::{CategoryRequest, CreateNoticeRequest};
use crate::headers::HeaderPolicy;
use crate::http::HttpMethod;

/// Notice feed, detail and reactions. Ids are backend notice ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "name", content = "payload", rename_all = "camelCase")]
pub enum NoticeEndpoint {
    All,
    AllByCategory(CategoryRequest),
    SavedByCategory(CategoryRequest),
    ViewCheck(i64),
    UnreadAll(CategoryRequest),
    Detail(i64),
    Like(i64),
    Unlike(i64),
    Save(i64),
    Unsave(i64),
    Create(CreateNoticeRequest),
}

impl Endpoint for NoticeEndpoint {
    fn name(&self) -> &'static str {
        match self {
            NoticeEndpoint::All => "notices.all",
            NoticeEndpoint::AllByCategory(_) => "notices.all_category",
            NoticeEndpoint::SavedByCategory(_) => "notices.save_category",
            NoticeEndpoint::ViewCheck(_) => "notices.view_check",
            NoticeEndpoint::UnreadAll(_) => "notices.unread_all",
            NoticeEndpoint::Detail(_) => "notices.detail",
            NoticeEndpoint::Like(_) => "notices.like",
            NoticeEndpoint::Unlike(_) => "notices.unlike",
            NoticeEndpoint::Save(_) => "notices.save",
            NoticeEndpoint::Unsave(_) => "notices.unsave",
            NoticeEndpoint::Create(_) => "notices.create",
        }
    }

    fn base_path(&self) -> &'static str {
        NOTICE_BASE
    }

    fn path(&self) -> String {
        match self {
            NoticeEndpoint::All => format!("{NOTICE_BASE}/all"),
            NoticeEndpoint::AllByCategory(_) => format!("{NOTICE_BASE}/all-category"),
            NoticeEndpoint::SavedByCategory(_) => format!("{NOTICE_BASE}/save/save-category"),
            NoticeEndpoint::ViewCheck(id) => format!("{NOTICE_BASE}/view-check/{id}"),
            NoticeEndpoint::UnreadAll(_) => format!("{NOTICE_BASE}/unread/all"),
            NoticeEndpoint::Detail(id) => format!("{NOTICE_BASE}/{id}"),
            NoticeEndpoint::Like(id) | NoticeEndpoint::Unlike(id) => {
                format!("{NOTICE_BASE}/like/{id}")
            }
            NoticeEndpoint::Save(id) | NoticeEndpoint::Unsave(id) => {
                format!("{NOTICE_BASE}/save/{id}")
            }
            NoticeEndpoint::Create(_) => format!("{NOTICE_BASE}/save"),
        }
    }

    fn method(&self) -> HttpMethod {
        match self {
            NoticeEndpoint::All | NoticeEndpoint::Detail(_) => HttpMethod::Get,
            NoticeEndpoint::Unlike(_) | NoticeEndpoint::Unsave(_) => HttpMethod::Delete,
            _ => HttpMethod::Post,
        }
    }

    fn encoding(&self) -> BodyEncoding {
        match self {
            NoticeEndpoint::Create(_) => BodyEncoding::Multipart,
            _ => BodyEncoding::Json,
        }
    }

    fn header_policy(&self) -> HeaderPolicy {
        HeaderPolicy::AccessToken
    }

    fn payload(&self) -> EncodedPayload {
        match self {
            NoticeEndpoint::AllByCategory(request)
            | NoticeEndpoint::SavedByCategory(request)
            | NoticeEndpoint::UnreadAll(request) => encode(request),
            NoticeEndpoint::Create(request) => encode(request),
            _ => None,
        }
    }
}
