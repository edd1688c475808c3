use serde::Deserialize;

use super::{encode, EncodedPayload, Endpoint, HOME_BASE};
use crate::dto::CategoryRequest;
use crate::headers::HeaderPolicy;
use crate::http::HttpMethod;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "name", content = "payload", rename_all = "camelCase")]
pub enum HomeEndpoint {
    Logo,
    UnreadCategories,
    UnreadNoticeCount(CategoryRequest),
    RecentNotices(CategoryRequest),
    SavedNotices,
    MyPage,
}

impl Endpoint for HomeEndpoint {
    fn name(&self) -> &'static str {
        match self {
            HomeEndpoint::Logo => "home.logo",
            HomeEndpoint::UnreadCategories => "home.unread_categories",
            HomeEndpoint::UnreadNoticeCount(_) => "home.unread_notice_count",
            HomeEndpoint::RecentNotices(_) => "home.recent_notices",
            HomeEndpoint::SavedNotices => "home.saved",
            HomeEndpoint::MyPage => "home.mypage",
        }
    }

    fn base_path(&self) -> &'static str {
        HOME_BASE
    }

    fn path(&self) -> String {
        let suffix = match self {
            HomeEndpoint::Logo => "logo",
            HomeEndpoint::UnreadCategories => "unread-categories",
            HomeEndpoint::UnreadNoticeCount(_) => "unread-notice-count",
            HomeEndpoint::RecentNotices(_) => "recent-notices",
            HomeEndpoint::SavedNotices => "save",
            HomeEndpoint::MyPage => "mypage",
        };
        format!("{HOME_BASE}/{suffix}")
    }

    fn method(&self) -> HttpMethod {
        match self {
            HomeEndpoint::UnreadNoticeCount(_) | HomeEndpoint::RecentNotices(_) => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    fn header_policy(&self) -> HeaderPolicy {
        HeaderPolicy::AccessToken
    }

    fn payload(&self) -> EncodedPayload {
        match self {
            HomeEndpoint::UnreadNoticeCount(request) | HomeEndpoint::RecentNotices(request) => {
                encode(request)
            }
            _ => None,
        }
    }
}
