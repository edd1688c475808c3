use serde::{Deserialize, Serialize};

use crate::entity::Association;
use crate::envelope::envelope_data;

/// Body of every "filter by category" call. The backend spells it `categorie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub categorie: String,
}

impl CategoryRequest {
    pub fn new(category: &str) -> Self {
        Self {
            categorie: category.to_string(),
        }
    }
}

impl From<Association> for CategoryRequest {
    fn from(association: Association) -> Self {
        Self::new(association.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoticeRequest {
    pub title: String,
    pub content: String,
    pub tag: String,
    #[serde(default, with = "crate::dto::base64_bytes::option")]
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDetailDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub writer_info: String,
    #[serde(default)]
    pub notice_like: i64,
    #[serde(default)]
    pub save_count: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub save_check: bool,
    #[serde(default)]
    pub like_check: bool,
    #[serde(default)]
    pub categorie: String,
}

/// List-row shape shared by the feed, category and unread endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeSummaryDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub writer_info: String,
    #[serde(default)]
    pub notice_like: i64,
    #[serde(default)]
    pub save_count: i64,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub categorie: String,
    #[serde(default)]
    pub save_check: bool,
    #[serde(default)]
    pub like_check: bool,
}

envelope_data!(NoticeDetailDto, NoticeSummaryDto);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_request_uses_backend_label() {
        let request = CategoryRequest::from(Association::College);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"categorie":"단과대"}"#
        );
    }

    #[test]
    fn detail_defaults_missing_optionals() {
        let dto: NoticeDetailDto = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(dto.id, 7);
        assert!(dto.writer_info.is_empty());
        assert!(dto.image.is_none());
        assert!(!dto.like_check);
    }

    #[test]
    fn create_without_image_serializes_null() {
        let request = CreateNoticeRequest {
            title: "t".to_string(),
            content: "c".to_string(),
            tag: "공지".to_string(),
            image: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["image"].is_null());
    }
}
