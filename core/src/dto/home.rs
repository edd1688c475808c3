use serde::Deserialize;

use crate::envelope::envelope_data;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoDto {
    #[serde(default)]
    pub university_name: String,
    #[serde(default)]
    pub university_logo_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyPageDto {
    #[serde(default)]
    pub login_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub university_name: String,
    #[serde(default)]
    pub department_name: String,
    #[serde(default)]
    pub student_num: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Saved-notice row. Unlike the notice shapes it carries the author unit as
/// a bare `affiliation` name with no bracketed category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedNoticeDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub image: Option<String>,
}

envelope_data!(LogoDto, MyPageDto, SavedNoticeDto);
