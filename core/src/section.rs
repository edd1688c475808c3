//! Ordered sections of the notice detail screen.

use serde::Serialize;

use crate::entity::{Announcement, Association, NoticeKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHeader {
    pub association: Association,
    pub kind: NoticeKind,
    pub writer: String,
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBody {
    pub body: String,
    pub like_count: i64,
    pub save_count: i64,
    pub view_count: i64,
    pub is_liked: bool,
    pub is_saved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Section {
    Header(SectionHeader),
    ImageStrip(Vec<String>),
    Body(SectionBody),
}

/// Header, then the image strip when the notice has an image, then the body.
pub fn detail_sections(notice: &Announcement) -> Vec<Section> {
    let mut sections = Vec::with_capacity(3);
    sections.push(Section::Header(SectionHeader {
        association: notice.association,
        kind: notice.kind,
        writer: notice.writer.clone(),
        title: notice.title.clone(),
        date: notice.date.clone(),
    }));
    if let Some(url) = &notice.image_url {
        sections.push(Section::ImageStrip(vec![url.clone()]));
    }
    sections.push(Section::Body(SectionBody {
        body: notice.body.clone(),
        like_count: notice.like_count,
        save_count: notice.save_count,
        view_count: notice.view_count,
        is_liked: notice.is_liked,
        is_saved: notice.is_saved,
    }));
    sections
}
