//! Domain entities handed to callers.
//!
//! # Design
//! Entities are built only by `mapper` from decoded DTOs and are otherwise
//! immutable, except for the UI-state flags toggled by the presentation
//! layer. Rows shown in lists carry a synthetic `uid` so diffing does not
//! depend on backend ids being unique across screens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Campus unit that authored a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Association {
    GeneralStudents,
    College,
    Major,
}

impl Association {
    pub const ALL: [Association; 3] = [
        Association::GeneralStudents,
        Association::College,
        Association::Major,
    ];

    /// Label the backend uses in brackets and category filters.
    pub fn label(self) -> &'static str {
        match self {
            Association::GeneralStudents => "총학생회",
            Association::College => "단과대",
            Association::Major => "학과",
        }
    }

    /// Map a category label. Unknown labels fall back to the student body.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "단과대" => Association::College,
            "학과" => Association::Major,
            _ => Association::GeneralStudents,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeKind {
    Announcement,
    Event,
}

impl NoticeKind {
    pub const ANNOUNCEMENT_TAG: &'static str = "공지";
    pub const EVENT_TAG: &'static str = "행사";

    pub fn from_tag(tag: &str) -> Self {
        if tag == Self::ANNOUNCEMENT_TAG {
            NoticeKind::Announcement
        } else {
            NoticeKind::Event
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            NoticeKind::Announcement => Self::ANNOUNCEMENT_TAG,
            NoticeKind::Event => Self::EVENT_TAG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberRole {
    User,
    Council,
    Admin,
    Unknown,
}

impl MemberRole {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ROLE_USER" => MemberRole::User,
            "ROLE_COUNCIL" => MemberRole::Council,
            "ROLE_ADMIN" => MemberRole::Admin,
            _ => MemberRole::Unknown,
        }
    }

    /// Council members and admins may publish notices.
    pub fn can_publish(self) -> bool {
        matches!(self, MemberRole::Council | MemberRole::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub uid: Uuid,
    pub id: i64,
    pub association: Association,
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
    pub writer: String,
    pub date: String,
    pub like_count: i64,
    pub save_count: i64,
    pub view_count: i64,
    pub is_liked: bool,
    pub is_saved: bool,
    pub image_url: Option<String>,
}

impl Announcement {
    pub fn toggle_like(&mut self) {
        self.is_liked = !self.is_liked;
        self.like_count = step_counter(self.like_count, self.is_liked);
    }

    pub fn toggle_save(&mut self) {
        self.is_saved = !self.is_saved;
        self.save_count = step_counter(self.save_count, self.is_saved);
    }
}

fn step_counter(count: i64, increment: bool) -> i64 {
    if increment {
        count.saturating_add(1)
    } else {
        count.saturating_sub(1).max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub uid: Uuid,
    pub notice_id: i64,
    pub association: Association,
    pub writer: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub image_url: Option<String>,
    pub is_checked: bool,
}

impl Bookmark {
    pub fn toggle_checked(&mut self) {
        self.is_checked = !self.is_checked;
    }
}

/// Partner store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub uid: Uuid,
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub logo_url: Option<String>,
    pub is_expanded: bool,
}

impl Store {
    pub fn toggle_expanded(&mut self) {
        self.is_expanded = !self.is_expanded;
    }
}

/// Signed-in member. Persisted as JSON in the user-auth-state slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub login_id: String,
    pub name: String,
    pub university: String,
    pub department: String,
    pub role: MemberRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInSession {
    pub tokens: TokenPair,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub login_id: String,
    pub name: String,
    pub university: String,
    pub department: String,
    pub student_number: String,
    pub role: MemberRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeLogo {
    pub university_name: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub uid: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub uid: Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(like_count: i64, is_liked: bool) -> Announcement {
        Announcement {
            uid: Uuid::nil(),
            id: 1,
            association: Association::Major,
            kind: NoticeKind::Event,
            title: String::new(),
            body: String::new(),
            writer: String::new(),
            date: String::new(),
            like_count,
            save_count: 0,
            view_count: 0,
            is_liked,
            is_saved: false,
            image_url: None,
        }
    }

    #[test]
    fn toggle_like_moves_counter_with_flag() {
        let mut notice = announcement(4, false);
        notice.toggle_like();
        assert!(notice.is_liked);
        assert_eq!(notice.like_count, 5);
        notice.toggle_like();
        assert!(!notice.is_liked);
        assert_eq!(notice.like_count, 4);
    }

    #[test]
    fn unlike_never_goes_negative() {
        let mut notice = announcement(0, true);
        notice.toggle_like();
        assert_eq!(notice.like_count, 0);
    }

    #[test]
    fn toggle_save_tracks_saved_flag() {
        let mut notice = announcement(0, false);
        notice.toggle_save();
        assert!(notice.is_saved);
        assert_eq!(notice.save_count, 1);
    }

    #[test]
    fn notice_kind_from_tag() {
        assert_eq!(NoticeKind::from_tag("공지"), NoticeKind::Announcement);
        assert_eq!(NoticeKind::from_tag("행사"), NoticeKind::Event);
        assert_eq!(NoticeKind::from_tag(""), NoticeKind::Event);
    }

    #[test]
    fn roles_map_from_backend_codes() {
        assert_eq!(MemberRole::from_code("ROLE_ADMIN"), MemberRole::Admin);
        assert_eq!(MemberRole::from_code("ROLE_GUEST"), MemberRole::Unknown);
        assert!(MemberRole::Council.can_publish());
        assert!(!MemberRole::User.can_publish());
    }
}
