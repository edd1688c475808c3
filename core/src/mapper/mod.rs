//! DTO to entity mapping.
//!
//! Every mapping is total: malformed optional data degrades to an empty
//! string or the default category instead of failing.

pub mod affiliation;
pub mod date;

use uuid::Uuid;

use crate::dto::{
    DepartmentDto, LoginUserInfoDto, LogoDto, MyPageDto, NoticeDetailDto, NoticeSummaryDto,
    PartnerDto, SavedNoticeDto, SignInResponseDto, TokenPairDto, UniversityDto,
};
use crate::entity::{
    Announcement, Bookmark, Department, HomeLogo, MemberRole, NoticeKind, SignInSession, Store,
    TokenPair, University, UserInfo, UserProfile,
};

use self::affiliation::{classify_by_suffix, parse_bracketed};
use self::date::format_notice_date;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<NoticeDetailDto> for Announcement {
    fn from(dto: NoticeDetailDto) -> Self {
        let (writer, association) = parse_bracketed(&dto.writer_info);
        Self {
            uid: Uuid::new_v4(),
            id: dto.id,
            association,
            kind: NoticeKind::from_tag(&dto.categorie),
            title: dto.title,
            body: dto.content,
            writer,
            date: format_notice_date(&dto.created_at),
            like_count: dto.notice_like,
            save_count: dto.save_count,
            view_count: dto.view_count,
            is_liked: dto.like_check,
            is_saved: dto.save_check,
            image_url: non_empty(dto.image),
        }
    }
}

impl From<NoticeSummaryDto> for Announcement {
    fn from(dto: NoticeSummaryDto) -> Self {
        let (writer, association) = parse_bracketed(&dto.writer_info);
        Self {
            uid: Uuid::new_v4(),
            id: dto.id,
            association,
            kind: NoticeKind::from_tag(&dto.categorie),
            title: dto.title,
            body: dto.content,
            writer,
            date: format_notice_date(&dto.created_at),
            like_count: dto.notice_like,
            save_count: dto.save_count,
            view_count: dto.view_count,
            is_liked: dto.like_check,
            is_saved: dto.save_check,
            image_url: non_empty(dto.image),
        }
    }
}

impl From<SavedNoticeDto> for Bookmark {
    fn from(dto: SavedNoticeDto) -> Self {
        Self {
            uid: Uuid::new_v4(),
            notice_id: dto.id,
            association: classify_by_suffix(&dto.affiliation),
            writer: dto.affiliation,
            title: dto.title,
            body: dto.content,
            date: format_notice_date(&dto.created_at),
            image_url: non_empty(dto.image),
            is_checked: false,
        }
    }
}

impl From<PartnerDto> for Store {
    fn from(dto: PartnerDto) -> Self {
        Self {
            uid: Uuid::new_v4(),
            id: dto.id,
            name: dto.partner_name,
            category: dto.category,
            description: dto.partner_description,
            address: dto.partner_address,
            latitude: dto.latitude,
            longitude: dto.longitude,
            logo_url: non_empty(dto.partner_logo),
            is_expanded: false,
        }
    }
}

impl From<LoginUserInfoDto> for UserInfo {
    fn from(dto: LoginUserInfoDto) -> Self {
        Self {
            id: dto.id,
            login_id: dto.login_id,
            name: dto.name,
            university: dto.university_name.unwrap_or_default(),
            department: dto.department_name.unwrap_or_default(),
            role: dto
                .role
                .as_deref()
                .map_or(MemberRole::Unknown, MemberRole::from_code),
        }
    }
}

impl From<TokenPairDto> for TokenPair {
    fn from(dto: TokenPairDto) -> Self {
        Self {
            access_token: dto.access_token,
            refresh_token: non_empty(dto.refresh_token),
        }
    }
}

impl From<SignInResponseDto> for SignInSession {
    fn from(dto: SignInResponseDto) -> Self {
        Self {
            tokens: TokenPair {
                access_token: dto.access_token,
                refresh_token: non_empty(dto.refresh_token),
            },
            user: dto.login_user_info.into(),
        }
    }
}

impl From<MyPageDto> for UserProfile {
    fn from(dto: MyPageDto) -> Self {
        Self {
            login_id: dto.login_id,
            name: dto.name,
            university: dto.university_name,
            department: dto.department_name,
            student_number: dto.student_num,
            role: dto
                .role
                .as_deref()
                .map_or(MemberRole::Unknown, MemberRole::from_code),
        }
    }
}

impl From<LogoDto> for HomeLogo {
    fn from(dto: LogoDto) -> Self {
        Self {
            university_name: dto.university_name,
            logo_url: non_empty(dto.university_logo_image),
        }
    }
}

impl From<UniversityDto> for University {
    fn from(dto: UniversityDto) -> Self {
        Self {
            uid: Uuid::new_v4(),
            name: dto.university_name,
        }
    }
}

impl From<DepartmentDto> for Department {
    fn from(dto: DepartmentDto) -> Self {
        Self {
            uid: Uuid::new_v4(),
            name: dto.department_name,
        }
    }
}

/// Map every element of a decoded list.
pub fn map_all<D, E: From<D>>(items: Vec<D>) -> Vec<E> {
    items.into_iter().map(E::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Association;

    fn detail(writer_info: &str) -> NoticeDetailDto {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "t",
            "content": "c",
            "writerInfo": writer_info,
            "noticeLike": 2,
            "saveCount": 3,
            "image": null,
            "createdAt": "2024-01-01T00:00:00",
            "viewCount": 9,
            "saveCheck": true,
            "likeCheck": false,
            "categorie": "공지"
        }))
        .unwrap()
    }

    #[test]
    fn detail_maps_every_field() {
        let notice = Announcement::from(detail("총학생회[총학생회]"));
        assert_eq!(notice.id, 1);
        assert_eq!(notice.association, Association::GeneralStudents);
        assert_eq!(notice.kind, NoticeKind::Announcement);
        assert_eq!(notice.writer, "총학생회");
        assert_eq!(notice.date, "2024년 01월 01일");
        assert_eq!(notice.like_count, 2);
        assert_eq!(notice.save_count, 3);
        assert_eq!(notice.view_count, 9);
        assert!(notice.is_saved);
        assert!(!notice.is_liked);
        assert!(notice.image_url.is_none());
    }

    #[test]
    fn college_writer_maps_to_college() {
        let notice = Announcement::from(detail("단과대[단과대]"));
        assert_eq!(notice.association, Association::College);
        assert_eq!(notice.writer, "단과대");
    }

    #[test]
    fn each_mapping_gets_a_fresh_uid() {
        let a = Announcement::from(detail("학과[학과]"));
        let b = Announcement::from(detail("학과[학과]"));
        assert_ne!(a.uid, b.uid);
    }

    #[test]
    fn bookmark_uses_suffix_rule() {
        let dto: SavedNoticeDto = serde_json::from_value(serde_json::json!({
            "id": 4,
            "title": "t",
            "affiliation": "컴퓨터공학과",
            "createdAt": "bad",
            "image": ""
        }))
        .unwrap();
        let bookmark = Bookmark::from(dto);
        assert_eq!(bookmark.association, Association::Major);
        assert_eq!(bookmark.writer, "컴퓨터공학과");
        assert_eq!(bookmark.date, "");
        assert!(bookmark.image_url.is_none());
        assert!(!bookmark.is_checked);
    }

    #[test]
    fn user_info_defaults_missing_fields() {
        let dto: LoginUserInfoDto =
            serde_json::from_str(r#"{"id":1,"loginId":"test","name":"Niro"}"#).unwrap();
        let user = UserInfo::from(dto);
        assert_eq!(user.university, "");
        assert_eq!(user.role, MemberRole::Unknown);
    }

    #[test]
    fn store_starts_collapsed() {
        let dto: PartnerDto = serde_json::from_str(
            r#"{"id":3,"partnerName":"Cafe","category":"카페","latitude":37.5,"longitude":127.0,"partnerLogo":"https://img/logo.png"}"#,
        )
        .unwrap();
        let store = Store::from(dto);
        assert_eq!(store.name, "Cafe");
        assert!(!store.is_expanded);
        assert_eq!(store.logo_url.as_deref(), Some("https://img/logo.png"));
    }
}
