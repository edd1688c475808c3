//! Static description of every backend call.
//!
//! # Design
//! One enum per feature area; each variant is one call and carries its
//! request DTO when it has one. The `Endpoint` trait is the only thing the
//! request builder looks at, so adding a call never touches dispatch code.

mod home;
mod member;
mod notice;
mod notification;
mod partner;
mod university;

pub use home::HomeEndpoint;
pub use member::MemberEndpoint;
pub use notice::NoticeEndpoint;
pub use notification::NotificationEndpoint;
pub use partner::PartnerEndpoint;
pub use university::UniversityEndpoint;

use serde::Serialize;
use serde_json::Value;

use crate::headers::HeaderPolicy;
use crate::http::HttpMethod;

pub const MEMBER_BASE: &str = "/member";
pub const UNIVERSITY_BASE: &str = "/universityData";
pub const HOME_BASE: &str = "/home";
pub const NOTICE_BASE: &str = "/notices";
pub const PARTNER_BASE: &str = "/partner";
pub const NOTIFICATION_BASE: &str = "/notifications";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyEncoding {
    #[default]
    Json,
    Multipart,
}

/// Encoded request payload, or the serializer error that prevented it.
pub type EncodedPayload = Option<Result<Value, serde_json::Error>>;

pub trait Endpoint {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn base_path(&self) -> &'static str;

    /// Path relative to the configured base URL, starting with `/`.
    fn path(&self) -> String;

    fn method(&self) -> HttpMethod;

    fn encoding(&self) -> BodyEncoding {
        BodyEncoding::Json
    }

    fn header_policy(&self) -> HeaderPolicy;

    fn payload(&self) -> EncodedPayload {
        None
    }
}

pub(crate) fn encode<T: Serialize>(value: &T) -> EncodedPayload {
    Some(serde_json::to_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::*;
    use crate::multipart::BINARY_FIELDS;
    use rstest::rstest;

    fn sign_up() -> SignUpRequest {
        SignUpRequest {
            login_id: "niro".to_string(),
            password: "pw".to_string(),
            admission_number: "2021".to_string(),
            name: "Niro".to_string(),
            student_num: "20211234".to_string(),
            university_name: "Studing University".to_string(),
            department_name: "Computer Science".to_string(),
            student_card_image: vec![1, 2, 3],
        }
    }

    fn category() -> CategoryRequest {
        CategoryRequest::new("학과")
    }

    fn catalogue() -> Vec<Box<dyn Endpoint>> {
        vec![
            Box::new(MemberEndpoint::SignIn(SignInRequest {
                login_id: "test".to_string(),
                password: "123456".to_string(),
            })),
            Box::new(MemberEndpoint::SignUp(sign_up())),
            Box::new(MemberEndpoint::CheckId(CheckIdRequest {
                login_id: "test".to_string(),
            })),
            Box::new(MemberEndpoint::Withdraw),
            Box::new(MemberEndpoint::Reissue),
            Box::new(UniversityEndpoint::Universities),
            Box::new(UniversityEndpoint::Departments(DepartmentRequest {
                university_name: "Studing University".to_string(),
            })),
            Box::new(HomeEndpoint::Logo),
            Box::new(HomeEndpoint::UnreadCategories),
            Box::new(HomeEndpoint::UnreadNoticeCount(category())),
            Box::new(HomeEndpoint::RecentNotices(category())),
            Box::new(HomeEndpoint::SavedNotices),
            Box::new(HomeEndpoint::MyPage),
            Box::new(NoticeEndpoint::All),
            Box::new(NoticeEndpoint::AllByCategory(category())),
            Box::new(NoticeEndpoint::SavedByCategory(category())),
            Box::new(NoticeEndpoint::ViewCheck(7)),
            Box::new(NoticeEndpoint::UnreadAll(category())),
            Box::new(NoticeEndpoint::Detail(7)),
            Box::new(NoticeEndpoint::Like(7)),
            Box::new(NoticeEndpoint::Unlike(7)),
            Box::new(NoticeEndpoint::Save(7)),
            Box::new(NoticeEndpoint::Unsave(7)),
            Box::new(NoticeEndpoint::Create(CreateNoticeRequest {
                title: "t".to_string(),
                content: "c".to_string(),
                tag: "공지".to_string(),
                image: Some(vec![9]),
            })),
            Box::new(PartnerEndpoint::Stores(PartnerRequest {
                category_name: "카페".to_string(),
            })),
            Box::new(NotificationEndpoint::RegisterToken(FcmTokenRequest {
                fcm_token: "fcm".to_string(),
            })),
        ]
    }

    #[rstest]
    #[case(MemberEndpoint::SignIn(SignInRequest { login_id: String::new(), password: String::new() }), HttpMethod::Post, "/member/signin")]
    #[case(MemberEndpoint::CheckId(CheckIdRequest { login_id: String::new() }), HttpMethod::Post, "/member/checkid")]
    #[case(MemberEndpoint::Withdraw, HttpMethod::Delete, "/member/withdraw")]
    #[case(MemberEndpoint::Reissue, HttpMethod::Post, "/member/reissue")]
    fn member_paths(#[case] endpoint: MemberEndpoint, #[case] method: HttpMethod, #[case] path: &str) {
        assert_eq!(endpoint.method(), method);
        assert_eq!(endpoint.path(), path);
    }

    #[rstest]
    #[case(NoticeEndpoint::All, HttpMethod::Get, "/notices/all")]
    #[case(NoticeEndpoint::AllByCategory(category()), HttpMethod::Post, "/notices/all-category")]
    #[case(NoticeEndpoint::SavedByCategory(category()), HttpMethod::Post, "/notices/save/save-category")]
    #[case(NoticeEndpoint::ViewCheck(12), HttpMethod::Post, "/notices/view-check/12")]
    #[case(NoticeEndpoint::UnreadAll(category()), HttpMethod::Post, "/notices/unread/all")]
    #[case(NoticeEndpoint::Detail(12), HttpMethod::Get, "/notices/12")]
    #[case(NoticeEndpoint::Like(12), HttpMethod::Post, "/notices/like/12")]
    #[case(NoticeEndpoint::Unlike(12), HttpMethod::Delete, "/notices/like/12")]
    #[case(NoticeEndpoint::Save(12), HttpMethod::Post, "/notices/save/12")]
    #[case(NoticeEndpoint::Unsave(12), HttpMethod::Delete, "/notices/save/12")]
    fn notice_paths(#[case] endpoint: NoticeEndpoint, #[case] method: HttpMethod, #[case] path: &str) {
        assert_eq!(endpoint.method(), method);
        assert_eq!(endpoint.path(), path);
    }

    #[test]
    fn every_path_starts_with_its_base() {
        for endpoint in catalogue() {
            assert!(
                endpoint.path().starts_with(endpoint.base_path()),
                "{}: {} outside {}",
                endpoint.name(),
                endpoint.path(),
                endpoint.base_path()
            );
        }
    }

    #[test]
    fn get_and_delete_carry_no_payload() {
        for endpoint in catalogue() {
            if matches!(endpoint.method(), HttpMethod::Get | HttpMethod::Delete) {
                assert!(endpoint.payload().is_none(), "{}", endpoint.name());
            }
        }
    }

    #[test]
    fn binary_fields_only_travel_as_multipart() {
        for endpoint in catalogue() {
            let Some(Ok(Value::Object(fields))) = endpoint.payload() else {
                continue;
            };
            let has_binary = fields.keys().any(|key| BINARY_FIELDS.contains(&key.as_str()));
            if has_binary {
                assert_eq!(endpoint.encoding(), BodyEncoding::Multipart, "{}", endpoint.name());
            }
        }
    }

    #[test]
    fn multipart_is_limited_to_uploads() {
        let multipart: Vec<&str> = catalogue()
            .iter()
            .filter(|endpoint| endpoint.encoding() == BodyEncoding::Multipart)
            .map(|endpoint| endpoint.name())
            .collect();
        assert_eq!(multipart, vec!["member.signin", "member.signup", "notices.create"]);
    }

    #[test]
    fn public_calls_send_no_token() {
        let public: Vec<&str> = catalogue()
            .iter()
            .filter(|endpoint| endpoint.header_policy() == HeaderPolicy::None)
            .map(|endpoint| endpoint.name())
            .collect();
        assert_eq!(
            public,
            vec![
                "member.signin",
                "member.signup",
                "member.checkid",
                "university.list",
                "university.departments",
            ]
        );
        assert_eq!(MemberEndpoint::Reissue.header_policy(), HeaderPolicy::RefreshToken);
    }

    #[test]
    fn endpoints_deserialize_from_tagged_json() {
        let endpoint: NoticeEndpoint =
            serde_json::from_str(r#"{"name":"detail","payload":42}"#).unwrap();
        assert_eq!(endpoint, NoticeEndpoint::Detail(42));

        let endpoint: HomeEndpoint =
            serde_json::from_str(r#"{"name":"recentNotices","payload":{"categorie":"학과"}}"#)
                .unwrap();
        assert_eq!(endpoint, HomeEndpoint::RecentNotices(category()));
    }
}
