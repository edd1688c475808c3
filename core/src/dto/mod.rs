//! Wire-format request and response objects.
//!
//! # Design
//! Field names follow the backend's camelCase JSON, including its spelling
//! quirks (`categorie`, `studentNum`). Response DTOs are never shown to
//! callers directly; `mapper` turns them into `entity` values.

pub mod home;
pub mod member;
pub mod notice;
pub mod notification;
pub mod partner;
pub mod university;

pub use home::{LogoDto, MyPageDto, SavedNoticeDto};
pub use member::{
    CheckIdRequest, LoginUserInfoDto, SignInRequest, SignInResponseDto, SignUpRequest, TokenPairDto,
};
pub use notice::{CategoryRequest, CreateNoticeRequest, NoticeDetailDto, NoticeSummaryDto};
pub use notification::FcmTokenRequest;
pub use partner::{PartnerDto, PartnerRequest};
pub use university::{DepartmentDto, DepartmentRequest, UniversityDto};

/// Serialize image bytes as standard base64, the same shape a JSON encoder
/// gives binary data, so multipart encoding can recover them by field name.
pub mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }

    /// `Option<Vec<u8>>` variant.
    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            bytes: &Option<Vec<u8>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match bytes {
                Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Vec<u8>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|encoded| STANDARD.decode(encoded).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
