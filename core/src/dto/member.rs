use serde::{Deserialize, Serialize};

use crate::envelope::envelope_data;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub login_id: String,
    pub password: String,
}

/// Final sign-up submission. Built from a completed `SignupDraft`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub login_id: String,
    pub password: String,
    pub admission_number: String,
    pub name: String,
    pub student_num: String,
    pub university_name: String,
    pub department_name: String,
    #[serde(with = "crate::dto::base64_bytes")]
    pub student_card_image: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIdRequest {
    pub login_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserInfoDto {
    pub id: i64,
    pub login_id: String,
    pub name: String,
    #[serde(default)]
    pub university_name: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponseDto {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub login_user_info: LoginUserInfoDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairDto {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

envelope_data!(SignInResponseDto, TokenPairDto);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_image_serializes_as_base64() {
        let request = SignUpRequest {
            login_id: "niro".to_string(),
            password: "pw".to_string(),
            admission_number: "2021".to_string(),
            name: "Niro".to_string(),
            student_num: "20211234".to_string(),
            university_name: "Studing University".to_string(),
            department_name: "Computer Science".to_string(),
            student_card_image: vec![0xFF, 0xD8],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["studentCardImage"], "/9g=");
        assert_eq!(value["studentNum"], "20211234");

        let back: SignUpRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn sign_in_response_tolerates_missing_optionals() {
        let dto: SignInResponseDto = serde_json::from_str(
            r#"{"accessToken":"a","loginUserInfo":{"id":1,"loginId":"test","name":"Niro"}}"#,
        )
        .unwrap();
        assert_eq!(dto.access_token, "a");
        assert!(dto.refresh_token.is_none());
        assert!(dto.login_user_info.role.is_none());
    }
}
