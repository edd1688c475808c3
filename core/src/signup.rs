//! Multi-screen sign-up draft.
//!
//! # Design
//! Each sign-up screen fills in part of one `SignupDraft`. The draft is a
//! plain serde value so it can be parked in the `SignupDraft` token slot
//! between screens and restored after the app is killed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dto::SignUpRequest;
use crate::error::{DraftError, TokenStoreError};
use crate::token_store::{load_json, save_json, TokenKey, TokenStore};

/// Draft fields in the order the screens ask for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    University,
    Department,
    AdmissionNumber,
    Name,
    StudentNumber,
    StudentCardImage,
    LoginId,
    Password,
}

impl DraftField {
    pub const SCREEN_ORDER: [DraftField; 8] = [
        DraftField::University,
        DraftField::Department,
        DraftField::AdmissionNumber,
        DraftField::Name,
        DraftField::StudentNumber,
        DraftField::StudentCardImage,
        DraftField::LoginId,
        DraftField::Password,
    ];

    /// Wire name of the field in `SignUpRequest`.
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::University => "universityName",
            DraftField::Department => "departmentName",
            DraftField::AdmissionNumber => "admissionNumber",
            DraftField::Name => "name",
            DraftField::StudentNumber => "studentNum",
            DraftField::StudentCardImage => "studentCardImage",
            DraftField::LoginId => "loginId",
            DraftField::Password => "password",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDraft {
    #[serde(default)]
    pub university_name: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub admission_number: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub student_num: Option<String>,
    #[serde(default, with = "crate::dto::base64_bytes::option")]
    pub student_card_image: Option<Vec<u8>>,
    #[serde(default)]
    pub login_id: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl SignupDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// First field, in screen order, that is still missing or blank.
    pub fn first_missing(&self) -> Option<DraftField> {
        DraftField::SCREEN_ORDER
            .into_iter()
            .find(|field| !self.is_filled(*field))
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    fn is_filled(&self, field: DraftField) -> bool {
        let text = match field {
            DraftField::University => &self.university_name,
            DraftField::Department => &self.department_name,
            DraftField::AdmissionNumber => &self.admission_number,
            DraftField::Name => &self.name,
            DraftField::StudentNumber => &self.student_num,
            DraftField::LoginId => &self.login_id,
            DraftField::Password => &self.password,
            DraftField::StudentCardImage => {
                return self
                    .student_card_image
                    .as_ref()
                    .is_some_and(|image| !image.is_empty());
            }
        };
        text.as_deref().is_some_and(|value| !value.trim().is_empty())
    }

    /// Turn a completed draft into the sign-up submission.
    pub fn validate(&self) -> Result<SignUpRequest, DraftError> {
        if let Some(field) = self.first_missing() {
            return Err(DraftError::MissingField(field));
        }
        Ok(SignUpRequest {
            login_id: self.login_id.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            admission_number: self.admission_number.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            student_num: self.student_num.clone().unwrap_or_default(),
            university_name: self.university_name.clone().unwrap_or_default(),
            department_name: self.department_name.clone().unwrap_or_default(),
            student_card_image: self.student_card_image.clone().unwrap_or_default(),
        })
    }

    pub fn save(&self, store: &dyn TokenStore) -> Result<(), TokenStoreError> {
        save_json(store, TokenKey::SignupDraft, self)
    }

    /// Restore the parked draft, or a fresh one if none was saved.
    pub fn load(store: &dyn TokenStore) -> Result<Self, TokenStoreError> {
        Ok(load_json(store, TokenKey::SignupDraft)?.unwrap_or_default())
    }

    pub fn discard(store: &dyn TokenStore) {
        store.delete(TokenKey::SignupDraft);
    }
}
