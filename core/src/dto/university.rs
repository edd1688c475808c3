use serde::{Deserialize, Serialize};

use crate::envelope::envelope_data;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityDto {
    pub university_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    pub university_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub department_name: String,
}

envelope_data!(UniversityDto, DepartmentDto);
