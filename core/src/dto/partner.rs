use serde::{Deserialize, Serialize};

use crate::envelope::envelope_data;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRequest {
    pub category_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDto {
    pub id: i64,
    #[serde(default)]
    pub partner_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub partner_description: String,
    #[serde(default)]
    pub partner_address: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub partner_logo: Option<String>,
}

envelope_data!(PartnerDto);
