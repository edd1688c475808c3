//! Client configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "STUDING_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Read `STUDING_BASE_URL`, falling back to the local mock server.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("https://api.studing.kr/").unwrap();
        assert_eq!(config.base_url, "https://api.studing.kr");
    }

    #[test]
    fn scheme_is_required() {
        let err = ClientConfig::new("api.studing.kr").unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("api.studing.kr".to_string()));
    }

    #[test]
    fn deserializes_from_json() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"baseUrl":"http://127.0.0.1:8080"}"#).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
