//! Client configuration.

use url::Url;

use crate::error::ApiError;

/// Base address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Environment variable that overrides the base address.
pub const BASE_URL_ENV: &str = "TODO_API_BASE_URL";

/// Where the todo API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate `base_url` and strip any trailing slash.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Read `TODO_API_BASE_URL`, falling back to the default address.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Result<Self, ApiError> {
        match value.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
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
    fn default_points_at_public_api() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:3000/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(ClientConfig::new("localhost"), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn env_value_overrides_default() {
        let config = ClientConfig::from_value(Some(" http://127.0.0.1:8080 ".to_string())).unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(ClientConfig::from_value(None).unwrap(), ClientConfig::default());
        assert_eq!(ClientConfig::from_value(Some(String::new())).unwrap(), ClientConfig::default());
    }
}
