//! Credential descriptor for the Eddie.surf API.
//!
//! Authentication is declarative: every outbound request carries the API
//! key in the [`AUTH_HEADER`] header, and relative paths resolve against
//! the credential's base URL. A credential is verified with a plain
//! health-check request.

use crate::error::{EddieError, Result};
use crate::request::HttpRequest;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.eddie.surf";

/// Header carrying the API key on every outbound request.
pub const AUTH_HEADER: &str = "X-API-Key";

/// API key + base URL pair used to authenticate outbound requests.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub base_url: String,
}

impl Credentials {
    /// Create credentials with the default base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read credentials from `EDDIE_API_KEY` and, if set, `EDDIE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("EDDIE_API_KEY")
            .map_err(|_| EddieError::Config("EDDIE_API_KEY not set".into()))?;
        let mut credentials = Self::new(api_key);
        if let Ok(base_url) = std::env::var("EDDIE_BASE_URL") {
            credentials.base_url = base_url;
        }
        Ok(credentials)
    }

    /// Set a custom base URL (for staging environments, proxies, etc.).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request used to verify a credential: a plain health check.
    pub fn test_request() -> HttpRequest {
        HttpRequest::get("/health".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    #[test]
    fn test_default_base_url() {
        let credentials = Credentials::new("ed-test");
        assert_eq!(credentials.api_key, "ed-test");
        assert_eq!(credentials.base_url, "https://api.eddie.surf");
    }

    #[test]
    fn test_with_base_url() {
        let credentials = Credentials::new("ed-test").with_base_url("https://staging.eddie.surf");
        assert_eq!(credentials.base_url, "https://staging.eddie.surf");
    }

    #[test]
    fn test_credential_test_request() {
        let request = Credentials::test_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/health");
        assert!(request.body.is_none());
    }
}
