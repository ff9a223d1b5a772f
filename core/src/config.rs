//! Client configuration.
//!
//! [`ClientConfig`] names the remote service and the user whose list is
//! mirrored. The defaults point at the public playground instance.

use crate::error::ApiError;

/// Base URL of the public playground service.
pub const DEFAULT_BASE_URL: &str = "https://playground.4geeks.com/todo";

/// Username the client operates on when none is configured.
pub const DEFAULT_USERNAME: &str = "MariaV";

/// Where the client talks to and on whose behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub username: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl ClientConfig {
    /// Checks that the base URL is absolute http(s) and the username is set.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.username.trim().is_empty() {
            return Err(ApiError::Config("username must not be empty".into()));
        }
        Ok(())
    }
}
