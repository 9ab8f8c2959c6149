use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_PATH, DEFAULT_APPLICATION_NAME,
    DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE,
};

use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix every REST route is mounted under, e.g. "/api"
    pub base_path: String,
    /// Used to build the `X-{name}-alert` family of response headers
    pub application_name: String,
    /// Page size when the client does not send one
    pub default_page_size: u32,
    /// Larger requested sizes are clamped to this
    pub max_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_API_BASE_PATH.to_string(),
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_path.starts_with('/')
            || (self.base_path.len() > 1 && self.base_path.ends_with('/'))
        {
            return Err(ConfigError::api(format!(
                "api.base_path must start with '/' and not end with '/', got '{}'",
                self.base_path
            )));
        }

        // Ends up inside a header name
        if self.application_name.is_empty()
            || !self
                .application_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(ConfigError::api(format!(
                "api.application_name must be non-empty ASCII alphanumerics, '-', '_' or '.', got '{}'",
                self.application_name
            )));
        }

        if self.max_page_size == 0 {
            return Err(ConfigError::api("api.max_page_size must be at least 1"));
        }

        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::api(format!(
                "api.default_page_size must be 1-{}, got {}",
                self.max_page_size, self.default_page_size
            )));
        }

        Ok(())
    }

    /// Base path with the root "/" collapsed to empty, ready for joining
    pub fn route_prefix(&self) -> &str {
        if self.base_path == "/" {
            ""
        } else {
            &self.base_path
        }
    }
}
