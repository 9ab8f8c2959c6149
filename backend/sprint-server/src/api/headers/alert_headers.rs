//! `X-{app}-alert` / `X-{app}-error` / `X-{app}-params` response headers.
//!
//! Browser clients read these to show notifications after a mutation.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use log::warn;

#[derive(Debug, Clone)]
pub struct AlertHeaders {
    application_name: String,
}

impl AlertHeaders {
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
        }
    }

    pub fn alert(&self, message: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.insert(&mut headers, "alert", message);
        self.insert(&mut headers, "params", param);
        headers
    }

    pub fn entity_created(&self, entity_name: &str, id: impl ToString) -> HeaderMap {
        self.alert(
            &format!("{}.{}.created", self.application_name, entity_name),
            &id.to_string(),
        )
    }

    pub fn entity_updated(&self, entity_name: &str, id: impl ToString) -> HeaderMap {
        self.alert(
            &format!("{}.{}.updated", self.application_name, entity_name),
            &id.to_string(),
        )
    }

    pub fn entity_deleted(&self, entity_name: &str, id: impl ToString) -> HeaderMap {
        self.alert(
            &format!("{}.{}.deleted", self.application_name, entity_name),
            &id.to_string(),
        )
    }

    pub fn failure(&self, entity_name: &str, error_key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.insert(&mut headers, "error", &format!("error.{}", error_key));
        self.insert(&mut headers, "params", entity_name);
        headers
    }

    // Invalid names or values are logged and skipped
    fn insert(&self, headers: &mut HeaderMap, suffix: &str, value: &str) {
        let name = format!("X-{}-{}", self.application_name, suffix);

        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            (Err(e), _) => warn!("Skipping alert header '{}': {}", name, e),
            (_, Err(e)) => warn!("Skipping value for alert header '{}': {}", name, e),
        }
    }
}
