use sprint_core::ErrorLocation;
use sprint_db::DbError;

use std::panic::Location;

use thiserror::Error;

/// Failures the sprint endpoint reports to its HTTP adapter
#[derive(Debug, Error)]
pub enum EndpointError {
    /// Client sent something the operation cannot accept. `error_key` is the
    /// machine-readable reason (`idexists`, `idnull`).
    #[error("Invalid {entity_name} request ({error_key}): {message} {location}")]
    InvalidRequest {
        message: String,
        entity_name: &'static str,
        error_key: &'static str,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        source: DbError,
        location: ErrorLocation,
    },

    /// The store broke its contract, e.g. saved a row without assigning an id
    #[error("Store contract violated: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl EndpointError {
    #[track_caller]
    pub fn invalid_request(
        message: impl Into<String>,
        entity_name: &'static str,
        error_key: &'static str,
    ) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            entity_name,
            error_key,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for EndpointError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EndpointError>;
