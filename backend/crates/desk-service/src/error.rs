use desk_core::CoreError;
use desk_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Absent, or owned by someone else. The two are never distinguished.
    #[error("Resource not found: {message}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Database { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::from(DbError::from(source))
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        let field = error.field().map(str::to_string);
        let message = match &error {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidTicketGrade { value, .. } => format!(
                "invalid grade '{}', expected one of LOW, MIDDLE, HIGH, URGENT",
                value
            ),
            CoreError::InvalidTicketState { value, .. } => format!(
                "invalid state '{}', expected one of NEW, IN_PROGRESS, NEED_INFO, DONE",
                value
            ),
            CoreError::InvalidSort { value, .. } => {
                format!("invalid sort '{}', expected field[,asc|desc]", value)
            }
        };

        Self::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
