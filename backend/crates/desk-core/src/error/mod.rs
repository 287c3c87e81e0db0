use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid ticket grade: {value} {location}")]
    InvalidTicketGrade {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid ticket state: {value} {location}")]
    InvalidTicketState {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort: {value} {location}")]
    InvalidSort {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field name the error refers to, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidTicketGrade { .. } => Some("grade"),
            Self::InvalidTicketState { .. } => Some("state"),
            Self::InvalidSort { .. } => Some("sort"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
