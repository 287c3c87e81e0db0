use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    fn generic(
        category: &'static str,
        message: String,
        location: &'static Location<'static>,
    ) -> Self {
        ConfigError::Generic {
            category,
            message,
            location: ErrorLocation::from(location),
        }
    }

    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message.into(), Location::caller())
    }

    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::generic("Database", message.into(), Location::caller())
    }

    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::generic("Server", message.into(), Location::caller())
    }

    #[track_caller]
    pub fn paging<S: Into<String>>(message: S) -> Self {
        Self::generic("Paging", message.into(), Location::caller())
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::generic("Validation", message.into(), Location::caller())
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
