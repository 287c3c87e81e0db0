use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MAX_CONTENT_LENGTH: usize = 100000;
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 10000;

pub const MIN_RECEIVERS: usize = 1;
pub const MAX_RECEIVERS: usize = 1000;
pub const DEFAULT_MAX_RECEIVERS: usize = 100;

pub const MIN_IDENTITY_LENGTH: usize = 1;
pub const MAX_IDENTITY_LENGTH: usize = 1000;
pub const DEFAULT_MAX_IDENTITY_LENGTH: usize = 100;

/// Field limits applied when a ticket is created.
///
/// Lengths are counted in characters, after trimming.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_title_length: usize,
    /// Applies to content, purpose and requirement
    pub max_content_length: usize,
    pub max_receivers: usize,
    /// Applies to writer and receiver identities
    pub max_identity_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            max_receivers: DEFAULT_MAX_RECEIVERS,
            max_identity_length: DEFAULT_MAX_IDENTITY_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&self.max_title_length) {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_content_length > MAX_CONTENT_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_content_length must be 0-{}, got {}",
                MAX_CONTENT_LENGTH, self.max_content_length
            )));
        }

        if !(MIN_RECEIVERS..=MAX_RECEIVERS).contains(&self.max_receivers) {
            return Err(ConfigError::validation(format!(
                "validation.max_receivers must be {}-{}, got {}",
                MIN_RECEIVERS, MAX_RECEIVERS, self.max_receivers
            )));
        }

        if !(MIN_IDENTITY_LENGTH..=MAX_IDENTITY_LENGTH).contains(&self.max_identity_length) {
            return Err(ConfigError::validation(format!(
                "validation.max_identity_length must be {}-{}, got {}",
                MIN_IDENTITY_LENGTH, MAX_IDENTITY_LENGTH, self.max_identity_length
            )));
        }

        Ok(())
    }
}
