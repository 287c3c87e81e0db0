use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
pub const MAX_CONFIGURABLE_PAGE_SIZE: u32 = 1000;

/// Listing page-size limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Size used when a request omits `size`
    pub default_page_size: u32,
    /// Largest `size` a request may ask for
    pub max_page_size: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl PagingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_page_size == 0 || self.max_page_size > MAX_CONFIGURABLE_PAGE_SIZE {
            return Err(ConfigError::paging(format!(
                "paging.max_page_size must be 1-{}, got {}",
                MAX_CONFIGURABLE_PAGE_SIZE, self.max_page_size
            )));
        }

        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::paging(format!(
                "paging.default_page_size must be 1-{}, got {}",
                self.max_page_size, self.default_page_size
            )));
        }

        Ok(())
    }
}
