use crate::{CoreError, CoreResult, Sort, SortField};

use std::panic::Location;

use error_location::ErrorLocation;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Zero-based page number, page size, and ordering for a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<F: SortField> {
    pub page: u32,
    pub size: u32,
    pub sort: Sort<F>,
}

impl<F: SortField> Default for PageRequest<F> {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

impl<F: SortField> PageRequest<F> {
    /// Build a request, rejecting sizes outside `1..=max_size`
    #[track_caller]
    pub fn new(page: u32, size: u32, max_size: u32, sort: Sort<F>) -> CoreResult<Self> {
        if size == 0 || size > max_size {
            return Err(CoreError::Validation {
                message: format!("size must be between 1 and {}, got {}", max_size, size),
                field: Some("size".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { page, size, sort })
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}
