use crate::{PageRequest, SortField};

use serde::{Deserialize, Serialize};

/// One page of a listing plus totals for the whole result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new<F: SortField>(
        content: Vec<T>,
        request: &PageRequest<F>,
        total_elements: u64,
    ) -> Self {
        let size = u64::from(request.size.max(1));
        let total_pages = total_elements.div_ceil(size);
        let number = request.page;
        let has_next = u64::from(number) + 1 < total_pages;

        Self {
            number_of_elements: content.len(),
            content,
            total_elements,
            total_pages,
            number,
            size: request.size,
            first: number == 0,
            last: !has_next,
            has_next,
            has_previous: number > 0,
        }
    }

    /// Convert every element, keeping the page metadata
    pub fn map<U, M>(self, f: M) -> Page<U>
    where
        M: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
