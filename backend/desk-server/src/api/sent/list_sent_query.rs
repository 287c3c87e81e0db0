use desk_service::{FilterParams, PageParams};

use serde::Deserialize;

/// Query parameters for GET /api/tickets/sent
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSentQuery {
    pub writer: Option<String>,
    pub grade: Option<String>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// `field` or `field,asc|desc`
    pub sort: Option<String>,
}

impl ListSentQuery {
    pub fn filter(&self) -> FilterParams {
        FilterParams {
            grade: self.grade.clone(),
            keyword: self.keyword.clone(),
            ..FilterParams::default()
        }
    }

    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            size: self.size,
            sort: self.sort.clone(),
        }
    }
}
