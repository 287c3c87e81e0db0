use desk_service::{FilterParams, PageParams};

use serde::Deserialize;

/// Query parameters for GET /api/tickets/received
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListReceivedQuery {
    pub receiver: Option<String>,
    pub grade: Option<String>,
    pub read: Option<bool>,
    pub state: Option<String>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl ListReceivedQuery {
    pub fn filter(&self) -> FilterParams {
        FilterParams {
            grade: self.grade.clone(),
            read: self.read,
            state: self.state.clone(),
            keyword: self.keyword.clone(),
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
