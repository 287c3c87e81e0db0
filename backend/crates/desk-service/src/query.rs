//! Raw listing parameters and their conversion into domain requests.

use crate::Result as ServiceResult;

use desk_config::PagingConfig;
use desk_core::{PageRequest, Sort, SortField, TicketFilter, TicketGrade, TicketState};

use std::str::FromStr;

/// `page`, `size` and `sort` as supplied by a client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// `field` or `field,asc|desc`
    pub sort: Option<String>,
}

impl PageParams {
    /// Apply defaults and limits from `config`
    pub fn resolve<F: SortField>(&self, config: &PagingConfig) -> ServiceResult<PageRequest<F>> {
        let sort = match self.sort.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => Sort::parse(value)?,
            _ => Sort::default(),
        };

        let request = PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(config.default_page_size),
            config.max_page_size,
            sort,
        )?;

        Ok(request)
    }
}

/// Listing predicates as supplied by a client; blank strings mean unset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    pub grade: Option<String>,
    pub read: Option<bool>,
    pub state: Option<String>,
    pub keyword: Option<String>,
}

impl FilterParams {
    pub fn into_filter(self) -> ServiceResult<TicketFilter> {
        Ok(TicketFilter {
            grade: parse_optional::<TicketGrade>(self.grade.as_deref())?,
            read: self.read,
            state: parse_optional::<TicketState>(self.state.as_deref())?,
            keyword: self.keyword,
        })
    }
}

fn parse_optional<T>(value: Option<&str>) -> ServiceResult<Option<T>>
where
    T: FromStr<Err = desk_core::CoreError>,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => Ok(Some(T::from_str(v)?)),
        None => Ok(None),
    }
}
