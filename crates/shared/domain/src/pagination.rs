//! Pagination types for list views.

use serde::Serialize;

use crate::constants::{DEFAULT_PAGE_NUMBER, MSG_INVALID_PAGE, ROWS_PER_PAGE};
use crate::error::{DomainError, DomainResult};

/// Parse the raw `page` query value.
///
/// Absent or empty means the first page. Anything that is not an integer
/// of at least 1 is rejected.
pub fn parse_page(raw: Option<&str>) -> DomainResult<u64> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PAGE_NUMBER),
        Some(value) => match value.parse::<i64>() {
            Ok(page) if page >= 1 => Ok(page as u64),
            _ => Err(DomainError::validation(MSG_INVALID_PAGE)),
        },
    }
}

/// A request for one page of an ordered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Calculate offset for database query, saturating at `u64::MAX`
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Whether the page starts at or after the last of `total` items
    pub fn is_past_end(&self, total: u64) -> bool {
        self.offset() >= total
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, ROWS_PER_PAGE)
    }
}

/// One page of results plus what is needed to link its neighbours
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated result
    pub fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(request.per_page);

        Self {
            data,
            meta: PaginationMeta {
                page: request.page,
                per_page: request.per_page,
                total,
                total_pages,
            },
        }
    }

    pub fn has_prev(&self) -> bool {
        self.meta.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.meta.page < self.meta.total_pages
    }

    /// Previous page number, if there is one
    pub fn prev_page(&self) -> Option<u64> {
        self.has_prev().then(|| self.meta.page - 1)
    }

    /// Next page number, if there is one
    pub fn next_page(&self) -> Option<u64> {
        self.has_next().then(|| self.meta.page + 1)
    }

    /// Convert the items while keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
