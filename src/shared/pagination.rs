// src/shared/pagination.rs

use serde::{Deserialize, Serialize};

/// Upper bound for any page size a client may request.
pub const MAX_PAGE_LIMIT: u64 = 100;

//
// ──────────────────────────────────────────────────────────
// Page request
// ──────────────────────────────────────────────────────────
//

/// Largest row offset the Postgres driver accepts (`BIGINT`).
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A normalized `(page, limit)` pair. `page >= 1`, `1 <= limit <= MAX_PAGE_LIMIT`,
/// and `offset()` never exceeds `MAX_OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Self {
        let limit = limit.clamp(1, MAX_PAGE_LIMIT);
        let last_page = MAX_OFFSET / limit + 1;
        Self {
            page: page.clamp(1, last_page),
            limit,
        }
    }

    /// Build from raw query-string values. Absent, non-numeric or
    /// non-positive values fall back to page 1 and `default_limit`.
    pub fn from_query(page: Option<&str>, limit: Option<&str>, default_limit: u64) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit).unwrap_or(default_limit);
        Self::new(page, limit)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|v| *v >= 1)
}

/// Raw `?page=&limit=` pair. Kept as strings so a malformed value
/// falls back to the default instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn to_page_request(&self, default_limit: u64) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref(), default_limit)
    }
}

//
// ──────────────────────────────────────────────────────────
// Page result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            limit: request.limit(),
            total,
        }
    }

    pub fn total_pages(&self) -> u64 {
        PageRequest::new(self.page, self.limit).total_pages(self.total)
    }
}
