// src/domain/view.rs

use crate::domain::filter::{filter_records, FilterCriteria};
use crate::domain::guarantee::GuaranteeRecord;
use crate::domain::sort::{sort_records, SortCriteria, SortKey};
use crate::errors::{LockerError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Filter, then sort. Pure: `records` is only read.
pub fn compute_view<'a>(
    records: &'a [GuaranteeRecord],
    filter: &FilterCriteria,
    sort: &SortCriteria,
) -> Vec<&'a GuaranteeRecord> {
    let filtered = filter_records(records, filter);
    sort_records(&filtered, sort)
}

/// One page of a computed view. Page numbers start at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a GuaranteeRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
    pub has_more: bool,
}

/// Slices `view` into a page. The size is clamped to `1..=MAX_PAGE_SIZE`,
/// page 0 is read as page 1, and a page past the end comes back empty.
pub fn paginate<'a>(view: &[&'a GuaranteeRecord], page: usize, page_size: usize) -> Page<'a> {
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    let current_page = page.max(1);
    let total_count = view.len();
    let total_pages = total_count.div_ceil(page_size);

    let start = (current_page - 1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    Page {
        items: view[start..end].to_vec(),
        current_page,
        total_pages,
        total_count,
        page_size,
        has_more: current_page < total_pages,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl FromStr for ViewMode {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(ViewMode::List),
            "grid" => Ok(ViewMode::Grid),
            other => Err(LockerError::InvalidArgument(format!("unknown view mode '{other}'"))),
        }
    }
}

/// Everything the list screen remembers between renders.
/// Owned by the caller and persisted through the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filter: FilterCriteria,
    pub sort: SortCriteria,
    pub page: usize,
    pub page_size: usize,
    pub mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            mode: ViewMode::List,
        }
    }
}

impl ViewState {
    /// Changing the filter sends the user back to the first page.
    pub fn with_filter(mut self, filter: FilterCriteria) -> Self {
        if self.filter != filter {
            self.page = 1;
        }
        self.filter = filter;
        self
    }

    pub fn with_sort_click(mut self, key: SortKey) -> Self {
        self.sort = self.sort.select(key);
        self
    }

    pub fn render<'a>(&self, records: &'a [GuaranteeRecord]) -> Page<'a> {
        let view = compute_view(records, &self.filter, &self.sort);
        paginate(&view, self.page, self.page_size)
    }
}
