//! Order table query: free-text search, status filter, page window
//!
//! The query is a plain value threaded by the caller. Changing the search
//! text, the status filter or the page size through the `with_*` methods
//! always returns to the first page.

use indexmap::IndexSet;
use orderdash_core::{Order, utils::contains_folded};
use serde::Serialize;
use std::fmt;
use tracing::debug;

pub use orderdash_core::config::DEFAULT_PAGE_SIZE;

/// Exact-match filter on the raw order status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every order passes
    #[default]
    Any,
    /// Only orders whose status equals this string
    Exactly(String),
}

impl StatusFilter {
    /// Build a filter from an optional selection; `None`, empty and `any`
    /// (any case) mean no filter.
    ///
    /// `any` is reserved, so an order whose raw status is literally `Any`
    /// can only be selected with [`StatusFilter::Exactly`].
    #[must_use]
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            None => Self::Any,
            Some(s) if s.is_empty() || s.eq_ignore_ascii_case("any") => Self::Any,
            Some(s) => Self::Exactly(s.to_string()),
        }
    }

    /// Whether `order` passes this filter
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(status) => order.order_status.as_deref() == Some(status.as_str()),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Exactly(status) => f.write_str(status),
        }
    }
}

/// Search, filter and page selection for the order table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    search: String,
    status: StatusFilter,
    page: usize,
    page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableQuery {
    /// First page, no search, no status filter
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::Any,
            page: 0,
            page_size,
        }
    }

    /// Replace the search text and go back to the first page
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 0;
        self
    }

    /// Replace the status filter and go back to the first page
    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self.page = 0;
        self
    }

    /// Replace the page size and go back to the first page
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self.page = 0;
        self
    }

    /// Select a zero-based page
    #[must_use]
    pub const fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Search text as entered
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Status filter
    #[must_use]
    pub const fn status(&self) -> &StatusFilter {
        &self.status
    }

    /// Zero-based page index
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Paging figures for the table footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Zero-based page index
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Rows matching the search and filter
    pub total: usize,
    /// Number of pages, at least 1
    pub total_pages: usize,
    /// Whether a later page holds rows
    pub has_next: bool,
    /// Whether this is not the first page
    pub has_prev: bool,
    /// Index of the next page, if any
    pub next_page: Option<usize>,
    /// Index of the previous page, if any
    pub prev_page: Option<usize>,
}

impl PageMeta {
    /// Compute paging figures for `total` rows
    #[must_use]
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let total_pages = if page_size == 0 {
            1
        } else {
            total.div_ceil(page_size).max(1)
        };
        let has_next = page_size > 0 && page.saturating_add(1).saturating_mul(page_size) < total;
        let has_prev = page > 0;

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next,
            has_prev,
            next_page: has_next.then(|| page + 1),
            prev_page: has_prev.then(|| page - 1),
        }
    }
}

/// One page of the order table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage<'a> {
    /// Orders on the requested page
    pub rows: Vec<&'a Order>,
    /// Orders matching the search and filter, across all pages
    pub total_count: usize,
    /// Selectable status filter values
    pub status_options: Vec<String>,
    /// Paging figures
    pub meta: PageMeta,
}

/// Whether the lower-cased `needle` occurs in the order id, customer name,
/// order type or status.
fn matches_search(order: &Order, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let id = order
        .order_id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    [
        Some(id.as_str()),
        order.customer_name.as_deref(),
        order.order_type.as_deref(),
        order.order_status.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| contains_folded(field, needle))
}

/// Orders matching both the search text and the status filter, in input order
#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], search: &str, status: &StatusFilter) -> Vec<&'a Order> {
    let needle = search.to_lowercase();
    orders
        .iter()
        .filter(|order| matches_search(order, &needle) && status.matches(order))
        .collect()
}

/// The rows `[page * page_size, page * page_size + page_size)` of `rows`.
///
/// Pages past the end, and a page size of 0, yield an empty slice.
#[must_use]
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    rows.get(start..end).unwrap_or_default()
}

/// Distinct statuses in first-seen order; absent or empty status is listed
/// as `Unknown`.
#[must_use]
pub fn status_options(orders: &[Order]) -> Vec<String> {
    orders
        .iter()
        .map(Order::status_label)
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Run a table query over the full order list
#[must_use]
pub fn query_table<'a>(orders: &'a [Order], query: &TableQuery) -> TablePage<'a> {
    let filtered = filter_orders(orders, query.search(), query.status());
    let rows = paginate(&filtered, query.page(), query.page_size()).to_vec();
    let meta = PageMeta::new(query.page(), query.page_size(), filtered.len());

    if rows.is_empty() && !filtered.is_empty() {
        debug!(
            page = query.page(),
            total_pages = meta.total_pages,
            "Requested page is past the end"
        );
    }
    debug!(
        search = query.search(),
        status = %query.status(),
        page = query.page(),
        page_size = query.page_size(),
        matched = filtered.len(),
        returned = rows.len(),
        "Order table query"
    );

    TablePage {
        rows,
        total_count: filtered.len(),
        status_options: status_options(orders),
        meta,
    }
}
