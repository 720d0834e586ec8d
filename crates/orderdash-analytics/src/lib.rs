//! Order aggregation and table queries for `orderdash`
//!
//! Every function here is a pure, total reduction over an immutable
//! `&[Order]` snapshot: no I/O, no shared state, no failure modes. Empty input
//! yields empty or zero summaries.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod chart;
pub mod delivery;
pub mod frequency;
pub mod kpi;
pub mod ranking;
pub mod snapshot;
pub mod table;
pub mod trend;

// Re-export commonly used types
pub use chart::ChartData;
pub use delivery::{DeliveryStats, delivery_performance};
pub use frequency::{
    ITEM_FREQUENCY_LIMIT, customer_frequency, item_frequency, order_type_distribution,
    top_customers, top_items,
};
pub use kpi::{KpiSummary, StatusCounts, kpi_summary, revenue_total, status_counts};
pub use ranking::{DEFAULT_TOP_N, NamedValue, top_n};
pub use snapshot::DashboardSnapshot;
pub use table::{
    DEFAULT_PAGE_SIZE, PageMeta, StatusFilter, TablePage, TableQuery, filter_orders, paginate,
    query_table, status_options,
};
pub use trend::{TrendPoint, revenue_trend};
