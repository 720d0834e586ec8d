//! Headline numbers: revenue, order status counts, distinct people

use orderdash_core::{Order, StatusKind};
use serde::Serialize;
use std::collections::HashSet;

/// Counts behind the KPI cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Orders with status `Pending`
    pub pending: usize,
    /// Orders with status `In Transit`
    pub in_transit: usize,
    /// Orders with status `Delivered`
    pub delivered: usize,
    /// Distinct non-empty customer names
    pub customers: usize,
    /// Distinct non-empty delivery persons
    pub delivery_persons: usize,
    /// All orders, whatever their status
    pub total_orders: usize,
}

/// Status counts together with total revenue
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Sum of every item's total price
    pub revenue: f64,
    /// Status and people counts
    #[serde(flatten)]
    pub counts: StatusCounts,
}

/// Sum of every item's `total_price` across every order
#[must_use]
pub fn revenue_total(orders: &[Order]) -> f64 {
    orders.iter().map(Order::revenue).sum()
}

/// Count orders per known status and distinct customers/delivery persons
#[must_use]
pub fn status_counts(orders: &[Order]) -> StatusCounts {
    let mut counts = StatusCounts {
        total_orders: orders.len(),
        ..StatusCounts::default()
    };
    let mut customers = HashSet::new();
    let mut couriers = HashSet::new();

    for order in orders {
        match order.status_kind() {
            StatusKind::Pending => counts.pending += 1,
            StatusKind::InTransit => counts.in_transit += 1,
            StatusKind::Delivered => counts.delivered += 1,
            StatusKind::Unknown => {}
        }
        if let Some(name) = order.customer() {
            customers.insert(name);
        }
        if let Some(name) = order.courier() {
            couriers.insert(name);
        }
    }

    counts.customers = customers.len();
    counts.delivery_persons = couriers.len();
    counts
}

/// Everything the KPI row shows
#[must_use]
pub fn kpi_summary(orders: &[Order]) -> KpiSummary {
    KpiSummary {
        revenue: revenue_total(orders),
        counts: status_counts(orders),
    }
}
