//! Grouped counts: customers, items, order types
//!
//! Grouping goes through an insertion-ordered map so that series come out in
//! first-encountered order and ties in ranked views are deterministic.

use crate::ranking::{NamedValue, top_n};
use indexmap::IndexMap;
use orderdash_core::Order;

pub use orderdash_core::config::ITEM_FREQUENCY_LIMIT;

fn into_series<V>(counts: IndexMap<&str, V>) -> Vec<NamedValue<V>> {
    counts
        .into_iter()
        .map(|(name, value)| NamedValue::new(name, value))
        .collect()
}

fn customer_counts(orders: &[Order]) -> IndexMap<&str, usize> {
    let mut counts = IndexMap::new();
    for name in orders.iter().filter_map(Order::customer) {
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
}

/// Number of orders per customer, in first-encountered order.
///
/// Orders without a customer name are not attributed to anyone.
#[must_use]
pub fn customer_frequency(orders: &[Order]) -> Vec<NamedValue<usize>> {
    into_series(customer_counts(orders))
}

/// The `n` customers with the most orders
#[must_use]
pub fn top_customers(orders: &[Order], n: usize) -> Vec<NamedValue<usize>> {
    top_n(customer_counts(orders), n)
}

/// Cumulative quantity per item name, ranked, keeping the first `limit`
#[must_use]
pub fn top_items(orders: &[Order], limit: usize) -> Vec<NamedValue<f64>> {
    let mut quantities: IndexMap<&str, f64> = IndexMap::new();
    for item in orders.iter().flat_map(|order| &order.items) {
        *quantities.entry(item.item_name.as_str()).or_insert(0.0) += item.quantity;
    }
    top_n(quantities, limit)
}

/// Most ordered items by cumulative quantity, at most [`ITEM_FREQUENCY_LIMIT`]
#[must_use]
pub fn item_frequency(orders: &[Order]) -> Vec<NamedValue<f64>> {
    top_items(orders, ITEM_FREQUENCY_LIMIT)
}

/// Number of orders per order type.
///
/// Orders with an absent or empty type are skipped rather than counted
/// under a catch-all bucket.
#[must_use]
pub fn order_type_distribution(orders: &[Order]) -> Vec<NamedValue<usize>> {
    let mut counts = IndexMap::new();
    for kind in orders.iter().filter_map(Order::kind) {
        *counts.entry(kind).or_insert(0) += 1;
    }
    into_series(counts)
}
