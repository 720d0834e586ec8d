//! Delivery person performance

use indexmap::IndexMap;
use orderdash_core::{Order, StatusKind, utils::round_half_up};
use serde::Serialize;

/// Delivered versus assigned orders for one delivery person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryStats {
    /// Delivery person
    pub name: String,
    /// Assigned orders with status `Delivered`
    pub delivered: usize,
    /// All assigned orders
    pub total: usize,
    /// `delivered / total` as a rounded percentage, 0 when nothing is assigned
    pub percent: u32,
}

impl DeliveryStats {
    /// Build stats for a delivery person, deriving the percentage
    #[must_use]
    pub fn new(name: impl Into<String>, delivered: usize, total: usize) -> Self {
        Self {
            name: name.into(),
            delivered,
            total,
            percent: completion_percent(delivered, total),
        }
    }
}

/// `round(delivered / total * 100)`, defined as 0 when `total` is 0
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn completion_percent(delivered: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = delivered as f64 / total as f64;
    u32::try_from(round_half_up(ratio * 100.0)).unwrap_or(0)
}

/// Per delivery person: assigned orders, delivered orders and percentage.
///
/// Orders without a delivery person are ignored. People appear in
/// first-encountered order.
#[must_use]
pub fn delivery_performance(orders: &[Order]) -> Vec<DeliveryStats> {
    let mut tallies: IndexMap<&str, (usize, usize)> = IndexMap::new();

    for order in orders {
        let Some(courier) = order.courier() else {
            continue;
        };
        let (delivered, total) = tallies.entry(courier).or_insert((0, 0));
        *total += 1;
        if order.status_kind() == StatusKind::Delivered {
            *delivered += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(name, (delivered, total))| DeliveryStats::new(name, delivered, total))
        .collect()
}
