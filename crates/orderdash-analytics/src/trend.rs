//! Revenue per order, ordered by order id

use orderdash_core::{Order, OrderId, utils::round_half_up};
use serde::Serialize;
use std::cmp::Ordering;

/// One point of the revenue trend line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Order the revenue belongs to
    pub order: Option<OrderId>,
    /// Order revenue rounded to a whole amount
    pub revenue: i64,
}

/// Order ids with a numeric value come first, ascending. Ids without one
/// (free text, absent) follow in input order.
fn compare_ids(a: Option<&OrderId>, b: Option<&OrderId>) -> Ordering {
    match (a.and_then(OrderId::numeric_value), b.and_then(OrderId::numeric_value)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rounded revenue per order, sorted ascending by order id
#[must_use]
pub fn revenue_trend(orders: &[Order]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = orders
        .iter()
        .map(|order| TrendPoint {
            order: order.order_id.clone(),
            revenue: round_half_up(order.revenue()),
        })
        .collect();

    points.sort_by(|a, b| compare_ids(a.order.as_ref(), b.order.as_ref()));
    points
}
