//! Everything the dashboard page shows, computed in one call

use crate::chart::{
    ChartData, NO_CUSTOMER_DATA, NO_DELIVERY_DATA, NO_ITEM_DATA, NO_ORDER_TYPE_DATA,
    NO_REVENUE_DATA,
};
use crate::delivery::{DeliveryStats, delivery_performance};
use crate::frequency::{order_type_distribution, top_customers, top_items};
use crate::kpi::{KpiSummary, kpi_summary};
use crate::ranking::NamedValue;
use crate::trend::{TrendPoint, revenue_trend};
use orderdash_core::{Order, config::AnalyticsConfig};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// KPI cards plus every chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// KPI cards
    pub kpis: KpiSummary,
    /// Orders per order type
    pub order_types: ChartData<NamedValue<usize>>,
    /// Most ordered items by quantity
    pub top_items: ChartData<NamedValue<f64>>,
    /// Delivery person performance
    pub delivery: ChartData<DeliveryStats>,
    /// Revenue per order
    pub revenue_trend: ChartData<TrendPoint>,
    /// Customers with the most orders
    pub top_customers: ChartData<NamedValue<usize>>,
}

impl DashboardSnapshot {
    /// Snapshot with zero KPIs and every chart in its empty state
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kpis: KpiSummary::default(),
            order_types: ChartData::empty(NO_ORDER_TYPE_DATA),
            top_items: ChartData::empty(NO_ITEM_DATA),
            delivery: ChartData::empty(NO_DELIVERY_DATA),
            revenue_trend: ChartData::empty(NO_REVENUE_DATA),
            top_customers: ChartData::empty(NO_CUSTOMER_DATA),
        }
    }

    /// Compute the whole dashboard for `orders`
    #[must_use]
    pub fn build(orders: &[Order], limits: &AnalyticsConfig) -> Self {
        if orders.is_empty() {
            debug!("No orders, dashboard left in empty state");
            return Self::empty();
        }

        let started = Instant::now();
        let snapshot = Self {
            kpis: kpi_summary(orders),
            order_types: ChartData::from_points(order_type_distribution(orders), NO_ORDER_TYPE_DATA),
            top_items: ChartData::from_points(top_items(orders, limits.item_limit), NO_ITEM_DATA),
            delivery: ChartData::from_points(delivery_performance(orders), NO_DELIVERY_DATA),
            revenue_trend: ChartData::from_points(revenue_trend(orders), NO_REVENUE_DATA),
            top_customers: ChartData::from_points(
                top_customers(orders, limits.top_n),
                NO_CUSTOMER_DATA,
            ),
        };

        debug!(
            orders = orders.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Dashboard snapshot built"
        );
        snapshot
    }
}
