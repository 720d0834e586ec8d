//! Integration tests for the order aggregates

mod common;

use common::*;
use orderdash_analytics::*;
use orderdash_core::{OrderId, OrderItem, config::AnalyticsConfig};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_worked_example() {
    init_test_logging();
    let orders = worked_example();

    assert_eq!(revenue_total(&orders), 30.0);
    assert_eq!(customer_frequency(&orders), vec![NamedValue::new("A", 2)]);
    assert_eq!(item_frequency(&orders), vec![NamedValue::new("Tea", 3.0)]);
    assert_eq!(
        status_counts(&orders),
        StatusCounts {
            pending: 1,
            in_transit: 0,
            delivered: 1,
            customers: 1,
            delivery_persons: 1,
            total_orders: 2,
        }
    );
    assert_eq!(
        delivery_performance(&orders),
        vec![DeliveryStats {
            name: "X".to_string(),
            delivered: 1,
            total: 1,
            percent: 100,
        }]
    );
}

#[test]
fn test_restaurant_export_aggregates() {
    init_test_logging();
    let orders = restaurant_orders();

    assert_eq!(revenue_total(&orders), 515.5);

    assert_eq!(
        customer_frequency(&orders),
        vec![
            NamedValue::new("Priya", 2),
            NamedValue::new("Arjun", 1),
            NamedValue::new("Kiran", 1),
        ]
    );

    assert_eq!(
        item_frequency(&orders),
        vec![
            NamedValue::new("Idli", 5.0),
            NamedValue::new("Filter Coffee", 3.0),
            NamedValue::new("Masala Dosa", 2.0),
            NamedValue::new("Vada", 0.0),
        ]
    );

    assert_eq!(
        order_type_distribution(&orders),
        vec![NamedValue::new("Online", 3), NamedValue::new("Dine-in", 1)]
    );

    assert_eq!(
        delivery_performance(&orders),
        vec![DeliveryStats::new("Ravi", 1, 2), DeliveryStats::new("Meena", 0, 1)]
    );
    assert_eq!(delivery_performance(&orders)[0].percent, 50);
}

#[test]
fn test_revenue_trend_on_export() {
    let orders = restaurant_orders();

    let trend = revenue_trend(&orders);
    let points: Vec<(Option<OrderId>, i64)> =
        trend.into_iter().map(|p| (p.order, p.revenue)).collect();

    assert_eq!(
        points,
        vec![
            (Some(OrderId::Number(1001)), 121),
            (Some(OrderId::Number(1002)), 75),
            (Some(OrderId::Number(1003)), 320),
            (Some(OrderId::Number(1004)), 0),
            (Some(OrderId::from("X-9")), 0),
        ]
    );
}

#[test]
fn test_dashboard_snapshot_on_export() {
    let orders = restaurant_orders();
    let snapshot = DashboardSnapshot::build(&orders, &AnalyticsConfig::default());

    assert_eq!(snapshot.kpis.revenue, 515.5);
    assert_eq!(snapshot.kpis.counts.total_orders, 5);
    assert_eq!(snapshot.kpis.counts.customers, 3);
    assert_eq!(snapshot.kpis.counts.delivery_persons, 2);
    assert_eq!(snapshot.top_items.points().len(), 4);
    assert!(!snapshot.revenue_trend.is_empty());

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["order_types"]["state"], "ready");
    assert_eq!(json["kpis"]["in_transit"], 1);
}

#[test]
fn test_zero_quantity_still_listed() {
    let orders = vec![order(1, None, None, None, vec![OrderItem::new("Water", 0.0, 0.0)])];
    assert_eq!(item_frequency(&orders), vec![NamedValue::new("Water", 0.0)]);
}

proptest! {
    #[test]
    fn revenue_total_matches_item_sum(orders in arb_orders()) {
        let expected: f64 = orders
            .iter()
            .flat_map(|o| o.items.iter())
            .map(|i| i.total_price)
            .sum();
        prop_assert!((revenue_total(&orders) - expected).abs() < 1e-6);
    }

    #[test]
    fn status_buckets_never_exceed_order_count(orders in arb_orders()) {
        let counts = status_counts(&orders);
        prop_assert!(counts.pending + counts.in_transit + counts.delivered <= orders.len());
        prop_assert_eq!(counts.total_orders, orders.len());
    }

    #[test]
    fn customer_frequency_counts_exact_names(orders in arb_orders()) {
        for entry in customer_frequency(&orders) {
            let expected = orders
                .iter()
                .filter(|o| o.customer_name.as_deref() == Some(entry.name.as_str()))
                .count();
            prop_assert_eq!(entry.value, expected);
        }
        prop_assert_eq!(customer_frequency(&orders).len(), status_counts(&orders).customers);
    }

    #[test]
    fn item_frequency_is_bounded_and_sorted(orders in arb_orders()) {
        let top = item_frequency(&orders);
        let total_quantity: f64 = orders
            .iter()
            .flat_map(|o| o.items.iter())
            .map(|i| i.quantity)
            .sum();
        let distinct = orders
            .iter()
            .flat_map(|o| o.items.iter().map(|i| i.item_name.as_str()))
            .collect::<std::collections::HashSet<_>>()
            .len();
        let top_sum: f64 = top.iter().map(|nv| nv.value).sum();

        prop_assert!(top.len() <= ITEM_FREQUENCY_LIMIT);
        prop_assert!(top.windows(2).all(|w| w[0].value >= w[1].value));
        prop_assert!(top_sum <= total_quantity + 1e-6);
        if distinct <= ITEM_FREQUENCY_LIMIT {
            prop_assert!((top_sum - total_quantity).abs() < 1e-6);
        }
    }

    #[test]
    fn delivery_percent_is_consistent(orders in arb_orders()) {
        for stats in delivery_performance(&orders) {
            prop_assert!(stats.total > 0);
            prop_assert!(stats.delivered <= stats.total);
            prop_assert!(stats.percent <= 100);
            if stats.delivered == stats.total {
                prop_assert_eq!(stats.percent, 100);
            }
            if stats.delivered == 0 {
                prop_assert_eq!(stats.percent, 0);
            }
        }
    }

    #[test]
    fn revenue_trend_is_sorted_by_id(orders in arb_orders()) {
        let trend = revenue_trend(&orders);
        prop_assert_eq!(trend.len(), orders.len());
        let ids: Vec<i64> = trend
            .iter()
            .filter_map(|p| match p.order {
                Some(OrderId::Number(n)) => Some(n),
                _ => None,
            })
            .collect();
        prop_assert!(ids.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_empty_dashboard_serialization() {
    let snapshot = DashboardSnapshot::build(&[], &AnalyticsConfig::default());

    let json = serde_json::to_value(&snapshot).unwrap();
    let expected = serde_json::json!({
        "kpis": {
            "revenue": 0.0,
            "pending": 0,
            "in_transit": 0,
            "delivered": 0,
            "customers": 0,
            "delivery_persons": 0,
            "total_orders": 0
        },
        "order_types": {"state": "empty", "message": "No order type data"},
        "top_items": {"state": "empty", "message": "No item data"},
        "delivery": {"state": "empty", "message": "No delivery data"},
        "revenue_trend": {"state": "empty", "message": "No revenue data"},
        "top_customers": {"state": "empty", "message": "No customer data"}
    });

    similar_asserts::assert_eq!(json, expected);
}
