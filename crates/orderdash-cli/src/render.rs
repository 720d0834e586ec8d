//! Plain-text rendering of the dashboard views

use orderdash_analytics::{
    ChartData, DashboardSnapshot, DeliveryStats, KpiSummary, NamedValue, TablePage, TrendPoint,
};
use orderdash_core::{Order, utils::format_currency};
use std::fmt::Display;

/// Left-aligned text table with a dashed rule under the header
struct TextTable {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let mut out = String::new();
        write_row(&mut out, self.headers.iter().copied(), &widths);
        write_row(&mut out, rule.iter().map(String::as_str), &widths);
        for row in &self.rows {
            write_row(&mut out, row.iter().map(String::as_str), &widths);
        }
        out
    }
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Title line followed by either the chart's placeholder or its table
fn section<T>(title: &str, data: &ChartData<T>, table: impl FnOnce(&[T]) -> String) -> String {
    let mut out = format!("{title}\n");
    match data.message() {
        Some(message) => {
            out.push_str("  ");
            out.push_str(message);
            out.push('\n');
        }
        None => out.push_str(&table(data.points())),
    }
    out
}

fn whole_amount(amount: i64, symbol: &str) -> String {
    if symbol.is_empty() {
        amount.to_string()
    } else {
        format!("{symbol} {amount}")
    }
}

/// KPI cards as a two-column table
pub(crate) fn kpis(summary: &KpiSummary, symbol: &str) -> String {
    let counts = &summary.counts;
    let mut table = TextTable::new(&["Metric", "Value"]);
    for (metric, value) in [
        ("Total Revenue", format_currency(summary.revenue, symbol)),
        ("Total Orders", counts.total_orders.to_string()),
        ("Pending", counts.pending.to_string()),
        ("In Transit", counts.in_transit.to_string()),
        ("Delivered", counts.delivered.to_string()),
        ("Customers", counts.customers.to_string()),
        ("Delivery Persons", counts.delivery_persons.to_string()),
    ] {
        table.push(vec![metric.to_string(), value]);
    }
    format!("Key Metrics\n{}", table.render())
}

/// A name/value series such as customer or item frequency
pub(crate) fn named_values<V: Display>(
    title: &str,
    value_header: &'static str,
    data: &ChartData<NamedValue<V>>,
) -> String {
    section(title, data, |points| {
        let mut table = TextTable::new(&["Name", value_header]);
        for point in points {
            table.push(vec![point.name.clone(), point.value.to_string()]);
        }
        table.render()
    })
}

/// Delivery person completion rates
pub(crate) fn delivery(data: &ChartData<DeliveryStats>) -> String {
    section("Delivery Performance", data, |points| {
        let mut table = TextTable::new(&["Delivery Person", "Delivered", "Total", "Completion"]);
        for stats in points {
            table.push(vec![
                stats.name.clone(),
                stats.delivered.to_string(),
                stats.total.to_string(),
                format!("{}%", stats.percent),
            ]);
        }
        table.render()
    })
}

/// Revenue per order
pub(crate) fn trend(data: &ChartData<TrendPoint>, symbol: &str) -> String {
    section("Revenue Trend", data, |points| {
        let mut table = TextTable::new(&["Order", "Revenue"]);
        for point in points {
            let order = point
                .order
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string);
            table.push(vec![order, whole_amount(point.revenue, symbol)]);
        }
        table.render()
    })
}

fn item_summary(order: &Order) -> String {
    order
        .items
        .iter()
        .map(|item| format!("{} x{}", item.item_name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One page of the order table with its footer
pub(crate) fn order_table(page: &TablePage<'_>, symbol: &str) -> String {
    let footer = format!(
        "Page {} of {}, {} matching orders\n",
        page.meta.page + 1,
        page.meta.total_pages,
        page.total_count
    );
    if page.rows.is_empty() {
        return format!("No orders match\n{footer}");
    }

    let mut table = TextTable::new(&[
        "Order",
        "Customer",
        "Type",
        "Status",
        "Delivery Person",
        "Items",
        "Total",
    ]);
    for order in &page.rows {
        table.push(vec![
            order
                .order_id
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
            order.customer().unwrap_or("-").to_string(),
            order.kind().unwrap_or("-").to_string(),
            order.status_label().to_string(),
            order.courier().unwrap_or("-").to_string(),
            item_summary(order),
            format_currency(order.revenue(), symbol),
        ]);
    }
    format!("{}{footer}", table.render())
}

/// Status filter choices, one per line
pub(crate) fn statuses(options: &[String]) -> String {
    let mut out = String::from("any\n");
    for option in options {
        out.push_str(option);
        out.push('\n');
    }
    out
}

/// Every dashboard panel, separated by blank lines
pub(crate) fn dashboard(snapshot: &DashboardSnapshot, symbol: &str) -> String {
    [
        kpis(&snapshot.kpis, symbol),
        named_values("Order Types", "Orders", &snapshot.order_types),
        named_values("Frequently Ordered Items", "Quantity", &snapshot.top_items),
        named_values("Top Customers", "Orders", &snapshot.top_customers),
        delivery(&snapshot.delivery),
        trend(&snapshot.revenue_trend, symbol),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdash_analytics::{PageMeta, StatusCounts};
    use orderdash_core::{OrderId, OrderItem};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_text_table_alignment() {
        let mut table = TextTable::new(&["Name", "Orders"]);
        table.push(vec!["Priya".to_string(), "2".to_string()]);
        table.push(vec!["Al".to_string(), "10".to_string()]);

        assert_eq!(
            table.render(),
            "Name   Orders\n-----  ------\nPriya  2\nAl     10\n"
        );
    }

    #[test]
    fn test_kpis_show_currency() {
        let summary = KpiSummary {
            revenue: 30.0,
            counts: StatusCounts {
                pending: 1,
                delivered: 1,
                customers: 1,
                delivery_persons: 1,
                total_orders: 2,
                ..StatusCounts::default()
            },
        };

        let text = kpis(&summary, "₹");
        assert!(text.contains("Total Revenue     ₹ 30.00"));
        assert!(text.contains("Total Orders      2"));
    }

    #[rstest]
    #[case(ChartData::empty("No order type data"), "Order Types\n  No order type data\n")]
    #[case(
        ChartData::Ready { points: vec![NamedValue::new("Online", 3)] },
        "Order Types\nName    Orders\n------  ------\nOnline  3\n"
    )]
    fn test_named_values(#[case] data: ChartData<NamedValue<usize>>, #[case] expected: &str) {
        assert_eq!(named_values("Order Types", "Orders", &data), expected);
    }

    #[test]
    fn test_trend_without_symbol() {
        let data = ChartData::Ready {
            points: vec![
                TrendPoint {
                    order: Some(OrderId::Number(7)),
                    revenue: 121,
                },
                TrendPoint {
                    order: None,
                    revenue: 0,
                },
            ],
        };

        assert_eq!(
            trend(&data, ""),
            "Revenue Trend\nOrder  Revenue\n-----  -------\n7      121\n-      0\n"
        );
    }

    #[test]
    fn test_order_table_rows_and_footer() {
        let order = Order {
            order_id: Some(OrderId::Number(1003)),
            customer_name: Some("Priya".to_string()),
            order_status: Some("In Transit".to_string()),
            items: vec![
                OrderItem::new("Dosa", 2.0, 240.0),
                OrderItem::new("Coffee", 1.0, 40.0),
            ],
            ..Order::default()
        };
        let page = TablePage {
            rows: vec![&order],
            total_count: 6,
            status_options: vec!["In Transit".to_string()],
            meta: PageMeta::new(1, 5, 6),
        };

        let text = order_table(&page, "₹");
        assert!(text.contains("1003"));
        assert!(text.contains("Dosa x2, Coffee x1"));
        assert!(text.contains("₹ 280.00"));
        assert!(text.ends_with("Page 2 of 2, 6 matching orders\n"));
    }

    #[test]
    fn test_order_table_shows_delivery_person() {
        let delivered = Order {
            order_id: Some(OrderId::Number(1002)),
            order_status: Some("Delivered".to_string()),
            delivery_person: Some("Ravi".to_string()),
            ..Order::default()
        };
        let dine_in = Order {
            order_id: Some(OrderId::Number(1001)),
            ..Order::default()
        };
        let page = TablePage {
            rows: vec![&delivered, &dine_in],
            total_count: 2,
            status_options: Vec::new(),
            meta: PageMeta::new(0, 5, 2),
        };

        let text = order_table(&page, "");
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("Delivery Person"));
        assert!(lines[2].starts_with("1002"));
        assert!(lines[2].contains("Delivered  Ravi"));
        assert!(lines[3].starts_with("1001"));
        assert!(lines[3].contains("Unknown    -"));
    }

    #[test]
    fn test_order_table_empty() {
        let page = TablePage {
            rows: Vec::new(),
            total_count: 0,
            status_options: Vec::new(),
            meta: PageMeta::new(0, 5, 0),
        };

        assert_eq!(
            order_table(&page, "₹"),
            "No orders match\nPage 1 of 1, 0 matching orders\n"
        );
    }

    #[test]
    fn test_statuses_lead_with_any() {
        let options = vec!["Pending".to_string(), "Unknown".to_string()];
        assert_eq!(statuses(&options), "any\nPending\nUnknown\n");
    }

    #[test]
    fn test_dashboard_empty_state() {
        let text = dashboard(&DashboardSnapshot::empty(), "₹");

        assert!(text.contains("No revenue data"));
        assert!(text.contains("No order type data"));
        assert!(text.contains("₹ 0.00"));
    }
}
