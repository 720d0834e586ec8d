//! Test fixtures and sample data

use orderdash_core::{Order, OrderId, OrderItem, parse_orders};
use proptest::prelude::*;

/// The two-order example used throughout the documentation
pub const WORKED_EXAMPLE: &str = r#"[
    {"orderId": 1, "customerName": "A", "orderType": "Online", "orderStatus": "Delivered",
     "deliveryPerson": "X", "items": [{"itemName": "Tea", "quantity": 2, "totalPrice": 20}]},
    {"orderId": 2, "customerName": "A", "orderType": "Dine-in", "orderStatus": "Pending",
     "items": [{"itemName": "Tea", "quantity": 1, "totalPrice": 10}]}
]"#;

/// A small export in the restaurant's own field naming
pub const RESTAURANT_EXPORT: &str = r#"[
    {"Order_ID": 1003, "Customer_Name": "Priya", "Order_Type": "Online", "Order_Status": "In Transit",
     "Delivery_Person": "Ravi", "Items": [
        {"Item_Name": "Masala Dosa", "Quantity": 2, "Total_Price": 240},
        {"Item_Name": "Filter Coffee", "Quantity": 2, "Total_Price": 80}]},
    {"Order_ID": 1001, "Customer_Name": "Arjun", "Order_Type": "Dine-in", "Order_Status": "Delivered",
     "Items": [{"Item_Name": "Idli", "Quantity": 4, "Total_Price": 120.5}]},
    {"Order_ID": 1002, "Customer_Name": "Priya", "Order_Type": "Online", "Order_Status": "Delivered",
     "Delivery_Person": "Ravi", "Items": [
        {"Item_Name": "Filter Coffee", "Quantity": 1, "Total_Price": 40},
        {"Item_Name": "Vada", "Quantity": null, "Total_Price": 35}]},
    {"Order_ID": 1004, "Customer_Name": "Kiran", "Order_Status": "Pending",
     "Delivery_Person": "Meena", "Items": []},
    {"Order_ID": "X-9", "Customer_Name": "", "Order_Type": "Online",
     "Items": [{"Item_Name": "Idli", "Quantity": 1}]}
]"#;

/// Decode the worked example
pub fn worked_example() -> Vec<Order> {
    parse_orders(WORKED_EXAMPLE).unwrap()
}

/// Decode the restaurant export
pub fn restaurant_orders() -> Vec<Order> {
    parse_orders(RESTAURANT_EXPORT).unwrap()
}

/// Build an order from parts
pub fn order(
    id: i64,
    customer: Option<&str>,
    status: Option<&str>,
    courier: Option<&str>,
    items: Vec<OrderItem>,
) -> Order {
    Order {
        order_id: Some(OrderId::Number(id)),
        customer_name: customer.map(str::to_string),
        order_status: status.map(str::to_string),
        delivery_person: courier.map(str::to_string),
        items,
        ..Order::default()
    }
}

fn optional_name(pool: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        proptest::sample::select(pool).prop_map(|s| Some(s.to_string())),
    ]
}

const ITEM_NAMES: &[&str] = &["Tea", "Dosa", "Idli", "Vada", "Poha", "Upma", "Lassi", "Bun"];

/// Strategy producing a single item from a small name pool
pub fn arb_item() -> impl Strategy<Value = OrderItem> {
    (
        proptest::sample::select(ITEM_NAMES),
        0u32..10,
        0u32..500,
    )
        .prop_map(|(name, qty, price)| OrderItem::new(name, f64::from(qty), f64::from(price)))
}

/// Strategy producing an order list with unique numeric ids
pub fn arb_orders() -> impl Strategy<Value = Vec<Order>> {
    proptest::collection::vec(
        (
            optional_name(&["Asha", "Ben", "Chitra", "Dev"]),
            optional_name(&["Online", "Dine-in", "Takeaway"]),
            optional_name(&["Pending", "In Transit", "Delivered", "Cancelled"]),
            optional_name(&["Ravi", "Meena"]),
            proptest::collection::vec(arb_item(), 0..4),
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .zip(1i64..)
            .map(|((customer, kind, status, courier, items), id)| Order {
                order_id: Some(OrderId::Number(id)),
                customer_name: customer,
                order_type: kind,
                order_status: status,
                delivery_person: courier,
                items,
            })
            .collect()
    })
}
