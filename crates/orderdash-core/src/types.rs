//! Core data types for `orderdash`
//!
//! Field names on the wire follow the restaurant export format
//! (`Order_ID`, `Customer_Name`, `Items`, ...); camelCase names are accepted
//! as aliases when decoding.

use crate::utils::{lenient_amount, string_or_empty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status string counted as pending
pub const STATUS_PENDING: &str = "Pending";

/// Status string counted as in transit
pub const STATUS_IN_TRANSIT: &str = "In Transit";

/// Status string counted as delivered
pub const STATUS_DELIVERED: &str = "Delivered";

/// Label used for orders whose status is absent or empty
pub const STATUS_UNKNOWN: &str = "Unknown";

/// Order identifier, numeric or free text
///
/// Variants are tried in order when decoding, so integers that fit in an
/// `i64` always land in [`OrderId::Number`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    /// Integer identifier
    Number(i64),
    /// Any other JSON number: fractional, exponent form or beyond `i64`
    OtherNumber(serde_json::Number),
    /// Free-text identifier
    Text(String),
}

impl OrderId {
    /// Numeric value used for ordering.
    ///
    /// Numeric ids map to themselves; text ids count as numeric when the
    /// trimmed text parses as a finite number. Everything else yields `None`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n as f64),
            Self::OtherNumber(n) => n.as_f64().filter(|v| v.is_finite()),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::OtherNumber(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for OrderId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Classification of an order's free-form status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Order accepted, not yet dispatched
    Pending,
    /// Order out for delivery
    InTransit,
    /// Order handed to the customer
    Delivered,
    /// Absent or unrecognised status
    Unknown,
}

impl StatusKind {
    /// Classify a raw status by exact string match
    #[must_use]
    pub fn classify(status: Option<&str>) -> Self {
        match status {
            Some(STATUS_PENDING) => Self::Pending,
            Some(STATUS_IN_TRANSIT) => Self::InTransit,
            Some(STATUS_DELIVERED) => Self::Delivered,
            _ => Self::Unknown,
        }
    }

    /// Canonical label of this kind
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::InTransit => STATUS_IN_TRANSIT,
            Self::Delivered => STATUS_DELIVERED,
            Self::Unknown => STATUS_UNKNOWN,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One product line within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product name, the key for item frequency
    #[serde(
        rename = "Item_Name",
        alias = "itemName",
        default,
        deserialize_with = "string_or_empty"
    )]
    pub item_name: String,

    /// Units ordered; missing, non-numeric or negative values decode as 0
    #[serde(
        rename = "Quantity",
        alias = "quantity",
        default,
        deserialize_with = "lenient_amount"
    )]
    pub quantity: f64,

    /// Line total; missing, non-numeric or negative values decode as 0
    #[serde(
        rename = "Total_Price",
        alias = "totalPrice",
        default,
        deserialize_with = "lenient_amount"
    )]
    pub total_price: f64,
}

impl OrderItem {
    /// Create an item
    #[must_use]
    pub fn new(item_name: impl Into<String>, quantity: f64, total_price: f64) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
            total_price,
        }
    }
}

/// One customer transaction
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    #[serde(
        rename = "Order_ID",
        alias = "orderId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub order_id: Option<OrderId>,

    /// Customer name
    #[serde(
        rename = "Customer_Name",
        alias = "customerName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_name: Option<String>,

    /// Order category such as `Online` or `Dine-in`
    #[serde(
        rename = "Order_Type",
        alias = "orderType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub order_type: Option<String>,

    /// Free-form order status
    #[serde(
        rename = "Order_Status",
        alias = "orderStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub order_status: Option<String>,

    /// Person assigned to deliver the order
    #[serde(
        rename = "Delivery_Person",
        alias = "deliveryPerson",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delivery_person: Option<String>,

    /// Line items, possibly empty
    #[serde(rename = "Items", alias = "items")]
    pub items: Vec<OrderItem>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl Order {
    /// Customer name, `None` when absent or empty
    #[must_use]
    pub fn customer(&self) -> Option<&str> {
        non_empty(self.customer_name.as_ref())
    }

    /// Order type, `None` when absent or empty
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        non_empty(self.order_type.as_ref())
    }

    /// Raw status, `None` when absent or empty
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        non_empty(self.order_status.as_ref())
    }

    /// Delivery person, `None` when absent or empty
    #[must_use]
    pub fn courier(&self) -> Option<&str> {
        non_empty(self.delivery_person.as_ref())
    }

    /// Status classification
    #[must_use]
    pub fn status_kind(&self) -> StatusKind {
        StatusKind::classify(self.order_status.as_deref())
    }

    /// Status as shown to users: the raw value, or `Unknown`
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.status().unwrap_or(STATUS_UNKNOWN)
    }

    /// Sum of `total_price` over all items
    #[must_use]
    pub fn revenue(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }
}
