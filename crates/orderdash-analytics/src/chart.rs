//! Chart series with an explicit empty state

use serde::Serialize;

/// Shown by the revenue trend chart when there is nothing to plot
pub const NO_REVENUE_DATA: &str = "No revenue data";

/// Shown by the order type chart when there is nothing to plot
pub const NO_ORDER_TYPE_DATA: &str = "No order type data";

/// Shown by the frequent items chart when there is nothing to plot
pub const NO_ITEM_DATA: &str = "No item data";

/// Shown by the top customers chart when there is nothing to plot
pub const NO_CUSTOMER_DATA: &str = "No customer data";

/// Shown by the delivery performance panel when there is nothing to plot
pub const NO_DELIVERY_DATA: &str = "No delivery data";

/// Data handed to a chart: either points, or the message to show instead
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartData<T> {
    /// Nothing to plot
    Empty {
        /// Placeholder text
        message: &'static str,
    },
    /// Points to plot
    Ready {
        /// Series points
        points: Vec<T>,
    },
}

impl<T> ChartData<T> {
    /// The empty state with its placeholder text
    #[must_use]
    pub const fn empty(message: &'static str) -> Self {
        Self::Empty { message }
    }

    /// Wrap a series, falling back to `message` when it has no points
    #[must_use]
    pub fn from_points(points: Vec<T>, message: &'static str) -> Self {
        if points.is_empty() {
            Self::Empty { message }
        } else {
            Self::Ready { points }
        }
    }

    /// Whether the chart shows its placeholder
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Points to plot, empty in the empty state
    #[must_use]
    pub fn points(&self) -> &[T] {
        match self {
            Self::Empty { .. } => &[],
            Self::Ready { points } => points,
        }
    }

    /// Placeholder text, if empty
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Empty { message } => Some(*message),
            Self::Ready { .. } => None,
        }
    }
}
