//! Name/value pairs and the top-N view shared by the chart aggregates

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub use orderdash_core::config::DEFAULT_TOP_N;

/// One labelled value in a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue<V> {
    /// Label, e.g. a customer or item name
    pub name: String,
    /// Aggregated value
    pub value: V,
}

impl<V> NamedValue<V> {
    /// Create a labelled value
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Rank a name→value mapping: sort descending by value, keep the first `n`.
///
/// The sort is stable, so equal values keep the order in which `entries`
/// yields them.
#[must_use]
pub fn top_n<K, V, I>(entries: I, n: usize) -> Vec<NamedValue<V>>
where
    K: Into<String>,
    V: PartialOrd,
    I: IntoIterator<Item = (K, V)>,
{
    let mut ranked: Vec<NamedValue<V>> = entries
        .into_iter()
        .map(|(name, value)| NamedValue::new(name, value))
        .collect();

    ranked.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}
