//! Loading of order exports
//!
//! An export is a JSON array of [`Order`] objects. Loading happens once per
//! session; the resulting vector is treated as an immutable snapshot.

use crate::{Error, Result, types::Order};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Read and decode an order export from disk
///
/// # Errors
///
/// Returns [`Error::DatasetRead`] if the file cannot be read and
/// [`Error::Serialization`] if it is not a valid order array.
pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;

    let orders = parse_orders(&raw)?;
    info!(
        path = %path.display(),
        orders = orders.len(),
        "Loaded order dataset"
    );
    Ok(orders)
}

/// Decode an order export held in memory
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the text is not a valid order array.
pub fn parse_orders(raw: &str) -> Result<Vec<Order>> {
    let orders: Vec<Order> = serde_json::from_str(raw)?;
    debug!(orders = orders.len(), bytes = raw.len(), "Decoded order export");
    Ok(orders)
}

/// Decode an order export from any reader
///
/// # Errors
///
/// Returns [`Error::Serialization`] on malformed input, including I/O
/// failures surfaced by the reader.
pub fn read_orders<R: Read>(reader: R) -> Result<Vec<Order>> {
    let orders: Vec<Order> = serde_json::from_reader(reader)?;
    debug!(orders = orders.len(), "Decoded order export from reader");
    Ok(orders)
}
