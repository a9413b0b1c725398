//! Order entities - Where an order is collected and what was placed.
//!
//! Orders are not stored anywhere. A confirmation is handed back once so the
//! front-end can show it, then dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pickup point chosen in the delivery dialog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupPoint {
    /// City the point is in
    pub city: String,
    /// Full address, e.g. "Казань, ул. Ленина, 10"
    pub address: String,
}

impl fmt::Display for PickupPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

/// Summary of a completed checkout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderConfirmation {
    /// Number of distinct products ordered
    pub lines: usize,
    /// Total number of units ordered
    pub items: u32,
    /// Order total in rubles
    pub total: f64,
    /// Where the order will be collected
    pub pickup: PickupPoint,
    /// When checkout went through
    pub placed_at: DateTime<Utc>,
}
