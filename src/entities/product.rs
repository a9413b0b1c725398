//! Product entity - An item listed in the catalog.
//!
//! Products are created either from the seed catalog or by a seller through the
//! profile form. They are never edited in place; a changed product is a new value.

use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

/// Catalog-unique product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one, or `None` after `u64::MAX`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A listed product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog
    pub id: ProductId,
    /// Display name (e.g., "Наушники Apple AirPods Pro 2")
    pub name: String,
    /// Current price in rubles
    pub price: f64,
    /// Price before the discount, if the product is on sale
    #[serde(default)]
    pub old_price: Option<f64>,
    /// Image URL
    pub image: String,
    /// Average rating out of 5
    pub rating: f64,
    /// Number of reviews behind the rating
    pub reviews: u32,
    /// Seller display name
    pub seller: String,
    /// Seller rating out of 5
    pub seller_rating: f64,
}

impl Product {
    /// Discount badge value in whole percent, 0 when the product is not on sale.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn discount_percent(&self) -> u32 {
        match self.old_price {
            Some(old) if old > 0.0 && old > self.price => {
                ((old - self.price) / old * 100.0).round() as u32
            }
            _ => 0,
        }
    }
}

/// Fields a seller fills in to list a new product.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewProduct {
    /// Display name, trimmed on submission
    pub name: String,
    /// Price in rubles
    pub price: f64,
    /// Optional pre-discount price
    pub old_price: Option<f64>,
    /// Image URL; the configured placeholder is used when absent or blank
    pub image: Option<String>,
    /// Free-text description. Collected by the form but not shown anywhere yet.
    pub description: Option<String>,
}
