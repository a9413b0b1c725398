//! Cart line entity - One product in the cart with its quantity.

use super::{Product, ProductId};

/// A product in the cart. The cart keeps at most one line per product id.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product at the time it was first added
    pub product: Product,
    /// Number of units, never below 1
    pub quantity: u32,
}

impl CartLine {
    /// Starts a line with a single unit.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Id of the product on this line.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}
