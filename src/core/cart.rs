//! Cart business logic - line items, quantities and totals.
//!
//! The cart holds at most one line per product. Adding a product that is already in
//! the cart bumps its quantity, and no quantity is ever stored below 1; removing the
//! line is the only way to drop a product.

use crate::entities::{CartLine, Product, ProductId};
use tracing::debug;

/// Shopping cart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Adds one unit of `product`, returning the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(id = %product.id, quantity = line.quantity, "Incremented cart line");
            return line.quantity;
        }
        self.lines.push(CartLine::new(product.clone()));
        debug!(id = %product.id, "Added cart line");
        1
    }

    /// Removes the line for `id`, if there is one.
    pub fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.id() == id)?;
        Some(self.lines.remove(index))
    }

    /// Replaces the quantity of the line for `id`. Anything below 1 is stored as 1.
    ///
    /// Returns `false` when the product is not in the cart.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        let Some(line) = self.line_mut(id) else {
            return false;
        };
        line.quantity = quantity.max(1);
        debug!(%id, quantity = line.quantity, "Set cart line quantity");
        true
    }

    /// Plus button: one more unit of `id`.
    pub fn increment(&mut self, id: ProductId) -> Option<u32> {
        let quantity = self.get(id)?.quantity.saturating_add(1);
        self.set_quantity(id, quantity);
        Some(quantity)
    }

    /// Minus button: one fewer unit of `id`, never below 1.
    pub fn decrement(&mut self, id: ProductId) -> Option<u32> {
        let quantity = self.get(id)?.quantity.saturating_sub(1).max(1);
        self.set_quantity(id, quantity);
        Some(quantity)
    }

    /// Sum of price times quantity over every line.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total number of units, shown on the header badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity))
    }

    /// The line for `id`, if the product is in the cart.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Lines in the order their products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drops every line. Used once an order is placed.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }
}
