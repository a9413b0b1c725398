//! Entity module - Plain data types for the storefront.
//! Products come from the seed catalog or a seller submission, cart lines wrap a
//! product with a quantity, and orders are summaries that are never stored.

pub mod cart_line;
pub mod order;
pub mod product;

pub use cart_line::CartLine;
pub use order::{OrderConfirmation, PickupPoint};
pub use product::{NewProduct, Product, ProductId};
