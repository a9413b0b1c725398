//! Core storefront logic.
//!
//! Each container here is a plain owned struct with one logical owner. The checkout
//! orchestrator only reads the session and delivery selection and clears the cart.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod delivery;
pub mod session;
