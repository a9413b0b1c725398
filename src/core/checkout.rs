//! Checkout orchestration.
//!
//! Placing an order is gated on two preconditions, checked in order: the buyer must
//! be signed in, then a pickup point must be chosen. The state is recomputed from
//! the session and the delivery selection on every attempt, so nothing is
//! remembered between attempts.

use crate::{
    core::{cart::Cart, delivery::DeliverySelection, session::Session},
    entities::OrderConfirmation,
};
use chrono::{DateTime, Utc};
use tracing::info;

/// Where a checkout attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// Nobody is signed in
    Unauthenticated,
    /// Signed in, but no pickup point chosen
    NoDeliverySelected,
    /// Both preconditions hold; the order can be placed
    Ready,
    /// The order was placed and the cart cleared
    Completed,
}

impl CheckoutState {
    /// Evaluates the preconditions. Never returns [`CheckoutState::Completed`];
    /// that state only results from [`checkout`].
    #[must_use]
    pub const fn evaluate(session: &Session, delivery: &DeliverySelection) -> Self {
        if !session.is_authenticated() {
            Self::Unauthenticated
        } else if !delivery.is_set() {
            Self::NoDeliverySelected
        } else {
            Self::Ready
        }
    }
}

/// Result of one checkout attempt
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Sign-in required; the cart is untouched
    NeedsAuthentication,
    /// Pickup point required; the cart is untouched
    NeedsDeliveryPoint,
    /// Order placed; the cart is now empty
    Completed(OrderConfirmation),
}

impl CheckoutOutcome {
    /// The state this outcome leaves checkout in.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        match self {
            Self::NeedsAuthentication => CheckoutState::Unauthenticated,
            Self::NeedsDeliveryPoint => CheckoutState::NoDeliverySelected,
            Self::Completed(_) => CheckoutState::Completed,
        }
    }
}

/// Attempts to place the order in `cart`.
///
/// The cart is only modified when both preconditions hold, in which case it is
/// summarised into the returned confirmation and cleared.
pub fn checkout(
    session: &Session,
    delivery: &DeliverySelection,
    cart: &mut Cart,
    now: DateTime<Utc>,
) -> CheckoutOutcome {
    match (CheckoutState::evaluate(session, delivery), delivery.point()) {
        (CheckoutState::Unauthenticated, _) => CheckoutOutcome::NeedsAuthentication,
        (CheckoutState::Ready, Some(pickup)) => {
            let confirmation = OrderConfirmation {
                lines: cart.len(),
                items: cart.item_count(),
                total: cart.total(),
                pickup: pickup.clone(),
                placed_at: now,
            };
            cart.clear();
            info!(
                email = session.email(),
                total = confirmation.total,
                pickup = %confirmation.pickup,
                "Order placed"
            );
            CheckoutOutcome::Completed(confirmation)
        }
        _ => CheckoutOutcome::NeedsDeliveryPoint,
    }
}
