//! Plain-text rendering for the terminal front-end.

use crate::{
    core::{cart::Cart, session::Session},
    entities::{OrderConfirmation, Product},
};

/// Formats rubles the way the shop prints them: "89 990 ₽", "1 234,50 ₽".
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_price(amount: f64) -> String {
    let kopecks = (amount * 100.0).round() as i64;
    let rubles = (kopecks / 100).unsigned_abs().to_string();
    let fraction = (kopecks % 100).unsigned_abs();

    let mut grouped = String::with_capacity(rubles.len() + rubles.len() / 3);
    for (i, digit) in rubles.chars().enumerate() {
        if i > 0 && (rubles.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let sign = if kopecks < 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped} ₽")
    } else {
        format!("{sign}{grouped},{fraction:02} ₽")
    }
}

/// One product card as a single line.
#[must_use]
pub fn product_card(product: &Product) -> String {
    let was = product.old_price.map_or_else(String::new, |old_price| {
        match product.discount_percent() {
            0 => format!(" (was {})", format_price(old_price)),
            discount => format!(" (was {}, -{discount}%)", format_price(old_price)),
        }
    });
    format!(
        "[{}] {} | {}{was} | ★{} ({}) | {} ★{}",
        product.id,
        product.name,
        format_price(product.price),
        product.rating,
        product.reviews,
        product.seller,
        product.seller_rating
    )
}

/// The product grid with its "found" counter.
#[must_use]
pub fn catalog_view(products: &[Product]) -> String {
    let mut view = format!("Products found: {}", products.len());
    for product in products {
        view.push('\n');
        view.push_str(&product_card(product));
    }
    view
}

/// The cart sheet.
#[must_use]
pub fn cart_view(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart (0)\nYour cart is empty. Add products to place an order.".to_string();
    }
    let mut view = format!("Cart ({})", cart.len());
    for line in cart.lines() {
        view.push_str(&format!(
            "\n[{}] {} x{} = {}",
            line.id(),
            line.product.name,
            line.quantity,
            format_price(line.subtotal())
        ));
    }
    view.push_str(&format!("\nTotal: {}", format_price(cart.total())));
    view
}

/// The profile dialog: account details, plus a seller's own listings.
#[must_use]
pub fn profile_view(session: &Session, listings: &[&Product]) -> String {
    if !session.is_authenticated() {
        return "Not signed in.".to_string();
    }
    let mut view = format!(
        "Email: {}\nAccount: {}",
        session.email(),
        session.display_role()
    );
    if session.is_seller() {
        view.push_str(&format!("\nYour products: {}", listings.len()));
        for product in listings {
            view.push('\n');
            view.push_str(&product_card(product));
        }
    }
    view
}

/// One-line summary of a placed order.
#[must_use]
pub fn confirmation_view(confirmation: &OrderConfirmation) -> String {
    format!(
        "Order of {} item(s) for {}, pickup at {} ({})",
        confirmation.items,
        format_price(confirmation.total),
        confirmation.pickup,
        confirmation.placed_at.format("%Y-%m-%d %H:%M UTC")
    )
}
