//! Shared test utilities for the storefront.
//!
//! This module provides fixture builders for products, catalogs and storefronts
//! with sensible defaults.

use crate::{
    config::{DEFAULT_PLACEHOLDER_IMAGE, catalog::default_products},
    core::{catalog::Catalog, delivery::PickupDirectory},
    entities::{Product, ProductId},
    shell::{RecordingNotifier, Storefront},
};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness so it shows up on failure.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates a product with sensible defaults.
///
/// # Defaults
/// * `old_price`: None
/// * `rating`, `seller_rating`: 4.5
/// * `reviews`: 10
/// * `seller`: `"TestSeller"`
#[must_use]
pub fn sample_product(id: u64, name: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        old_price: None,
        image: format!("https://example.com/{id}.jpg"),
        rating: 4.5,
        reviews: 10,
        seller: "TestSeller".to_string(),
        seller_rating: 4.5,
    }
}

/// A catalog holding the six built-in products.
#[must_use]
pub fn seeded_catalog() -> Catalog {
    Catalog::new(default_products())
}

/// A guest storefront over the built-in catalog that records its notices.
#[must_use]
pub fn storefront() -> Storefront<RecordingNotifier> {
    init_test_tracing();
    Storefront::new(
        seeded_catalog(),
        PickupDirectory::default(),
        DEFAULT_PLACEHOLDER_IMAGE,
        RecordingNotifier::default(),
    )
}

/// A storefront with a signed-in buyer and a pickup point chosen, so checkout
/// goes straight through.
#[must_use]
pub fn ready_storefront() -> Storefront<RecordingNotifier> {
    let mut store = storefront();
    let login = &mut store.auth_form_mut().login;
    login.email = "ready@example.com".to_string();
    login.password = "secret".to_string();
    store
        .submit_login()
        .and_then(|()| store.select_delivery_point("Москва", "Москва, ул. Ленина, 10"))
        .unwrap_or_else(|e| panic!("fixture setup failed: {e}"));
    store
}
