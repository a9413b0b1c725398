//! End-to-end storefront scenarios driven through the public API.

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use dlplus_storefront::{
    config::{DEFAULT_PLACEHOLDER_IMAGE, catalog::default_products},
    core::{
        cart::Cart,
        catalog::Catalog,
        checkout::{CheckoutOutcome, CheckoutState},
        delivery::PickupDirectory,
        session::{Credentials, Registration},
    },
    entities::ProductId,
    errors::Error,
    shell::{RecordingNotifier, Severity, Storefront, View},
};

fn store() -> Storefront<RecordingNotifier> {
    Storefront::new(
        Catalog::new(default_products()),
        PickupDirectory::default(),
        DEFAULT_PLACEHOLDER_IMAGE,
        RecordingNotifier::default(),
    )
}

#[test]
fn repeated_adds_aggregate_into_one_line() {
    let catalog = Catalog::new(default_products());
    let product = catalog.get(ProductId::new(4)).unwrap();
    let mut cart = Cart::new();

    for _ in 0..7 {
        cart.add(product);
    }

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].quantity, 7);
    assert_eq!(cart.total(), 7.0 * 39_990.0);
}

#[test]
fn search_matches_macbook_only() {
    let mut catalog = Catalog::new(default_products());
    let found = catalog.search("macbook");
    assert_eq!(found.len(), 1);
    assert!(found[0].name.starts_with("Ноутбук Apple MacBook Air M2"));

    assert_eq!(catalog.search(""), default_products().as_slice());
}

#[test]
fn guest_checkout_opens_auth_and_keeps_cart() {
    let mut store = store();
    store.add_to_cart(ProductId::new(1)).unwrap();
    store.open(View::Cart);

    let outcome = store.checkout();

    assert_eq!(outcome.state(), CheckoutState::Unauthenticated);
    assert!(store.views().is_open(View::Auth));
    assert!(!store.views().is_open(View::Cart));
    assert_eq!(store.cart().item_count(), 1);
    assert_eq!(store.notifier().last().unwrap().0, Severity::Info);
}

#[test]
fn signed_in_without_pickup_point_opens_delivery() {
    let mut store = store();
    store.add_to_cart(ProductId::new(2)).unwrap();
    store.auth_form_mut().login = Credentials {
        email: "buyer@example.com".to_string(),
        password: "secret".to_string(),
    };
    store.submit_login().unwrap();

    let outcome = store.checkout();

    assert_eq!(outcome, CheckoutOutcome::NeedsDeliveryPoint);
    assert!(store.views().is_open(View::Delivery));
    assert_eq!(store.cart().item_count(), 1);
}

#[test]
fn complete_flow_places_order_and_empties_cart() {
    let mut store = store();
    store.add_to_cart(ProductId::new(2)).unwrap();
    store.add_to_cart(ProductId::new(2)).unwrap();
    store.add_to_cart(ProductId::new(6)).unwrap();
    let expected_total = store.cart().total();

    assert_eq!(store.checkout(), CheckoutOutcome::NeedsAuthentication);
    store.auth_form_mut().registration = Registration {
        name: "Покупатель".to_string(),
        email: "shopper@example.com".to_string(),
        password: "secret".to_string(),
        seller: false,
    };
    store.submit_registration().unwrap();

    assert_eq!(store.checkout(), CheckoutOutcome::NeedsDeliveryPoint);
    let city = "Екатеринбург";
    let address = store.directory().pickup_points(city)[2].clone();
    store.select_delivery_point(city, &address).unwrap();

    let CheckoutOutcome::Completed(order) = store.checkout() else {
        panic!("checkout should have completed");
    };
    assert_eq!(order.items, 3);
    assert_eq!(order.lines, 2);
    assert_eq!(order.total, expected_total);
    assert_eq!(order.pickup.address, "Екатеринбург, ул. Советская, 5");
    assert!(store.cart().is_empty());
    assert_eq!(store.header_badge(), 0);
    assert_eq!(
        store.notifier().last(),
        Some((Severity::Success, "Order placed successfully!"))
    );

    // The session and pickup point carry over to the next order
    store.add_to_cart(ProductId::new(5)).unwrap();
    assert!(matches!(store.checkout(), CheckoutOutcome::Completed(_)));
}

#[test]
fn seller_listing_shows_up_first_in_search() {
    let mut store = store();
    store.auth_form_mut().registration = Registration {
        name: "Мария".to_string(),
        email: "maria@crafts.ru".to_string(),
        password: "secret".to_string(),
        seller: true,
    };
    store.submit_registration().unwrap();

    let product = store
        .submit_product(dlplus_storefront::entities::NewProduct {
            name: "Apple Pie Mold".to_string(),
            price: 990.0,
            ..Default::default()
        })
        .unwrap();

    assert_eq!(store.search("apple"), 4);
    assert_eq!(store.catalog().visible()[0].id, product.id);
    assert_eq!(product.seller, "maria");
    assert_eq!(product.image, DEFAULT_PLACEHOLDER_IMAGE);

    store.add_to_cart(product.id).unwrap();
    assert_eq!(store.cart().total(), 990.0);
    assert_eq!(store.own_products(), vec![&product]);
}

#[test]
fn pickup_point_outside_directory_blocks_checkout() {
    let mut store = store();
    store.add_to_cart(ProductId::new(3)).unwrap();
    store.auth_form_mut().login = Credentials {
        email: "buyer@example.com".to_string(),
        password: "secret".to_string(),
    };
    store.submit_login().unwrap();

    let result = store.select_delivery_point("Атлантида", "Москва, ул. Ленина, 10");

    assert!(matches!(result, Err(Error::UnknownPickupPoint { .. })));
    assert_eq!(store.checkout(), CheckoutOutcome::NeedsDeliveryPoint);
    assert_eq!(store.cart().item_count(), 1);
}
