//! Presentation boundary - the storefront context and the callbacks the front-end invokes.
//!
//! [`Storefront`] owns every state container plus the open/closed state of each view.
//! Its methods correspond one-to-one with user actions (search box, add-to-cart
//! button, login form, checkout button...) and emit the same notices the shop shows.

/// Terminal commands and their dispatch onto the storefront
pub mod commands;
/// Notification seam
pub mod notify;
/// Plain-text rendering of the views
pub mod render;

pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier, Severity};

use crate::{
    config::{AppConfig, catalog},
    core::{
        cart::Cart,
        catalog::{Catalog, seller_name},
        checkout::{self, CheckoutOutcome},
        delivery::{DeliverySelection, PickupDirectory},
        session::{Credentials, Registration, Session},
    },
    entities::{CartLine, NewProduct, Product, ProductId},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Dialogs and panels that can be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Cart panel with the checkout button
    Cart,
    /// Login/registration dialog
    Auth,
    /// Profile dialog, where sellers list products
    Profile,
    /// Pickup-point picker
    Delivery,
}

/// Open/closed flag per [`View`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Views {
    cart: bool,
    auth: bool,
    profile: bool,
    delivery: bool,
}

impl Views {
    /// Whether `view` is currently shown.
    #[must_use]
    pub const fn is_open(&self, view: View) -> bool {
        match view {
            View::Cart => self.cart,
            View::Auth => self.auth,
            View::Profile => self.profile,
            View::Delivery => self.delivery,
        }
    }

    fn set(&mut self, view: View, open: bool) {
        let flag = match view {
            View::Cart => &mut self.cart,
            View::Auth => &mut self.auth,
            View::Profile => &mut self.profile,
            View::Delivery => &mut self.delivery,
        };
        *flag = open;
    }
}

/// Partially entered auth dialog fields, discarded when the dialog closes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    /// Login tab
    pub login: Credentials,
    /// Registration tab
    pub registration: Registration,
}

/// Everything the shop front shows, owned in one place.
pub struct Storefront<N> {
    catalog: Catalog,
    cart: Cart,
    session: Session,
    delivery: DeliverySelection,
    directory: PickupDirectory,
    views: Views,
    auth_form: AuthForm,
    placeholder_image: String,
    notifier: N,
}

impl<N: Notifier> Storefront<N> {
    /// Creates a storefront with an empty cart, a guest session and no pickup point.
    pub fn new(
        catalog: Catalog,
        directory: PickupDirectory,
        placeholder_image: impl Into<String>,
        notifier: N,
    ) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            session: Session::default(),
            delivery: DeliverySelection::default(),
            directory,
            views: Views::default(),
            auth_form: AuthForm::default(),
            placeholder_image: placeholder_image.into(),
            notifier,
        }
    }

    /// Creates a storefront seeded from the configured catalog file.
    ///
    /// # Errors
    /// Returns an error if the catalog file exists but cannot be read or parsed.
    pub fn from_config(config: &AppConfig, notifier: N) -> Result<Self> {
        let file = catalog::load_or_default(&config.catalog_path)?;
        Ok(Self::new(
            Catalog::new(file.products),
            PickupDirectory::from(file.delivery),
            config.placeholder_image.clone(),
            notifier,
        ))
    }

    /// Shows `view`.
    pub fn open(&mut self, view: View) {
        debug!(?view, "Open view");
        self.views.set(view, true);
    }

    /// Hides `view`. Closing the auth dialog also clears whatever was typed into it.
    pub fn close(&mut self, view: View) {
        debug!(?view, "Close view");
        self.views.set(view, false);
        if view == View::Auth {
            self.auth_form = AuthForm::default();
        }
    }

    /// Search box. Returns how many products are now visible.
    pub fn search(&mut self, query: &str) -> usize {
        self.catalog.search(query).len()
    }

    /// "Add to cart" on a product card. Returns the line's quantity afterwards.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] for an id that is not in the catalog.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<u32> {
        let product = self.catalog.get(id).ok_or(Error::ProductNotFound { id })?;
        let quantity = self.cart.add(product);
        self.notifier.notify(Severity::Success, "Added to cart");
        Ok(quantity)
    }

    /// Trash button on a cart line.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartLine> {
        let removed = self.cart.remove(id);
        self.notifier.notify(Severity::Info, "Removed from cart");
        removed
    }

    /// Quantity change from the cart view, clamped to at least 1.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        self.cart.set_quantity(id, quantity.max(1))
    }

    /// "+" button on a cart line.
    pub fn increment_quantity(&mut self, id: ProductId) -> Option<u32> {
        self.cart.increment(id)
    }

    /// "-" button on a cart line. Never goes below 1.
    pub fn decrement_quantity(&mut self, id: ProductId) -> Option<u32> {
        self.cart.decrement(id)
    }

    /// Fields of the auth dialog, for the front-end to fill in.
    pub fn auth_form_mut(&mut self) -> &mut AuthForm {
        &mut self.auth_form
    }

    /// Submits the login tab of the auth dialog.
    ///
    /// # Errors
    /// Returns [`Error::EmptyEmail`] when the email field is blank, or
    /// [`Error::MissingField`] when the password is empty; the dialog stays open.
    pub fn submit_login(&mut self) -> Result<()> {
        let form = &self.auth_form.login;
        require_email(&form.email)?;
        require_field(&form.password, "Password")?;
        self.session.login(form)?;
        self.welcome();
        Ok(())
    }

    /// Submits the registration tab of the auth dialog.
    ///
    /// # Errors
    /// Returns [`Error::EmptyEmail`] when the email field is blank, or
    /// [`Error::MissingField`] when the name or password is; the dialog stays open.
    pub fn submit_registration(&mut self) -> Result<()> {
        let form = &self.auth_form.registration;
        require_email(&form.email)?;
        require_field(&form.name, "Name")?;
        require_field(&form.password, "Password")?;
        self.session.register(form)?;
        self.welcome();
        Ok(())
    }

    fn welcome(&mut self) {
        let message = format!("Welcome, {}!", self.session.email());
        self.notifier.notify(Severity::Success, &message);
        self.close(View::Auth);
    }

    /// Seller's "add product" form in the profile dialog.
    ///
    /// # Errors
    /// Returns [`Error::NotASeller`] unless a seller is signed in, or the catalog's
    /// validation error for a bad name or price.
    pub fn submit_product(&mut self, fields: NewProduct) -> Result<Product> {
        if !self.session.is_seller() {
            return Err(Error::NotASeller);
        }
        let product =
            self.catalog
                .add_product(fields, self.session.email(), &self.placeholder_image)?;
        self.notifier
            .notify(Severity::Success, "Product listed successfully!");
        Ok(product)
    }

    /// Confirm button of the delivery dialog.
    ///
    /// # Errors
    /// Returns [`Error::IncompleteDeliveryPoint`] when the city or address is blank and
    /// [`Error::UnknownPickupPoint`] when the directory does not list the address for
    /// that city.
    pub fn select_delivery_point(&mut self, city: &str, address: &str) -> Result<()> {
        let message = format!(
            "Pickup point selected: {}",
            self.delivery.select_from(&self.directory, city, address)?
        );
        self.notifier.notify(Severity::Success, &message);
        self.close(View::Delivery);
        Ok(())
    }

    /// Checkout button in the cart view.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        self.checkout_at(Utc::now())
    }

    /// [`Storefront::checkout`] with an explicit order timestamp.
    pub fn checkout_at(&mut self, now: DateTime<Utc>) -> CheckoutOutcome {
        let outcome = checkout::checkout(&self.session, &self.delivery, &mut self.cart, now);
        self.close(View::Cart);
        match &outcome {
            CheckoutOutcome::NeedsAuthentication => {
                self.open(View::Auth);
                self.notifier
                    .notify(Severity::Info, "Sign in to place your order");
            }
            CheckoutOutcome::NeedsDeliveryPoint => {
                self.open(View::Delivery);
                self.notifier.notify(Severity::Info, "Choose a pickup point");
            }
            CheckoutOutcome::Completed(_) => {
                self.notifier
                    .notify(Severity::Success, "Order placed successfully!");
            }
        }
        outcome
    }

    /// Products the signed-in seller has listed; empty for buyers and guests.
    #[must_use]
    pub fn own_products(&self) -> Vec<&Product> {
        if !self.session.is_seller() {
            return Vec::new();
        }
        self.catalog.by_seller(seller_name(self.session.email()))
    }

    /// Number shown on the header cart icon.
    #[must_use]
    pub fn header_badge(&self) -> u32 {
        self.cart.item_count()
    }

    /// Product catalog and its current view.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The buyer's cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Who is signed in, if anyone.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The confirmed pickup point.
    #[must_use]
    pub const fn delivery(&self) -> &DeliverySelection {
        &self.delivery
    }

    /// Cities and pickup points on offer.
    #[must_use]
    pub const fn directory(&self) -> &PickupDirectory {
        &self.directory
    }

    /// Which dialogs are open.
    #[must_use]
    pub const fn views(&self) -> &Views {
        &self.views
    }

    /// What has been typed into the auth dialog so far.
    #[must_use]
    pub const fn auth_form(&self) -> &AuthForm {
        &self.auth_form
    }

    /// Where notices went; tests read them back from a [`RecordingNotifier`].
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }
}

fn require_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(Error::EmptyEmail);
    }
    Ok(())
}

fn require_field(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingField { field });
    }
    Ok(())
}
