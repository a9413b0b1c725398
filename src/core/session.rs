//! Mock authentication.
//!
//! Login and registration both accept any non-empty email and mark the session as
//! signed in. Passwords are never checked, and there is no logout. The auth dialog
//! in `shell` is what insists the name and password fields are filled in.

use crate::errors::{Error, Result};
use tracing::{info, warn};

/// Login form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Account email; the only field the mock sign-in looks at
    pub email: String,
    /// Password, never verified
    pub password: String,
}

/// Registration form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Password, never stored
    pub password: String,
    /// "I want to sell" checkbox
    pub seller: bool,
}

/// Who is using the storefront
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    seller: bool,
    email: String,
}

impl Session {
    /// Signs in as a buyer.
    ///
    /// # Errors
    /// Returns [`Error::EmptyEmail`] and leaves the session untouched when the email is blank.
    pub fn login(&mut self, credentials: &Credentials) -> Result<()> {
        self.authenticate(&credentials.email, false)
    }

    /// Creates an account and signs in with it, as a seller if requested.
    ///
    /// # Errors
    /// Returns [`Error::EmptyEmail`] and leaves the session untouched when the email is blank.
    pub fn register(&mut self, registration: &Registration) -> Result<()> {
        self.authenticate(&registration.email, registration.seller)
    }

    fn authenticate(&mut self, email: &str, seller: bool) -> Result<()> {
        let email = email.trim();
        if email.is_empty() {
            warn!("Rejected sign-in without an email");
            return Err(Error::EmptyEmail);
        }
        self.authenticated = true;
        self.seller = seller;
        self.email = email.to_string();
        info!(email, seller, "Signed in");
        Ok(())
    }

    /// Whether anyone is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether the signed-in account may list products.
    #[must_use]
    pub const fn is_seller(&self) -> bool {
        self.seller
    }

    /// Signed-in email, empty for a guest.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Account type shown in the profile.
    #[must_use]
    pub const fn display_role(&self) -> &'static str {
        if self.seller { "seller" } else { "buyer" }
    }
}
