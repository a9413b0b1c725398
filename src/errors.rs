use crate::entities::ProductId;
use thiserror::Error;

/// Every failure the storefront surfaces to its caller.
///
/// Cart and search operations never fail; these variants cover configuration loading
/// and the required-field gating that the dialogs perform before touching state.
#[derive(Debug, Error)]
pub enum Error {
    /// The seed catalog or environment could not be turned into a configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Reading a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment variable was present but unusable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Sign-in or registration without an email
    #[error("Email is required")]
    EmptyEmail,

    /// A required form field was left blank
    #[error("{field} is required")]
    MissingField {
        /// Form label of the blank field
        field: &'static str,
    },

    /// Product submission without a name
    #[error("Product name cannot be empty")]
    EmptyProductName,

    /// A price that is negative, NaN or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected value
        amount: f64,
    },

    /// Every product id up to `u64::MAX` is taken
    #[error("No product ids left to assign")]
    IdSpaceExhausted,

    /// Product submission from a buyer account
    #[error("Only seller accounts can add products")]
    NotASeller,

    /// Delivery confirmation with the city or the address missing
    #[error("Choose both a city and a pickup address")]
    IncompleteDeliveryPoint,

    /// The address is not one of the pickup points offered in the city
    #[error("No pickup point \"{address}\" in {city}")]
    UnknownPickupPoint {
        /// City the address was looked up in
        city: String,
        /// The rejected address
        address: String,
    },

    /// No product with this id
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The id that was looked up
        id: ProductId,
    },

    /// Terminal input that is not a command
    #[error("Unknown command: {input}")]
    UnknownCommand {
        /// The line as typed
        input: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
