//! Seed catalog loading from catalog.toml
//!
//! This module reads the products the storefront starts with, plus the optional
//! `[delivery]` table. When no file is present the built-in seed is used, so the
//! storefront always has something to show.

use super::delivery::DeliveryConfig;
use crate::{
    entities::{Product, ProductId},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{collections::HashSet, path::Path};
use tracing::{debug, info};

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Products to seed; the built-in list when the key is absent
    #[serde(default = "default_products")]
    pub products: Vec<Product>,
    /// Pickup-point directory overrides
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

impl CatalogFile {
    /// The built-in seed catalog and pickup directory.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: default_products(),
            delivery: DeliveryConfig::default(),
        }
    }

    fn validate(self) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(Error::Config {
                    message: format!("Duplicate product id {} in catalog", product.id),
                });
            }
            if product.name.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Product {} has an empty name", product.id),
                });
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(Error::InvalidAmount {
                    amount: product.price,
                });
            }
        }
        Ok(self)
    }
}

/// Loads the seed catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or required product fields are missing
/// - Two products share an id, a name is blank or a price is negative
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogFile> {
    let path = path.as_ref();
    debug!("Attempting to load catalog from: {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path.display()),
    })?;

    parse_catalog(&contents)
}

/// Loads the catalog file if it exists, the built-in seed otherwise.
///
/// # Errors
/// Same as [`load_config`] for a file that exists.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<CatalogFile> {
    let path = path.as_ref();
    if !path.exists() {
        info!(
            "No catalog at {}, using the built-in products",
            path.display()
        );
        return Ok(CatalogFile::builtin());
    }
    let catalog = load_config(path)?;
    info!(
        "Loaded {} products from {}",
        catalog.products.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parses catalog TOML text.
///
/// # Errors
/// Returns an error on invalid TOML or an inconsistent product list.
pub fn parse_catalog(contents: &str) -> Result<CatalogFile> {
    let catalog: CatalogFile = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog.toml: {e}"),
    })?;
    catalog.validate()
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u64,
    name: &str,
    price: f64,
    old_price: Option<f64>,
    image: &str,
    rating: f64,
    reviews: u32,
    seller: &str,
    seller_rating: f64,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        old_price,
        image: image.to_string(),
        rating,
        reviews,
        seller: seller.to_string(),
        seller_rating,
    }
}

/// The six products the storefront ships with.
#[must_use]
pub fn default_products() -> Vec<Product> {
    vec![
        seed(
            1,
            "Смартфон Samsung Galaxy S24 Ultra 256GB",
            89_990.0,
            Some(109_990.0),
            "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?w=400",
            4.8,
            1247,
            "TechStore",
            4.9,
        ),
        seed(
            2,
            "Наушники Apple AirPods Pro 2",
            21_990.0,
            Some(24_990.0),
            "https://images.unsplash.com/photo-1606841837239-c5a1a4a07af7?w=400",
            4.9,
            856,
            "AppleShop",
            5.0,
        ),
        seed(
            3,
            "Ноутбук Apple MacBook Air M2 13.6\"",
            129_990.0,
            None,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400",
            5.0,
            543,
            "TechStore",
            4.9,
        ),
        seed(
            4,
            "Умные часы Apple Watch Series 9",
            39_990.0,
            Some(44_990.0),
            "https://images.unsplash.com/photo-1579586337278-3befd40fd17a?w=400",
            4.7,
            672,
            "AppleShop",
            5.0,
        ),
        seed(
            5,
            "Игровая консоль Sony PlayStation 5",
            54_990.0,
            None,
            "https://images.unsplash.com/photo-1606144042614-b2417e99c4e3?w=400",
            4.9,
            1832,
            "GameWorld",
            4.8,
        ),
        seed(
            6,
            "Планшет Samsung Galaxy Tab S9 FE",
            34_990.0,
            Some(39_990.0),
            "https://images.unsplash.com/photo-1561154464-82e9adf32764?w=400",
            4.6,
            421,
            "TechStore",
            4.9,
        ),
    ]
}
