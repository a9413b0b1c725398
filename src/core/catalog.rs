//! Catalog business logic - the product list, search and seller submissions.
//!
//! The catalog keeps the full product list and the view currently shown to the
//! buyer. Searching only replaces the view. New products go to the front of both.

use crate::{
    entities::{NewProduct, Product, ProductId},
    errors::{Error, Result},
};
use tracing::{debug, info};

/// Rating and seller rating given to freshly listed products
pub const NEW_PRODUCT_RATING: f64 = 5.0;

/// Product catalog with its current filtered view
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    visible: Vec<Product>,
    // `None` once the seed or the submissions reached `u64::MAX`
    next_id: Option<ProductId>,
}

impl Catalog {
    /// Seeds the catalog. The view starts out showing everything and new ids
    /// continue after the highest seeded id.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let next_id = products
            .iter()
            .map(|product| product.id)
            .max()
            .map_or(Some(ProductId::new(1)), ProductId::next);
        Self {
            visible: products.clone(),
            products,
            next_id,
        }
    }

    /// Filters the view by a case-insensitive substring of the product name.
    ///
    /// A blank query resets the view to the full catalog in its original order.
    pub fn search(&mut self, query: &str) -> &[Product] {
        if query.trim().is_empty() {
            self.visible.clone_from(&self.products);
        } else {
            let needle = query.to_lowercase();
            self.visible = self
                .products
                .iter()
                .filter(|product| product.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
        }
        debug!(query, found = self.visible.len(), "Catalog search");
        &self.visible
    }

    /// Lists a seller's product under a fresh id and puts it first in both the
    /// catalog and the current view.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The product name is empty or whitespace-only
    /// - The price or old price is negative or not finite (NaN, infinity)
    /// - Every id has already been handed out
    pub fn add_product(
        &mut self,
        fields: NewProduct,
        seller_email: &str,
        placeholder_image: &str,
    ) -> Result<Product> {
        if fields.name.trim().is_empty() {
            return Err(Error::EmptyProductName);
        }
        validate_amount(fields.price)?;
        if let Some(old_price) = fields.old_price {
            validate_amount(old_price)?;
        }

        let id = self.next_id.ok_or(Error::IdSpaceExhausted)?;
        let image = fields
            .image
            .filter(|image| !image.trim().is_empty())
            .unwrap_or_else(|| placeholder_image.to_string());

        let product = Product {
            id,
            name: fields.name.trim().to_string(),
            price: fields.price,
            old_price: fields.old_price,
            image,
            rating: NEW_PRODUCT_RATING,
            reviews: 0,
            seller: seller_name(seller_email).to_string(),
            seller_rating: NEW_PRODUCT_RATING,
        };
        self.next_id = id.next();

        self.products.insert(0, product.clone());
        self.visible.insert(0, product.clone());
        info!(id = %product.id, seller = %product.seller, "Listed new product");
        Ok(product)
    }

    /// Looks a product up by id, whether or not the current view shows it.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Every product, newest submissions first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products listed under the seller display name `seller`, newest first.
    #[must_use]
    pub fn by_seller(&self, seller: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.seller == seller)
            .collect()
    }

    /// The products the last search left visible.
    #[must_use]
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Number of products in the catalog, ignoring the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Seller display name: the part of the email before `@`.
#[must_use]
pub fn seller_name(email: &str) -> &str {
    email.split_once('@').map_or(email, |(name, _)| name)
}

fn validate_amount(amount: f64) -> Result<()> {
    if amount < 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}
