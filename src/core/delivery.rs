//! Pickup-point selection.
//!
//! The directory lists the cities served and the pickup points in each. The
//! selection remembers the one point the buyer confirmed; it stays set for the
//! rest of the session but may be replaced.

use crate::{
    config::delivery::DeliveryConfig,
    entities::PickupPoint,
    errors::{Error, Result},
};
use tracing::{info, warn};

/// Cities and the pickup points available in each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupDirectory {
    cities: Vec<String>,
    streets: Vec<String>,
}

impl Default for PickupDirectory {
    fn default() -> Self {
        Self::from(DeliveryConfig::default())
    }
}

impl From<DeliveryConfig> for PickupDirectory {
    fn from(config: DeliveryConfig) -> Self {
        Self {
            cities: config.cities,
            streets: config.streets,
        }
    }
}

impl PickupDirectory {
    /// Every city served, in configuration order.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Cities whose name contains `query`, ignoring case. A blank query lists all.
    #[must_use]
    pub fn search_cities(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.cities
            .iter()
            .filter(|city| city.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Full addresses of the pickup points in `city`; none for an unknown city.
    #[must_use]
    pub fn pickup_points(&self, city: &str) -> Vec<String> {
        if !self.contains_city(city) {
            return Vec::new();
        }
        self.streets
            .iter()
            .map(|street| format!("{city}, {street}"))
            .collect()
    }

    /// Whether `city` is served at all. Matching is exact.
    #[must_use]
    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.iter().any(|known| known == city)
    }

    /// Whether `address` is one of the pickup points listed for `city`.
    #[must_use]
    pub fn offers(&self, city: &str, address: &str) -> bool {
        self.pickup_points(city).iter().any(|point| point == address)
    }
}

/// The pickup point confirmed in the delivery dialog, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverySelection {
    point: Option<PickupPoint>,
}

impl DeliverySelection {
    /// Confirms a pickup point.
    ///
    /// # Errors
    /// Returns [`Error::IncompleteDeliveryPoint`] and keeps the previous choice when
    /// either the city or the address is blank.
    pub fn select(&mut self, city: &str, address: &str) -> Result<&PickupPoint> {
        if city.trim().is_empty() || address.trim().is_empty() {
            warn!("Rejected pickup point without city or address");
            return Err(Error::IncompleteDeliveryPoint);
        }
        info!(city, address, "Pickup point selected");
        Ok(&*self.point.insert(PickupPoint {
            city: city.to_string(),
            address: address.to_string(),
        }))
    }

    /// Same as [`DeliverySelection::select`], but only for a point `directory` lists.
    ///
    /// # Errors
    /// Returns [`Error::IncompleteDeliveryPoint`] for a blank city or address and
    /// [`Error::UnknownPickupPoint`] for a pair the directory does not offer. The
    /// previous choice is kept either way.
    pub fn select_from(
        &mut self,
        directory: &PickupDirectory,
        city: &str,
        address: &str,
    ) -> Result<&PickupPoint> {
        let filled = !city.trim().is_empty() && !address.trim().is_empty();
        if filled && !directory.offers(city, address) {
            warn!(city, address, "Rejected pickup point outside the directory");
            return Err(Error::UnknownPickupPoint {
                city: city.to_string(),
                address: address.to_string(),
            });
        }
        self.select(city, address)
    }

    /// The confirmed point, if any.
    #[must_use]
    pub const fn point(&self) -> Option<&PickupPoint> {
        self.point.as_ref()
    }

    /// Whether checkout has a pickup point to ship to.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.point.is_some()
    }
}
