//! Place entity - a geocoded location

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// Best-match result of a place-name lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Place name as returned by the geocoder
    pub name: String,
    /// First-level administrative region (state, province)
    pub region: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// Coordinates
    pub location: GeoLocation,
}

impl Place {
    /// Create a place without region or country
    #[must_use]
    pub fn new(name: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            name: name.into(),
            region: None,
            country: None,
            location,
        }
    }

    /// Set the administrative region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the country
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Latitude shortcut
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    /// Longitude shortcut
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.longitude()
    }
}
