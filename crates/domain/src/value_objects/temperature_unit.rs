//! Temperature unit value object
//!
//! Temperatures are kept in Celsius everywhere in the model; the unit only
//! decides how a value is shown.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Temperature display unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Every supported unit, in toggle order
    pub const ALL: [Self; 2] = [Self::Celsius, Self::Fahrenheit];

    /// Single-letter storage code ("C" or "F")
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Parse a stored code; anything other than exactly "C" or "F" is rejected
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "C" => Some(Self::Celsius),
            "F" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    /// Degree symbol appended to formatted values
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Convert a Celsius value into this unit
    #[must_use]
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for TemperatureUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" | "°c" => Ok(Self::Celsius),
            "f" | "fahrenheit" | "°f" => Ok(Self::Fahrenheit),
            _ => Err(DomainError::InvalidUnit(s.to_string())),
        }
    }
}
