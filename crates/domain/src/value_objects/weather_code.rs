//! WMO weather code value object
//!
//! See <https://open-meteo.com/en/docs> for the code reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-defined weather condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(i32);

impl WeatherCode {
    /// Clear sky
    pub const CLEAR_SKY: Self = Self(0);
    /// Mainly clear
    pub const MAINLY_CLEAR: Self = Self(1);
    /// Partly cloudy
    pub const PARTLY_CLOUDY: Self = Self(2);
    /// Overcast, also used when a forecast entry carries no code
    pub const OVERCAST: Self = Self(3);

    /// Wrap a raw code
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Raw numeric value
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for WeatherCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&WeatherCode::new(61)).expect("serialize");
        assert_eq!(json, "61");
        let code: WeatherCode = serde_json::from_str("95").expect("deserialize");
        assert_eq!(code.value(), 95);
    }

    #[test]
    fn named_codes() {
        assert_eq!(WeatherCode::CLEAR_SKY.value(), 0);
        assert_eq!(WeatherCode::OVERCAST.value(), 3);
    }
}
