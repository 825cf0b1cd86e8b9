//! Weather observation entities
//!
//! All temperatures are degrees Celsius. Nothing in this module converts
//! units; that happens when a value is rendered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{LocalTimestamp, WeatherCode};

/// Current conditions at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed as reported by the provider
    pub wind_speed: f64,
    /// Wind direction in degrees, if reported
    pub wind_direction: Option<f64>,
    /// WMO weather code
    pub weather_code: WeatherCode,
    /// Observation time in the location's timezone
    pub time: LocalTimestamp,
}

/// One day of the short-range forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    /// Forecast date (location-local)
    pub date: NaiveDate,
    /// Minimum temperature in Celsius
    pub min_temp: f64,
    /// Maximum temperature in Celsius
    pub max_temp: f64,
    /// Dominant weather code, if reported
    pub weather_code: Option<WeatherCode>,
}

/// Everything a single forecast request returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Current conditions
    pub current: CurrentConditions,
    /// Daily entries in provider order; `None` when the provider sent no daily block
    pub daily: Option<Vec<DailyForecastEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> CurrentConditions {
        CurrentConditions {
            temperature: 15.4,
            wind_speed: 3.2,
            wind_direction: Some(200.0),
            weather_code: WeatherCode::PARTLY_CLOUDY,
            time: LocalTimestamp::new("2024-05-01T14:00"),
        }
    }

    #[test]
    fn report_serializes_dates_and_missing_daily() {
        let report = WeatherReport {
            current: current(),
            daily: None,
        };
        let json = serde_json::to_value(&report).expect("serialize");
        assert!(json["daily"].is_null());
        assert_eq!(json["current"]["time"], "2024-05-01T14:00");

        let entry = DailyForecastEntry {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
            min_temp: 9.0,
            max_temp: 17.5,
            weather_code: Some(WeatherCode::new(61)),
        };
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["weather_code"], 61);
    }
}
