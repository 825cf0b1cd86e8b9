//! Raw Open-Meteo response models
//!
//! Field names mirror the JSON the API sends with the legacy
//! `current_weather=true` flag and the `daily=` selector.

use chrono::NaiveDate;
use domain::{
    CurrentConditions, DailyForecastEntry, GeoLocation, LocalTimestamp, Place, WeatherCode,
};
use serde::Deserialize;
use tracing::warn;

/// Raw forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub current_weather: Option<CurrentWeatherData>,
    #[serde(default)]
    pub daily: Option<DailyData>,
}

/// Raw `current_weather` block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherData {
    pub time: String,
    pub temperature: f64,
    pub windspeed: f64,
    #[serde(default)]
    pub winddirection: Option<f64>,
    pub weathercode: i32,
}

impl From<CurrentWeatherData> for CurrentConditions {
    fn from(data: CurrentWeatherData) -> Self {
        Self {
            temperature: data.temperature,
            wind_speed: data.windspeed,
            wind_direction: data.winddirection,
            weather_code: WeatherCode::new(data.weathercode),
            time: LocalTimestamp::new(data.time),
        }
    }
}

/// Raw `daily` block: parallel arrays indexed by `time`
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    /// Missing or empty means there is no usable forecast
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub weathercode: Option<Vec<Option<i32>>>,
}

impl DailyData {
    /// Zip the parallel arrays into entries, keeping provider order
    ///
    /// Days without both temperatures are dropped.
    ///
    /// # Errors
    ///
    /// Returns the offending string if a date is not `YYYY-MM-DD`.
    pub fn into_entries(self) -> Result<Vec<DailyForecastEntry>, String> {
        let mut entries = Vec::with_capacity(self.time.len());

        for (i, raw_date) in self.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
                .map_err(|e| format!("invalid date {raw_date:?}: {e}"))?;

            let max = self.temperature_2m_max.get(i).copied().flatten();
            let min = self.temperature_2m_min.get(i).copied().flatten();
            let (Some(max_temp), Some(min_temp)) = (max, min) else {
                warn!(%date, "Skipping forecast day without temperatures");
                continue;
            };

            let weather_code = self
                .weathercode
                .as_ref()
                .and_then(|codes| codes.get(i).copied().flatten())
                .map(WeatherCode::new);

            entries.push(DailyForecastEntry {
                date,
                min_temp,
                max_temp,
                weather_code,
            });
        }

        Ok(entries)
    }
}

/// Raw geocoding search response
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    /// Absent entirely when nothing matched
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

/// One geocoding candidate
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
}

impl TryFrom<GeocodingResult> for Place {
    type Error = domain::DomainError;

    fn try_from(result: GeocodingResult) -> Result<Self, Self::Error> {
        let location = GeoLocation::new(result.latitude, result.longitude)?;
        Ok(Self {
            name: result.name,
            region: result.admin1.filter(|r| !r.is_empty()),
            country: result.country.filter(|c| !c.is_empty()),
            location,
        })
    }
}
