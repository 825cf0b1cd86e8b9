//! Weather formatting utilities
//!
//! Pure functions that turn Celsius readings, WMO codes and local timestamps
//! into the strings and keys the page shows.

use std::fmt;

use chrono::NaiveDate;
use domain::{LocalTimestamp, Place, TemperatureUnit, WeatherCode};
use serde::{Deserialize, Serialize};

/// Hour used for day/night decisions when a timestamp cannot be read
const FALLBACK_HOUR: u32 = 12;

// ── Numbers ─────────────────────────────────────────────────────

/// Round to the nearest integer, halves toward positive infinity
///
/// `-0.4` and `-0.5` both become `0`, never `-0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Format a Celsius reading in the given unit, e.g. `15°C` or `59°F`
#[must_use]
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    format!("{}{}", round_half_up(unit.from_celsius(celsius)), unit.symbol())
}

/// Wind speed with optional direction, e.g. `3.2 m/s (200°)`
#[must_use]
pub fn format_wind(speed: f64, direction: Option<f64>) -> String {
    match direction {
        Some(deg) => format!("{speed} m/s ({}°)", round_half_up(deg)),
        None => format!("{speed} m/s"),
    }
}

// ── Codes ───────────────────────────────────────────────────────

/// Human-readable description for a WMO weather code
#[must_use]
pub const fn describe_weather_code(code: WeatherCode) -> &'static str {
    match code.value() {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Light snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        80 => "Rain showers",
        81 => "Moderate showers",
        82 => "Violent showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

/// Icon artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Sun,
    PartlyCloudy,
    Cloud,
    Fog,
    Rain,
    Snow,
    Thunder,
}

impl WeatherIcon {
    /// Asset name without extension
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloud => "cloud",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunder => "thunder",
        }
    }

    /// Relative path of the SVG asset
    #[must_use]
    pub fn src(&self) -> String {
        format!("icons/{}.svg", self.name())
    }
}

/// Icon plus its alternative text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconView {
    pub icon: WeatherIcon,
    pub alt: &'static str,
}

impl IconView {
    const fn new(icon: WeatherIcon, alt: &'static str) -> Self {
        Self { icon, alt }
    }

    /// Relative path of the SVG asset
    #[must_use]
    pub fn src(&self) -> String {
        self.icon.src()
    }
}

/// Icon for a WMO weather code
#[must_use]
pub const fn icon_for_weather_code(code: WeatherCode) -> IconView {
    match code.value() {
        0 => IconView::new(WeatherIcon::Sun, "Clear sky"),
        1 | 2 => IconView::new(WeatherIcon::PartlyCloudy, "Partly cloudy"),
        3 => IconView::new(WeatherIcon::Cloud, "Overcast"),
        45..=48 => IconView::new(WeatherIcon::Fog, "Fog"),
        51..=67 => IconView::new(WeatherIcon::Rain, "Rain"),
        71..=75 => IconView::new(WeatherIcon::Snow, "Snow"),
        80..=82 => IconView::new(WeatherIcon::Rain, "Rain showers"),
        95.. => IconView::new(WeatherIcon::Thunder, "Thunderstorm"),
        _ => IconView::new(WeatherIcon::Cloud, "Weather"),
    }
}

/// Page background selected from weather and time of day
///
/// Exactly one theme is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    ClearDay,
    ClearNight,
    PartlyCloudy,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunder,
}

impl BackgroundTheme {
    /// Theme key, e.g. `partly-cloudy`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClearDay => "clear-day",
            Self::ClearNight => "clear-night",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloudy => "cloudy",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunder => "thunder",
        }
    }

    const fn clear(is_day: bool) -> Self {
        if is_day { Self::ClearDay } else { Self::ClearNight }
    }
}

impl fmt::Display for BackgroundTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a local hour counts as daytime: `[06:00, 18:00)`
#[must_use]
pub const fn is_daytime(hour: u32) -> bool {
    hour >= 6 && hour < 18
}

/// Background theme for a code at the location's local time
#[must_use]
pub fn background_theme_for_code(code: WeatherCode, time: &LocalTimestamp) -> BackgroundTheme {
    let is_day = is_daytime(time.hour().unwrap_or(FALLBACK_HOUR));

    match code.value() {
        0 | 1 => BackgroundTheme::clear(is_day),
        2 => BackgroundTheme::PartlyCloudy,
        3 => BackgroundTheme::Cloudy,
        45..=48 => BackgroundTheme::Fog,
        51..=67 | 80..=82 => BackgroundTheme::Rain,
        71..=75 => BackgroundTheme::Snow,
        95.. => BackgroundTheme::Thunder,
        _ => BackgroundTheme::clear(is_day),
    }
}

// ── Labels ──────────────────────────────────────────────────────

/// Name, region and country joined by `, `, skipping missing parts
#[must_use]
pub fn format_location_label(place: &Place) -> String {
    let mut parts = vec![place.name.as_str()];
    parts.extend(
        [place.region.as_deref(), place.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty()),
    );
    parts.join(", ")
}

/// Local observation time, e.g. `5/1/2024, 2:00:00 PM`
///
/// Unparseable timestamps are shown as received.
#[must_use]
pub fn format_local_time(time: &LocalTimestamp) -> String {
    time.parse().map_or_else(
        || time.as_str().to_string(),
        |dt| dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
    )
}

/// Forecast card label, e.g. `Wed, May 1`
#[must_use]
pub fn format_forecast_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
