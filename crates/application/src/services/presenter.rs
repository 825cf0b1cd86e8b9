//! Page view state
//!
//! [`WeatherPage`] is everything a frontend needs to draw the widget: the
//! unit toggles, the status line, the weather summary panel, the forecast
//! strip and the background theme. Rendering is a pure function of the cached
//! Celsius model and the active unit.

use domain::{CurrentConditions, DailyForecastEntry, Place, TemperatureUnit, WeatherCode};
use serde::Serialize;

use super::weather_formatter::{
    BackgroundTheme, IconView, background_theme_for_code, describe_weather_code,
    format_forecast_date, format_local_time, format_location_label, format_temperature,
    format_wind, icon_for_weather_code,
};

/// Code used for forecast icons when the provider sent none
const DEFAULT_FORECAST_CODE: WeatherCode = WeatherCode::OVERCAST;

/// Rendered current conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentView {
    pub location: String,
    pub temperature: String,
    pub icon: IconView,
    pub description: String,
    /// `Wind: 3.2 m/s (200°)`
    pub wind: String,
    /// `Local time: 5/1/2024, 2:00:00 PM`
    pub local_time: String,
}

/// One rendered forecast day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastCard {
    pub date_label: String,
    pub icon: IconView,
    pub max: String,
    pub min: String,
}

/// A unit toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitToggle {
    pub unit: TemperatureUnit,
    pub pressed: bool,
}

/// Complete view state of the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherPage {
    unit: TemperatureUnit,
    status: String,
    current: Option<CurrentView>,
    forecast: Vec<ForecastCard>,
    weather_visible: bool,
    forecast_visible: bool,
    theme: Option<BackgroundTheme>,
}

impl WeatherPage {
    /// Empty page with the given unit toggled on
    pub const fn new(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            status: String::new(),
            current: None,
            forecast: Vec::new(),
            weather_visible: false,
            forecast_visible: false,
            theme: None,
        }
    }

    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Press the toggle for `unit` and release the other one
    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.unit = unit;
    }

    /// Both toggles, Celsius first
    pub fn unit_toggles(&self) -> [UnitToggle; 2] {
        TemperatureUnit::ALL.map(|unit| UnitToggle {
            unit,
            pressed: unit == self.unit,
        })
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Current conditions, present only while the panel is shown
    pub fn current(&self) -> Option<&CurrentView> {
        self.current.as_ref().filter(|_| self.weather_visible)
    }

    /// Forecast cards, empty while the strip is hidden
    pub fn forecast(&self) -> &[ForecastCard] {
        if self.forecast_visible { &self.forecast } else { &[] }
    }

    pub const fn weather_visible(&self) -> bool {
        self.weather_visible
    }

    pub const fn forecast_visible(&self) -> bool {
        self.forecast_visible
    }

    pub const fn theme(&self) -> Option<BackgroundTheme> {
        self.theme
    }

    pub fn hide_weather(&mut self) {
        self.weather_visible = false;
    }

    pub fn hide_forecast(&mut self) {
        self.forecast_visible = false;
    }

    /// Fill and show the weather panel, and switch the background theme
    pub fn render_current(&mut self, place: &Place, current: &CurrentConditions) {
        let unit = self.unit;
        self.current = Some(CurrentView {
            location: format_location_label(place),
            temperature: format_temperature(current.temperature, unit),
            icon: icon_for_weather_code(current.weather_code),
            description: describe_weather_code(current.weather_code).to_string(),
            wind: format!(
                "Wind: {}",
                format_wind(current.wind_speed, current.wind_direction)
            ),
            local_time: format!("Local time: {}", format_local_time(&current.time)),
        });
        self.theme = Some(background_theme_for_code(
            current.weather_code,
            &current.time,
        ));
        self.weather_visible = true;
    }

    /// Fill and show the forecast strip, or hide it when there is no daily data
    pub fn render_forecast(&mut self, daily: Option<&[DailyForecastEntry]>) {
        let Some(days) = daily else {
            self.hide_forecast();
            return;
        };

        let unit = self.unit;
        self.forecast = days
            .iter()
            .map(|day| ForecastCard {
                date_label: format_forecast_date(day.date),
                icon: icon_for_weather_code(day.weather_code.unwrap_or(DEFAULT_FORECAST_CODE)),
                max: format_temperature(day.max_temp, unit),
                min: format_temperature(day.min_temp, unit),
            })
            .collect();
        self.forecast_visible = true;
    }
}

impl Default for WeatherPage {
    fn default() -> Self {
        Self::new(TemperatureUnit::default())
    }
}
