//! Shared application state
//!
//! One value per running widget, injected into the lookup service. Holds the
//! active unit, the last successful result and the page view state.

use std::fmt;

use domain::{Place, TemperatureUnit, WeatherReport};

use super::presenter::WeatherPage;

/// Lifecycle of the most recent lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LookupPhase {
    /// Nothing requested yet, or the input was empty
    #[default]
    Idle,
    /// Resolving the place name
    Geocoding,
    /// Place resolved, waiting for the forecast
    FetchingWeather,
    /// Result on screen
    Rendered,
    /// Lookup ended with a status message and hidden panels
    Failed,
}

impl fmt::Display for LookupPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Geocoding => "geocoding",
            Self::FetchingWeather => "fetching weather",
            Self::Rendered => "rendered",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Last successful lookup, kept in Celsius for re-rendering
#[derive(Debug, Clone, PartialEq)]
pub struct LastFetched {
    pub place: Place,
    pub report: WeatherReport,
}

/// Mutable state shared between input handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub unit: TemperatureUnit,
    pub last_fetched: Option<LastFetched>,
    pub page: WeatherPage,
    pub phase: LookupPhase,
}

impl AppState {
    /// Fresh state with toggles showing `unit`
    pub const fn new(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            last_fetched: None,
            page: WeatherPage::new(unit),
            phase: LookupPhase::Idle,
        }
    }

    /// Draw the cached result with the active unit
    ///
    /// Returns `false` when nothing has been fetched yet.
    pub fn rerender(&mut self) -> bool {
        let Some(last) = &self.last_fetched else {
            return false;
        };

        self.page.render_current(&last.place, &last.report.current);
        if let Some(daily) = &last.report.daily {
            self.page.render_forecast(Some(daily.as_slice()));
        }
        true
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TemperatureUnit::default())
    }
}
