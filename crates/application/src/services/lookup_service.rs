//! Lookup orchestration
//!
//! Sequences geocode, forecast fetch and render for one submitted city name,
//! and re-renders the cached result when the unit changes.
//!
//! The state lock is only taken in synchronous sections, never across an
//! await. Overlapping lookups therefore interleave freely and whichever one
//! settles last owns the page and the cached result.

use std::sync::Arc;

use domain::{Place, TemperatureUnit};
use parking_lot::Mutex;
use tracing::{debug, error, info, instrument, warn};

use super::{
    app_state::{AppState, LastFetched, LookupPhase},
    presenter::WeatherPage,
    unit_preference::UnitPreferenceStore,
};
use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, WeatherPort},
};

pub const STATUS_LOOKING_UP: &str = "Looking up location...";
pub const STATUS_NOT_FOUND: &str = "Location not found. Try a different city.";
pub const STATUS_NO_WEATHER: &str = "Could not get weather for that location.";
pub const STATUS_NETWORK_ERROR: &str = "Error fetching data. Check your network and try again.";

/// Status shown between the geocode and the forecast request
pub fn found_status(place: &Place) -> String {
    match place.country.as_deref() {
        Some(country) => format!("Found: {}, {country} - fetching weather...", place.name),
        None => format!("Found: {} - fetching weather...", place.name),
    }
}

/// Trim a submitted query, rejecting blank input
pub fn normalize_query(input: &str) -> Result<&str, ApplicationError> {
    let query = input.trim();
    if query.is_empty() {
        return Err(ApplicationError::EmptyInput);
    }
    Ok(query)
}

/// Weather lookup use case
pub struct LookupService {
    geocoder: Arc<dyn GeocodingPort>,
    weather: Arc<dyn WeatherPort>,
    preferences: UnitPreferenceStore,
    state: Arc<Mutex<AppState>>,
}

impl std::fmt::Debug for LookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService")
            .field("preferences", &self.preferences)
            .finish_non_exhaustive()
    }
}

impl LookupService {
    /// Create a service whose toggles start at the stored preference
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        weather: Arc<dyn WeatherPort>,
        preferences: UnitPreferenceStore,
    ) -> Self {
        let state = Arc::new(Mutex::new(AppState::new(preferences.get())));
        Self::with_state(geocoder, weather, preferences, state)
    }

    /// Create a service around an existing state object
    pub fn with_state(
        geocoder: Arc<dyn GeocodingPort>,
        weather: Arc<dyn WeatherPort>,
        preferences: UnitPreferenceStore,
        state: Arc<Mutex<AppState>>,
    ) -> Self {
        Self {
            geocoder,
            weather,
            preferences,
            state,
        }
    }

    /// Shared state handle
    pub fn state(&self) -> Arc<Mutex<AppState>> {
        Arc::clone(&self.state)
    }

    /// Snapshot of the page
    pub fn page(&self) -> WeatherPage {
        self.state.lock().page.clone()
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.state.lock().unit
    }

    pub fn phase(&self) -> LookupPhase {
        self.state.lock().phase
    }

    /// Handle a submitted city name
    ///
    /// Never fails: every error ends as a status message with both panels
    /// hidden. Returns the phase this lookup ended in, `Idle` for blank input.
    #[instrument(skip(self))]
    pub async fn submit(&self, input: &str) -> LookupPhase {
        let Ok(query) = normalize_query(input) else {
            debug!("Ignoring empty input");
            return LookupPhase::Idle;
        };

        {
            let mut state = self.state.lock();
            state.phase = LookupPhase::Geocoding;
            state.page.set_status(STATUS_LOOKING_UP);
            state.page.hide_weather();
            state.page.hide_forecast();
        }

        match self.run(query).await {
            Ok(phase) => phase,
            Err(e) => {
                let message = match &e {
                    ApplicationError::WeatherUnavailable(detail) => {
                        warn!(%detail, "No current conditions in response");
                        STATUS_NO_WEATHER
                    },
                    ApplicationError::RequestFailed(cause) => {
                        error!(%cause, "Lookup request failed");
                        STATUS_NETWORK_ERROR
                    },
                    other => {
                        error!(error = ?other, "Unexpected lookup failure");
                        STATUS_NETWORK_ERROR
                    },
                };
                self.fail(message);
                LookupPhase::Failed
            },
        }
    }

    async fn run(&self, query: &str) -> Result<LookupPhase, ApplicationError> {
        let Some(place) = self.geocoder.resolve(query).await? else {
            info!(%query, "Location not found");
            self.fail(STATUS_NOT_FOUND);
            return Ok(LookupPhase::Failed);
        };

        {
            let mut state = self.state.lock();
            state.phase = LookupPhase::FetchingWeather;
            state.page.set_status(found_status(&place));
        }

        let report = self.weather.fetch(&place.location).await?;

        let mut state = self.state.lock();
        state.page.render_current(&place, &report.current);
        state.page.render_forecast(report.daily.as_deref());
        state.page.clear_status();
        state.phase = LookupPhase::Rendered;
        info!(place = %place.name, "Rendered weather");
        state.last_fetched = Some(LastFetched { place, report });

        Ok(LookupPhase::Rendered)
    }

    fn fail(&self, message: &str) {
        let mut state = self.state.lock();
        state.page.set_status(message);
        state.page.hide_weather();
        state.page.hide_forecast();
        state.phase = LookupPhase::Failed;
    }

    /// Switch the active unit, persist it and re-render the cached result
    ///
    /// Returns `false` when `unit` is already active. Persisting is
    /// best-effort; a storage failure is logged and otherwise ignored.
    #[instrument(skip(self))]
    pub fn set_unit(&self, unit: TemperatureUnit) -> bool {
        if !self.apply_unit(unit) {
            return false;
        }

        if let Err(e) = self.preferences.set(unit) {
            warn!(error = %e, "Could not persist unit preference");
        }
        true
    }

    /// Switch the active unit for this session only
    pub fn override_unit(&self, unit: TemperatureUnit) -> bool {
        self.apply_unit(unit)
    }

    fn apply_unit(&self, unit: TemperatureUnit) -> bool {
        let mut state = self.state.lock();
        if state.unit == unit {
            return false;
        }

        state.unit = unit;
        state.page.set_unit(unit);
        if state.rerender() {
            debug!(%unit, "Re-rendered cached result");
        }
        true
    }
}
