//! Application services - Use case implementations

mod app_state;
mod lookup_service;
mod presenter;
mod unit_preference;
pub mod weather_formatter;

pub use app_state::{AppState, LastFetched, LookupPhase};
pub use lookup_service::{
    LookupService, STATUS_LOOKING_UP, STATUS_NETWORK_ERROR, STATUS_NO_WEATHER, STATUS_NOT_FOUND,
    found_status, normalize_query,
};
pub use presenter::{CurrentView, ForecastCard, UnitToggle, WeatherPage};
pub use unit_preference::{UNIT_KEY, UnitPreferenceStore};
pub use weather_formatter::{BackgroundTheme, IconView, WeatherIcon};
