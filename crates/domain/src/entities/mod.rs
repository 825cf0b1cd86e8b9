//! Domain entities - Lookup results produced by the provider clients

mod conditions;
mod place;

pub use conditions::{CurrentConditions, DailyForecastEntry, WeatherReport};
pub use place::Place;
