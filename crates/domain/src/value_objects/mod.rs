//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod local_timestamp;
mod temperature_unit;
mod weather_code;

pub use geo_location::GeoLocation;
pub use local_timestamp::LocalTimestamp;
pub use temperature_unit::TemperatureUnit;
pub use weather_code::WeatherCode;
