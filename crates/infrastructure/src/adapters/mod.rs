//! Adapters implementing application ports

mod geocoding_adapter;
mod weather_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use weather_adapter::WeatherAdapter;
