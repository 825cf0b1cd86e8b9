//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{GeoLocation, WeatherReport};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions and the short daily forecast
    ///
    /// Temperatures in the returned report are Celsius.
    async fn fetch(&self, location: &GeoLocation) -> Result<WeatherReport, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use domain::{CurrentConditions, LocalTimestamp, WeatherCode};

    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }

    #[tokio::test]
    async fn mock_returns_report() {
        let mut mock = MockWeatherPort::new();
        mock.expect_fetch().returning(|_| {
            Ok(WeatherReport {
                current: CurrentConditions {
                    temperature: 20.0,
                    wind_speed: 1.0,
                    wind_direction: None,
                    weather_code: WeatherCode::CLEAR_SKY,
                    time: LocalTimestamp::new("2024-07-01T12:00"),
                },
                daily: None,
            })
        });

        let loc = GeoLocation::new(0.0, 0.0).expect("valid");
        let report = mock.fetch(&loc).await.expect("mock succeeds");
        assert!((report.current.temperature - 20.0).abs() < f64::EPSILON);
    }
}
