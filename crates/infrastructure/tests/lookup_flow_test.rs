//! End-to-end lookup tests
//!
//! Wires the Open-Meteo adapters, the lookup service and an in-memory
//! preference store against a mock HTTP server.

use std::sync::Arc;

use application::{
    BackgroundTheme, LookupPhase, LookupService, STATUS_NETWORK_ERROR, STATUS_NO_WEATHER,
    UnitPreferenceStore, ports::KeyValueStore,
};
use domain::TemperatureUnit;
use infrastructure::{GeocodingAdapter, MemoryKeyValueStore, WeatherAdapter};
use integration_weather::{GeocodingConfig, WeatherConfig};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn paris_search() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "name": "Paris",
            "latitude": 48.85341,
            "longitude": 2.3488,
            "country": "France"
        }]
    })
}

fn paris_forecast(temperature: f64) -> serde_json::Value {
    serde_json::json!({
        "timezone": "Europe/Paris",
        "current_weather": {
            "time": "2024-05-01T14:00",
            "temperature": temperature,
            "windspeed": 3.2,
            "winddirection": 200,
            "weathercode": 2
        },
        "daily": {
            "time": ["2024-05-01", "2024-05-02", "2024-05-03"],
            "temperature_2m_max": [17.5, 19.0, 14.2],
            "temperature_2m_min": [9.0, 10.1, 8.4],
            "weathercode": [2, 61, 0]
        }
    })
}

/// Build a service whose both endpoints point at `server`
fn create_service(server: &MockServer, store: Arc<dyn KeyValueStore>) -> LookupService {
    #[allow(clippy::expect_used)]
    let geocoder = GeocodingAdapter::with_config(GeocodingConfig::for_testing(server.uri()))
        .expect("geocoding adapter");
    #[allow(clippy::expect_used)]
    let weather = WeatherAdapter::with_config(WeatherConfig::for_testing(server.uri()))
        .expect("weather adapter");

    LookupService::new(
        Arc::new(geocoder),
        Arc::new(weather),
        UnitPreferenceStore::new(store),
    )
}

async fn mount_paris(server: &MockServer, temperature: f64, forecast_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_search()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_forecast(temperature)))
        .expect(forecast_calls)
        .mount(server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn paris_renders_and_toggles_without_refetch() {
    let server = MockServer::start().await;
    mount_paris(&server, 15.0, 1).await;

    let service = create_service(&server, Arc::new(MemoryKeyValueStore::new()));
    assert_eq!(service.submit("Paris").await, LookupPhase::Rendered);

    let page = service.page();
    let current = page.current().expect("weather panel visible");
    assert_eq!(current.temperature, "15°C");
    assert_eq!(current.description, "Partly cloudy");
    assert_eq!(current.location, "Paris, France");
    assert_eq!(current.wind, "Wind: 3.2 m/s (200°)");
    assert_eq!(page.theme(), Some(BackgroundTheme::PartlyCloudy));
    assert_eq!(page.forecast().len(), 3);
    assert_eq!(page.status(), "");

    assert!(service.set_unit(TemperatureUnit::Fahrenheit));
    let page = service.page();
    assert_eq!(page.current().expect("visible").temperature, "59°F");

    assert!(service.set_unit(TemperatureUnit::Celsius));
    assert_eq!(service.page().current().expect("visible").temperature, "15°C");
    // MockServer verifies the single forecast call on drop
}

#[tokio::test]
async fn fractional_reading_rounds_per_unit() {
    let server = MockServer::start().await;
    mount_paris(&server, 15.4, 1).await;

    let service = create_service(&server, Arc::new(MemoryKeyValueStore::new()));
    assert_eq!(service.submit("Paris").await, LookupPhase::Rendered);
    assert_eq!(service.page().current().expect("visible").temperature, "15°C");

    // 15.4 * 9 / 5 + 32 = 59.72
    assert!(service.set_unit(TemperatureUnit::Fahrenheit));
    assert_eq!(service.page().current().expect("visible").temperature, "60°F");
}

#[tokio::test]
async fn preference_survives_new_service() {
    let server = MockServer::start().await;
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());

    let first = create_service(&server, Arc::clone(&store));
    assert_eq!(first.unit(), TemperatureUnit::Celsius);
    first.set_unit(TemperatureUnit::Fahrenheit);

    let second = create_service(&server, store);
    assert_eq!(second.unit(), TemperatureUnit::Fahrenheit);
    assert!(second.page().unit_toggles()[1].pressed);
}

// ============================================================================
// Failure scenarios
// ============================================================================

#[tokio::test]
async fn unknown_city_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = create_service(&server, Arc::new(MemoryKeyValueStore::new()));
    assert_eq!(service.submit("Xyzzyqq").await, LookupPhase::Failed);

    let page = service.page();
    assert!(page.status().starts_with("Location not found"));
    assert!(!page.weather_visible());
    assert!(!page.forecast_visible());
}

#[tokio::test]
async fn forecast_server_error_shows_network_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_search()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = create_service(&server, Arc::new(MemoryKeyValueStore::new()));
    assert_eq!(service.submit("Paris").await, LookupPhase::Failed);
    assert_eq!(service.page().status(), STATUS_NETWORK_ERROR);
}

#[tokio::test]
async fn forecast_without_current_weather() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_search()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"timezone": "UTC"})),
        )
        .mount(&server)
        .await;

    let service = create_service(&server, Arc::new(MemoryKeyValueStore::new()));
    assert_eq!(service.submit("Paris").await, LookupPhase::Failed);
    assert_eq!(service.page().status(), STATUS_NO_WEATHER);
}

#[tokio::test]
async fn geocoding_server_error_shows_network_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = create_service(&server, Arc::new(MemoryKeyValueStore::new()));
    assert_eq!(service.submit("Paris").await, LookupPhase::Failed);
    assert_eq!(service.page().status(), STATUS_NETWORK_ERROR);
}
