//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{GeoLocation, LocalTimestamp, TemperatureUnit};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// TemperatureUnit Property Tests
// ============================================================================

mod temperature_unit_tests {
    use super::*;

    proptest! {
        #[test]
        fn celsius_is_identity(c in -100.0f64..100.0f64) {
            prop_assert!((TemperatureUnit::Celsius.from_celsius(c) - c).abs() < f64::EPSILON);
        }

        #[test]
        fn fahrenheit_is_linear(c in -100.0f64..100.0f64) {
            let f = TemperatureUnit::Fahrenheit.from_celsius(c);
            prop_assert!((f - (c * 9.0 / 5.0 + 32.0)).abs() < 1e-9);
        }

        #[test]
        fn arbitrary_codes_other_than_c_and_f_are_rejected(code in "[A-Za-z]{0,3}") {
            prop_assume!(code != "C" && code != "F");
            prop_assert!(TemperatureUnit::from_code(&code).is_none());
        }
    }
}

// ============================================================================
// LocalTimestamp Property Tests
// ============================================================================

mod local_timestamp_tests {
    use super::*;

    proptest! {
        #[test]
        fn hour_is_extracted_from_minute_format(hour in 0u32..24, minute in 0u32..60) {
            let ts = LocalTimestamp::new(format!("2024-05-01T{hour:02}:{minute:02}"));
            prop_assert_eq!(ts.hour(), Some(hour));
        }
    }
}
