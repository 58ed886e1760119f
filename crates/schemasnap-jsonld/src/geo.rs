//! `GeoCoordinates` construction.
//!
//! The builder accepts any finite pair; range checks belong to the validator.

use crate::input::BusinessInput;
use crate::sanitize::parse_coordinate;
use crate::types::GeoCoordinates;

/// Build coordinates when both latitude and longitude parse to finite numbers.
#[must_use]
pub fn build_geo_coordinates(input: &BusinessInput) -> Option<GeoCoordinates> {
    let latitude = input.latitude.as_ref().filter(|v| !v.is_blank())?;
    let longitude = input.longitude.as_ref().filter(|v| !v.is_blank())?;

    let lat = parse_coordinate(latitude)?;
    let lng = parse_coordinate(longitude)?;

    Some(GeoCoordinates::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GeoValue;

    fn input_with(lat: Option<GeoValue>, lng: Option<GeoValue>) -> BusinessInput {
        BusinessInput {
            latitude: lat,
            longitude: lng,
            ..BusinessInput::default()
        }
    }

    #[test]
    fn builds_from_text_pair() {
        let geo = build_geo_coordinates(&input_with(
            Some("37.7749".into()),
            Some("-122.4194".into()),
        ))
        .unwrap();
        assert_eq!(geo.geo_type, "GeoCoordinates");
        assert!((geo.latitude - 37.7749).abs() < f64::EPSILON);
        assert!((geo.longitude - -122.4194).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_longitude_yields_none() {
        assert!(build_geo_coordinates(&input_with(Some("37.7749".into()), None)).is_none());
    }

    #[test]
    fn blank_latitude_yields_none() {
        assert!(
            build_geo_coordinates(&input_with(Some("".into()), Some("-122.4".into()))).is_none()
        );
    }

    #[test]
    fn invalid_number_yields_none() {
        assert!(build_geo_coordinates(&input_with(
            Some("not-a-number".into()),
            Some("-122.4194".into()),
        ))
        .is_none());
    }

    #[test]
    fn out_of_range_is_still_built() {
        let geo =
            build_geo_coordinates(&input_with(Some("95".into()), Some(GeoValue::Number(-200.0))))
                .unwrap();
        assert!((geo.latitude - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_zero_counts_as_absent() {
        let zeros = input_with(Some(GeoValue::Number(0.0)), Some(GeoValue::Number(0.0)));
        assert!(build_geo_coordinates(&zeros).is_none());
        let one_zero = input_with(Some("51.5".into()), Some(GeoValue::Number(0.0)));
        assert!(build_geo_coordinates(&one_zero).is_none());
    }

    #[test]
    fn text_zero_is_a_real_coordinate() {
        let geo = build_geo_coordinates(&input_with(Some("0".into()), Some("0".into()))).unwrap();
        assert!(geo.latitude.abs() < f64::EPSILON);
        assert!(geo.longitude.abs() < f64::EPSILON);
    }

    #[test]
    fn suffixed_text_is_read_by_prefix() {
        let geo =
            build_geo_coordinates(&input_with(Some("34.05N".into()), Some("-118.2W".into())))
                .unwrap();
        assert!((geo.latitude - 34.05).abs() < f64::EPSILON);
        assert!((geo.longitude - -118.2).abs() < f64::EPSILON);
    }
}
