use serde::Serialize;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Outcome of [`validate_coordinates`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateCheck {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// `(latitude, longitude)` when both are valid.
    pub coordinates: Option<(f64, f64)>,
}

/// Check both coordinates, reporting every problem found.
#[must_use]
pub fn validate_coordinates(latitude: f64, longitude: f64) -> CoordinateCheck {
    let mut errors = Vec::new();

    if latitude.is_nan() {
        errors.push("Latitude must be a valid number".to_string());
    } else if !(-90.0..=90.0).contains(&latitude) {
        errors.push("Latitude must be between -90 and 90".to_string());
    }

    if longitude.is_nan() {
        errors.push("Longitude must be a valid number".to_string());
    } else if !(-180.0..=180.0).contains(&longitude) {
        errors.push("Longitude must be between -180 and 180".to_string());
    }

    let is_valid = errors.is_empty();
    CoordinateCheck {
        is_valid,
        errors,
        coordinates: is_valid.then_some((latitude, longitude)),
    }
}

/// Great-circle distance in kilometres between two `(lat, lng)` points.
#[must_use]
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = a;
    let (lat2, lon2) = b;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates_are_returned() {
        let check = validate_coordinates(37.7749, -122.4194);
        assert!(check.is_valid);
        assert_eq!(check.coordinates, Some((37.7749, -122.4194)));
    }

    #[test]
    fn bounds_are_inclusive() {
        for (lat, lng) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            assert!(validate_coordinates(lat, lng).is_valid);
        }
    }

    #[test]
    fn out_of_range_reports_each_axis() {
        let check = validate_coordinates(91.0, -181.0);
        assert!(!check.is_valid);
        assert_eq!(
            check.errors,
            vec![
                "Latitude must be between -90 and 90".to_string(),
                "Longitude must be between -180 and 180".to_string(),
            ]
        );
        assert!(check.coordinates.is_none());
    }

    #[test]
    fn nan_is_not_a_number() {
        let check = validate_coordinates(f64::NAN, 0.0);
        assert_eq!(check.errors, vec!["Latitude must be a valid number".to_string()]);
    }

    #[test]
    fn same_point_is_zero_distance() {
        let sf = (37.7749, -122.4194);
        assert!(haversine_km(sf, sf).abs() < 1e-9);
    }

    #[test]
    fn san_francisco_to_los_angeles() {
        let d = haversine_km((37.7749, -122.4194), (34.0522, -118.2437));
        assert!(d > 500.0 && d < 600.0, "got {d}");
    }

    #[test]
    fn across_equator_and_date_line() {
        let d = haversine_km((10.0, 0.0), (-10.0, 0.0));
        assert!(d > 2000.0 && d < 2500.0, "got {d}");
        let d = haversine_km((0.0, 179.0), (0.0, -179.0));
        assert!(d > 200.0 && d < 250.0, "got {d}");
    }
}
