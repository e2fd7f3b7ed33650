//! Geographic point value type.

use serde::{Deserialize, Serialize};

/// A geographic position: latitude, longitude and an optional altitude.
///
/// An absent altitude is distinct from an altitude of zero. Points are
/// immutable; changing a position means replacing the point.
///
/// Equality is field-wise, except that `NaN` equals `NaN` so a point parsed
/// from `NaN` text can still be found in a collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    altitude: Option<f64>,
}

impl GeoPoint {
    /// Create a point without altitude.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }

    /// Create a point with altitude.
    #[must_use]
    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: Some(altitude),
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        let altitude = match (self.altitude, other.altitude) {
            (Some(a), Some(b)) => same_value(a, b),
            (None, None) => true,
            _ => false,
        };
        altitude
            && same_value(self.latitude, other.latitude)
            && same_value(self.longitude, other.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_without_altitude() {
        let point = GeoPoint::new(52.37, 4.89);
        assert_eq!(point.latitude(), 52.37);
        assert_eq!(point.longitude(), 4.89);
        assert!(point.altitude().is_none());
    }

    #[test]
    fn test_zero_altitude_is_not_absent() {
        assert_ne!(GeoPoint::new(1.0, 2.0), GeoPoint::with_altitude(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_point_equality_is_field_wise() {
        assert_eq!(
            GeoPoint::with_altitude(1.0, 2.0, 3.0),
            GeoPoint::with_altitude(1.0, 2.0, 3.0)
        );
        assert_ne!(GeoPoint::new(1.0, 2.0), GeoPoint::new(2.0, 1.0));
    }

    #[test]
    fn test_nan_points_are_equal() {
        let point = GeoPoint::new(1.0, f64::NAN);
        assert_eq!(point, GeoPoint::new(1.0, f64::NAN));
        assert_ne!(point, GeoPoint::new(1.0, 0.0));
        assert_ne!(
            GeoPoint::with_altitude(1.0, 2.0, f64::NAN),
            GeoPoint::new(1.0, 2.0)
        );
    }

    #[test]
    fn test_signed_zero_is_equal() {
        assert_eq!(GeoPoint::new(0.0, -0.0), GeoPoint::new(-0.0, 0.0));
    }
}
