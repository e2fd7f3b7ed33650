//! Text codec for the content of `<coordinates>` elements.
//!
//! The wire form is a sequence of `lon,lat[,alt]` tuples separated by
//! whitespace. Numbers always use `.` as the decimal separator and never
//! carry grouping separators.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::point::GeoPoint;

pub use crate::config::DEFAULT_DELIMITER;

/// One tuple: longitude, latitude and an optional altitude token.
///
/// A comma may be surrounded by whitespace; tokens are runs of anything
/// that is neither whitespace nor a comma.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TUPLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^\s,]+)\s*,\s*([^\s,]+)(?:\s*,\s*([^\s,]+))?\b").expect("valid regex")
});

/// Format points as coordinate text.
///
/// Each point becomes `lon,lat` or `lon,lat,alt`; tuples are joined with
/// `delimiter`. `f64` display is the shortest representation that parses
/// back to the same value, so formatting never loses precision.
///
/// # Examples
/// ```
/// use kmlkit::coordinates::codec::format;
/// use kmlkit::GeoPoint;
///
/// let points = [GeoPoint::new(2.0, 1.0), GeoPoint::with_altitude(4.5, 3.0, 10.0)];
/// assert_eq!(format(&points, " "), "1,2 3,4.5,10");
/// ```
#[must_use]
pub fn format(points: &[GeoPoint], delimiter: &str) -> String {
    let mut text = String::new();
    for (index, point) in points.iter().enumerate() {
        if index > 0 {
            text.push_str(delimiter);
        }
        // Writing to a String cannot fail.
        let _ = write!(text, "{},{}", point.longitude(), point.latitude());
        if let Some(altitude) = point.altitude() {
            let _ = write!(text, ",{altitude}");
        }
    }
    text
}

/// Parse coordinate text into points.
///
/// Parsing is best-effort. A tuple whose longitude or latitude is not a
/// number is dropped. A third token that is not a number leaves the point
/// without altitude. Neither case is an error.
///
/// # Examples
/// ```
/// use kmlkit::coordinates::codec::parse;
/// use kmlkit::GeoPoint;
///
/// let points = parse("1,2 3,4,5");
/// assert_eq!(points, vec![GeoPoint::new(2.0, 1.0), GeoPoint::with_altitude(4.0, 3.0, 5.0)]);
/// ```
#[must_use]
pub fn parse(text: &str) -> Vec<GeoPoint> {
    let mut points = Vec::new();

    for captures in TUPLE_PATTERN.captures_iter(text) {
        let (Some(lon_token), Some(lat_token)) = (captures.get(1), captures.get(2)) else {
            continue;
        };

        let (Some(longitude), Some(latitude)) =
            (parse_number(lon_token.as_str()), parse_number(lat_token.as_str()))
        else {
            tracing::debug!(
                tuple = %captures.get(0).map_or("", |m| m.as_str()),
                "Dropping malformed coordinate tuple"
            );
            continue;
        };

        let altitude = captures.get(3).and_then(|token| {
            let altitude = parse_number(token.as_str());
            if altitude.is_none() {
                tracing::debug!(
                    token = %token.as_str(),
                    "Ignoring malformed altitude"
                );
            }
            altitude
        });

        points.push(match altitude {
            Some(altitude) => GeoPoint::with_altitude(latitude, longitude, altitude),
            None => GeoPoint::new(latitude, longitude),
        });
    }

    points
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}
