//! Great-circle distance between coordinates.

use std::f64::consts::PI;

use crate::GeoPoint;

/// Mean Earth radius in kilometres used by [`distance`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between `a` and `b` in kilometres.
///
/// The result is symmetric and zero when both points are identical. Input is
/// not validated: out-of-range degrees pass straight through the formula and
/// NaN input yields NaN.
///
/// # Examples
/// ```
/// use siteroute_core::{GeoPoint, distance};
///
/// let km = distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
/// assert!((km - 111.19).abs() < 0.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = to_radians(b.lat - a.lat);
    let d_lng = to_radians(b.lng - a.lng);
    let half_lat = (d_lat / 2.0).sin();
    let half_lng = (d_lng / 2.0).sin();
    let h = half_lat * half_lat
        + to_radians(a.lat).cos() * to_radians(b.lat).cos() * half_lng * half_lng;
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[expect(
    clippy::float_arithmetic,
    reason = "degree to radian conversion is a floating-point scale"
)]
fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn one_degree_of_longitude_at_equator() {
        let km = distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((km - 111.19).abs() < 0.5, "unexpected distance {km}");
    }

    #[rstest]
    fn one_degree_of_latitude_matches_longitude_at_equator() {
        let along_meridian = distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        let along_equator = distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((along_meridian - along_equator).abs() < 1e-9);
    }

    #[rstest]
    #[case(GeoPoint::new(41.0082, 28.9784), GeoPoint::new(39.9334, 32.8597))]
    #[case(GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(51.5074, -0.1278))]
    #[case(GeoPoint::new(89.9, 0.0), GeoPoint::new(-89.9, 180.0))]
    fn distance_is_symmetric(#[case] a: GeoPoint, #[case] b: GeoPoint) {
        assert!((distance(a, b) - distance(b, a)).abs() < 1e-9);
    }

    #[rstest]
    #[case(GeoPoint::new(0.0, 0.0))]
    #[case(GeoPoint::new(41.0082, 28.9784))]
    #[case(GeoPoint::new(-90.0, 180.0))]
    fn distance_to_self_is_zero(#[case] point: GeoPoint) {
        assert_eq!(distance(point, point), 0.0);
    }

    #[rstest]
    fn istanbul_to_ankara_is_roughly_350_km() {
        let km = distance(
            GeoPoint::new(41.0082, 28.9784),
            GeoPoint::new(39.9334, 32.8597),
        );
        assert!((340.0..360.0).contains(&km), "unexpected distance {km}");
    }

    #[rstest]
    fn antipodal_points_are_half_the_circumference() {
        let km = distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!((km - PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[rstest]
    fn nan_input_propagates() {
        let km = distance(GeoPoint::new(f64::NAN, 0.0), GeoPoint::new(0.0, 0.0));
        assert!(km.is_nan());
    }
}
