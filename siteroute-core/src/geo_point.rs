//! Latitude/longitude value type.

use geo::Coord;
use thiserror::Error;

/// A coordinate in decimal degrees.
///
/// `GeoPoint::new` performs no validation; use [`GeoPoint::try_new`] when the
/// values come from untrusted input.
///
/// # Examples
/// ```
/// use siteroute_core::GeoPoint;
///
/// let point = GeoPoint::new(41.0082, 28.9784);
/// assert_eq!(point.lat, 41.0082);
/// assert_eq!(point.lng, 28.9784);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

/// Errors returned by [`GeoPoint::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoPointError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinates must be finite numbers")]
    NonFinite,
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl GeoPoint {
    /// Construct a point without validating the range.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate and construct a point.
    ///
    /// # Examples
    /// ```
    /// use siteroute_core::{GeoPoint, GeoPointError};
    ///
    /// assert!(GeoPoint::try_new(45.0, 90.0).is_ok());
    /// assert_eq!(
    ///     GeoPoint::try_new(91.0, 0.0),
    ///     Err(GeoPointError::LatitudeOutOfRange(91.0))
    /// );
    /// ```
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, GeoPointError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoPointError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoPointError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeoPointError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Whether the point is finite and inside the valid degree ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::try_new(self.lat, self.lng).is_ok()
    }
}

impl From<Coord<f64>> for GeoPoint {
    /// `x` is longitude and `y` is latitude.
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Self {
            x: point.lng,
            y: point.lat,
        }
    }
}
