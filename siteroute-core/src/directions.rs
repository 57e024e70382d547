//! Turning an ordered waypoint list into travel metrics.
//!
//! A [`DirectionsProvider`] stands in for a mapping service that computes an
//! actual route along roads. [`StraightLineDirections`] is an offline
//! estimate over great-circle legs, and [`maps_directions_url`] builds a link
//! that hands the same waypoint order to Google Maps.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::{GeoPoint, distance};

/// Aggregate metrics for a rendered route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directions {
    /// Total travelled distance in kilometres.
    pub distance_km: f64,
    /// Expected travel time.
    pub duration: Duration,
}

/// Errors from [`DirectionsProvider::directions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The provider's request quota is exhausted.
    #[error("directions quota exceeded")]
    QuotaExceeded,
    /// No route connects the waypoints.
    #[error("no route found")]
    NoRoute,
    /// The provider is disabled or unreachable.
    #[error("directions provider unavailable: {0}")]
    Unavailable(String),
}

/// Compute a route through `waypoints`, beginning at `start`.
///
/// The last waypoint is the final destination.
pub trait DirectionsProvider {
    /// Metrics for visiting `waypoints` in order.
    fn directions(
        &self,
        start: GeoPoint,
        waypoints: &[GeoPoint],
    ) -> Result<Directions, DirectionsError>;
}

/// Configuration for [`StraightLineDirections`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsEstimateConfig {
    /// Average travel speed used to derive durations.
    pub average_speed_kmh: f64,
}

impl Default for DirectionsEstimateConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 40.0,
        }
    }
}

/// Offline provider that sums haversine legs.
///
/// Road distance is always at least the great-circle distance, so the result
/// is a lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLineDirections {
    config: DirectionsEstimateConfig,
}

impl StraightLineDirections {
    /// Construct a provider with explicit configuration.
    #[must_use]
    pub const fn with_config(config: DirectionsEstimateConfig) -> Self {
        Self { config }
    }
}

impl DirectionsProvider for StraightLineDirections {
    #[expect(
        clippy::float_arithmetic,
        reason = "duration estimate divides distance by speed"
    )]
    fn directions(
        &self,
        start: GeoPoint,
        waypoints: &[GeoPoint],
    ) -> Result<Directions, DirectionsError> {
        if waypoints.is_empty() {
            return Err(DirectionsError::NoRoute);
        }
        let speed = self.config.average_speed_kmh;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(DirectionsError::NoRoute);
        }
        let mut from = start;
        let mut distance_km = 0.0;
        for &to in waypoints {
            distance_km += distance(from, to);
            from = to;
        }
        let duration = Duration::try_from_secs_f64(distance_km / speed * 3600.0)
            .map_err(|_| DirectionsError::NoRoute)?;
        Ok(Directions {
            distance_km,
            duration,
        })
    }
}

/// Travel mode passed to the maps link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// By car.
    #[default]
    Driving,
    /// On foot.
    Walking,
    /// By bicycle.
    Bicycling,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
        })
    }
}

impl std::str::FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "bicycling" => Ok(Self::Bicycling),
            other => Err(format!("unknown travel mode: {other}")),
        }
    }
}

const MAPS_DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1";

/// Build a Google Maps directions link visiting `waypoints` in order.
///
/// Returns `None` when there is nothing to visit.
///
/// # Examples
/// ```
/// use siteroute_core::{GeoPoint, TravelMode, maps_directions_url};
///
/// let url = maps_directions_url(
///     GeoPoint::new(0.0, 0.0),
///     &[GeoPoint::new(0.0, 1.0), GeoPoint::new(0.0, 2.0)],
///     TravelMode::Driving,
/// );
/// assert_eq!(
///     url.as_deref(),
///     Some(
///         "https://www.google.com/maps/dir/?api=1&origin=0,0&destination=0,2\
///          &waypoints=0,1&travelmode=driving"
///     )
/// );
/// ```
#[must_use]
pub fn maps_directions_url(
    start: GeoPoint,
    waypoints: &[GeoPoint],
    mode: TravelMode,
) -> Option<String> {
    let (destination, intermediate) = waypoints.split_last()?;
    let mut url = format!(
        "{MAPS_DIRECTIONS_BASE}&origin={}&destination={}",
        coordinate_pair(start),
        coordinate_pair(*destination)
    );
    if !intermediate.is_empty() {
        let joined = intermediate
            .iter()
            .map(|point| coordinate_pair(*point))
            .collect::<Vec<_>>()
            .join("%7C");
        url.push_str("&waypoints=");
        url.push_str(&joined);
    }
    url.push_str("&travelmode=");
    url.push_str(&mode.to_string());
    Some(url)
}

fn coordinate_pair(point: GeoPoint) -> String {
    format!("{},{}", point.lat, point.lng)
}
