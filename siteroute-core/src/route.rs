//! Ordered visiting sequences and per-leg reporting.
//!
//! A [`Route`] begins conceptually at a start point that is not part of the
//! sequence. Reporting helpers therefore take the start explicitly.

use crate::{Destination, GeoPoint, distance};

/// An ordered sequence of destinations.
///
/// Routes produced by a [`RoutePlanner`](crate::RoutePlanner) are a
/// permutation of the planner's input.
///
/// # Examples
/// ```
/// use siteroute_core::{Destination, GeoPoint, Route};
///
/// let route = Route::new(vec![Destination::new(1, GeoPoint::new(0.0, 1.0))]);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.waypoints(), vec![GeoPoint::new(0.0, 1.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<R> {
    stops: Vec<Destination<R>>,
}

/// One hop of a route with its great-circle length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Where the hop starts.
    pub from: GeoPoint,
    /// Where the hop ends.
    pub to: GeoPoint,
    /// Haversine length in kilometres.
    pub distance_km: f64,
}

impl<R> Route<R> {
    /// Wrap an already ordered list of stops.
    #[must_use]
    pub const fn new(stops: Vec<Destination<R>>) -> Self {
        Self { stops }
    }

    /// A route with no stops.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[Destination<R>] {
        &self.stops
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consume the route, returning its stops in order.
    #[must_use]
    pub fn into_stops(self) -> Vec<Destination<R>> {
        self.stops
    }

    /// Ordered coordinates suitable for a directions provider.
    #[must_use]
    pub fn waypoints(&self) -> Vec<GeoPoint> {
        self.stops.iter().map(|stop| stop.location).collect()
    }

    /// Legs travelled from `start` through every stop.
    ///
    /// # Examples
    /// ```
    /// use siteroute_core::{Destination, GeoPoint, Route};
    ///
    /// let route = Route::new(vec![
    ///     Destination::new("a", GeoPoint::new(0.0, 1.0)),
    ///     Destination::new("b", GeoPoint::new(0.0, 2.0)),
    /// ]);
    /// let legs = route.legs(GeoPoint::new(0.0, 0.0));
    /// assert_eq!(legs.len(), 2);
    /// assert_eq!(legs[1].from, GeoPoint::new(0.0, 1.0));
    /// ```
    #[must_use]
    pub fn legs(&self, start: GeoPoint) -> Vec<Leg> {
        let mut from = start;
        self.stops
            .iter()
            .map(|stop| {
                let leg = Leg {
                    from,
                    to: stop.location,
                    distance_km: distance(from, stop.location),
                };
                from = stop.location;
                leg
            })
            .collect()
    }

    /// Sum of leg lengths from `start`, in kilometres.
    #[must_use]
    pub fn total_distance_km(&self, start: GeoPoint) -> f64 {
        self.legs(start).iter().map(|leg| leg.distance_km).sum()
    }
}

impl<R> Default for Route<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R> From<Vec<Destination<R>>> for Route<R> {
    fn from(stops: Vec<Destination<R>>) -> Self {
        Self::new(stops)
    }
}

impl<R> IntoIterator for Route<R> {
    type Item = Destination<R>;
    type IntoIter = std::vec::IntoIter<Destination<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.into_iter()
    }
}
