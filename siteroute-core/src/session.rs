//! Caller-side orchestration around the planner.
//!
//! A [`PlanningSession`] acquires the start, fetches destinations and only then
//! invokes the planner, so failures upstream abort before any ordering takes
//! place. Collaborators are injected at construction.

use thiserror::Error;

use crate::{
    DestinationSource, DestinationSourceError, Directions, DirectionsError, DirectionsProvider,
    GeoPoint, LocationError, Route, RoutePlanner, StartLocationSource,
};

/// Errors returned by [`PlanningSession::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The start location could not be acquired.
    #[error(transparent)]
    Location(#[from] LocationError),
    /// Destinations could not be fetched.
    #[error(transparent)]
    Destinations(#[from] DestinationSourceError),
    /// No destination carried usable coordinates.
    #[error("no destinations with coordinates available")]
    NoDestinations,
    /// The directions provider returned no result.
    #[error("routing provider returned no result: {0}")]
    Directions(#[from] DirectionsError),
}

/// A planned route together with provider metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedVisit<R> {
    /// Where the visit begins.
    pub start: GeoPoint,
    /// Stops in visiting order.
    pub route: Route<R>,
    /// Metrics reported by the directions provider.
    pub directions: Directions,
}

/// Wires location, destination and planner collaborators together.
///
/// # Examples
/// ```
/// use siteroute_core::{
///     Destination, DestinationSource, DestinationSourceError, GeoPoint,
///     NearestNeighbourPlanner, PlanningSession,
/// };
///
/// struct Fixed(Vec<Destination<u32>>);
///
/// impl DestinationSource for Fixed {
///     type Reference = u32;
///
///     fn destinations(&self) -> Result<Vec<Destination<u32>>, DestinationSourceError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let source = Fixed(vec![
///     Destination::new(2, GeoPoint::new(0.0, 2.0)),
///     Destination::new(1, GeoPoint::new(0.0, 1.0)),
/// ]);
/// let session = PlanningSession::new(GeoPoint::new(0.0, 0.0), source, NearestNeighbourPlanner);
/// let route = session.plan()?;
/// assert_eq!(route.stops()[0].reference, 1);
/// # Ok::<(), siteroute_core::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PlanningSession<L, D, P> {
    location: L,
    destinations: D,
    planner: P,
}

impl<L, D, P> PlanningSession<L, D, P>
where
    L: StartLocationSource,
    D: DestinationSource,
    P: RoutePlanner,
{
    /// Construct a session from its collaborators.
    pub const fn new(location: L, destinations: D, planner: P) -> Self {
        Self {
            location,
            destinations,
            planner,
        }
    }

    /// Acquire inputs and order the destinations.
    pub fn plan(&self) -> Result<Route<D::Reference>, PlanError> {
        self.plan_from_start().map(|(_, route)| route)
    }

    /// Plan, then ask `provider` for metrics over the ordered waypoints.
    pub fn plan_with_directions<T>(
        &self,
        provider: &T,
    ) -> Result<PlannedVisit<D::Reference>, PlanError>
    where
        T: DirectionsProvider + ?Sized,
    {
        let (start, route) = self.plan_from_start()?;
        let directions = provider.directions(start, &route.waypoints())?;
        Ok(PlannedVisit {
            start,
            route,
            directions,
        })
    }

    fn plan_from_start(&self) -> Result<(GeoPoint, Route<D::Reference>), PlanError> {
        let start = self.location.start_location()?;
        let destinations = self.destinations.destinations()?;
        if destinations.is_empty() {
            return Err(PlanError::NoDestinations);
        }
        log::debug!("planning visit over {} destinations", destinations.len());
        Ok((start, self.planner.plan(start, destinations)))
    }
}
