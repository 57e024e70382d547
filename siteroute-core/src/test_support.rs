//! Test-only, in-memory collaborators used by unit and behaviour tests.

use std::sync::{Mutex, PoisonError};

use crate::{
    Destination, DestinationSource, DestinationSourceError, Directions, DirectionsError,
    DirectionsProvider, GeoPoint, LocationError, StartLocationSource,
};

/// In-memory `DestinationSource` returning a fixed list or a fixed error.
#[derive(Debug, Clone)]
pub struct MemoryDestinations<R> {
    result: Result<Vec<Destination<R>>, DestinationSourceError>,
}

impl<R> Default for MemoryDestinations<R> {
    fn default() -> Self {
        Self {
            result: Ok(Vec::new()),
        }
    }
}

impl<R> MemoryDestinations<R> {
    /// Source yielding `destinations` in the given order.
    pub fn with_destinations<I>(destinations: I) -> Self
    where
        I: IntoIterator<Item = Destination<R>>,
    {
        Self {
            result: Ok(destinations.into_iter().collect()),
        }
    }

    /// Source that always fails with `message`.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(DestinationSourceError::Fetch(message.to_owned())),
        }
    }
}

impl<R: Clone> DestinationSource for MemoryDestinations<R> {
    type Reference = R;

    fn destinations(&self) -> Result<Vec<Destination<R>>, DestinationSourceError> {
        self.result.clone()
    }
}

/// `StartLocationSource` that always fails.
#[derive(Debug, Clone)]
pub struct FailingLocation(
    /// Error returned on every call.
    pub LocationError,
);

impl StartLocationSource for FailingLocation {
    fn start_location(&self) -> Result<GeoPoint, LocationError> {
        Err(self.0.clone())
    }
}

/// `DirectionsProvider` returning canned metrics and recording its input.
#[derive(Debug)]
pub struct FixedDirections {
    result: Result<Directions, DirectionsError>,
    seen: Mutex<Vec<GeoPoint>>,
}

impl FixedDirections {
    /// Provider that always succeeds with `directions`.
    #[must_use]
    pub const fn returning(directions: Directions) -> Self {
        Self {
            result: Ok(directions),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Provider that always fails with `error`.
    #[must_use]
    pub const fn failing(error: DirectionsError) -> Self {
        Self {
            result: Err(error),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Waypoints passed on the most recent call.
    #[must_use]
    pub fn last_waypoints(&self) -> Vec<GeoPoint> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DirectionsProvider for FixedDirections {
    fn directions(
        &self,
        _start: GeoPoint,
        waypoints: &[GeoPoint],
    ) -> Result<Directions, DirectionsError> {
        *self.seen.lock().unwrap_or_else(PoisonError::into_inner) = waypoints.to_vec();
        self.result.clone()
    }
}
