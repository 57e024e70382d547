//! Where the start point and the destinations come from.
//!
//! Both collaborators are external to the planner: a device geolocation API
//! supplies the start and a sites data store supplies destinations. They are
//! expressed as traits so callers inject their own implementations instead of
//! reaching for ambient globals.

use std::time::Duration;

use thiserror::Error;

use crate::{Destination, GeoPoint};

/// Budget callers should allow a geolocation request before giving up.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from [`StartLocationSource::start_location`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user refused to share their position.
    #[error("location permission denied")]
    PermissionDenied,
    /// No position could be determined.
    #[error("location unavailable: {0}")]
    Unavailable(String),
    /// Acquisition exceeded its time budget.
    #[error("location request timed out after {0:?}")]
    TimedOut(Duration),
}

/// Errors from [`DestinationSource::destinations`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DestinationSourceError {
    /// The backing store could not be read.
    #[error("failed to fetch destinations: {0}")]
    Fetch(String),
}

/// Supply the point a visit starts from.
///
/// Implementations either return a complete point or an error; a planner
/// never sees a partial start.
pub trait StartLocationSource {
    /// Current start location.
    fn start_location(&self) -> Result<GeoPoint, LocationError>;
}

/// Supply the destinations to visit.
///
/// Implementations must only return destinations whose coordinates parsed as
/// valid numbers; see [`project_sites`](crate::project_sites).
pub trait DestinationSource {
    /// Reference type carried by each destination.
    type Reference;

    /// Destinations to plan over, in the store's order.
    fn destinations(&self) -> Result<Vec<Destination<Self::Reference>>, DestinationSourceError>;
}

impl StartLocationSource for GeoPoint {
    fn start_location(&self) -> Result<GeoPoint, LocationError> {
        Ok(*self)
    }
}
