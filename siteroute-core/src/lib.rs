//! Core domain types for the Siteroute planner.
//!
//! The crate orders a set of field-visit destinations starting from a known
//! location. Ordering uses a greedy nearest-neighbour heuristic over
//! great-circle distances; it is not an optimal travelling-salesman solver.
//!
//! Collaborators that talk to the outside world (device geolocation, the
//! sites data store, a directions service) are modelled as traits so the
//! planner stays pure and callers inject concrete implementations.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod destination;
pub mod directions;
pub mod distance;
pub mod geo_point;
pub mod planner;
pub mod route;
pub mod session;
pub mod site;
pub mod source;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use destination::Destination;
pub use directions::{
    Directions, DirectionsEstimateConfig, DirectionsError, DirectionsProvider,
    StraightLineDirections, TravelMode, maps_directions_url,
};
pub use distance::{EARTH_RADIUS_KM, distance};
pub use geo_point::{GeoPoint, GeoPointError};
pub use planner::{NearestNeighbourPlanner, RoutePlanner, compute_order};
pub use route::{Leg, Route};
pub use session::{PlanError, PlannedVisit, PlanningSession};
pub use site::{SiteRecord, project_sites};
pub use source::{
    DEFAULT_LOCATION_TIMEOUT, DestinationSource, DestinationSourceError, LocationError,
    StartLocationSource,
};
