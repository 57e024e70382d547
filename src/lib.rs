//! Facade crate for the Siteroute visit planner.
//!
//! This crate re-exports the core domain types, the nearest-neighbour planner
//! and the collaborator traits callers implement to feed it.

#![forbid(unsafe_code)]

pub use siteroute_core::{
    Destination, DestinationSource, DestinationSourceError, Directions, DirectionsEstimateConfig,
    DirectionsError, DirectionsProvider, EARTH_RADIUS_KM, GeoPoint, GeoPointError, Leg,
    LocationError, NearestNeighbourPlanner, PlanError, PlannedVisit, PlanningSession, Route,
    RoutePlanner, SiteRecord, StartLocationSource, StraightLineDirections, TravelMode,
    compute_order, distance, maps_directions_url, project_sites,
};

#[cfg(feature = "test-support")]
pub use siteroute_core::test_support;
