//! Visiting-order planners.
//!
//! [`NearestNeighbourPlanner`] is the default implementation of
//! [`RoutePlanner`]. It repeatedly moves to the closest unvisited destination,
//! which is a cheap greedy approximation of the travelling-salesman problem and
//! carries no optimality guarantee. The scan is `O(n²)` in the number of
//! destinations; expected inputs are tens of sites.

use crate::{Destination, GeoPoint, Route, distance};

/// Produce a total visiting order over a set of destinations.
///
/// Implementations must return a permutation of `destinations`: every element
/// exactly once, none invented. Planning is infallible; inputs are assumed to
/// have been filtered to usable coordinates by the caller.
pub trait RoutePlanner {
    /// Order `destinations` for a visit beginning at `start`.
    fn plan<R>(&self, start: GeoPoint, destinations: Vec<Destination<R>>) -> Route<R>;
}

/// Greedy nearest-neighbour planner.
///
/// Ties are broken by input order: among equally distant candidates the one
/// supplied first is visited first. The planner holds no state, so a single
/// instance can serve concurrent requests.
///
/// # Examples
/// ```
/// use siteroute_core::{Destination, GeoPoint, NearestNeighbourPlanner, RoutePlanner};
///
/// let route = NearestNeighbourPlanner.plan(
///     GeoPoint::new(0.0, 0.0),
///     vec![
///         Destination::new("far", GeoPoint::new(0.0, 3.0)),
///         Destination::new("near", GeoPoint::new(0.0, 1.0)),
///     ],
/// );
/// let order: Vec<_> = route.stops().iter().map(|d| d.reference).collect();
/// assert_eq!(order, vec!["near", "far"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbourPlanner;

impl RoutePlanner for NearestNeighbourPlanner {
    fn plan<R>(&self, start: GeoPoint, destinations: Vec<Destination<R>>) -> Route<R> {
        Route::new(compute_order(start, destinations))
    }
}

/// Order `destinations` by repeatedly visiting the nearest remaining one.
///
/// Returns an empty vector for empty input. The output is a permutation of the
/// input and is deterministic for a given input order.
///
/// Coordinates are not validated. Candidates whose distance is not finite
/// (NaN or infinite coordinates, or a non-finite start) are never preferred
/// over a finite one; once only such candidates remain they are taken in input
/// order. A single warning is logged per call when any are present.
#[must_use]
pub fn compute_order<R>(
    start: GeoPoint,
    destinations: Vec<Destination<R>>,
) -> Vec<Destination<R>> {
    let total = destinations.len();
    let degenerate = non_finite_count(start, &destinations);
    if degenerate > 0 {
        log::warn!("{degenerate} of {total} destinations cannot be ranked by distance");
    }

    let mut unvisited = destinations;
    let mut ordered = Vec::with_capacity(total);
    let mut current = start;

    while let Some(index) = nearest_index(current, &unvisited) {
        // `remove` keeps the remaining candidates in input order for tie-breaking.
        let next = unvisited.remove(index);
        // A degenerate stop must not poison the ranking of the stops after it.
        if next.location.is_finite() {
            current = next.location;
        }
        ordered.push(next);
    }

    log::debug!("ordered {total} destinations from ({}, {})", start.lat, start.lng);
    ordered
}

/// Number of destinations whose distance from `start` cannot be ranked.
fn non_finite_count<R>(start: GeoPoint, destinations: &[Destination<R>]) -> usize {
    if !start.is_finite() {
        return destinations.len();
    }
    destinations
        .iter()
        .filter(|destination| !destination.location.is_finite())
        .count()
}

/// Position of the candidate closest to `current`; the earliest wins ties.
///
/// Falls back to the first candidate when no distance is finite.
fn nearest_index<R>(current: GeoPoint, candidates: &[Destination<R>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let d = distance(current, candidate.location);
        // Strict `<` keeps the earliest candidate on ties and never admits NaN.
        if d < best.map_or(f64::INFINITY, |(_, best_d)| best_d) {
            best = Some((index, d));
        }
    }
    best.map(|(index, _)| index).or_else(|| (!candidates.is_empty()).then_some(0))
}
