//! Behavioural tests for the nearest-neighbour planner.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use siteroute_core::{Destination, GeoPoint, NearestNeighbourPlanner, Route, RoutePlanner};
use std::cell::RefCell;

#[fixture]
fn start() -> RefCell<GeoPoint> {
    RefCell::new(GeoPoint::new(f64::NAN, f64::NAN))
}

#[fixture]
fn route() -> RefCell<Route<&'static str>> {
    RefCell::new(Route::empty())
}

fn plan(
    start: &RefCell<GeoPoint>,
    route: &RefCell<Route<&'static str>>,
    input: Vec<Destination<&'static str>>,
) {
    *route.borrow_mut() = NearestNeighbourPlanner.plan(*start.borrow(), input);
}

fn order(route: &RefCell<Route<&'static str>>) -> Vec<&'static str> {
    route.borrow().stops().iter().map(|d| d.reference).collect()
}

#[given("a start at the origin")]
fn given_origin(#[from(start)] start: &RefCell<GeoPoint>) {
    *start.borrow_mut() = GeoPoint::new(0.0, 0.0);
}

#[when("I plan destinations at one, three and two degrees east")]
fn plan_meridian(
    #[from(start)] start: &RefCell<GeoPoint>,
    #[from(route)] route: &RefCell<Route<&'static str>>,
) {
    plan(
        start,
        route,
        vec![
            Destination::new("one", GeoPoint::new(0.0, 1.0)),
            Destination::new("three", GeoPoint::new(0.0, 3.0)),
            Destination::new("two", GeoPoint::new(0.0, 2.0)),
        ],
    );
}

#[when("I plan no destinations")]
fn plan_none(
    #[from(start)] start: &RefCell<GeoPoint>,
    #[from(route)] route: &RefCell<Route<&'static str>>,
) {
    plan(start, route, Vec::new());
}

#[when("I plan destinations one degree east and one degree west")]
fn plan_tie(
    #[from(start)] start: &RefCell<GeoPoint>,
    #[from(route)] route: &RefCell<Route<&'static str>>,
) {
    plan(
        start,
        route,
        vec![
            Destination::new("east", GeoPoint::new(0.0, 1.0)),
            Destination::new("west", GeoPoint::new(0.0, -1.0)),
        ],
    );
}

#[then("the visit order is one, two, three")]
fn then_meridian_order(#[from(route)] route: &RefCell<Route<&'static str>>) {
    assert_eq!(order(route), vec!["one", "two", "three"]);
}

#[then("the route is empty")]
fn then_empty(#[from(route)] route: &RefCell<Route<&'static str>>) {
    assert!(route.borrow().is_empty());
}

#[then("the visit order is east, west")]
fn then_tie_order(#[from(route)] route: &RefCell<Route<&'static str>>) {
    assert_eq!(order(route), vec!["east", "west"]);
}

#[scenario(path = "tests/features/route_planner.feature", index = 0)]
fn meridian_order(start: RefCell<GeoPoint>, route: RefCell<Route<&'static str>>) {
    let _ = (start, route);
}

#[scenario(path = "tests/features/route_planner.feature", index = 1)]
fn empty_route(start: RefCell<GeoPoint>, route: RefCell<Route<&'static str>>) {
    let _ = (start, route);
}

#[scenario(path = "tests/features/route_planner.feature", index = 2)]
fn tie_order(start: RefCell<GeoPoint>, route: RefCell<Route<&'static str>>) {
    let _ = (start, route);
}
