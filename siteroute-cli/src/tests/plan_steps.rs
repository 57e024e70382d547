//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{RequestFile, THREE_SITES};
use super::*;
use crate::plan::run_plan_with;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use siteroute_core::PlanError;
use std::cell::RefCell;

#[derive(Debug)]
struct PlanWorld {
    request: RequestFile,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        Self {
            request: RequestFile::new(),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec![
            "siteroute".to_owned(),
            "plan".to_owned(),
            self.request.path().as_str().to_owned(),
        ];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.stdout.borrow()).expect("stdout should be JSON")
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("a request file listing three usable sites and one blank site")]
fn request_with_sites(#[from(world)] world: &PlanWorld) {
    world.request.write(THREE_SITES);
}

#[given("a request file whose sites lack coordinates")]
fn request_without_coordinates(#[from(world)] world: &PlanWorld) {
    world.request.write(
        r#"{
            "start": { "lat": 41.0, "lng": 29.0 },
            "sites": [{ "id": "a" }, { "id": "b", "latitude": "n/a", "longitude": "29" }]
        }"#,
    );
}

#[given("I pass the travel mode \"hovercraft\"")]
fn pass_unknown_mode(#[from(world)] world: &PlanWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PLAN_TRAVEL_MODE}"), "hovercraft".to_owned()]);
}

#[when("I run the plan command")]
fn run_plan_command(#[from(world)] world: &PlanWorld) {
    let outcome = Cli::try_parse_from(world.build_command_line())
        .map_err(CliError::ArgumentParsing)
        .and_then(|cli| match cli.command {
            Command::Plan(args) => run_plan_with(args, &mut *world.stdout.borrow_mut()),
        });
    world.result.replace(Some(outcome));
}

#[then("the report lists the usable sites nearest first")]
fn report_lists_sites(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Ok(()) => {}
        Err(err) => panic!("expected success, found {err:?}"),
    }
    let report = world.stdout_json();
    let ids: Vec<&str> = report["stops"]
        .as_array()
        .expect("stops array")
        .iter()
        .filter_map(|stop| stop["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["near", "middle", "far"]);
}

#[then("the CLI reports that no destinations are available")]
fn reports_no_destinations(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::Plan(PlanError::NoDestinations)) => {}
        other => panic!("expected NoDestinations, found {other:?}"),
    }
    assert!(world.stdout.borrow().is_empty());
}

#[then("the CLI reports an invalid travel mode")]
fn reports_invalid_mode(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::InvalidTravelMode(message)) => assert!(message.contains("hovercraft")),
        other => panic!("expected InvalidTravelMode, found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plans_usable_sites, "planning a request with usable sites");
register_plan_scenario!(
    refuses_unusable_sites,
    "planning a request without usable sites"
);
register_plan_scenario!(rejects_unknown_mode, "rejecting an unknown travel mode");
