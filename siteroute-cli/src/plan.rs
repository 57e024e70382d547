//! Plan command implementation for the Siteroute CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use siteroute_core::{
    Destination, DestinationSource, DestinationSourceError, DirectionsEstimateConfig, GeoPoint,
    NearestNeighbourPlanner, PlannedVisit, PlanningSession, SiteRecord, StraightLineDirections,
    TravelMode, maps_directions_url, project_sites,
};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_PLAN_AVERAGE_SPEED, ARG_PLAN_REQUEST, ARG_PLAN_TRAVEL_MODE, CliError, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the sites listed in a JSON plan request, starting from \
                 the request's start point and always moving to the nearest \
                 remaining site. Sites without usable coordinates are skipped. \
                 The ordered stops, a straight-line distance and duration \
                 estimate, and a maps link are written to stdout as JSON.",
    about = "Plan a multi-site visit"
)]
#[ortho_config(prefix = "SITEROUTE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Average travel speed for the duration estimate.
    #[arg(long = ARG_PLAN_AVERAGE_SPEED, value_name = "kmh")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
    /// Travel mode for the maps link (driving, walking, bicycling).
    #[arg(long = ARG_PLAN_TRAVEL_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) travel_mode: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Straight-line estimate settings.
    pub(crate) estimate: DirectionsEstimateConfig,
    /// Mode written into the maps link.
    pub(crate) travel_mode: TravelMode,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_PLAN_REQUEST,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_PLAN_REQUEST,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_PLAN_REQUEST,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let mut estimate = DirectionsEstimateConfig::default();
        if let Some(speed) = args.average_speed_kmh {
            estimate.average_speed_kmh = speed;
        }
        let travel_mode = args
            .travel_mode
            .map(|raw| raw.parse::<TravelMode>())
            .transpose()
            .map_err(CliError::InvalidTravelMode)?
            .unwrap_or_default();
        Ok(Self {
            request_path,
            estimate,
            travel_mode,
        })
    }
}

/// JSON body of a plan request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PlanRequest {
    /// Where the visit begins.
    pub(crate) start: GeoPoint,
    /// Candidate sites, in store order.
    #[serde(default)]
    pub(crate) sites: Vec<SiteRecord>,
}

/// One stop of the written report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ReportStop {
    pub(crate) id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    pub(crate) location: GeoPoint,
    pub(crate) leg_distance_km: f64,
}

/// The JSON document written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PlanReport {
    pub(crate) stops: Vec<ReportStop>,
    pub(crate) total_distance_km: f64,
    pub(crate) estimated_duration_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) maps_url: Option<String>,
}

impl PlanReport {
    fn from_visit(visit: &PlannedVisit<&SiteRecord>, mode: TravelMode) -> Self {
        let stops = visit
            .route
            .stops()
            .iter()
            .zip(visit.route.legs(visit.start))
            .map(|(stop, leg)| ReportStop {
                id: stop.reference.id.clone(),
                name: stop.reference.name.clone(),
                location: stop.location,
                leg_distance_km: leg.distance_km,
            })
            .collect();
        Self {
            stops,
            total_distance_km: visit.directions.distance_km,
            estimated_duration_secs: visit.directions.duration.as_secs(),
            maps_url: maps_directions_url(visit.start, &visit.route.waypoints(), mode),
        }
    }
}

/// Request sites exposed as destinations referencing their record.
pub(super) struct RequestSites<'a> {
    pub(super) records: &'a [SiteRecord],
}

impl<'a> DestinationSource for RequestSites<'a> {
    type Reference = &'a SiteRecord;

    fn destinations(&self) -> Result<Vec<Destination<&'a SiteRecord>>, DestinationSourceError> {
        Ok(project_sites(self.records))
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let request = load_plan_request(&config.request_path)?;
    let report = execute_plan(&config, &request)?;
    write_plan_report(writer, &report)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_plan(
    config: &PlanConfig,
    request: &PlanRequest,
) -> Result<PlanReport, CliError> {
    let start = GeoPoint::try_new(request.start.lat, request.start.lng)
        .map_err(CliError::InvalidStart)?;
    let sites = RequestSites {
        records: &request.sites,
    };
    let session = PlanningSession::new(start, sites, NearestNeighbourPlanner);
    let provider = StraightLineDirections::with_config(config.estimate);
    let visit = session.plan_with_directions(&provider)?;
    Ok(PlanReport::from_visit(&visit, config.travel_mode))
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan_report(writer: &mut dyn Write, report: &PlanReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializePlanReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
