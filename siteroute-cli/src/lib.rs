//! Command-line interface for planning multi-site field visits.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_PLAN_REQUEST: &str = "request";
const ARG_PLAN_AVERAGE_SPEED: &str = "average-speed-kmh";
const ARG_PLAN_TRAVEL_MODE: &str = "travel-mode";
const ENV_PLAN_REQUEST: &str = "SITEROUTE_CMDS_PLAN_REQUEST_PATH";

/// Run the Siteroute CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "siteroute",
    about = "Order field visits across stored sites",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the sites in a request nearest-first from a start point.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
