mod input;
mod model;
mod pipeline;
mod report;
mod telemetry;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use crate::input::{InputError, load_roster};
use crate::model::weights::WeightProfile;
use crate::report::{ReportError, ReportMode, build_rows, summarize, write_reports};
use crate::telemetry::TelemetryError;

#[derive(Debug, Parser)]
#[command(name = "perf-scorecard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a roster of assessments and write scorecard reports.
    Run {
        /// Roster file (.json or .csv).
        #[arg(long)]
        input: PathBuf,
        /// Output directory for scorecard.json and scorecard.txt.
        #[arg(long)]
        out: PathBuf,
        /// Report granularity.
        #[arg(long, value_enum, default_value = "employee")]
        mode: ReportMode,
        /// Override the review-cycle id carried by the roster.
        #[arg(long)]
        cycle: Option<String>,
    },
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    telemetry::init()?;

    match cli.command {
        Command::Run {
            input,
            out,
            mode,
            cycle,
        } => {
            let weights = WeightProfile::default_v1();
            info!(
                kra = weights.kra,
                goal = weights.goal,
                competency = weights.competency,
                "scoring with the fixed category weight profile"
            );

            let roster = load_roster(&input, cycle.as_deref())?;
            info!(
                cycle = %roster.review_cycle,
                employees = roster.employees.len(),
                "roster loaded"
            );

            let rows = build_rows(&roster, &weights);
            let summary = summarize(&rows, &roster.review_cycle, &weights);
            write_reports(&summary, &rows, &out, mode)?;
            Ok(())
        }
    }
}
