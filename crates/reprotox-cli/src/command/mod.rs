use clap::{Parser, Subcommand};

use self::{
    alerts::AlertsArg, metrics::MetricsArg, report::ReportArg, thresholds::ThresholdsArg,
    validate::ValidateArg,
};
use crate::util;

mod alerts;
mod metrics;
mod report;
mod thresholds;
mod validate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute group-level derived metrics as JSON
    Metrics(#[clap(flatten)] MetricsArg),
    /// Evaluate alert rules as JSON
    Alerts(#[clap(flatten)] AlertsArg),
    /// Print a human-readable study report
    Report(#[clap(flatten)] ReportArg),
    /// Print the default alert thresholds
    Thresholds(#[clap(flatten)] ThresholdsArg),
    /// Check a dataset's integrity
    Validate(#[clap(flatten)] ValidateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    util::init_tracing(args.quiet, args.verbose)?;
    match args.mode {
        Mode::Metrics(arg) => metrics::run(arg)?,
        Mode::Alerts(arg) => alerts::run(arg)?,
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Thresholds(arg) => thresholds::run(arg)?,
        Mode::Validate(arg) => validate::run(&arg)?,
    }
    Ok(())
}
