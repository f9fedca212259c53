use std::path::PathBuf;

use reprotox_alerts::evaluate_alerts;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AlertsArg {
    /// Path to the study dataset JSON file
    dataset: PathBuf,
    /// Alert thresholds JSON file; missing values use the defaults
    #[arg(long)]
    thresholds: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: AlertsArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset_file(&arg.dataset)?;
    let thresholds = util::read_thresholds_file(arg.thresholds.as_deref())?;
    let report = evaluate_alerts(&dataset, &thresholds);
    Output::save_json(&report, arg.output)
}
