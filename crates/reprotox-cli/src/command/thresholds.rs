use std::path::PathBuf;

use reprotox_alerts::AlertThresholds;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ThresholdsArg {
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: ThresholdsArg) -> anyhow::Result<()> {
    Output::save_json(&AlertThresholds::default(), arg.output)
}
