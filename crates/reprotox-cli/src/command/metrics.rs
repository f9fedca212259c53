use std::path::PathBuf;

use reprotox_metrics::{
    DerivedMetrics, FetalFindingsMetrics, LitterMetrics, MaternalMetrics, PostnatalMetrics,
    StudyOverview,
};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Bundle {
    #[default]
    All,
    Overview,
    Maternal,
    Litter,
    Fetal,
    Postnatal,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MetricsArg {
    /// Path to the study dataset JSON file
    dataset: PathBuf,
    /// Bundle to compute (all, overview, maternal, litter, fetal, postnatal)
    #[arg(long, default_value = "all")]
    bundle: Bundle,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: MetricsArg) -> anyhow::Result<()> {
    let MetricsArg {
        dataset,
        bundle,
        output,
    } = arg;
    let dataset = util::read_dataset_file(&dataset)?;
    match bundle {
        Bundle::All => Output::save_json(&DerivedMetrics::from_dataset(&dataset), output),
        Bundle::Overview => Output::save_json(&StudyOverview::from_dataset(&dataset), output),
        Bundle::Maternal => Output::save_json(&MaternalMetrics::from_dataset(&dataset), output),
        Bundle::Litter => Output::save_json(&LitterMetrics::from_dataset(&dataset), output),
        Bundle::Fetal => Output::save_json(&FetalFindingsMetrics::from_dataset(&dataset), output),
        Bundle::Postnatal => Output::save_json(&PostnatalMetrics::from_dataset(&dataset), output),
    }
}
