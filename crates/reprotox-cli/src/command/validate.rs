use std::path::PathBuf;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ValidateArg {
    /// Path to the study dataset JSON file
    dataset: PathBuf,
}

pub(crate) fn run(arg: &ValidateArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset_file(&arg.dataset)?;
    let baseline = dataset
        .baseline()
        .map_or("-", |group| group.group_id.as_str());

    println!("{}: OK", arg.dataset.display());
    println!("  Study     : {} ({})", dataset.study.study_id, dataset.study.title);
    println!("  Groups    : {} (baseline {baseline})", dataset.groups.len());
    println!("  Animals   : {}", dataset.animals.len());
    println!("  Litters   : {}", dataset.litters.len());
    println!("  Fetuses   : {}", dataset.fetuses.len());
    println!("  Pups      : {}", dataset.pups.len());
    Ok(())
}
