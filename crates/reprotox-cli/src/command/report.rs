//! Human-readable study report.
//!
//! Prints the litter summary table, every alert and the overall risk badge.

use std::path::PathBuf;

use reprotox_alerts::{AlertReport, Severity, evaluate_alerts};
use reprotox_data::StudyDataset;
use reprotox_metrics::{LitterMetrics, LitterSummaryRow};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Path to the study dataset JSON file
    dataset: PathBuf,
    /// Alert thresholds JSON file; missing values use the defaults
    #[arg(long)]
    thresholds: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset_file(&arg.dataset)?;
    let thresholds = util::read_thresholds_file(arg.thresholds.as_deref())?;
    let litters = LitterMetrics::from_dataset(&dataset);
    let report = evaluate_alerts(&dataset, &thresholds);

    print_header(&dataset);
    println!();
    print_litter_summary(&litters.summary);
    println!();
    print_alerts(&report);
    println!();
    println!("Overall risk: {}", badge(report.risk));
    Ok(())
}

fn print_header(dataset: &StudyDataset) {
    let study = &dataset.study;
    let title = format!("Study {}: {}", study.study_id, study.title);
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));
    println!("  Species       : {}", study.species);
    println!("  Dosing        : GD {}-{}", study.dosing_start_day, study.dosing_end_day);
    if let Some(start_date) = study.start_date {
        println!("  Start date    : {}", start_date.format("%Y-%m-%d"));
    }
    println!("  Groups        : {}", dataset.groups.len());
}

fn print_litter_summary(rows: &[LitterSummaryRow]) {
    println!("Litter Summary (group means per litter)");
    println!(
        "  {:<16} {:>10} {:>6} {:>9} {:>8} {:>8} {:>8} {:>10} {:>9}",
        "Group", "Dose", "Dams", "Pregnant", "Litters", "Implant", "Resorb", "Live", "Fetal wt",
    );
    // label(16) + dose(10) + dams(6) + pregnant(9) + litters(8) + implant(8) + resorb(8) + live(10) + weight(9) + spaces(8)
    println!("  {}", "-".repeat(92));
    for row in rows {
        println!(
            "  {:<16} {:>10} {:>6} {:>9} {:>8} {:>8.2} {:>8.2} {:>10.2} {:>9.2}",
            truncate(&row.group_name, 16),
            row.dose_level,
            row.dam_count,
            row.pregnant_count,
            row.litter_count,
            row.mean_implantations,
            row.mean_total_resorptions,
            row.mean_live_fetuses,
            row.mean_fetal_weight,
        );
    }
}

fn print_alerts(report: &AlertReport) {
    println!("Alerts ({})", report.alerts.len());
    if report.alerts.is_empty() {
        println!("  (none)");
        return;
    }
    for alert in &report.alerts {
        println!(
            "  {} {:<8} {:<13} {:<6} {}",
            alert.alert_id,
            badge(alert.severity),
            alert.category.to_string(),
            alert.group_id.as_deref().unwrap_or("-"),
            alert.message,
        );
    }
}

fn badge(severity: Severity) -> &'static str {
    match severity {
        Severity::Green => "[GREEN]",
        Severity::Yellow => "[YELLOW]",
        Severity::Red => "[RED]",
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_owned()
    } else {
        let mut truncated = s.chars().take(width - 1).collect::<String>();
        truncated.push('…');
        truncated
    }
}
