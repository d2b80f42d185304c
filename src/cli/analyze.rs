use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use tdfcycle::analyzer::{analyze, FrameRange};
use tdfcycle::report::DutyCycleReport;
use tdfcycle::tdf::TdfStore;

use super::config::Config;

/// Run a duty-cycle analysis and print or export the report
pub fn run(
    file: PathBuf,
    frame_id_low: Option<i64>,
    frame_id_high: Option<i64>,
    json: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    // Validate input before any store is opened
    if !file.exists() {
        anyhow::bail!("Input file does not exist: {}", file.display());
    }

    // CLI flags win over config-file values
    let config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    let low = frame_id_low.or(config.analysis.frame_id_low);
    let high = frame_id_high.or(config.analysis.frame_id_high);

    info!("tdfcycle - Duty Cycle Analysis");
    info!("==============================");
    info!("Input: {}", file.display());

    let store = TdfStore::open(&file)?;
    let report = analyze(&store, FrameRange::new(low, high))?;

    if let Some(path) = &json {
        let output = std::fs::File::create(path)
            .with_context(|| format!("Failed to create JSON output: {}", path.display()))?;
        serde_json::to_writer_pretty(output, &report).context("Failed to serialize report")?;
        info!("Report written to {}", path.display());
    }

    print_report(&report);

    Ok(())
}

#[cfg(feature = "colorized_output")]
fn print_report(report: &DutyCycleReport) {
    use console::style;

    println!("{}", style("Duty Cycle Report").bold());
    println!("{}", style("=================").bold());
    if let Some(name) = &report.sample_name {
        println!("Sample:            {}", style(name).cyan());
    }
    if let Some(ts) = &report.acquired_at {
        println!("Acquired:          {}", ts.to_rfc3339());
    }
    println!(
        "Frames:            {} (ids {}..={})",
        report.frames_in_range, report.frame_id_low, report.frame_id_high
    );
    println!(
        "Expected period:   {:.6} s",
        report.expected_frame_period
    );
    let empties = format!(
        "{} MS1, {} MS/MS (whole store)",
        report.empty_frames.ms1, report.empty_frames.ms2
    );
    if report.empty_frames.ms1 + report.empty_frames.ms2 > 0 {
        println!("Empty frames:      {}", style(empties).yellow());
    } else {
        println!("Empty frames:      {empties}");
    }
    println!("MS1 TIC points:    {}", report.ms1_tic.len());
    println!("PrecSel points:    {}", report.precursor_selection.len());
    println!("Submission points: {}", report.frame_submission.len());
    match &report.deviation {
        Some(dev) => {
            let abs = format!("{:.2}%", dev.mean_abs_fraction * 100.0);
            // Flag runs spending more than 5% of their cadence off-target
            let abs = if dev.mean_abs_fraction > 0.05 {
                style(abs).red()
            } else {
                style(abs).green()
            };
            println!("Mean |deviation|:  {abs} of expected period");
            println!(
                "Mean deviation:    {:+.2}% ({:+.6} s)",
                dev.mean_signed_fraction * 100.0,
                dev.mean_signed_seconds
            );
        }
        None => println!("Mean deviation:    n/a (fewer than two frames in range)"),
    }
}

#[cfg(not(feature = "colorized_output"))]
fn print_report(report: &DutyCycleReport) {
    println!("{report}");
}
