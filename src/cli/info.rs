use anyhow::Result;
use std::path::PathBuf;

use tdfcycle::tdf::{TdfStore, MSMS_TYPE_MS1, MSMS_TYPE_MSMS};

/// Display summary information about an analysis.tdf store
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let store = TdfStore::open(&file)?;

    println!("TDF Store Information");
    println!("=====================");
    println!("File: {}", file.display());
    println!();

    if let Some(name) = store.sample_name()? {
        println!("Sample:       {name}");
    }
    if let Some(ts) = store.acquisition_time()? {
        println!("Acquired:     {}", ts.to_rfc3339());
    }

    let total = store.frame_count()?;
    let ms1 = store.frame_count_of_type(MSMS_TYPE_MS1)?;
    let ms2 = store.frame_count_of_type(MSMS_TYPE_MSMS)?;
    println!("Frames:       {total} ({ms1} MS1, {ms2} MS/MS)");

    if let Some((low, high)) = store.frame_id_bounds()? {
        println!("Frame ids:    {low}..={high}");
        let (_, times) = store.frame_times(low, high)?;
        if let (Some(first), Some(last)) = (times.first(), times.last()) {
            println!("Time range:   {first:.3} s .. {last:.3} s");
        }
    }

    println!(
        "Empty frames: {} MS1, {} MS/MS",
        store.empty_frame_count(MSMS_TYPE_MS1)?,
        store.empty_frame_count(MSMS_TYPE_MSMS)?
    );

    match store.distinct_num_scans() {
        Ok(num_scans) => println!("NumScans:     {num_scans}"),
        Err(e) => println!("NumScans:     unavailable ({e})"),
    }

    Ok(())
}
