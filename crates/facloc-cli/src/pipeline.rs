//! Dataset preparation pipeline with explicit stages.
//!
//! The stage order is fixed: schools (client points) first, then libraries
//! (candidate locations). Each stage fetches its source, standardizes the
//! rows, and writes one CSV file. A stage failure aborts the run; there is no
//! partial-success path.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use facloc_ingest::load_source_table;
use facloc_output::{
    CANDIDATES_FILE_NAME, CLIENTS_FILE_NAME, write_candidate_locations, write_client_points,
};
use facloc_transform::{candidate_locations, client_points};

use crate::types::{DatasetRole, DatasetSummary, PrepareResult};

/// Inputs for a full preparation run.
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Directory the output CSV files are written to.
    pub output_dir: PathBuf,
    /// Schools source address (URL or local path).
    pub schools_source: String,
    /// Libraries source address (URL or local path).
    pub libraries_source: String,
    /// Fetch and clean without writing output files.
    pub dry_run: bool,
}

/// Run both preparations in fixed order and collect per-dataset summaries.
pub fn run_prepare(options: &PrepareOptions) -> Result<PrepareResult> {
    let clients = prepare_clients(options)?;
    let candidates = prepare_candidates(options)?;
    println!("Data preparation complete.");
    Ok(PrepareResult {
        output_dir: options.output_dir.clone(),
        datasets: vec![clients, candidates],
    })
}

/// Standardize the schools dataset into client points and write it.
pub fn prepare_clients(options: &PrepareOptions) -> Result<DatasetSummary> {
    println!("Downloading and processing school data (client points)...");
    let span = info_span!("prepare_clients", source = %options.schools_source);
    let _guard = span.enter();
    let start = Instant::now();

    let table = load_source_table(&options.schools_source)
        .with_context(|| format!("load schools source {}", options.schools_source))?;
    let source_rows = table.rows.len();
    let report = client_points(&table).context("standardize client points")?;

    let output = if options.dry_run {
        None
    } else {
        let path = options.output_dir.join(CLIENTS_FILE_NAME);
        write_client_points(&path, &report.points)
            .with_context(|| format!("write {}", path.display()))?;
        println!(
            "Saved {} client points to '{}'.",
            report.points.len(),
            path.display()
        );
        Some(path)
    };

    info!(
        source_rows,
        output_rows = report.points.len(),
        dropped = report.dropped,
        duration_ms = start.elapsed().as_millis(),
        "client points complete"
    );
    Ok(DatasetSummary {
        role: DatasetRole::ClientPoints,
        source_rows,
        rows_retained: report.points.len(),
        rows_dropped: report.dropped,
        output,
    })
}

/// Standardize the libraries dataset into candidate locations and write it.
pub fn prepare_candidates(options: &PrepareOptions) -> Result<DatasetSummary> {
    println!("Downloading and processing library data (candidate locations)...");
    let span = info_span!("prepare_candidates", source = %options.libraries_source);
    let _guard = span.enter();
    let start = Instant::now();

    let table = load_source_table(&options.libraries_source)
        .with_context(|| format!("load libraries source {}", options.libraries_source))?;
    let source_rows = table.rows.len();
    let report = candidate_locations(&table).context("standardize candidate locations")?;

    let output = if options.dry_run {
        None
    } else {
        let path = options.output_dir.join(CANDIDATES_FILE_NAME);
        write_candidate_locations(&path, &report.locations)
            .with_context(|| format!("write {}", path.display()))?;
        println!(
            "Saved {} candidate locations to '{}'.",
            report.locations.len(),
            path.display()
        );
        Some(path)
    };

    info!(
        source_rows,
        output_rows = report.locations.len(),
        dropped = report.dropped,
        duration_ms = start.elapsed().as_millis(),
        "candidate locations complete"
    );
    Ok(DatasetSummary {
        role: DatasetRole::CandidateLocations,
        source_rows,
        rows_retained: report.locations.len(),
        rows_dropped: report.dropped,
        output,
    })
}
