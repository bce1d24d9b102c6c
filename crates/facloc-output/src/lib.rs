//! CSV writers for the standardized datasets.
//!
//! Column order is fixed by the model's serialized field order:
//!
//! - client points: `id, name, latitude, longitude, population`
//! - candidate locations: `id, name, ADDRESS, latitude, longitude`

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use facloc_model::{CandidateLocation, ClientPoint};

/// File name for the client-points dataset.
pub const CLIENTS_FILE_NAME: &str = "chicago_clients.csv";

/// File name for the candidate-locations dataset.
pub const CANDIDATES_FILE_NAME: &str = "chicago_candidates.csv";

/// Writes the client-points dataset.
pub fn write_client_points(path: &Path, points: &[ClientPoint]) -> Result<()> {
    if points.is_empty() {
        return write_header(path, &["id", "name", "latitude", "longitude", "population"]);
    }
    write_rows(path, points)
}

/// Writes the candidate-locations dataset.
pub fn write_candidate_locations(path: &Path, locations: &[CandidateLocation]) -> Result<()> {
    if locations.is_empty() {
        return write_header(path, &["id", "name", "ADDRESS", "latitude", "longitude"]);
    }
    write_rows(path, locations)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

// The csv writer only emits the header alongside the first record, so an
// empty dataset writes its header row explicitly.
fn write_header(path: &Path, header: &[&str]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(header)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
