//! Candidate-location preparation: standardizes the library-branches dataset.

use tracing::warn;

use facloc_ingest::SourceTable;
use facloc_model::{CANDIDATE_ID_START, CandidateLocation, Result};

use crate::coords::parse_location;

/// Outcome of the candidate-location transform.
#[derive(Debug)]
pub struct CandidateReport {
    pub locations: Vec<CandidateLocation>,
    /// Source rows discarded for unparseable location strings.
    pub dropped: usize,
}

/// Standardizes a library-branches table into candidate locations.
///
/// Coordinates come from the `LOCATION` column; the raw string is not carried
/// into the output. Rows whose location cannot be parsed are dropped and do
/// not consume an id. Ids are assigned densely from [`CANDIDATE_ID_START`] in
/// retained-row order.
pub fn candidate_locations(table: &SourceTable) -> Result<CandidateReport> {
    let name_idx = table.require_column("BRANCH")?;
    let address_idx = table.require_column("ADDRESS")?;
    let location_idx = table.require_column("LOCATION")?;

    let mut locations = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;
    for row in &table.rows {
        let Some((latitude, longitude)) = parse_location(&row[location_idx]) else {
            dropped += 1;
            continue;
        };
        locations.push(CandidateLocation {
            id: CANDIDATE_ID_START + locations.len() as i64,
            name: row[name_idx].clone(),
            address: row[address_idx].clone(),
            latitude,
            longitude,
        });
    }
    if dropped > 0 {
        warn!(dropped, "library rows dropped for unparseable locations");
    }
    Ok(CandidateReport { locations, dropped })
}
