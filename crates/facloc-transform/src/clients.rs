//! Client-point preparation: standardizes the schools dataset.

use tracing::warn;

use facloc_ingest::SourceTable;
use facloc_model::{ClientPoint, Result};

use crate::data_utils::{parse_count, parse_f64, parse_id};

/// Outcome of the client-point transform.
#[derive(Debug)]
pub struct ClientReport {
    pub points: Vec<ClientPoint>,
    /// Source rows discarded for missing or unparseable values.
    pub dropped: usize,
}

/// Standardizes a schools table into client points.
///
/// Selects `School_ID`, `Short_Name`, `Student_Count_Total`,
/// `School_Latitude` and `School_Longitude`. A missing student count becomes
/// a population of zero; rows without usable coordinates or id are dropped.
/// Population is never a drop criterion.
pub fn client_points(table: &SourceTable) -> Result<ClientReport> {
    let id_idx = table.require_column("School_ID")?;
    let name_idx = table.require_column("Short_Name")?;
    let population_idx = table.require_column("Student_Count_Total")?;
    let latitude_idx = table.require_column("School_Latitude")?;
    let longitude_idx = table.require_column("School_Longitude")?;

    let mut points = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;
    for row in &table.rows {
        let latitude = parse_f64(&row[latitude_idx]).filter(|parsed| parsed.is_finite());
        let longitude = parse_f64(&row[longitude_idx]).filter(|parsed| parsed.is_finite());
        let id = parse_id(&row[id_idx]);
        let (Some(latitude), Some(longitude), Some(id)) = (latitude, longitude, id) else {
            dropped += 1;
            continue;
        };
        points.push(ClientPoint {
            id,
            name: row[name_idx].clone(),
            latitude,
            longitude,
            population: parse_count(&row[population_idx]).unwrap_or(0),
        });
    }
    if dropped > 0 {
        warn!(dropped, "school rows dropped for missing coordinates or id");
    }
    Ok(ClientReport { points, dropped })
}
