use serde::{Deserialize, Serialize};

/// First synthetic id handed out to a candidate location. Ids are dense and
/// contiguous from here in retained-row order.
pub const CANDIDATE_ID_START: i64 = 1001;

/// A demand point (a school) consumed by a downstream facility-location
/// analysis.
///
/// Field order is the column order of the client-points dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPoint {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u32,
}

/// A potential facility site (a library branch) a downstream analysis
/// selects among.
///
/// The address field keeps its uppercase source name in serialized form;
/// downstream consumers match on `ADDRESS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateLocation {
    pub id: i64,
    pub name: String,
    #[serde(rename = "ADDRESS")]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}
