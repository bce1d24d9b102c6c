use std::path::PathBuf;

/// Which standardized dataset a summary row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetRole {
    ClientPoints,
    CandidateLocations,
}

impl DatasetRole {
    /// Source dataset name.
    pub fn dataset(self) -> &'static str {
        match self {
            DatasetRole::ClientPoints => "Schools",
            DatasetRole::CandidateLocations => "Libraries",
        }
    }

    /// Role the standardized rows play downstream.
    pub fn label(self) -> &'static str {
        match self {
            DatasetRole::ClientPoints => "Client points",
            DatasetRole::CandidateLocations => "Candidate locations",
        }
    }
}

/// Per-dataset outcome of a preparation run.
#[derive(Debug)]
pub struct DatasetSummary {
    pub role: DatasetRole,
    /// Rows in the fetched source, before filtering.
    pub source_rows: usize,
    /// Rows retained after filtering.
    pub rows_retained: usize,
    /// Rows discarded for missing or unparseable values.
    pub rows_dropped: usize,
    /// Written output file; None on a dry run.
    pub output: Option<PathBuf>,
}

/// Outcome of a full preparation run.
#[derive(Debug)]
pub struct PrepareResult {
    pub output_dir: PathBuf,
    pub datasets: Vec<DatasetSummary>,
}
