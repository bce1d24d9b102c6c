pub mod candidates;
pub mod clients;
pub mod coords;
pub mod data_utils;

pub use candidates::{CandidateReport, candidate_locations};
pub use clients::{ClientReport, client_points};
pub use coords::parse_location;
pub use data_utils::{parse_count, parse_f64, parse_id};
