pub mod error;
pub mod point;

pub use error::{PrepError, Result};
pub use point::{CANDIDATE_ID_START, CandidateLocation, ClientPoint};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_point_serializes_in_output_column_order() {
        let point = ClientPoint {
            id: 5,
            name: "LINC".to_string(),
            latitude: 41.8,
            longitude: -87.6,
            population: 0,
        };
        let json = serde_json::to_string(&point).expect("serialize point");
        assert_eq!(
            json,
            r#"{"id":5,"name":"LINC","latitude":41.8,"longitude":-87.6,"population":0}"#
        );
    }

    #[test]
    fn candidate_address_keeps_source_name() {
        let location = CandidateLocation {
            id: CANDIDATE_ID_START,
            name: "Main".to_string(),
            address: "1 St".to_string(),
            latitude: 41.85,
            longitude: -87.65,
        };
        let json = serde_json::to_string(&location).expect("serialize location");
        assert!(json.contains(r#""ADDRESS":"1 St""#));
        let round: CandidateLocation =
            serde_json::from_str(&json).expect("deserialize location");
        assert_eq!(round, location);
    }
}
