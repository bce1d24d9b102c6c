use std::fs;

use facloc_model::{CandidateLocation, ClientPoint};
use facloc_output::{write_candidate_locations, write_client_points};

#[test]
fn client_points_file_matches_expected_bytes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("chicago_clients.csv");
    let points = vec![
        ClientPoint {
            id: 5,
            name: "LINC".to_string(),
            latitude: 41.8,
            longitude: -87.6,
            population: 0,
        },
        ClientPoint {
            id: 6,
            name: "WEST HS".to_string(),
            latitude: 41.9,
            longitude: -87.7,
            population: 654,
        },
    ];

    write_client_points(&path, &points).expect("write client points");
    let contents = fs::read_to_string(&path).expect("read output");
    assert_eq!(
        contents,
        "id,name,latitude,longitude,population\n\
         5,LINC,41.8,-87.6,0\n\
         6,WEST HS,41.9,-87.7,654\n"
    );
}

#[test]
fn candidate_file_keeps_uppercase_address_column() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("chicago_candidates.csv");
    let locations = vec![CandidateLocation {
        id: 1001,
        name: "Main".to_string(),
        address: "1 St".to_string(),
        latitude: 41.85,
        longitude: -87.65,
    }];

    write_candidate_locations(&path, &locations).expect("write candidates");
    let contents = fs::read_to_string(&path).expect("read output");
    assert_eq!(
        contents,
        "id,name,ADDRESS,latitude,longitude\n\
         1001,Main,1 St,41.85,-87.65\n"
    );
}

#[test]
fn empty_datasets_still_write_the_header_row() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let clients = dir.path().join("chicago_clients.csv");
    let candidates = dir.path().join("chicago_candidates.csv");

    write_client_points(&clients, &[]).expect("write empty clients");
    write_candidate_locations(&candidates, &[]).expect("write empty candidates");

    assert_eq!(
        fs::read_to_string(&clients).expect("read clients"),
        "id,name,latitude,longitude,population\n"
    );
    assert_eq!(
        fs::read_to_string(&candidates).expect("read candidates"),
        "id,name,ADDRESS,latitude,longitude\n"
    );
}

#[test]
fn rewriting_identical_data_is_byte_identical() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("chicago_clients.csv");
    let points = vec![ClientPoint {
        id: 1,
        name: "ALPHA".to_string(),
        latitude: 41.8,
        longitude: -87.6,
        population: 100,
    }];

    write_client_points(&path, &points).expect("first write");
    let first = fs::read(&path).expect("read first");
    write_client_points(&path, &points).expect("second write");
    let second = fs::read(&path).expect("read second");
    assert_eq!(first, second);
}
