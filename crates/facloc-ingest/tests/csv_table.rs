use std::fs;

use facloc_ingest::{load_source_table, read_source_table};

#[test]
fn reads_headers_and_rows() {
    let data = "BRANCH,ADDRESS,LOCATION\nMain,\"1 St\",\"(41.85, -87.65)\"\n";
    let table = read_source_table(data.as_bytes()).expect("read table");
    assert_eq!(table.headers, vec!["BRANCH", "ADDRESS", "LOCATION"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0], vec!["Main", "1 St", "(41.85, -87.65)"]);
}

#[test]
fn pads_short_rows_and_skips_empty_records() {
    let data = "A,B,C\n1,2\n,,\n3,4,5\n";
    let table = read_source_table(data.as_bytes()).expect("read table");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["1", "2", ""]);
    assert_eq!(table.rows[1], vec!["3", "4", "5"]);
}

#[test]
fn strips_bom_from_first_header() {
    let data = "\u{feff}School_ID,Short_Name\n1,LINC\n";
    let table = read_source_table(data.as_bytes()).expect("read table");
    assert_eq!(table.headers[0], "School_ID");
}

#[test]
fn loads_table_from_local_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("schools.csv");
    fs::write(&path, "School_ID,Short_Name\n5,LINC\n").expect("write fixture");

    let table = load_source_table(path.to_str().expect("utf-8 path")).expect("load table");
    assert_eq!(table.headers, vec!["School_ID", "Short_Name"]);
    assert_eq!(table.rows, vec![vec!["5".to_string(), "LINC".to_string()]]);
}

#[test]
fn unreachable_source_fails() {
    let result = load_source_table("no-such-directory/no-such-file.csv");
    assert!(result.is_err());
}
