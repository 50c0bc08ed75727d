use crate::sizing::{CapacityDataError, CapacitySource, CapacityTable};
use std::path::Path;

fn table_from(csv: &str) -> Result<CapacityTable, CapacityDataError> {
    CapacityTable::from_reader(csv.as_bytes(), CapacitySource::File("test.csv".into()))
}

#[test]
fn test_builtin_lookup_and_extrapolation() {
    let table = CapacityTable::builtin();
    assert!(table.usable_capacity(0).abs() < f64::EPSILON);
    assert!((table.usable_capacity(1) - 982.67136).abs() < 1e-9);
    assert!((table.usable_capacity(7) - 8368.92672).abs() < 1e-9);
    assert!((table.usable_capacity(10) - (8368.92672 + 3.0 * 1195.56096)).abs() < 1e-9);
    assert_eq!(table.entries(), 7);
    assert_eq!(table.source(), &CapacitySource::Builtin);
}

#[test]
fn test_usable_capacity_is_non_decreasing() {
    let table = CapacityTable::builtin();
    for nd in 1..200 {
        assert!(
            table.usable_capacity(nd) >= table.usable_capacity(nd - 1),
            "capacity dropped between {} and {nd} D-units",
            nd - 1
        );
    }
}

#[test]
fn test_from_reader_derives_slope_from_last_rows() {
    let table = table_from("d_units,usable_capacity_tb\n1,100\n2,250\n3,450\n").unwrap();
    assert_eq!(table.entries(), 3);
    assert!((table.incremental_tb() - 200.0).abs() < f64::EPSILON);
    assert!((table.usable_capacity(3) - 450.0).abs() < f64::EPSILON);
    assert!((table.usable_capacity(5) - 850.0).abs() < f64::EPSILON);
}

#[test]
fn test_from_reader_accepts_header_aliases_and_whitespace() {
    let table = table_from("dbox_count , capacity_tb\n 1 , 10.5\n2,21\n").unwrap();
    assert_eq!(table.entries(), 2);
    assert!((table.usable_capacity(1) - 10.5).abs() < f64::EPSILON);
}

#[test]
fn test_from_reader_skips_bad_rows() {
    let csv = "d_units,usable_capacity_tb\n\
               1,100\n\
               2,abc\n\
               2,200\n\
               4,400\n\
               3,150\n\
               3,300\n";
    let table = table_from(csv).unwrap();
    // "2,abc" is malformed, "4,400" skips ahead, "3,150" shrinks capacity.
    assert_eq!(table.entries(), 3);
    assert!((table.usable_capacity(2) - 200.0).abs() < f64::EPSILON);
    assert!((table.usable_capacity(3) - 300.0).abs() < f64::EPSILON);
    assert!((table.incremental_tb() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_from_reader_needs_two_rows() {
    let err = table_from("d_units,usable_capacity_tb\n1,100\n").unwrap_err();
    assert!(matches!(err, CapacityDataError::TooFewRows { accepted: 1 }), "got {err:?}");

    let err = table_from("").unwrap_err();
    assert!(matches!(err, CapacityDataError::TooFewRows { accepted: 0 }), "got {err:?}");
}

#[test]
fn test_load_falls_back_when_file_missing() {
    let table = CapacityTable::load(Path::new("/nonexistent/dbox_capacity.csv"));
    assert_eq!(table.source(), &CapacitySource::Builtin);
    assert_eq!(table.entries(), 7);
}

#[test]
fn test_shipped_data_matches_builtin_curve() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/dbox_capacity.csv");
    let loaded = CapacityTable::load(&path);
    assert!(matches!(loaded.source(), CapacitySource::File(_)), "shipped data not loaded");

    let builtin = CapacityTable::builtin();
    for nd in 0..=60 {
        let diff = (loaded.usable_capacity(nd) - builtin.usable_capacity(nd)).abs();
        assert!(diff < 1e-6, "curves differ at nd={nd} by {diff}");
    }
}
