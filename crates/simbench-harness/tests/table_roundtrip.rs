use std::fs;

use simbench_core::{ParamValue, SweepError};
use simbench_harness::{read_table, write_table};

#[test]
fn roundtrip_preserves_rows_and_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("measurements-gridcells.csv");
    let values = [ParamValue::Int(15000), ParamValue::Int(20000)];
    write_table(&path, &values, &[3.21, 4.08]).expect("write");

    let rows = read_table(&path).expect("read");
    assert_eq!(
        rows,
        vec![
            ("15000".to_string(), "3.21".to_string()),
            ("20000".to_string(), "4.08".to_string()),
        ]
    );
}

#[test]
fn rewriting_the_same_table_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("measurements-ticks.csv");
    let values = [ParamValue::Int(50), ParamValue::Int(100)];

    write_table(&path, &values, &[1.5, 1.5]).expect("first write");
    let first = fs::read(&path).expect("read bytes");
    write_table(&path, &values, &[1.5, 1.5]).expect("second write");
    let second = fs::read(&path).expect("read bytes");

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(second).expect("utf8"), "50,1.5\n100,1.5\n");
}

#[test]
fn mismatched_columns_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("measurements-bad.csv");
    let result = write_table(&path, &[ParamValue::Int(1)], &[1.0, 2.0]);
    match result {
        Err(SweepError::Table(info)) => assert_eq!(info.code, "table-shape"),
        other => panic!("expected table error, got {other:?}"),
    }
    assert!(!path.exists());
}
