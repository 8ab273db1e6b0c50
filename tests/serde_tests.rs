#![cfg(feature = "serde")]
//! Serde round-trip tests for `Table`.

use funtab::table;
use funtab::table::Table;
use rstest::rstest;

#[rstest]
fn test_array_only_table_round_trips() {
    let table: Table<String, i32> = table![1, 2, 3];
    let json = serde_json::to_string(&table).unwrap();
    let decoded: Table<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, table);
}

#[rstest]
fn test_mixed_table_round_trips() {
    let mut table: Table<String, i32> = table![10, 20];
    table.insert_named(String::from("total"), 30);

    let json = serde_json::to_string(&table).unwrap();
    let decoded: Table<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, table);
}

#[rstest]
fn test_empty_table_round_trips() {
    let table: Table<String, i32> = table![];
    let json = serde_json::to_string(&table).unwrap();
    let decoded: Table<String, i32> = serde_json::from_str(&json).unwrap();
    assert!(decoded.is_empty());
}
