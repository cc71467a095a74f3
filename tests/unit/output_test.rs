//! Tests for the Output module
//!
//! The trigger table renders either as aligned text or as a JSON array.

use crate::common::{fleet, trigger};
use zabbixctl::output::{OperationResult, OutputMode, TriggerTable};

fn table() -> TriggerTable {
    let mut table = TriggerTable::default();
    for t in &fleet() {
        table.push(t);
    }
    table
}

fn render(table: &TriggerTable, mode: OutputMode) -> String {
    let mut out = Vec::new();
    table.render(mode, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn empty_table_renders_nothing() {
    let table = TriggerTable::default();
    assert!(table.is_empty());
    assert_eq!(render(&table, OutputMode::Human), "");
}

#[test]
fn human_rows_are_aligned() {
    let text = render(&table(), OutputMode::Human);
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows.len(), 3);
    let host_columns: Vec<usize> = rows
        .iter()
        .zip(["db1", "web1", "db2"])
        .map(|(row, host)| row.find(host).unwrap())
        .collect();
    assert!(host_columns.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn human_row_has_all_columns() {
    let mut table = TriggerTable::default();
    table.push(&trigger("42", "mail1", "Queue is growing"));
    let text = render(&table, OutputMode::Human);

    for column in ["42", "AVERAGE", "PROBLEM", "NACK", "mail1", "Queue is growing"] {
        assert!(text.contains(column), "missing {column} in {text}");
    }
}

#[test]
fn json_is_array_of_triggers() {
    let text = render(&table(), OutputMode::Json);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1]["hostname"], "web1");
    assert_eq!(rows[1]["severity"], "average");
    assert_eq!(rows[1]["status"], "problem");
    assert_eq!(rows[1]["last_event"]["id"], "502");
}

#[test]
fn json_empty_table_is_empty_array() {
    let text = render(&TriggerTable::default(), OutputMode::Json);
    assert_eq!(text.trim(), "[]");
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created config".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Created config"));
}
