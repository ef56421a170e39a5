// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! Turns raw Statistics Canada records into a display table.
//!
//! Column selection is positional: the fields of the first record, minus
//! metadata fields, capped at [`MAX_COLUMNS`]. Labels are derived from field
//! names and never from values.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::fetch::Record;
use crate::table::{Column, Row, SOURCE, Table};

pub const MAX_COLUMNS: usize = 6;

/// Placeholder title; callers replace it with something more specific.
pub const DEFAULT_TITLE: &str = "Statistics Canada Data";

/// Metadata fields that never make it into a display table.
const HIDDEN_FIELDS: &[&str] = &[
    "DGUID",
    "UOM",
    "UOM_ID",
    "SCALAR_FACTOR",
    "SCALAR_ID",
    "VECTOR",
    "COORDINATE",
    "STATUS",
    "SYMBOL",
    "TERMINATED",
    "DECIMALS",
];

/// Applied to the whole label after title-casing.
const LABEL_OVERRIDES: &[(&str, &str)] = &[
    ("Ref Date", "Reference Date"),
    ("Geo", "Geography"),
    ("VALUE", "Value"),
];

pub fn normalize(records: &[Record], table_id: &str, max_rows: usize) -> Option<Table> {
    let first = records.first()?;

    let keys = select_fields(first);
    let columns = keys
        .iter()
        .map(|key| Column {
            key: (*key).to_string(),
            label: label_for(key),
            numeric: is_numeric_field(key),
            is_change_indicator: false,
        })
        .collect();

    let rows = records
        .iter()
        .take(max_rows)
        .map(|record| project(record, &keys))
        .collect();

    let mut notes = BTreeMap::new();
    notes.insert("table_id".to_string(), table_id.to_string());

    Some(Table {
        title: DEFAULT_TITLE.to_string(),
        source: SOURCE.to_string(),
        columns,
        rows,
        notes,
    })
}

/// Displayed field names, in the order the record lists them.
fn select_fields(record: &Record) -> Vec<&str> {
    record
        .keys()
        .map(String::as_str)
        .filter(|k| !HIDDEN_FIELDS.contains(k))
        .take(MAX_COLUMNS)
        .collect()
}

fn project(record: &Record, keys: &[&str]) -> Row {
    keys.iter()
        .map(|key| {
            let value = record.get(*key).cloned().unwrap_or(Value::Null);
            ((*key).to_string(), value)
        })
        .collect()
}

/// `REF_DATE` → `Reference Date`, `GEO` → `Geography`, `VALUE` → `Value`.
pub fn label_for(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let titled = spaced
        .split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");

    LABEL_OVERRIDES
        .iter()
        .find(|(from, _)| *from == titled)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(titled)
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn is_numeric_field(field: &str) -> bool {
    field == "VALUE" || field.to_lowercase().contains("value")
}
