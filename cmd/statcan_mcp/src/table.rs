// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! Display table returned by every tool.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Attribution used on every table we produce.
pub const SOURCE: &str = "Statistics Canada";

/// One row, keyed by column key. Insertion order is column order.
pub type Row = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub key: String,
    pub label: String,
    pub numeric: bool,
    pub is_change_indicator: bool,
}

impl Column {
    pub fn text(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            numeric: false,
            is_change_indicator: false,
        }
    }

    pub fn numeric(key: &str, label: &str) -> Self {
        Self {
            numeric: true,
            ..Self::text(key, label)
        }
    }

    /// Numeric column holding a period-over-period change.
    pub fn change(key: &str, label: &str) -> Self {
        Self {
            numeric: true,
            is_change_indicator: true,
            ..Self::text(key, label)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub source: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub notes: BTreeMap<String, String>,
}

impl Table {
    /// A table with no columns and no rows, used for lookup misses and
    /// failed identifier searches.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: SOURCE.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
            notes: BTreeMap::new(),
        }
    }

    pub fn with_note(mut self, key: &str, value: impl Into<String>) -> Self {
        self.notes.insert(key.to_string(), value.into());
        self
    }

    /// Keep at most `max_rows` leading rows.
    pub fn truncate_rows(&mut self, max_rows: usize) {
        self.rows.truncate(max_rows);
    }

    /// Column keys in display order.
    pub fn column_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }
}

/// Builds a row from `(key, value)` pairs, preserving order.
pub fn row<const N: usize>(cells: [(&str, Value); N]) -> Row {
    cells
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
