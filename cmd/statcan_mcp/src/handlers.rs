// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! The three user-facing operations. None of them fail: remote problems turn
//! into sample data or an explicit empty table.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::{info, warn};

use crate::catalogue;
use crate::errors::FetchError;
use crate::fallback;
use crate::fetch::DatasetSource;
use crate::normalize::normalize;
use crate::table::{Column, Table, row};

pub const MAX_ROWS_RANGE: RangeInclusive<usize> = 5..=50;
pub const DEFAULT_TOPIC_ROWS: usize = 15;
pub const DEFAULT_SEARCH_ROWS: usize = 20;

pub const CATALOGUE_TITLE: &str = "Statistics Canada Data Catalogue";

/// What every operation hands back: a one-line summary and the table.
#[derive(Debug, Clone, Serialize)]
pub struct ToolOutput {
    pub summary: String,
    pub table: Table,
}

pub fn browse_catalogue() -> ToolOutput {
    let mut table = Table::empty(CATALOGUE_TITLE);
    table.columns = vec![
        Column::text("theme", "Theme"),
        Column::text("title", "Title"),
        Column::text("id", "Table ID"),
        Column::text("description", "Description"),
    ];
    table.rows = catalogue::entries()
        .iter()
        .map(|e| {
            row([
                ("theme", e.theme_label.into()),
                ("title", e.title.into()),
                ("id", e.identifier.into()),
                ("description", e.description.into()),
            ])
        })
        .collect();

    ToolOutput {
        summary: format!(
            "{} Statistics Canada tables available. Use get_statcan_data with a topic or search_statcan with a table ID.",
            table.rows.len()
        ),
        table,
    }
}

pub async fn get_statcan_data<S: DatasetSource>(
    source: &S,
    topic: &str,
    max_rows: usize,
) -> ToolOutput {
    let Some(entry) = catalogue::lookup(topic) else {
        warn!(topic = %topic, "Unknown topic requested");
        return ToolOutput {
            summary: format!("Unknown topic '{topic}'. Use browse_catalogue to list topics."),
            table: Table::empty(format!("Unknown topic: {topic}"))
                .with_note("error", format!("'{topic}' is not a catalogue topic")),
        };
    };

    match load(source, entry.identifier, max_rows).await {
        Ok(mut table) => {
            table.title = entry.title.to_string();
            info!(topic = %topic, table_id = %entry.identifier, rows = table.rows.len(), "Served live data");
            ToolOutput {
                summary: format!(
                    "{}: {} rows from Statistics Canada table {}.",
                    table.title,
                    table.rows.len(),
                    entry.identifier
                ),
                table,
            }
        }
        Err(e) => {
            warn!(topic = %topic, table_id = %entry.identifier, error = %e, "Live fetch failed, serving sample data");
            // Samples keep their own title, which names the sample's reference period.
            let mut table = fallback::sample(topic);
            table.truncate_rows(max_rows);
            ToolOutput {
                summary: format!(
                    "{}: live data unavailable ({}), showing {} rows of sample data.",
                    table.title,
                    e,
                    table.rows.len()
                ),
                table,
            }
        }
    }
}

pub async fn search_statcan<S: DatasetSource>(
    source: &S,
    table_id: &str,
    max_rows: usize,
) -> ToolOutput {
    match load(source, table_id, max_rows).await {
        Ok(mut table) => {
            table.title = format!("Statistics Canada Table {table_id}");
            info!(table_id = %table_id, rows = table.rows.len(), "Served live data");
            ToolOutput {
                summary: format!("{}: {} rows.", table.title, table.rows.len()),
                table,
            }
        }
        Err(e) => {
            warn!(table_id = %table_id, error = %e, "Table search failed");
            ToolOutput {
                summary: format!("Could not retrieve Statistics Canada table {table_id}: {e}."),
                table: Table::empty(format!("Table {table_id}"))
                    .with_note("table_id", table_id)
                    .with_note("error", format!("Could not retrieve data: {e}")),
            }
        }
    }
}

async fn load<S: DatasetSource>(
    source: &S,
    table_id: &str,
    max_rows: usize,
) -> Result<Table, FetchError> {
    let records = source.fetch(table_id, max_rows).await?;
    normalize(&records, table_id, max_rows).ok_or(FetchError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Record;
    use serde_json::json;

    /// Canned responses in place of the HTTP client.
    enum Stub {
        Records(Vec<Record>),
        Fail,
    }

    impl DatasetSource for Stub {
        async fn fetch(&self, _table_id: &str, max_rows: usize) -> Result<Vec<Record>, FetchError> {
            match self {
                Stub::Records(r) if r.is_empty() => Err(FetchError::Empty),
                Stub::Records(r) => Ok(r.iter().take(max_rows).cloned().collect()),
                Stub::Fail => Err(FetchError::Status(503)),
            }
        }
    }

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                let serde_json::Value::Object(m) = json!({
                    "REF_DATE": "2024-04",
                    "GEO": format!("Place {i}"),
                    "DGUID": "x",
                    "VALUE": i
                }) else {
                    unreachable!()
                };
                m
            })
            .collect()
    }

    #[test]
    fn test_browse_catalogue() {
        let out = browse_catalogue();
        assert_eq!(out.table.rows.len(), 8);
        let keys: Vec<&str> = out.table.column_keys().collect();
        assert_eq!(keys, vec!["theme", "title", "id", "description"]);
        for r in &out.table.rows {
            for k in &keys {
                let v = r[*k].as_str().unwrap();
                assert!(!v.is_empty());
            }
        }
    }

    #[tokio::test]
    async fn test_topic_live_uses_catalogue_title() {
        let out = get_statcan_data(&Stub::Records(records(30)), "labour", 15).await;
        assert_eq!(out.table.title, catalogue::lookup("labour").unwrap().title);
        assert_eq!(out.table.rows.len(), 15);
        assert_eq!(
            out.table.notes.get("table_id").map(String::as_str),
            Some("14-10-0287-01")
        );
        assert!(!out.table.notes.contains_key("sample"));
    }

    #[tokio::test]
    async fn test_topic_falls_back_on_failure() {
        let out = get_statcan_data(&Stub::Fail, "population", 50).await;
        assert_eq!(out.table.title, "Population Estimates by Province (2024 Q2)");
        assert_eq!(out.table.rows.len(), 14);
        assert!(out.summary.contains("sample"));
    }

    #[tokio::test]
    async fn test_topic_falls_back_on_empty_payload() {
        let out = get_statcan_data(&Stub::Records(vec![]), "population", 10).await;
        assert_eq!(out.table.title, "Population Estimates by Province (2024 Q2)");
        assert_eq!(out.table.rows.len(), 10);
    }

    #[tokio::test]
    async fn test_fallback_rows_capped() {
        let out = get_statcan_data(&Stub::Fail, "cpi", 5).await;
        assert_eq!(out.table.rows.len(), 5);
        assert!(out.table.title.starts_with("Consumer Price Index"));
    }

    #[tokio::test]
    async fn test_topic_without_sample_gets_population() {
        let out = get_statcan_data(&Stub::Fail, "gdp", 20).await;
        assert_eq!(out.table.title, "Population Estimates by Province (2024 Q2)");
    }

    #[tokio::test]
    async fn test_unknown_topic() {
        let out = get_statcan_data(&Stub::Records(records(3)), "weather", 15).await;
        assert!(out.table.rows.is_empty());
        assert!(out.table.columns.is_empty());
        assert!(out.summary.contains("Unknown topic"));
    }

    #[tokio::test]
    async fn test_search_failure() {
        let out = search_statcan(&Stub::Fail, "17-10-0005-01", 20).await;
        assert_eq!(out.table.title, "Table 17-10-0005-01");
        assert!(out.table.rows.is_empty());
        assert!(out.table.columns.is_empty());
        assert!(out.table.notes.contains_key("error"));
    }

    #[tokio::test]
    async fn test_search_success() {
        let out = search_statcan(&Stub::Records(records(40)), "17-10-0005-01", 20).await;
        assert_eq!(out.table.title, "Statistics Canada Table 17-10-0005-01");
        assert_eq!(out.table.rows.len(), 20);
        let keys: Vec<&str> = out.table.column_keys().collect();
        assert_eq!(keys, vec!["REF_DATE", "GEO", "VALUE"]);
    }
}
