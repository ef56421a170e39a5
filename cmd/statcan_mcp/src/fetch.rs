// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! HTTP client for the Statistics Canada data endpoint.
//!
//! One GET per call, bounded by a fixed timeout. Nothing is retried.

use std::time::Duration;

use anyhow::{Context, Result};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::FetchError;

/// A flat record as decoded from the remote array.
pub type Record = Map<String, Value>;

/// Upper bound on how long one remote call may take.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Placeholder substituted with the product identifier.
pub const PID_PLACEHOLDER: &str = "{pid}";

pub const DEFAULT_ENDPOINT: &str = "https://www150.statcan.gc.ca/t1/wds/rest/getDataFromTable/{pid}";

pub const USER_AGENT: &str = concat!("statcan-mcp/", env!("CARGO_PKG_VERSION"));

/// Length of the product identifier addressed by the endpoint.
const PRODUCT_ID_LEN: usize = 8;

/// Source of raw dataset records.
pub trait DatasetSource: Send + Sync {
    fn fetch(
        &self,
        table_id: &str,
        max_rows: usize,
    ) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send;
}

/// Derives the 8-character product identifier from a dataset identifier,
/// e.g. `17-10-0005-01` → `17100005`.
pub fn product_id(table_id: &str) -> String {
    table_id
        .chars()
        .filter(|c| *c != '-')
        .take(PRODUCT_ID_LEN)
        .collect()
}

/// Fetches dataset records from Statistics Canada.
#[derive(Clone)]
pub struct StatCanClient {
    endpoint: String,
    client: Client,
}

impl StatCanClient {
    /// Create a client for the given endpoint template. The template must
    /// contain `{pid}`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    /// The product identifier is percent-encoded, so arbitrary input stays
    /// inside its path segment.
    pub fn url_for(&self, table_id: &str) -> String {
        let pid = product_id(table_id);
        let encoded = utf8_percent_encode(&pid, NON_ALPHANUMERIC).to_string();
        self.endpoint.replace(PID_PLACEHOLDER, &encoded)
    }
}

impl DatasetSource for StatCanClient {
    async fn fetch(&self, table_id: &str, max_rows: usize) -> Result<Vec<Record>, FetchError> {
        let url = self.url_for(table_id);
        debug!(table_id = %table_id, url = %url, "Fetching dataset");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(format!("Failed to read body: {}", e))
            }
        })?;

        let mut records = decode_records(&body)?;
        records.truncate(max_rows);
        Ok(records)
    }
}

/// Decodes a body that must be a non-empty JSON array of objects.
pub fn decode_records(body: &[u8]) -> Result<Vec<Record>, FetchError> {
    let records: Vec<Record> =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    if records.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id() {
        assert_eq!(product_id("17-10-0005-01"), "17100005");
        assert_eq!(product_id("18-10-0004-01"), "18100004");
        assert_eq!(product_id("1710000501"), "17100005");
        assert_eq!(product_id("17-10"), "1710");
        assert_eq!(product_id(""), "");
    }

    #[test]
    fn test_url_for() {
        let client = StatCanClient::new("http://example.test/t/{pid}/en", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            client.url_for("14-10-0287-01"),
            "http://example.test/t/14100287/en"
        );
    }

    #[test]
    fn test_url_for_escapes_identifier() {
        let client = StatCanClient::new("http://example.test/t/{pid}/en", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            client.url_for("a?b#c"),
            "http://example.test/t/a%3Fb%23c/en"
        );
        assert_eq!(
            client.url_for("../../x"),
            "http://example.test/t/%2E%2E%2F%2E%2E%2Fx/en"
        );
    }

    #[test]
    fn test_decode_records() {
        let records = decode_records(br#"[{"GEO":"Canada","VALUE":1}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["GEO"], "Canada");
    }

    #[test]
    fn test_decode_rejects_empty_array() {
        assert!(matches!(decode_records(b"[]"), Err(FetchError::Empty)));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(matches!(
            decode_records(br#"{"status":"FAILED"}"#),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_records(b"<html>"),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_records(b"[1, 2, 3]"),
            Err(FetchError::Decode(_))
        ));
    }
}
