// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! Drives the real HTTP fetcher against a local fake of the upstream API.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use statcan_mcp::errors::FetchError;
use statcan_mcp::fetch::{DatasetSource, StatCanClient, USER_AGENT};
use statcan_mcp::handlers::{get_statcan_data, search_statcan};

fn statcan_rows(pid: &str, n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "REF_DATE": format!("2024-{:02}", i % 12 + 1),
                "GEO": "Canada",
                "DGUID": "2016A000011124",
                "Products and product groups": "All-items",
                "UOM": "2002=100",
                "UOM_ID": 17,
                "SCALAR_FACTOR": "units",
                "SCALAR_ID": 0,
                "VECTOR": "v41690973",
                "COORDINATE": "2.2",
                "VALUE": 150.0 + i as f64,
                "STATUS": null,
                "SYMBOL": null,
                "TERMINATED": null,
                "DECIMALS": 1,
                "PID": pid,
            })
        })
        .collect()
}

async fn ok_handler(Path(pid): Path<String>, headers: HeaderMap) -> impl IntoResponse {
    // Only well-behaved clients get data.
    let agent_ok = headers.get(header::USER_AGENT).is_some_and(|v| v == USER_AGENT);
    let accept_ok = headers.get(header::ACCEPT).is_some_and(|v| v == "*/*");
    if !agent_ok || !accept_ok {
        return (StatusCode::BAD_REQUEST, Json(json!([]))).into_response();
    }
    Json(Value::Array(statcan_rows(&pid, 40))).into_response()
}

async fn slow_handler(Path(pid): Path<String>) -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(Value::Array(statcan_rows(&pid, 1)))
}

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/ok/:pid", get(ok_handler))
        .route("/empty/:pid", get(|| async { Json(json!([])) }))
        .route("/object/:pid", get(|| async { Json(json!({"status": "FAILED"})) }))
        .route("/html/:pid", get(|| async { "<html>maintenance</html>" }))
        .route(
            "/error/:pid",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/slow/:pid", get(slow_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr, route: &str) -> StatCanClient {
    let endpoint = format!("http://{addr}/{route}/{{pid}}");
    StatCanClient::new(&endpoint, Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_fetch_truncates_and_keeps_order() {
    let addr = spawn_upstream().await;
    let records = client(addr, "ok").fetch("18-10-0004-01", 12).await.unwrap();

    assert_eq!(records.len(), 12);
    assert_eq!(records[0]["PID"], "18100004");
    assert_eq!(records[0]["REF_DATE"], "2024-01");
    assert_eq!(records[11]["REF_DATE"], "2024-12");

    let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
    assert_eq!(keys[..3], ["REF_DATE", "GEO", "DGUID"]);
}

#[tokio::test]
async fn test_fetch_failures() {
    let addr = spawn_upstream().await;

    let err = client(addr, "empty").fetch("t", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Empty), "{err}");

    let err = client(addr, "object").fetch("t", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "{err}");

    let err = client(addr, "html").fetch("t", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "{err}");

    let err = client(addr, "error").fetch("t", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)), "{err}");

    let err = client(addr, "slow").fetch("t", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout), "{err}");
}

#[tokio::test]
async fn test_topic_live_end_to_end() {
    let addr = spawn_upstream().await;
    let out = get_statcan_data(&client(addr, "ok"), "cpi", 5).await;

    assert_eq!(out.table.title, "Consumer Price Index, Monthly");
    assert_eq!(out.table.rows.len(), 5);
    assert_eq!(
        out.table.notes.get("table_id").map(String::as_str),
        Some("18-10-0004-01")
    );

    let labels: Vec<&str> = out.table.columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Reference Date",
            "Geography",
            "Products And Product Groups",
            "Value",
            "Pid"
        ]
    );
    let value = out.table.columns.iter().find(|c| c.key == "VALUE").unwrap();
    assert!(value.numeric);
}

#[tokio::test]
async fn test_topic_falls_back_on_malformed_payload() {
    let addr = spawn_upstream().await;
    for route in ["empty", "object", "error"] {
        let out = get_statcan_data(&client(addr, route), "population", 10).await;
        assert_eq!(out.table.title, "Population Estimates by Province (2024 Q2)");
        assert_eq!(out.table.rows.len(), 10);
        assert!(out.table.notes.contains_key("sample"));
    }
}

#[tokio::test]
async fn test_search_end_to_end() {
    let addr = spawn_upstream().await;

    let out = search_statcan(&client(addr, "ok"), "17-10-0005-01", 20).await;
    assert_eq!(out.table.title, "Statistics Canada Table 17-10-0005-01");
    assert_eq!(out.table.rows.len(), 20);
    assert_eq!(out.table.rows[0]["PID"], "17100005");

    let out = search_statcan(&client(addr, "error"), "17-10-0005-01", 20).await;
    assert_eq!(out.table.title, "Table 17-10-0005-01");
    assert!(out.table.rows.is_empty());
    assert!(out.table.columns.is_empty());
}
