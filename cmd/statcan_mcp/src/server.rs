// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! HTTP hosting: health check, static viewer page and the MCP endpoint.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    Router,
    response::{Html, IntoResponse, Json},
    routing::get,
};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::fetch::StatCanClient;
use crate::mcp::{StatCanServer, VIEWER_HTML};

/// Builds the application router.
///
/// The MCP service runs stateless: every request gets its own
/// [`StatCanServer`], sharing only the HTTP connection pool.
pub fn router(client: StatCanClient) -> Router {
    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = false;

    let mcp = StreamableHttpService::new(
        move || Ok(StatCanServer::new(client.clone())),
        LocalSessionManager::default().into(),
        config,
    );

    Router::new()
        .route("/", get(health_handler))
        .route("/ui", get(viewer_handler))
        .nest_service("/mcp", mcp)
        .layer(CorsLayer::permissive())
}

/// Serve until Ctrl-C or SIGTERM.
pub async fn serve(addr: SocketAddr, client: StatCanClient) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(addr = %addr, "Listening; MCP endpoint at /mcp");

    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "name": "statcan-mcp",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn viewer_handler() -> Html<&'static str> {
    Html(VIEWER_HTML)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
