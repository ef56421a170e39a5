// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! MCP server for Statistics Canada data.
//!
//! # Usage
//!
//! ```bash
//! # streamable HTTP on :8080/mcp
//! statcan-mcp --port 8080
//!
//! # stdio, for agents that spawn the server themselves
//! statcan-mcp --transport stdio
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use statcan_mcp::config::{Config, Transport, init_logging};
use statcan_mcp::mcp::StatCanServer;
use statcan_mcp::{StatCanClient, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_format);
    config.validate().context("Invalid configuration")?;

    let client = StatCanClient::new(&config.upstream_url, config.timeout())?;
    info!(
        upstream = %config.upstream_url,
        timeout_secs = config.timeout_secs,
        transport = ?config.transport,
        "startup"
    );

    match config.transport {
        Transport::Http => server::serve(config.listen_addr(), client).await,
        Transport::Stdio => {
            let service = StatCanServer::new(client)
                .serve(stdio())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to start MCP server: {}", e))?;

            service
                .waiting()
                .await
                .map_err(|e| anyhow::anyhow!("MCP server error: {}", e))?;
            Ok(())
        }
    }
}
