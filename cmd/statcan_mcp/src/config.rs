// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

use crate::errors::ConfigError;
use crate::fetch::{DEFAULT_ENDPOINT, PID_PLACEHOLDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// Streamable HTTP on `/mcp`, plus health check and viewer.
    Http,
    /// MCP over stdin/stdout for locally spawned servers.
    Stdio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "statcan-mcp")]
#[command(about = "MCP server for Statistics Canada data tables")]
#[command(version)]
pub struct Config {
    #[arg(long, value_enum, default_value = "http", env = "STATCAN_MCP_TRANSPORT")]
    pub transport: Transport,

    /// Address to listen on (HTTP transport).
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED), env = "STATCAN_MCP_BIND")]
    pub bind: IpAddr,

    /// Port to listen on (HTTP transport).
    #[arg(long, default_value_t = 8080, env = "PORT")]
    pub port: u16,

    /// Upstream URL template; `{pid}` is replaced by the 8-digit product ID.
    #[arg(long, default_value = DEFAULT_ENDPOINT, env = "STATCAN_UPSTREAM_URL")]
    pub upstream_url: String,

    /// Timeout for each upstream request, in seconds.
    #[arg(long, default_value_t = 20, env = "STATCAN_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    #[arg(long, value_enum, default_value = "text", env = "STATCAN_MCP_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.upstream_url.contains(PID_PLACEHOLDER) {
            return Err(ConfigError::MissingPidPlaceholder(self.upstream_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Installs the global tracing subscriber. Logs go to stderr so stdout stays
/// free for the stdio transport.
pub fn init_logging(format: LogFormat) {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
