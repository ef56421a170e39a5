// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

use thiserror::Error;

/// Why a remote fetch produced no records.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("response is not a JSON array of records: {0}")]
    Decode(String),

    #[error("response contained no records")]
    Empty,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("upstream URL template must contain '{{pid}}': {0}")]
    MissingPidPlaceholder(String),

    #[error("timeout must be at least one second")]
    ZeroTimeout,
}
