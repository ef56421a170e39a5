// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! Statistics Canada data tools for LLM agents.
//!
//! Looks up a table, fetches its records from Statistics Canada and reshapes
//! them into a small display table. When the upstream call fails, topic
//! lookups fall back to hand-authored sample tables.
//!
//! ## Modules
//!
//! - `catalogue` - the eight known topics and their table identifiers
//! - `fetch` - single-shot HTTP fetch of a table's records
//! - `normalize` - column selection and labeling
//! - `fallback` - sample tables
//! - `handlers` - the three operations
//! - `mcp` - MCP tool server wrapping the handlers
//! - `server` - HTTP hosting (health, viewer page, `/mcp`)

// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod catalogue;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod fetch;
pub mod handlers;
pub mod mcp;
pub mod normalize;
pub mod server;
pub mod table;

pub use fetch::{DatasetSource, StatCanClient};
pub use handlers::ToolOutput;
pub use table::{Column, Row, Table};
