// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
//!
//! `juno-mcp` — MCP (Model Context Protocol) server for juno.
//!
//! Exposes the Maven test runner, JaCoCo coverage summarizer, JUnit
//! skeleton generator, boundary-test checklist and git passthroughs to any
//! MCP-compatible host over **stdio** transport using line-delimited
//! JSON-RPC.
//!
//! # Quick start
//!
//! ```text
//! juno serve
//! ```
//!
//! # MCP client configuration (`mcp.json`)
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "juno": {
//!       "command": "juno",
//!       "args": ["serve"]
//!     }
//!   }
//! }
//! ```
//!
//! ## Custom tool subset / read-only
//!
//! ```text
//! juno serve --tools summarize_coverage,suggest_junit_tests
//! juno serve --read-only
//! ```
//!
//! # Architecture
//!
//! ```text
//! MCP client (Cursor, Claude Desktop, …)
//!       │  stdin/stdout (line-delimited JSON-RPC)
//!       ▼
//! JunoMcpServer (rmcp ServerHandler)
//!       │
//!       ▼
//! ToolRegistry  ──►  Tool::execute()
//! ```

pub mod bridge;
pub mod registry;
pub mod server;

pub use registry::{build_registry, RegistryOptions, DEFAULT_TOOL_NAMES};
pub use server::JunoMcpServer;

use std::sync::Arc;

use anyhow::Result;
use rmcp::ServiceExt;

use juno_tools::ToolRegistry;

/// Start an MCP stdio server, serving the tools in `registry` on
/// `stdin` / `stdout`.
///
/// Blocks until the client disconnects (stdin EOF) or the process is
/// terminated.  Designed to be called as the sole operation of the
/// `juno serve` subcommand; logging must go to stderr because stdout
/// belongs to the transport.
///
/// # Errors
///
/// Returns an error if the rmcp transport fails to initialize or if the
/// server encounters a fatal I/O error.
pub async fn serve_stdio(registry: Arc<ToolRegistry>) -> Result<()> {
    let server = JunoMcpServer::new(registry);
    let running = server
        .serve((tokio::io::stdin(), tokio::io::stdout()))
        .await
        .map_err(|e| anyhow::anyhow!("MCP server init error: {e}"))?;
    running
        .waiting()
        .await
        .map_err(|e| anyhow::anyhow!("MCP server error: {e}"))?;
    Ok(())
}
