// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "juno",
    about = "MCP testing agent for Maven projects: run tests, summarize coverage, scaffold JUnit skeletons",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the tools over MCP stdio (for Cursor, Claude Desktop, etc.)
    Serve {
        /// Comma-separated subset of tools to expose, or "all"
        #[arg(long)]
        tools: Option<String>,

        /// Expose only non-mutating tools (no Maven runs, no git add/commit/push)
        #[arg(long)]
        read_only: bool,
    },
    /// List the tools the server would expose and exit
    ListTools {
        /// Apply the same filter as `serve --read-only`
        #[arg(long)]
        read_only: bool,
    },
    /// Print the resolved configuration as TOML and exit
    ShowConfig,
}
