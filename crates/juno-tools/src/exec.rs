// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Synchronous-in-spirit subprocess execution for the builtin tools.
//!
//! Every external program juno touches (Maven, git) runs through
//! [`run_command`]: spawn, wait to completion, capture both streams.  The
//! exit status is part of [`CommandOutcome`] so callers can make a
//! structured pass/fail decision instead of scraping output text.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// A command to run: program, arguments, optional working directory and
/// optional timeout.  No timeout means the call blocks until the process
/// exits on its own.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub program: String,
    pub args: Vec<String>,
    pub workdir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl CommandRequest {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            workdir: None,
            timeout: None,
        }
    }

    pub fn workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    pub fn timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout = secs.map(Duration::from_secs);
        self
    }
}

/// Captured result of a completed process.
#[derive(Debug)]
pub struct CommandOutcome {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, or -1 when the process was killed by a signal.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} timed out after {secs}s")]
    Timeout { program: String, secs: u64 },
}

/// Run a command to completion and capture its combined output.
///
/// Launch failures (missing executable, invalid working directory) come
/// back as [`ExecError::Spawn`]; a non-zero exit is *not* an error here —
/// it is reported through [`CommandOutcome::status`].
pub async fn run_command(req: &CommandRequest) -> Result<CommandOutcome, ExecError> {
    debug!(program = %req.program, args = ?req.args, "running command");

    let mut cmd = Command::new(&req.program);
    cmd.args(&req.args);
    if let Some(dir) = &req.workdir {
        cmd.current_dir(dir);
    }

    let output = match req.timeout {
        Some(limit) => tokio::time::timeout(limit, cmd.output())
            .await
            .map_err(|_| ExecError::Timeout {
                program: req.program.clone(),
                secs: limit.as_secs(),
            })?,
        None => cmd.output().await,
    }
    .map_err(|source| ExecError::Spawn {
        program: req.program.clone(),
        source,
    })?;

    Ok(CommandOutcome {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        status: output.status,
    })
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
