// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Thin git passthroughs: run the command in the configured repo, hand the
//! raw output back.  No repository state is inspected or validated beyond
//! what git itself reports.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::exec::{run_command, CommandOutcome, CommandRequest, ExecError};
use crate::policy::ApprovalPolicy;
use crate::tool::{Tool, ToolCall, ToolOutput};

async fn run_git(repo: &Path, args: &[&str]) -> Result<CommandOutcome, ExecError> {
    let repo_str = repo.to_string_lossy();
    let mut full: Vec<&str> = vec!["-C", &repo_str];
    full.extend_from_slice(args);
    debug!(repo = %repo.display(), args = ?args, "git tool");
    run_command(&CommandRequest::new("git", &full)).await
}

/// stdout when non-empty, else stderr (git writes hints and errors there).
fn stdout_or_stderr(out: CommandOutcome) -> String {
    if !out.stdout.is_empty() {
        out.stdout
    } else {
        out.stderr
    }
}

pub struct GitStatusTool {
    pub repo_dir: PathBuf,
}

#[async_trait]
impl Tool for GitStatusTool {
    fn name(&self) -> &str {
        "git_status"
    }

    fn description(&self) -> &str {
        "Run 'git status' in the project repository and return the output."
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {}, "additionalProperties": false })
    }

    fn default_policy(&self) -> ApprovalPolicy {
        ApprovalPolicy::Auto
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        match run_git(&self.repo_dir, &["status"]).await {
            Ok(out) => ToolOutput::ok(&call.id, stdout_or_stderr(out)),
            Err(e) => ToolOutput::err(&call.id, format!("Error running git status: {e}")),
        }
    }
}

pub struct GitAddAllTool {
    pub repo_dir: PathBuf,
}

#[async_trait]
impl Tool for GitAddAllTool {
    fn name(&self) -> &str {
        "git_add_all"
    }

    fn description(&self) -> &str {
        "Run 'git add -A' in the project repository, staging every change."
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {}, "additionalProperties": false })
    }

    fn default_policy(&self) -> ApprovalPolicy {
        ApprovalPolicy::Ask
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        match run_git(&self.repo_dir, &["add", "-A"]).await {
            Ok(out) => {
                // git add is silent on success; say so instead of returning
                // an empty response.
                let text = stdout_or_stderr(out);
                if text.is_empty() {
                    ToolOutput::ok(&call.id, "git add -A completed.")
                } else {
                    ToolOutput::ok(&call.id, text)
                }
            }
            Err(e) => ToolOutput::err(&call.id, format!("Error running git add -A: {e}")),
        }
    }
}

pub struct GitCommitTool {
    pub repo_dir: PathBuf,
}

#[async_trait]
impl Tool for GitCommitTool {
    fn name(&self) -> &str {
        "git_commit"
    }

    fn description(&self) -> &str {
        "Run 'git commit -m <message>' in the project repository."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Commit message"
                }
            },
            "required": ["message"],
            "additionalProperties": false
        })
    }

    fn default_policy(&self) -> ApprovalPolicy {
        ApprovalPolicy::Ask
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let message = match call.args.get("message").and_then(|v| v.as_str()) {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => return ToolOutput::err(&call.id, "missing 'message' argument"),
        };
        match run_git(&self.repo_dir, &["commit", "-m", &message]).await {
            Ok(out) => ToolOutput::ok(&call.id, stdout_or_stderr(out)),
            Err(e) => ToolOutput::err(&call.id, format!("Error running git commit: {e}")),
        }
    }
}

pub struct GitPushTool {
    pub repo_dir: PathBuf,
    pub default_remote: String,
    pub default_branch: String,
}

#[async_trait]
impl Tool for GitPushTool {
    fn name(&self) -> &str {
        "git_push"
    }

    fn description(&self) -> &str {
        "Run 'git push <remote> <branch>' in the project repository. Remote \
         and branch default to the configured values (origin/main unless \
         overridden). Fails gracefully when no remote is configured."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "remote": {
                    "type": "string",
                    "description": "Remote to push to (default from config, usually 'origin')"
                },
                "branch": {
                    "type": "string",
                    "description": "Branch to push (default from config, usually 'main')"
                }
            },
            "additionalProperties": false
        })
    }

    fn default_policy(&self) -> ApprovalPolicy {
        ApprovalPolicy::Ask
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let remote = call
            .args
            .get("remote")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.default_remote)
            .to_string();
        let branch = call
            .args
            .get("branch")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.default_branch)
            .to_string();
        match run_git(&self.repo_dir, &["push", &remote, &branch]).await {
            Ok(out) => ToolOutput::ok(&call.id, stdout_or_stderr(out)),
            Err(e) => ToolOutput::err(&call.id, format!("Error running git push: {e}")),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
