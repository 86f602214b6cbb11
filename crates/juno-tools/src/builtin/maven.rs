// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use juno_config::{ProjectConfig, ToolsConfig};

use crate::exec::{run_command, CommandRequest};
use crate::policy::ApprovalPolicy;
use crate::tool::{Tool, ToolCall, ToolOutput};

/// Runs the Maven test cycle (`clean test -B`) in the configured codebase
/// directory and returns the tail of the output.
///
/// The dominant cost of this call is the build itself; with no timeout
/// configured a hung Maven hangs the call, which matches how the tool is
/// meant to be used (the client owns its own transport-level timeout).
pub struct RunMavenTestsTool {
    pub project: ProjectConfig,
    pub tools: ToolsConfig,
}

impl RunMavenTestsTool {
    pub fn new(project: ProjectConfig, tools: ToolsConfig) -> Self {
        Self { project, tools }
    }
}

#[async_trait]
impl Tool for RunMavenTestsTool {
    fn name(&self) -> &str {
        "run_maven_tests"
    }

    fn description(&self) -> &str {
        "Run 'mvn clean test -B' in the project codebase and return the tail \
         of the build output. This compiles the project and executes the full \
         test suite, so it can take a while. A failed build is reported as an \
         error result; the text is the last ~2000 characters of stdout (or \
         stderr when stdout is empty), so look near the end for the Maven \
         summary and failing test names."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false
        })
    }

    fn default_policy(&self) -> ApprovalPolicy {
        ApprovalPolicy::Ask
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let mvn = self.project.maven_executable();
        debug!(mvn = %mvn, codebase = %self.project.codebase_dir.display(), "run_maven_tests tool");

        let req = CommandRequest::new(mvn, &["clean", "test", "-B"])
            .workdir(&self.project.codebase_dir)
            .timeout_secs(self.tools.maven_timeout_secs);

        match run_command(&req).await {
            Ok(out) => {
                let tail = if !out.stdout.is_empty() {
                    tail_chars(&out.stdout, self.tools.output_tail_chars)
                } else {
                    tail_chars(&out.stderr, self.tools.output_tail_chars)
                };
                if out.success() {
                    ToolOutput::ok(&call.id, tail)
                } else {
                    warn!(code = out.code(), "maven test run failed");
                    ToolOutput::err(&call.id, tail)
                }
            }
            Err(e) => ToolOutput::err(&call.id, format!("Error running mvn test: {e}")),
        }
    }
}

/// Last `n` characters of `s`, whole characters only.
pub(crate) fn tail_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    if count <= n {
        s.to_string()
    } else {
        s.chars().skip(count - n).collect()
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
