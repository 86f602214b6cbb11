// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Where the Maven project under test lives and how it is laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory containing the project's `pom.xml`.  Relative paths are
    /// resolved against the process working directory.
    pub codebase_dir: PathBuf,
    /// Java source root inside the codebase, in Maven's standard layout.
    pub source_root: PathBuf,
    /// Git working tree for the version-control passthrough tools.  This is
    /// usually the directory *containing* `codebase_dir`, so commits pick up
    /// generated tests alongside the project under test.
    pub repo_dir: PathBuf,
    /// Override the Maven executable.  When unset, `mvn.cmd` is used on
    /// Windows and `mvn` everywhere else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven_executable: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            codebase_dir: PathBuf::from("codebase"),
            source_root: PathBuf::from("src/main/java"),
            repo_dir: PathBuf::from("."),
            maven_executable: None,
        }
    }
}

impl ProjectConfig {
    /// Resolved Maven executable name for the host platform.
    pub fn maven_executable(&self) -> &str {
        match &self.maven_executable {
            Some(exe) => exe.as_str(),
            None if cfg!(windows) => "mvn.cmd",
            None => "mvn",
        }
    }

    /// JaCoCo XML report locations, probed in order.  The first path is
    /// where the maven jacoco plugin writes its site report; the second is
    /// a fallback some plugin configurations use.
    pub fn jacoco_report_candidates(&self) -> Vec<PathBuf> {
        vec![
            self.codebase_dir.join("target/site/jacoco/jacoco.xml"),
            self.codebase_dir.join("target/jacoco.xml"),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// How many trailing characters of build output a tool call returns.
    pub output_tail_chars: usize,
    /// Timeout in seconds for a Maven run.  None means wait forever; a
    /// full `clean test` on a large project can legitimately take minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven_timeout_secs: Option<u64>,
    /// Default remote for `git_push`.
    pub git_remote: String,
    /// Default branch for `git_push`.
    pub git_branch: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            output_tail_chars: 2000,
            maven_timeout_secs: None,
            git_remote: "origin".to_string(),
            git_branch: "main".to_string(),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
