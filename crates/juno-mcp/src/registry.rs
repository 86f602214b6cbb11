// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Default tool registry for the juno MCP server.
//!
//! All eight tools are exposed by default.  Two server-side filters narrow
//! the set: an explicit comma-separated name list (`juno serve --tools …`)
//! and read-only mode (`--read-only`), which drops every tool whose policy
//! is [`ApprovalPolicy::Ask`] — the Maven runner and the git tools that
//! stage, commit, or push.

use std::collections::HashSet;

use juno_config::Config;
use juno_tools::{
    ApprovalPolicy, GitAddAllTool, GitCommitTool, GitPushTool, GitStatusTool, RunMavenTestsTool,
    SuggestBoundaryTestsTool, SuggestJunitTestsTool, SummarizeCoverageTool, ToolRegistry,
};

/// Tool names included in the default set, sorted.
///
/// These correspond exactly to the values returned by each tool's
/// `Tool::name()` implementation.  Clients can use this list to discover
/// what `juno serve` exposes by default.
pub const DEFAULT_TOOL_NAMES: &[&str] = &[
    "git_add_all",
    "git_commit",
    "git_push",
    "git_status",
    "run_maven_tests",
    "suggest_boundary_tests",
    "suggest_junit_tests",
    "summarize_coverage",
];

/// Server-side registry filters.
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Comma-separated tool names to include; `None` or `"all"` includes
    /// everything.  Unknown names are silently ignored.
    pub allowed_names: Option<String>,
    /// Exclude mutating tools (policy [`ApprovalPolicy::Ask`]).
    pub read_only: bool,
}

/// Build a [`ToolRegistry`] populated from `config`, honouring `opts`.
pub fn build_registry(config: &Config, opts: &RegistryOptions) -> ToolRegistry {
    let filter: Option<HashSet<&str>> = match opts.allowed_names.as_deref() {
        None | Some("all") => None,
        Some(list) => Some(list.split(',').map(|s| s.trim()).collect()),
    };

    let allow = |name: &str, policy: ApprovalPolicy| -> bool {
        if opts.read_only && policy.is_mutating() {
            return false;
        }
        match &filter {
            None => true,
            Some(set) => set.contains(name),
        }
    };

    let project = config.project.clone();
    let tools = config.tools.clone();

    let mut reg = ToolRegistry::new();

    if allow("run_maven_tests", ApprovalPolicy::Ask) {
        reg.register(RunMavenTestsTool::new(project.clone(), tools.clone()));
    }
    if allow("summarize_coverage", ApprovalPolicy::Auto) {
        reg.register(SummarizeCoverageTool::new(project.clone()));
    }
    if allow("suggest_junit_tests", ApprovalPolicy::Auto) {
        reg.register(SuggestJunitTestsTool::new(project.clone()));
    }
    if allow("suggest_boundary_tests", ApprovalPolicy::Auto) {
        reg.register(SuggestBoundaryTestsTool);
    }
    if allow("git_status", ApprovalPolicy::Auto) {
        reg.register(GitStatusTool {
            repo_dir: project.repo_dir.clone(),
        });
    }
    if allow("git_add_all", ApprovalPolicy::Ask) {
        reg.register(GitAddAllTool {
            repo_dir: project.repo_dir.clone(),
        });
    }
    if allow("git_commit", ApprovalPolicy::Ask) {
        reg.register(GitCommitTool {
            repo_dir: project.repo_dir.clone(),
        });
    }
    if allow("git_push", ApprovalPolicy::Ask) {
        reg.register(GitPushTool {
            repo_dir: project.repo_dir,
            default_remote: tools.git_remote,
            default_branch: tools.git_branch,
        });
    }

    reg
}

// ─── Unit tests ───────────────────────────────────────────────────────────────
