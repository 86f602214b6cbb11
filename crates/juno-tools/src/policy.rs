// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Per-tool approval policy.
///
/// `Auto` tools only read state (coverage report, source files, `git status`).
/// `Ask` tools mutate the project under test or its repository: running the
/// Maven test cycle rewrites `target/`, and the git passthroughs stage,
/// commit, and push.  The MCP server's `--read-only` flag keeps `Ask` tools
/// out of the registry entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalPolicy {
    /// Safe to run without confirmation
    Auto,
    /// Mutating; excluded from read-only registries
    Ask,
}

impl ApprovalPolicy {
    pub fn is_mutating(self) -> bool {
        self == ApprovalPolicy::Ask
    }
}
