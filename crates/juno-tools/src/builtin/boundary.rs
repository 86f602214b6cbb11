// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::policy::ApprovalPolicy;
use crate::tool::{Tool, ToolCall, ToolOutput};

/// The fixed boundary-testing checklist.  Input-independent by design: the
/// description only appears in the header line, verbatim.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "1. Typical in-range values",
        &["Use normal, expected inputs to confirm the main behavior."],
    ),
    (
        "2. Lower boundary",
        &[
            "Inputs exactly at the minimum allowed (e.g., min, 0, empty string).",
            "Check that the method still behaves correctly and does not throw.",
        ],
    ),
    (
        "3. Just below lower boundary",
        &[
            "Inputs slightly below the allowed minimum (e.g., min-1, -1).",
            "Expect an exception or clear error behavior if the API specifies it.",
        ],
    ),
    (
        "4. Upper boundary",
        &[
            "Inputs exactly at the maximum allowed (e.g., max, length-1).",
            "Ensure no off-by-one errors.",
        ],
    ),
    (
        "5. Just above upper boundary",
        &[
            "Inputs slightly above the maximum allowed (e.g., max+1, length).",
            "Expect failure or a well-defined response.",
        ],
    ),
    (
        "6. Null / empty / default values",
        &[
            "Null arguments, empty collections, empty strings, zero-length ranges.",
            "Check whether the method allows them or throws.",
        ],
    ),
    (
        "7. Degenerate / special cases",
        &[
            "low == high, start == end, negative ranges, NaN, infinities.",
            "For comparisons, equal values and reversed bounds.",
        ],
    ),
    (
        "8. Large inputs",
        &[
            "Very large numbers, long strings, big collections.",
            "Look for overflow, performance, or memory issues.",
        ],
    ),
    (
        "9. Invalid combinations",
        &[
            "Start > end, low > high, incompatible flags.",
            "Ensure clear error handling or documented behavior.",
        ],
    ),
];

pub struct SuggestBoundaryTestsTool;

#[async_trait]
impl Tool for SuggestBoundaryTestsTool {
    fn name(&self) -> &str {
        "suggest_boundary_tests"
    }

    fn description(&self) -> &str {
        "Suggest boundary and edge-case test ideas for a method or behavior. \
         Input is a free-text description such as 'Range.between(low, high) \
         with integers' or 'StringUtils.substring(str, start, end)'. The \
         response is a fixed nine-category checklist to design concrete \
         JUnit tests from; the description is echoed in the header."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "description": {
                    "type": "string",
                    "description": "Method or behavior to design boundary tests for"
                }
            },
            "required": ["description"],
            "additionalProperties": false
        })
    }

    fn default_policy(&self) -> ApprovalPolicy {
        ApprovalPolicy::Auto
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let description = call
            .args
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        ToolOutput::ok(&call.id, render_checklist(description))
    }
}

pub(crate) fn render_checklist(description: &str) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Boundary test ideas for: {description}"));
    lines.push(String::new());
    for (title, guidance) in CATEGORIES {
        lines.push(title.to_string());
        for g in *guidance {
            lines.push(format!("   - {g}"));
        }
        lines.push(String::new());
    }
    lines.push("Use these categories to design concrete JUnit tests for this API.".to_string());
    lines.join("\n")
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
