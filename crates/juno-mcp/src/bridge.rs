// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Type conversions between juno's tool types and rmcp's MCP model types.
//!
//! Pure, stateless functions sitting at the seam between the [`juno_tools`]
//! crate and the MCP wire protocol so neither side needs to know about the
//! other.  Every juno tool produces plain text, so the conversion is a
//! straight text mapping.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool as McpTool};

use juno_tools::{ToolOutput, ToolSchema};

/// Convert a [`ToolSchema`] (juno) into an rmcp [`Tool`] descriptor.
///
/// The JSON Schema stored in [`ToolSchema::parameters`] is already valid
/// JSON Schema produced by each tool's `parameters_schema` implementation,
/// so it passes through as the `input_schema` without further processing.
pub fn schema_to_mcp_tool(schema: ToolSchema) -> McpTool {
    let input_schema: JsonObject = value_to_object(schema.parameters);
    McpTool::new(
        std::borrow::Cow::Owned(schema.name),
        std::borrow::Cow::Owned(schema.description),
        Arc::new(input_schema),
    )
}

/// Build a [`JsonObject`] (serde_json::Map) from a raw JSON Schema value.
///
/// MCP requires the schema to be a JSON object; if the provided value is
/// already an object it is used directly, otherwise it is wrapped in a
/// minimal `{"type":"object"}` envelope.
fn value_to_object(v: serde_json::Value) -> JsonObject {
    use serde_json::{Map, Value};
    match v {
        Value::Object(m) => m,
        other => {
            let mut m = Map::new();
            m.insert("type".to_string(), Value::String("object".to_string()));
            m.insert("value".to_string(), other);
            m
        }
    }
}

/// Convert a juno [`ToolOutput`] into an rmcp [`CallToolResult`].
///
/// The MCP `is_error` flag mirrors juno's [`ToolOutput::is_error`]; note
/// that expected-absent conditions (no report yet, class not found) are
/// *successful* outputs by design, so MCP clients see them as normal text.
pub fn output_to_call_result(output: ToolOutput) -> CallToolResult {
    let content = vec![Content::text(output.content)];
    if output.is_error {
        CallToolResult {
            content,
            is_error: Some(true),
            structured_content: None,
            meta: None,
        }
    } else {
        CallToolResult::success(content)
    }
}

// ─── Unit tests ───────────────────────────────────────────────────────────────
