//! Tool-specific error types.
//!
//! These are the dispatcher's structural failures. Domain failures such as a
//! division by zero are not errors here: they travel as
//! [`ToolResult::Failure`](super::ToolResult::Failure).

use rmcp::ErrorData as McpError;
use serde::Serialize;
use thiserror::Error;

/// A single argument that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending argument.
    pub field: String,

    /// What is wrong with it.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors that can occur while registering or dispatching tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// A tool's parameter schema could not be compiled.
    #[error("Invalid parameter schema for {tool}: {message}")]
    InvalidSchema { tool: String, message: String },

    /// The arguments do not satisfy the tool's parameter schema.
    #[error("Invalid arguments for {tool}: {}", join_fields(.fields))]
    Validation {
        tool: String,
        fields: Vec<FieldError>,
    },
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "duplicate tool" error.
    pub fn duplicate_tool(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    /// Create a new "invalid schema" error.
    pub fn invalid_schema(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a new validation error listing every offending field.
    pub fn validation(tool: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self::Validation {
            tool: tool.into(),
            fields,
        }
    }

    /// The offending fields, if this is a validation error.
    pub fn fields(&self) -> &[FieldError] {
        match self {
            Self::Validation { fields, .. } => fields,
            _ => &[],
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let data = match &err {
            ToolError::Validation { fields, .. } => Some(serde_json::json!({ "fields": fields })),
            ToolError::InvalidSchema { .. } => return McpError::internal_error(err.to_string(), None),
            _ => None,
        };
        McpError::invalid_params(err.to_string(), data)
    }
}
