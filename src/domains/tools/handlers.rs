//! Tool handler plumbing.
//!
//! Every tool answers with a [`ToolResult`], a text envelope that is either a
//! success or a human-readable failure. Handlers never return `Err`: domain
//! problems (division by zero, unreachable pages, ...) are failures, not
//! faults.

use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use std::sync::Arc;

/// Output of a tool execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum ToolResult {
    /// The tool produced its answer.
    Success(String),

    /// The tool could not produce an answer; the text says why.
    Failure(String),
}

impl ToolResult {
    /// Create a successful tool result.
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    /// Create a failed tool result.
    pub fn failure(text: impl Into<String>) -> Self {
        Self::Failure(text.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The text carried by either variant.
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }
}

/// Both variants render as plain text content; clients read failures from
/// the text itself.
impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        CallToolResult::success(vec![Content::text(result.into_text())])
    }
}

/// A type-erased tool handler.
///
/// Calling it binds the raw arguments to the tool's parameter type. A binding
/// failure is reported before any handler code runs; on success the returned
/// future performs the actual work.
pub type BoxedHandler = Arc<
    dyn Fn(JsonObject) -> Result<BoxFuture<'static, ToolResult>, serde_json::Error> + Send + Sync,
>;
