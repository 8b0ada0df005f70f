//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools, built once at startup
//! - Tool metadata for listing (discovery)
//! - Dispatch: lookup, argument validation, then handler execution

use futures::FutureExt;
use rmcp::model::{JsonObject, Tool};
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error, instrument, warn};

use super::clients::ToolServices;
use super::definition::ToolDefinition;
use super::definitions::builtin_tools;
use super::error::{FieldError, ToolError};
use super::handlers::ToolResult;
use super::validation::ArgumentValidator;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - maps tool names to their definitions.
///
/// Populated before any dispatch happens and read-only afterwards, so it can
/// be shared behind an `Arc` by every transport.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, RegisteredTool>,
}

/// A definition together with its compiled parameter schema.
#[derive(Debug)]
struct RegisteredTool {
    definition: ToolDefinition,
    validator: ArgumentValidator,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in tool.
    pub fn builtin(services: &ToolServices) -> Result<Self, ToolError> {
        let mut registry = Self::new();
        for definition in builtin_tools(services) {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Add a tool. Names must be unique and the parameter schema must compile.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), ToolError> {
        if self.tools.contains_key(definition.name()) {
            return Err(ToolError::duplicate_tool(definition.name()));
        }
        let validator = ArgumentValidator::compile(definition.input_schema())
            .map_err(|message| ToolError::invalid_schema(definition.name(), message))?;

        debug!("Registered tool: {}", definition.name());
        self.tools.insert(
            definition.name().to_string(),
            RegisteredTool {
                definition,
                validator,
            },
        );
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name).map(|tool| &tool.definition)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values().map(|tool| &tool.definition)
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.definitions().map(ToolDefinition::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Dispatch a tool call.
    ///
    /// Unknown names and invalid arguments are errors; everything that
    /// happens inside the handler, panics included, ends up in the returned
    /// [`ToolResult`].
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> Result<ToolResult, ToolError> {
        let RegisteredTool {
            definition,
            validator,
        } = self.tools.get(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::unknown_tool(name)
        })?;

        if let Err(fields) = validator.validate(&arguments) {
            warn!("Rejected arguments for {}: {} field(s)", name, fields.len());
            return Err(ToolError::validation(name, fields));
        }

        let call = definition
            .bind(arguments)
            .map_err(|e| ToolError::validation(name, vec![FieldError::new("arguments", e.to_string())]))?;

        let result = AssertUnwindSafe(call).catch_unwind().await.unwrap_or_else(|_| {
            error!("Tool {} panicked", name);
            ToolResult::failure(format!("Error: Tool {} failed unexpectedly", name))
        });

        debug!(success = result.is_success(), "Tool call finished");
        Ok(result)
    }
}
