//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry.
//!
//! ## Tool Architecture
//!
//! Tools are registered once in a [`ToolRegistry`] when the server is built.
//! The rmcp `ToolRouter` (STDIO) and the HTTP front-ends both dispatch
//! through that same registry.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{Implementation, JsonObject, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error;
use crate::domains::tools::{
    FieldError, ToolError, ToolRegistry, ToolResult, ToolServices, build_tool_router,
};

const INSTRUCTIONS: &str = "A MCP agent with powerful tools to enhance LLM's capabilities: \
     arithmetic, number theory, true random numbers and reading web pages as markdown.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap: the registry and configuration are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools, read-only after construction.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> error::Result<Self> {
        let services = ToolServices::from_config(&config.tools)?;
        Self::with_services(config, services)
    }

    /// Create a server whose tools use the given collaborators.
    pub fn with_services(config: Config, services: ToolServices) -> error::Result<Self> {
        let registry = Arc::new(ToolRegistry::builtin(&services)?);
        info!("Registered {} tools", registry.len());

        Ok(Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            config: Arc::new(config),
            registry,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .list_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// A missing or `null` argument value is treated as an empty object.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<ToolResult, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            _ => {
                return Err(ToolError::validation(
                    name,
                    vec![FieldError::new("arguments", "expected an object")],
                ));
            }
        };

        self.registry.dispatch(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
