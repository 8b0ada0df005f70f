//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations and the built-in tool table
//! - `clients/` - Outbound collaborators (drand, page fetching, article extraction)
//! - `definition.rs` - `ToolDefinition`: name, description, schema, handler
//! - `registry.rs` - Central tool registry and dispatch
//! - `validation.rs` - Compiled parameter schemas (jsonschema)
//! - `router.rs` - rmcp ToolRouter built from the registry for STDIO transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Write a parameters struct deriving `Deserialize` and `JsonSchema`
//! 2. Write a handler returning a `ToolResult`
//! 3. Add a `ToolDefinition` to `definitions::builtin_tools`
//!
//! Both transports pick it up from the registry.

pub mod clients;
mod definition;
pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;
mod validation;

pub use clients::ToolServices;
pub use definition::ToolDefinition;
pub use error::{FieldError, ToolError};
pub use handlers::{BoxedHandler, ToolResult};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
