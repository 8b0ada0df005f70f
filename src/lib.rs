//! PowerGPT MCP Server Library
//!
//! An MCP (Model Context Protocol) server exposing a fixed set of tools to
//! LLM agents: arithmetic and number theory, true random numbers drawn from
//! the drand beacon, and reading web pages as markdown.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and the
//!   transports (STDIO, HTTP JSON-RPC and an SSE event stream)
//! - **domains::tools**: the tool registry, argument validation and the
//!   built-in tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use powergpt_mcp_server::{core::McpServer, core::Config, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::tools::{ToolRegistry, ToolResult};
