//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single domain, `tools`: named, schema-described
//! callables exposed to MCP clients.

pub mod tools;
