//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use crate::domains::tools::clients::DEFAULT_ENTROPY_URL;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Outbound clients used by the tools.
    pub tools: ToolsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the tools' outbound HTTP clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// drand beacon consulted by `random_number`.
    pub entropy_url: String,

    /// User-Agent sent by `fetch_url` and the entropy client.
    pub user_agent: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            entropy_url: DEFAULT_ENTROPY_URL.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "powergpt".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_ENTROPY_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MCP_ENTROPY_URL") {
            config.tools.entropy_url = url;
        }

        if let Ok(user_agent) = std::env::var("MCP_USER_AGENT") {
            config.tools.user_agent = user_agent;
        }

        config
    }

    /// One-line description of the effective configuration, for startup logs.
    pub fn summary(&self) -> String {
        format!(
            "{} v{} ({}, entropy from {})",
            self.server.name,
            self.server.version,
            self.transport.description(),
            self.tools.entropy_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_entropy_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ENTROPY_URL", "http://localhost:9999/public/latest");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.entropy_url, "http://localhost:9999/public/latest");
        unsafe {
            std::env::remove_var("MCP_ENTROPY_URL");
        }
    }

    #[test]
    fn test_entropy_url_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_ENTROPY_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.entropy_url, DEFAULT_ENTROPY_URL);
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "calc-agent");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "calc-agent");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_summary_names_entropy_endpoint() {
        let mut config = Config::default();
        config.tools.entropy_url = "http://localhost:9999/public/latest".to_string();
        let summary = config.summary();
        assert!(summary.starts_with("powergpt v"));
        assert!(summary.contains("entropy from http://localhost:9999/public/latest"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "powergpt");
        assert_eq!(config.logging.level, "info");
        assert!(config.tools.user_agent.starts_with("powergpt_mcp_server/"));
    }
}
