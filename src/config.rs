//! Server configuration parsed from command-line flags and environment.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use thiserror::Error;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration for the task server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "taskapp-server", about = "Task workflow web server")]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "TASKAPP_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// `PostgreSQL` connection URL; tasks are kept in memory when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKAPP_POOL_SIZE", default_value_t = 4)]
    pub pool_size: u32,

    /// Log output format.
    #[arg(long, env = "TASKAPP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Create the task table on start-up when it is missing.
    #[arg(long, env = "TASKAPP_APPLY_SCHEMA")]
    pub apply_schema: bool,
}

/// Configuration values rejected by [`ServerConfig::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The pool must hold at least one connection.
    #[error("pool size must be at least 1")]
    ZeroPoolSize,
    /// A database URL was given but is blank.
    #[error("database URL must not be blank")]
    BlankDatabaseUrl,
}

impl ServerConfig {
    /// Checks constraints that flag parsing cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        if self
            .database_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ConfigError::BlankDatabaseUrl);
        }
        Ok(())
    }
}
