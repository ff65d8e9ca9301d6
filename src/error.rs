//! Error types for pglog
//!
//! This module defines all error types used throughout the pglog sink.
//! It provides a unified error handling system with proper error chaining and
//! detailed error messages for debugging.

use thiserror::Error;

/// Main error type for pglog operations
#[derive(Error, Debug)]
pub enum PglogError {
    /// Configuration-related errors (URL scheme, identifiers, config fields)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 建立数据库连接失败
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// SQL execution or commit errors at emission time
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 释放连接时发生的错误
    #[error("Release error: {0}")]
    ReleaseError(String),

    /// I/O errors (configuration file reads)
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlError {
        #[from]
        source: toml::de::Error,
    },
}

/// Result type alias for pglog operations
pub type Result<T> = std::result::Result<T, PglogError>;

impl PglogError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new connection error
    pub fn connection<S: Into<String>>(msg: S) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a new database error
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::DatabaseError(msg.into())
    }

    /// Create a new release error
    pub fn release<S: Into<String>>(msg: S) -> Self {
        Self::ReleaseError(msg.into())
    }

    /// Get the error category for logging purposes
    pub fn category(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "config",
            Self::ConnectionError(_) => "connection",
            Self::DatabaseError(_) => "database",
            Self::ReleaseError(_) => "release",
            Self::IoError { .. } => "io",
            Self::TomlError { .. } => "toml",
        }
    }
}
