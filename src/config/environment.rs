// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, .env loading, and typed storage URL parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Environment-based configuration management for production deployment

use anyhow::{bail, Context, Result};
use exercise_tracker_core::constants::{defaults, env_keys};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe storage backend location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// Process-local store (`memory:`)
    Memory,
    /// In-memory `SQLite` (`sqlite::memory:`)
    SQLiteMemory,
    /// `SQLite` database file (`sqlite:<path>`)
    SQLite {
        /// Database file path
        path: PathBuf,
    },
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error for an empty `SQLite` path or an unrecognised scheme
    pub fn parse_url(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "memory:" || s == "memory://" {
            return Ok(Self::Memory);
        }

        let Some(rest) = s.strip_prefix("sqlite:") else {
            bail!(
                "Unsupported database URL format: {s}. \
                 Supported formats: memory:, sqlite::memory:, sqlite:path/to/db.sqlite"
            );
        };

        let path_str = rest.strip_prefix("//").unwrap_or(rest);
        match path_str {
            ":memory:" => Ok(Self::SQLiteMemory),
            "" => bail!("SQLite database URL is missing a file path"),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::Memory => "memory:".to_owned(),
            Self::SQLiteMemory => "sqlite::memory:".to_owned(),
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
        }
    }

    /// Whether records are lost when the process exits
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Memory | Self::SQLiteMemory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/exercises.db"),
        }
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Backend location
    pub url: DatabaseUrl,
}

/// Cross-origin configuration for the browser UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Storage configuration
    pub database: DatabaseConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            database: DatabaseConfig {
                url: DatabaseUrl::default(),
            },
            cors: CorsConfig {
                allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            },
        }
    }
}

/// Load `.env` into the process environment if one is found
///
/// Returns the load failure so it can be logged once a subscriber exists.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    dotenvy::dotenv().err()
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads the process environment only; call [`load_dotenv`] first to pick
    /// up a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or
    /// `DATABASE_URL` uses an unsupported scheme
    pub fn from_env() -> Result<Self> {
        let http_port = env_var_or(env_keys::PORT, &defaults::HTTP_PORT.to_string())
            .parse()
            .context("Invalid PORT value")?;

        let database_url = DatabaseUrl::parse_url(&env_var_or(
            env_keys::DATABASE_URL,
            defaults::DATABASE_URL,
        ))
        .context("Invalid DATABASE_URL value")?;

        Ok(Self {
            host: env_var_or(env_keys::HOST, defaults::HOST),
            http_port,
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            database: DatabaseConfig { url: database_url },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_keys::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
        })
    }

    /// Startup warning for a production deployment on storage that does not
    /// survive a restart
    #[must_use]
    pub fn storage_warning(&self) -> Option<String> {
        (self.environment.is_production() && self.database.url.is_ephemeral()).then(|| {
            format!(
                "Production environment is using non-persistent storage ({})",
                self.database.url
            )
        })
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line human readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} bind={} database={} cors_origins={} log_level={}",
            self.environment,
            self.bind_address(),
            self.database.url,
            self.cors.allowed_origins,
            self.log_level
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
