// ABOUTME: Environment-based configuration for storage, logging, and engine policy
// ABOUTME: Type-safe database URL parsing with SQLite file and in-memory variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use nutricare_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use tracing::info;

/// Default on-disk snapshot database
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/nutricare.db";

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error for non-SQLite URLs or an empty path
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            return Err(AppError::config(format!(
                "Unsupported database URL '{s}': only SQLite is supported"
            )));
        }
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        match path_str {
            ":memory:" => Ok(Self::Memory),
            "" => Err(AppError::config("Database URL has an empty path")),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/nutricare.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Snapshot storage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

impl DatabaseConfig {
    /// Load database configuration from `DATABASE_URL`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a usable `SQLite` location
    pub fn from_env() -> AppResult<Self> {
        let raw = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        Ok(Self {
            url: DatabaseUrl::parse_url(&raw)?,
        })
    }
}

/// Process-wide configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Snapshot storage
    pub database: DatabaseConfig,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Engine policy multipliers
    pub engine: EngineConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is unusable or a `NUTRICARE_*`
    /// override fails to parse or validate
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        let engine = EngineConfig::load()
            .map_err(|e| AppError::config(format!("Invalid engine configuration: {e}")))?;
        let config = Self {
            database: DatabaseConfig::from_env()?,
            logging: LoggingConfig::from_env(),
            engine,
        };
        info!(database = %config.database.url, "Configuration loaded");
        Ok(config)
    }

    /// Replace the database location (CLI `--database-url`)
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a usable `SQLite` location
    pub fn with_database_url(mut self, url: &str) -> AppResult<Self> {
        self.database.url = DatabaseUrl::parse_url(url)?;
        Ok(self)
    }
}
