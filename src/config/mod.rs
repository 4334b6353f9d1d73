// ABOUTME: Configuration management module for the NutriCare binaries
// ABOUTME: Environment-driven storage, logging, and engine settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: database location, logging, and engine policy from environment variables
//!
//! Engine policy itself (`EngineConfig`) is defined next to the engine so that
//! the engine crate has no dependency on this one.

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseConfig, DatabaseUrl, ServerConfig};
pub use nutricare_engine::config::{ConfigError, EngineConfig};
