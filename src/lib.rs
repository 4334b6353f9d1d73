// ABOUTME: Main library entry point for the NutriCare clinical nutrition platform
// ABOUTME: Wires the pure engine to configuration, logging, snapshot storage, and the session controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriCare
//!
//! Clinical nutrition assessment built around a pure calculation engine.
//! The engine lives in `nutricare-engine` and never performs I/O; this crate
//! supplies the plumbing around it.
//!
//! ## Architecture
//!
//! - **Engine**: `nutricare_engine::compute` turns a `PatientProfile` into a `ResultSet`
//! - **Session**: `ConsultationSession` recomputes on every profile change
//! - **Snapshots**: visit-keyed `{inputs, results}` pairs behind the `SnapshotStore` trait
//! - **Config**: environment-driven settings for storage, logging and engine policy
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutricare::config::environment::ServerConfig;
//! use nutricare::database::{SnapshotStore, SqliteSnapshotStore};
//! use nutricare::errors::AppResult;
//! use nutricare::session::ConsultationSession;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let store = SqliteSnapshotStore::new(&config.database.url.to_connection_string()).await?;
//!
//!     let mut session = ConsultationSession::new("visit-42", config.engine.clone());
//!     session.update(|profile| {
//!         profile.height_cm = 170.0;
//!         profile.current_weight_kg = 70.0;
//!         profile.selected_weight_kg = 70.0;
//!     });
//!     store.save(&session.snapshot()).await?;
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Snapshot storage
pub mod database;

/// Error types re-exported from the core crate
pub mod errors;

/// Logging configuration and structured logging setup
pub mod logging;

/// Recompute-on-change consultation controller
pub mod session;

/// Persisted `{inputs, results}` pairs
pub mod snapshot;

pub use nutricare_core::models::PatientProfile;
pub use nutricare_engine::{compute, compute_with_config, EngineConfig, ResultSet};
