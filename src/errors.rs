// ABOUTME: Unified error handling re-exported from nutricare-core
// ABOUTME: Single AppError/ErrorCode vocabulary shared by storage, session, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `nutricare-core` so that every crate in the
//! workspace reports failures the same way. Storage errors from `sqlx` and
//! payload errors from `serde_json` convert into [`AppError`] via `?`.

pub use nutricare_core::errors::{AppError, AppResult, ErrorCode};
