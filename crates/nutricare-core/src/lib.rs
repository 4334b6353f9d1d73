// ABOUTME: Core types and constants for the NutriCare clinical nutrition platform
// ABOUTME: Foundation crate with error handling, patient input models, and clinical constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriCare Core
//!
//! Foundation crate providing shared types and constants for the NutriCare
//! clinical nutrition engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Clinical cut points and coefficients organized by domain
//! - **models**: Patient input records (`PatientProfile`) and their enumerations

/// Unified error handling system with standard error codes
pub mod errors;

/// Clinical constants (cut points, multipliers, reference tables) organized by domain
pub mod constants;

/// Patient input models (profile, severities, amputation segments)
pub mod models;
