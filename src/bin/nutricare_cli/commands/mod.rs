// ABOUTME: Command modules for nutricare-cli
// ABOUTME: Profile loading shared by the compute and snapshot commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod compute;
pub mod snapshot;

use nutricare::errors::{AppError, AppResult};
use nutricare::PatientProfile;
use nutricare_core::models::amputation_percent_from_codes;
use std::path::Path;
use tokio::fs;

/// Read a JSON patient profile; omitted fields take their defaults
///
/// Non-empty `amputations` segment codes replace the file's `amputation_percent`.
pub async fn load_profile(path: &Path, amputations: &[String]) -> AppResult<PatientProfile> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read profile {}", path.display())).with_source(e)
    })?;
    let mut profile: PatientProfile = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!("Profile {} is not valid JSON: {e}", path.display()))
            .with_source(e)
    })?;
    if !amputations.is_empty() {
        profile.amputation_percent = amputation_percent_from_codes(amputations)?;
    }
    Ok(profile)
}
