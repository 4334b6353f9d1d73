// ABOUTME: Compute command for nutricare-cli
// ABOUTME: Runs the engine on a profile file and prints the result set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::load_profile;
use crate::helpers::display::{display_profile_summary, display_result_set};
use nutricare::errors::AppResult;
use nutricare::{compute_with_config, EngineConfig};
use nutricare_engine::RequiredKcalSource;
use std::path::Path;
use tracing::info;

/// Compute and print an assessment
pub async fn run(
    engine: &EngineConfig,
    profile_path: &Path,
    amputations: &[String],
    json: bool,
    source: RequiredKcalSource,
) -> AppResult<()> {
    let profile = load_profile(profile_path, amputations).await?;
    info!("Computing assessment for {}", profile_path.display());
    let results = compute_with_config(&profile, engine);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display_profile_summary(&profile);
        display_result_set(&results, source);
    }
    Ok(())
}
