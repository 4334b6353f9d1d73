// ABOUTME: Snapshot commands for nutricare-cli
// ABOUTME: Save, show, list, and delete visit snapshots in the configured store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::load_profile;
use crate::helpers::display::{display_result_set, display_snapshot_header, display_visit_ids};
use nutricare::database::SnapshotStore;
use nutricare::errors::{AppError, AppResult};
use nutricare::snapshot::Snapshot;
use nutricare::EngineConfig;
use nutricare_engine::RequiredKcalSource;
use std::path::Path;
use tracing::{info, warn};

/// Compute a profile and store the snapshot under `visit_id`
pub async fn save(
    store: &impl SnapshotStore,
    engine: &EngineConfig,
    visit_id: String,
    profile_path: &Path,
    amputations: &[String],
) -> AppResult<()> {
    let profile = load_profile(profile_path, amputations).await?;
    let snapshot = Snapshot::capture(visit_id, profile, engine);
    store.save(&snapshot).await?;
    info!(visit_id = %snapshot.visit_id, "Snapshot stored");
    println!("Saved snapshot for visit {}", snapshot.visit_id);
    Ok(())
}

/// Print a stored snapshot
pub async fn show(
    store: &impl SnapshotStore,
    engine: &EngineConfig,
    visit_id: &str,
    json: bool,
) -> AppResult<()> {
    let snapshot = store
        .load(visit_id)
        .await?
        .ok_or_else(|| AppError::not_found("Snapshot").with_resource_id(visit_id))?;

    if !snapshot.is_current(engine) {
        warn!(
            visit_id,
            "Stored results differ from a fresh computation of the stored inputs"
        );
    }

    if json {
        println!("{}", snapshot.to_json()?);
    } else {
        display_snapshot_header(&snapshot);
        display_result_set(&snapshot.results, RequiredKcalSource::default());
    }
    Ok(())
}

/// Print all stored visit ids
pub async fn list(store: &impl SnapshotStore) -> AppResult<()> {
    let visit_ids = store.list_visit_ids().await?;
    display_visit_ids(&visit_ids);
    Ok(())
}

/// Delete a stored snapshot
pub async fn delete(store: &impl SnapshotStore, visit_id: &str) -> AppResult<()> {
    if !store.delete(visit_id).await? {
        return Err(AppError::not_found("Snapshot").with_resource_id(visit_id));
    }
    println!("Deleted snapshot for visit {visit_id}");
    Ok(())
}
