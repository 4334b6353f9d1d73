// ABOUTME: Snapshot persistence abstraction keyed by visit identifier
// ABOUTME: Async repository trait with a SQLite implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Snapshot Storage
//!
//! The engine never touches storage. Callers persist `{inputs, results}`
//! pairs through [`SnapshotStore`] and may recompute results from the stored
//! inputs at any time.

/// `SQLite` snapshot store
pub mod sqlite;

pub use sqlite::SqliteSnapshotStore;

use crate::errors::AppResult;
use crate::snapshot::Snapshot;
use async_trait::async_trait;

/// Visit-keyed snapshot repository
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Insert or replace the snapshot for its visit
    async fn save(&self, snapshot: &Snapshot) -> AppResult<()>;

    /// Fetch the snapshot for a visit
    async fn load(&self, visit_id: &str) -> AppResult<Option<Snapshot>>;

    /// Remove the snapshot for a visit, returning whether one existed
    async fn delete(&self, visit_id: &str) -> AppResult<bool>;

    /// All stored visit ids, most recently saved first
    async fn list_visit_ids(&self) -> AppResult<Vec<String>>;
}
