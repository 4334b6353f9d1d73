// ABOUTME: SQLite implementation of the snapshot store using sqlx
// ABOUTME: Inputs and results are stored as JSON text in the nutrition_snapshots table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SnapshotStore;
use crate::config::environment::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use crate::snapshot::Snapshot;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tokio::fs;
use tracing::{debug, info};

/// `SQLite`-backed [`SnapshotStore`]
#[derive(Clone)]
pub struct SqliteSnapshotStore {
    pool: SqlitePool,
}

impl SqliteSnapshotStore {
    /// Connect (creating the file and its directory if needed) and migrate
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the directory cannot be
    /// created, or the connection or migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let url = DatabaseUrl::parse_url(database_url)?;
        let pool = match &url {
            DatabaseUrl::Memory => {
                // Each in-memory connection is its own database
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .connect("sqlite::memory:")
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::storage(format!(
                            "Failed to create database directory {}",
                            parent.display()
                        ))
                        .with_source(e)
                    })?;
                }
                let connection_options = format!("{}?mode=rwc", url.to_connection_string());
                SqlitePoolOptions::new().connect(&connection_options).await?
            }
        };

        info!("Connected to snapshot database: {url}");
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Wrap an existing pool; the caller is responsible for [`Self::migrate`]
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the snapshot table
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_snapshots (
                visit_id TEXT PRIMARY KEY,
                inputs TEXT NOT NULL,
                results TEXT NOT NULL,
                saved_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_nutrition_snapshots_saved_at ON nutrition_snapshots(saved_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_snapshot(row: &SqliteRow) -> AppResult<Snapshot> {
        let visit_id: String = row.try_get("visit_id")?;
        let inputs: String = row.try_get("inputs")?;
        let results: String = row.try_get("results")?;
        let saved_at: String = row.try_get("saved_at")?;

        let saved_at = DateTime::parse_from_rfc3339(&saved_at)
            .map_err(|e| {
                AppError::serialization(format!("Invalid saved_at timestamp '{saved_at}'"))
                    .with_resource_id(visit_id.clone())
                    .with_source(e)
            })?
            .with_timezone(&Utc);
        let inputs = serde_json::from_str(&inputs).map_err(|e| {
            AppError::serialization("Stored inputs are not a patient profile")
                .with_resource_id(visit_id.clone())
                .with_source(e)
        })?;
        let results = serde_json::from_str(&results).map_err(|e| {
            AppError::serialization("Stored results are not a result set")
                .with_resource_id(visit_id.clone())
                .with_source(e)
        })?;

        Ok(Snapshot {
            visit_id,
            inputs,
            results,
            saved_at,
        })
    }
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    async fn save(&self, snapshot: &Snapshot) -> AppResult<()> {
        let inputs = serde_json::to_string(&snapshot.inputs)?;
        let results = serde_json::to_string(&snapshot.results)?;
        let saved_at = snapshot
            .saved_at
            .to_rfc3339_opts(SecondsFormat::Nanos, true);

        sqlx::query(
            r"
            INSERT INTO nutrition_snapshots (visit_id, inputs, results, saved_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(visit_id) DO UPDATE SET
                inputs = excluded.inputs,
                results = excluded.results,
                saved_at = excluded.saved_at
            ",
        )
        .bind(&snapshot.visit_id)
        .bind(inputs)
        .bind(results)
        .bind(saved_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to save snapshot: {e}"))
                .with_resource_id(snapshot.visit_id.clone())
                .with_source(e)
        })?;

        debug!(visit_id = %snapshot.visit_id, "Snapshot saved");
        Ok(())
    }

    async fn load(&self, visit_id: &str) -> AppResult<Option<Snapshot>> {
        let row = sqlx::query(
            "SELECT visit_id, inputs, results, saved_at FROM nutrition_snapshots WHERE visit_id = $1",
        )
        .bind(visit_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_snapshot).transpose()
    }

    async fn delete(&self, visit_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM nutrition_snapshots WHERE visit_id = $1")
            .bind(visit_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_visit_ids(&self) -> AppResult<Vec<String>> {
        let rows = sqlx::query(
            "SELECT visit_id FROM nutrition_snapshots ORDER BY saved_at DESC, visit_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("visit_id").map_err(AppError::from))
            .collect()
    }
}
