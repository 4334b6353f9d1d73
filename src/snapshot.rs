// ABOUTME: Visit snapshot pairing the raw inputs with the results computed from them
// ABOUTME: JSON encoding for storage and recomputation against the current engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use nutricare_core::models::PatientProfile;
use nutricare_engine::{compute_with_config, EngineConfig, ResultSet};
use serde::{Deserialize, Serialize};

/// Inputs and results of one visit, as persisted
///
/// The inputs are authoritative: results can always be rebuilt from them with
/// [`Snapshot::recompute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Consultation or visit identifier
    pub visit_id: String,
    /// Raw profile as entered
    pub inputs: PatientProfile,
    /// Result set computed from `inputs`
    pub results: ResultSet,
    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,
}

impl Snapshot {
    /// Build a snapshot from already-computed results
    #[must_use]
    pub fn new(visit_id: impl Into<String>, inputs: PatientProfile, results: ResultSet) -> Self {
        Self {
            visit_id: visit_id.into(),
            inputs,
            results,
            saved_at: Utc::now(),
        }
    }

    /// Compute results for `inputs` and wrap both
    #[must_use]
    pub fn capture(
        visit_id: impl Into<String>,
        inputs: PatientProfile,
        config: &EngineConfig,
    ) -> Self {
        let results = compute_with_config(&inputs, config);
        Self::new(visit_id, inputs, results)
    }

    /// Rerun the engine on the stored inputs
    #[must_use]
    pub fn recompute(&self, config: &EngineConfig) -> ResultSet {
        compute_with_config(&self.inputs, config)
    }

    /// Whether the stored results still match what the engine produces now
    #[must_use]
    pub fn is_current(&self, config: &EngineConfig) -> bool {
        self.recompute(config) == self.results
    }

    /// Encode as JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| {
            AppError::serialization(format!("Failed to encode snapshot {}", self.visit_id))
                .with_source(e)
        })
    }

    /// Decode from JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload is not a snapshot
    pub fn from_json(payload: &str) -> AppResult<Self> {
        serde_json::from_str(payload)
            .map_err(|e| AppError::serialization("Failed to decode snapshot").with_source(e))
    }
}
