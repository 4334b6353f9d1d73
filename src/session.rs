// ABOUTME: Consultation session controller that recomputes the full result set on every change
// ABOUTME: Owns the current profile and results for one visit and produces snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::snapshot::Snapshot;
use nutricare_core::models::PatientProfile;
use nutricare_engine::{compute_with_config, EngineConfig, RequiredKcalSource, ResultSet};
use tracing::debug;

/// One visit's working state
///
/// Results are never patched field by field: every mutation of the profile
/// reruns the whole engine, so `results()` always matches `profile()`.
#[derive(Debug, Clone)]
pub struct ConsultationSession {
    visit_id: String,
    config: EngineConfig,
    profile: PatientProfile,
    results: ResultSet,
    revision: u64,
}

impl ConsultationSession {
    /// Start a session with an empty profile
    #[must_use]
    pub fn new(visit_id: impl Into<String>, config: EngineConfig) -> Self {
        Self::with_profile(visit_id, PatientProfile::default(), config)
    }

    /// Start a session from an existing profile
    #[must_use]
    pub fn with_profile(
        visit_id: impl Into<String>,
        profile: PatientProfile,
        config: EngineConfig,
    ) -> Self {
        let results = compute_with_config(&profile, &config);
        Self {
            visit_id: visit_id.into(),
            config,
            profile,
            results,
            revision: 0,
        }
    }

    /// Resume a stored visit; results are recomputed rather than trusted
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot, config: EngineConfig) -> Self {
        Self::with_profile(snapshot.visit_id, snapshot.inputs, config)
    }

    /// Visit identifier
    #[must_use]
    pub fn visit_id(&self) -> &str {
        &self.visit_id
    }

    /// Current profile
    #[must_use]
    pub const fn profile(&self) -> &PatientProfile {
        &self.profile
    }

    /// Results for the current profile
    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Number of profile changes applied so far
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the profile and recompute
    pub fn set_profile(&mut self, profile: PatientProfile) -> &ResultSet {
        self.profile = profile;
        self.recompute()
    }

    /// Mutate the profile in place and recompute
    pub fn update<F>(&mut self, mutate: F) -> &ResultSet
    where
        F: FnOnce(&mut PatientProfile),
    {
        mutate(&mut self.profile);
        self.recompute()
    }

    /// Single kcal/day figure for meal planning
    #[must_use]
    pub fn required_kcal(&self, source: RequiredKcalSource) -> Option<f64> {
        self.results.required_kcal(source)
    }

    /// Capture the current state for storage
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.visit_id.clone(),
            self.profile.clone(),
            self.results.clone(),
        )
    }

    fn recompute(&mut self) -> &ResultSet {
        self.results = compute_with_config(&self.profile, &self.config);
        self.revision += 1;
        debug!(
            visit_id = %self.visit_id,
            revision = self.revision,
            "Session recomputed"
        );
        &self.results
    }
}
