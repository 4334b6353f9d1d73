// ABOUTME: Shared test utilities and fixture profiles for integration tests
// ABOUTME: Provides quiet logging setup, reference patients, and in-memory snapshot stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutricare`
//!
//! This module provides common fixtures to reduce duplication
//! across integration tests.

use anyhow::Result;
use nutricare::database::SqliteSnapshotStore;
use nutricare_core::models::{ChangeDuration, Gender, PatientProfile};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary helper may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Adult male, 30 years, 170 cm, 70 kg, sedentary
pub fn scenario_a_profile() -> PatientProfile {
    PatientProfile {
        gender: Gender::Male,
        age: 30,
        height_cm: 170.0,
        current_weight_kg: 70.0,
        selected_weight_kg: 70.0,
        activity_factor: 1.2,
        ..PatientProfile::default()
    }
}

/// Scenario A with a 10 kg loss over one month
pub fn scenario_b_profile() -> PatientProfile {
    PatientProfile {
        usual_weight_kg: 80.0,
        change_duration: ChangeDuration::OneMonth,
        ..scenario_a_profile()
    }
}

/// Scenario A with no limb loss recorded
pub fn scenario_c_profile() -> PatientProfile {
    PatientProfile {
        amputation_percent: 0.0,
        ..scenario_a_profile()
    }
}

/// Adult female with class III obesity
pub fn obese_female_profile() -> PatientProfile {
    PatientProfile {
        gender: Gender::Female,
        age: 45,
        height_cm: 160.0,
        current_weight_kg: 120.0,
        selected_weight_kg: 120.0,
        activity_factor: 1.4,
        ..PatientProfile::default()
    }
}

/// Standard in-memory snapshot store
pub async fn create_test_store() -> Result<SqliteSnapshotStore> {
    init_test_logging();
    let store = SqliteSnapshotStore::new("sqlite::memory:").await?;
    Ok(store)
}
