// ABOUTME: Patient input models consumed by the calculation engine
// ABOUTME: Re-exports the profile record, its enumerations, and amputation segments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Amputated limb segments and the Osterkamp percentage aggregation
pub mod amputation;
/// The patient profile and its enumerated fields
pub mod patient;

pub use amputation::{
    aggregate_amputation_percent, amputation_percent_from_codes, AmputatedSegment,
};
pub use patient::{
    AscitesSeverity, ChangeDuration, EdemaSeverity, Gender, PatientProfile,
    PregnancyLactationState,
};
