// ABOUTME: End-to-end tests of the calculation engine against reference patients
// ABOUTME: Covers anthropometrics, weight-change grading, energy methods, and the weight protocol
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{obese_female_profile, scenario_a_profile, scenario_b_profile, scenario_c_profile};
use nutricare::{compute_with_config, EngineConfig, PatientProfile, ResultSet};
use nutricare_core::models::{
    aggregate_amputation_percent, AmputatedSegment, AscitesSeverity, EdemaSeverity, Gender,
    PregnancyLactationState,
};
use nutricare_engine::anthropometry::BmiStatus;
use nutricare_engine::energy::iom::IomBand;
use nutricare_engine::energy::minimum::MinimumCategory;
use nutricare_engine::energy::predictive::PredictiveEquation;
use nutricare_engine::energy::ratio::RatioWeightStatus;
use nutricare_engine::malnutrition::WeightChangeClass;
use nutricare_engine::recommendation::TargetWeightBasis;
use nutricare_engine::RequiredKcalSource;

fn run(profile: &PatientProfile) -> ResultSet {
    common::init_test_logging();
    compute_with_config(profile, &EngineConfig::default())
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

// ============================================================================
// Scenario A: adult male, normal BMI
// ============================================================================

#[test]
fn test_scenario_a_anthropometrics() {
    let results = run(&scenario_a_profile());
    let anthro = &results.anthropometrics;

    assert_close(anthro.dry_weight_kg, 70.0, 1e-9);
    assert_close(anthro.bmi_dry.value, 24.22, 0.01);
    assert_eq!(anthro.bmi_dry.status, Some(BmiStatus::Normal));
    assert_close(anthro.ideal_body_weight.simple_kg, 70.0, 1e-9);
    assert_close(anthro.ideal_body_weight.hamwi_kg, 64.4, 1e-9);
    assert_close(anthro.adjusted_body_weight.hamwi.dry, 66.528, 1e-9);
    assert!(results.body_composition.is_some());
}

#[test]
fn test_scenario_a_weight_protocol() {
    let protocol = run(&scenario_a_profile()).recommendation;

    assert_close(protocol.threshold_kg, 83.72, 1e-9);
    assert!(!protocol.is_high_obesity);
    assert_eq!(protocol.basis, TargetWeightBasis::IdealBodyWeight);
    assert_close(protocol.recommended_weight_kg, 64.4, 1e-9);
}

#[test]
fn test_scenario_a_predictive_equations() {
    let results = run(&scenario_a_profile());
    let selected = &results.predictive.selected;

    assert_close(selected.harris_benedict.kcal, 1677.01, 0.1);
    assert_close(selected.harris_benedict.tee.unwrap(), 2213.65, 0.1);
    assert_close(selected.mifflin_st_jeor.kcal, 1617.5, 1e-9);
    assert_close(selected.mifflin_st_jeor.tee.unwrap(), 2135.1, 1e-6);
    assert!(selected.accp.tee.is_none());
    assert!(selected.ireton_jones.tee.is_none());
}

#[test]
fn test_scenario_a_iom_adult_eer() {
    let iom = run(&scenario_a_profile()).iom;

    assert_eq!(iom.band, IomBand::Adult);
    assert_eq!(iom.pa_coefficient, Some(1.0));
    assert_close(iom.dry_kcal, 2407.12, 0.01);
    assert_close(iom.selected_kcal.unwrap(), 2407.12, 0.01);
}

#[test]
fn test_scenario_a_factor_methods() {
    let results = run(&scenario_a_profile());

    assert_close(results.bmi_factor.dry.factor_kcal_per_kg, 20.0, 1e-9);
    assert_close(results.bmi_factor.dry.kcal, 1400.0, 1e-9);
    let fixed: Vec<f64> = results.fixed_factor.dry.iter().map(|f| f.kcal).collect();
    assert_eq!(fixed, vec![1750.0, 2100.0, 2450.0, 2800.0]);
    assert_eq!(results.ratio.status, RatioWeightStatus::Normal);
    assert_eq!(
        results.minimum_requirement.dry.category,
        MinimumCategory::AdultBmiNormal
    );
}

// ============================================================================
// Scenario B: one-month weight loss
// ============================================================================

#[test]
fn test_scenario_b_severe_malnutrition() {
    let change = run(&scenario_b_profile()).weight_change;

    assert_close(change.loss_percent, 12.5, 1e-9);
    assert_eq!(change.display, "12.5");
    assert_eq!(
        change.classification,
        Some(WeightChangeClass::SevereMalnutrition)
    );
}

// ============================================================================
// Scenario C: no amputation
// ============================================================================

#[test]
fn test_scenario_c_no_amputation_field() {
    let results = run(&scenario_c_profile());
    assert!(results.anthropometrics.amputation_adjusted_weight_kg.is_none());
}

#[test]
fn test_amputation_scales_dry_weight() {
    let percent = aggregate_amputation_percent(&[AmputatedSegment::LowerLeg]);
    let profile = PatientProfile {
        amputation_percent: percent,
        ..scenario_a_profile()
    };
    let adjusted = run(&profile)
        .anthropometrics
        .amputation_adjusted_weight_kg
        .unwrap();
    assert_close(adjusted, 70.0 / (100.0 - 5.9) * 100.0, 1e-9);
}

// ============================================================================
// Fluid corrections and high obesity
// ============================================================================

#[test]
fn test_fluid_corrections_lower_dry_weight() {
    let profile = PatientProfile {
        ascites: AscitesSeverity::Moderate,
        edema: EdemaSeverity::Mild,
        ..scenario_a_profile()
    };
    let results = run(&profile);

    assert_close(results.anthropometrics.dry_weight_kg, 63.0, 1e-9);
    assert_close(results.bmi_factor.dry.kcal, 63.0 * 20.0, 1e-9);
    assert_close(results.bmi_factor.selected.kcal, 70.0 * 20.0, 1e-9);
}

#[test]
fn test_dry_weight_never_negative() {
    let profile = PatientProfile {
        current_weight_kg: 10.0,
        ascites: AscitesSeverity::Severe,
        edema: EdemaSeverity::Severe,
        ..scenario_a_profile()
    };
    assert_close(run(&profile).anthropometrics.dry_weight_kg, 0.0, 1e-12);
}

#[test]
fn test_high_obesity_uses_adjusted_weight() {
    let results = run(&obese_female_profile());
    let protocol = &results.recommendation;

    assert!(protocol.is_high_obesity);
    assert_eq!(protocol.basis, TargetWeightBasis::AdjustedBodyWeight);
    assert_close(
        protocol.recommended_weight_kg,
        results.anthropometrics.adjusted_body_weight.hamwi.dry,
        1e-9,
    );
    assert_close(results.bmi_factor.dry.factor_kcal_per_kg, 15.0, 1e-9);
    assert_eq!(results.ratio.status, RatioWeightStatus::Overweight);
}

// ============================================================================
// Age handling
// ============================================================================

#[test]
fn test_dates_override_direct_age() {
    let profile = PatientProfile {
        age: 99,
        dob: Some("1990-06-15".to_owned()),
        report_date: Some("2020-06-14".to_owned()),
        ..scenario_a_profile()
    };
    let results = run(&profile);

    assert_eq!(results.age.years, 29);
    assert!(!results.elderly_advisory);
}

#[test]
fn test_birth_date_after_report_date_resolves_to_age_zero() {
    let profile = PatientProfile {
        age: 30,
        dob: Some("2030-01-01".to_owned()),
        report_date: Some("2024-01-01".to_owned()),
        ..scenario_a_profile()
    };
    let results = run(&profile);

    assert_eq!(results.age.years, 0);
    assert_eq!(results.age.total_months, 0);
    assert_eq!(results.iom.band, IomBand::Infant0To3Months);
}

#[test]
fn test_infant_iom_has_no_selected_figure() {
    let profile = PatientProfile {
        gender: Gender::Female,
        age: 0,
        dob: Some("2024-01-10".to_owned()),
        report_date: Some("2024-03-20".to_owned()),
        height_cm: 58.0,
        current_weight_kg: 5.0,
        selected_weight_kg: 5.0,
        ..PatientProfile::default()
    };
    let results = run(&profile);

    assert_eq!(results.age.total_months, 2);
    assert_eq!(results.iom.band, IomBand::Infant0To3Months);
    assert!(results.iom.selected_kcal.is_none());
    assert_eq!(
        results.minimum_requirement.dry.category,
        MinimumCategory::Infant
    );
    assert!(results.required_kcal(RequiredKcalSource::Iom).is_none());
}

#[test]
fn test_pregnancy_adds_to_adult_eer() {
    let base = PatientProfile {
        gender: Gender::Female,
        age: 28,
        height_cm: 165.0,
        current_weight_kg: 62.0,
        selected_weight_kg: 62.0,
        activity_factor: 1.2,
        ..PatientProfile::default()
    };
    let pregnant = PatientProfile {
        pregnancy_lactation: PregnancyLactationState::ThirdTrimester,
        ..base.clone()
    };

    let delta = run(&pregnant).iom.dry_kcal - run(&base).iom.dry_kcal;
    assert_close(delta, 452.0, 1e-9);
}

// ============================================================================
// Required energy
// ============================================================================

#[test]
fn test_required_kcal_defaults_to_mifflin_net_tee() {
    let results = run(&scenario_a_profile());
    let required = results.required_kcal(RequiredKcalSource::default()).unwrap();
    let net = results
        .predictive
        .selected
        .mifflin_st_jeor
        .net_tee
        .unwrap();
    assert_close(required, net, 1e-12);
}

#[test]
fn test_deficit_reduces_net_tee() {
    let profile = PatientProfile {
        deficit_kcal: 500.0,
        ..scenario_a_profile()
    };
    let results = run(&profile);
    let mifflin = &results.predictive.selected.mifflin_st_jeor;
    assert_close(mifflin.net_tee.unwrap(), mifflin.tee.unwrap() - 500.0, 1e-9);
}

#[test]
fn test_katch_mcardle_requires_lean_mass() {
    let profile = PatientProfile {
        age: 0,
        ..scenario_a_profile()
    };
    let results = run(&profile);
    assert!(results.body_composition.is_none());
    assert!(results
        .predictive
        .selected
        .get(PredictiveEquation::KatchMcArdle)
        .is_none());
}
