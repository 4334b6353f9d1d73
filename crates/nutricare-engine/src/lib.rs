// ABOUTME: Clinical nutrition calculation engine: profile in, complete result set out
// ABOUTME: Pure and synchronous; every stage is a free function over normalized inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriCare Engine
//!
//! Converts a [`PatientProfile`] into a [`ResultSet`] in one pass:
//!
//! 1. **age**: direct age or birth/report dates, Y/M/D breakdown for minors
//! 2. **anthropometry**: dry weight, BMI, IBW/ABW, waist and arm indices
//! 3. **malnutrition**: weight loss against usual weight
//! 4. **`body_composition`**: manual or Deurenberg body fat, lean mass
//! 5. **energy**: six independent requirement methods (M1-M6)
//! 6. **recommendation**: ideal vs adjusted body weight
//!
//! The engine performs no I/O and never fails: missing measurements yield
//! zero or absent fields. Re-run [`compute`] whenever any input changes.

/// Age resolver
pub mod age;
/// Anthropometric derivation
pub mod anthropometry;
/// Body composition estimator
pub mod body_composition;
/// Engine configuration
pub mod config;
/// Energy requirement calculators
pub mod energy;
/// Weight change classifier
pub mod malnutrition;
/// Recommendation protocol
pub mod recommendation;
/// Result set
pub mod results;

pub use config::{ConfigError, EngineConfig};
pub use nutricare_core::models::PatientProfile;
pub use results::{RequiredKcalSource, ResultSet};

use body_composition::BodyCompositionInputs;
use energy::iom::IomInputs;
use energy::minimum::MinimumInputs;
use energy::predictive::{EquationInputs, TeeSettings};
use tracing::debug;

/// Run the engine with the global configuration
#[must_use]
pub fn compute(profile: &PatientProfile) -> ResultSet {
    compute_with_config(profile, EngineConfig::global())
}

/// Run the engine with an explicit configuration
#[must_use]
pub fn compute_with_config(profile: &PatientProfile, config: &EngineConfig) -> ResultSet {
    let age = age::resolve_age(
        profile.age,
        profile.dob.as_deref(),
        profile.report_date.as_deref(),
    );
    let anthropometrics = anthropometry::derive(profile);
    let dry = anthropometrics.dry_weight_kg;
    let selected = anthropometrics.selected_weight_kg;
    let bmi_dry = anthropometrics.bmi_dry.value;
    let bmi_selected = anthropometrics.bmi_selected.value;
    let ibw_hamwi = anthropometrics.ideal_body_weight.hamwi_kg;

    let weight_change =
        malnutrition::assess(profile.usual_weight_kg, dry, profile.change_duration);

    let body_composition = body_composition::estimate(&BodyCompositionInputs {
        gender: profile.gender,
        age_years: age.years,
        dry_weight_kg: dry,
        bmi_dry,
        manual_body_fat_percent: profile.body_fat_percent,
        desired_body_fat_percent: profile.desired_body_fat_percent,
    });

    let bmi_factor = energy::bmi_factor::calculate(bmi_dry, dry, bmi_selected, selected);
    let fixed_factor = energy::fixed_factor::calculate(dry, selected);

    let base_inputs = EquationInputs {
        gender: profile.gender,
        age_years: age.years,
        weight_kg: dry,
        dry_weight_kg: dry,
        height_cm: profile.height_cm,
        bmi: bmi_dry,
        ibw_hamwi_kg: ibw_hamwi,
        lean_mass_kg: body_composition.as_ref().map(|bc| bc.lean_mass_kg),
    };
    let selected_inputs = EquationInputs {
        weight_kg: selected,
        bmi: bmi_selected,
        ..base_inputs
    };
    let settings = TeeSettings {
        activity_factor: energy::effective_activity_factor(
            profile.activity_factor,
            config.default_activity_factor,
        ),
        thermic_effect_factor: config.thermic_effect_factor,
    };
    let predictive = energy::predictive::calculate(
        &base_inputs,
        &selected_inputs,
        settings,
        profile.deficit_kcal,
    );

    let ratio = energy::ratio::calculate(bmi_dry, dry, selected);
    let minimum_requirement = energy::minimum::calculate(&MinimumInputs {
        gender: profile.gender,
        age_years: age.years,
        activity_factor: profile.activity_factor,
        dry_weight_kg: dry,
        bmi_dry,
        selected_weight_kg: selected,
        bmi_selected,
    });
    let iom = energy::iom::calculate(&IomInputs {
        gender: profile.gender,
        age_years: age.years,
        total_months: age.total_months,
        height_cm: profile.height_cm,
        activity_factor: profile.activity_factor,
        dry_weight_kg: dry,
        selected_weight_kg: selected,
        pregnancy_lactation: profile.pregnancy_lactation,
    });

    let recommendation = recommendation::recommend(
        dry,
        ibw_hamwi,
        anthropometrics.adjusted_body_weight.hamwi.dry,
        config.high_obesity_margin,
    );

    let elderly_advisory = age.years >= config.elderly_age_years;
    debug!(
        age_years = age.years,
        elderly_advisory,
        mifflin_tee = ?predictive.selected.mifflin_st_jeor.tee,
        iom_dry_kcal = iom.dry_kcal,
        "Result set computed"
    );

    ResultSet {
        age,
        elderly_advisory,
        anthropometrics,
        weight_change,
        body_composition,
        bmi_factor,
        fixed_factor,
        predictive,
        ratio,
        minimum_requirement,
        iom,
        recommendation,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nutricare_core::models::{ChangeDuration, Gender};

    fn scenario_a() -> PatientProfile {
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

    #[test]
    fn test_scenario_a_headline_figures() {
        let results = compute_with_config(&scenario_a(), &EngineConfig::default());
        assert!((results.predictive.selected.mifflin_st_jeor.kcal - 1617.5).abs() < 1e-9);
        assert!((results.iom.dry_kcal - 2407.12).abs() < 0.01);
        assert!(!results.recommendation.is_high_obesity);
        assert!(!results.elderly_advisory);
    }

    #[test]
    fn test_unset_activity_factor_only_defaults_in_predictive_stage() {
        let profile = PatientProfile {
            activity_factor: 0.0,
            ..scenario_a()
        };
        let results = compute_with_config(&profile, &EngineConfig::default());
        assert!((results.predictive.activity_factor - 1.2).abs() < f64::EPSILON);
        assert_eq!(results.iom.pa_coefficient, Some(1.0));
    }

    #[test]
    fn test_elderly_flag_uses_config_threshold() {
        let profile = PatientProfile {
            age: 70,
            change_duration: ChangeDuration::Unset,
            ..scenario_a()
        };
        let results = compute_with_config(&profile, &EngineConfig::default());
        assert!(results.elderly_advisory);
        assert!(results.elderly_advisory_message().is_some());

        let lenient = EngineConfig {
            elderly_age_years: 75,
            ..EngineConfig::default()
        };
        assert!(!compute_with_config(&profile, &lenient).elderly_advisory);
    }

    #[test]
    fn test_katch_mcardle_uses_body_composition_lean_mass_on_both_bases() {
        let profile = PatientProfile {
            selected_weight_kg: 60.0,
            body_fat_percent: Some(20.0),
            ..scenario_a()
        };
        let results = compute_with_config(&profile, &EngineConfig::default());
        let lean_mass = results.body_composition.as_ref().unwrap().lean_mass_kg;
        let dry_katch = results.predictive.dry.katch_mcardle.unwrap();
        let selected_katch = results.predictive.selected.katch_mcardle.unwrap();
        assert!((lean_mass - 56.0).abs() < 1e-9);
        assert!((dry_katch.kcal - 1579.6).abs() < 1e-9);
        assert!((selected_katch.kcal - 1579.6).abs() < 1e-9);
    }

    #[test]
    fn test_ireton_jones_uses_dry_weight_on_selected_basis() {
        let profile = PatientProfile {
            selected_weight_kg: 60.0,
            ..scenario_a()
        };
        let results = compute_with_config(&profile, &EngineConfig::default());
        assert!((results.predictive.selected.ireton_jones.kcal - 2048.0).abs() < 1e-9);
        assert!((results.predictive.dry.ireton_jones.kcal - 2048.0).abs() < 1e-9);
    }
}
