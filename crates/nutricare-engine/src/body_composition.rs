// ABOUTME: Body composition estimator: manual or Deurenberg body fat, fat and lean mass
// ABOUTME: Target weight for a desired body fat percentage at constant lean mass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricare_core::constants::body_fat;
use nutricare_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Where the body fat percentage came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyFatSource {
    /// Entered by the clinician (calipers, BIA, DEXA)
    Manual,
    /// Deurenberg estimate from BMI, age and sex
    Estimated,
}

/// Weight at which the current lean mass would carry the desired fat percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetWeight {
    /// Desired body fat (%)
    pub desired_body_fat_percent: f64,
    /// Target weight (kg)
    pub target_weight_kg: f64,
    /// Dry weight minus target weight (kg); positive means weight to lose
    pub difference_kg: f64,
}

/// Resolved body composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    /// Body fat (%)
    pub body_fat_percent: f64,
    /// One-decimal display string
    pub display: String,
    /// Origin of the percentage
    pub source: BodyFatSource,
    /// Fat mass (kg)
    pub fat_mass_kg: f64,
    /// Lean mass (kg)
    pub lean_mass_kg: f64,
    /// Goal weight for the desired fat percentage, when one is set
    pub target: Option<TargetWeight>,
}

/// Inputs the estimator reads
#[derive(Debug, Clone, Copy)]
pub struct BodyCompositionInputs {
    /// Biological sex
    pub gender: Gender,
    /// Age in years
    pub age_years: u32,
    /// Dry weight (kg)
    pub dry_weight_kg: f64,
    /// BMI from dry weight
    pub bmi_dry: f64,
    /// Manual body fat override (%)
    pub manual_body_fat_percent: Option<f64>,
    /// Desired body fat (%)
    pub desired_body_fat_percent: Option<f64>,
}

/// Deurenberg adult body fat estimate, clamped at zero
///
/// Formula: BF% = 1.20 × BMI + 0.23 × age − 10.8 × sex − 5.4
#[must_use]
pub fn deurenberg_body_fat(bmi: f64, age_years: u32, gender: Gender) -> f64 {
    let estimate = body_fat::DEURENBERG_BMI_COEF.mul_add(
        bmi,
        body_fat::DEURENBERG_AGE_COEF.mul_add(
            f64::from(age_years),
            -body_fat::DEURENBERG_SEX_COEF.mul_add(gender.sex_factor(), body_fat::DEURENBERG_CONSTANT),
        ),
    );
    estimate.max(0.0)
}

/// Pick the manual value when positive, otherwise estimate
///
/// The estimate needs an age: with age 0 there is no estimate at all.
#[must_use]
pub fn resolve_body_fat(
    manual_percent: Option<f64>,
    bmi_dry: f64,
    age_years: u32,
    gender: Gender,
) -> Option<(f64, BodyFatSource)> {
    if let Some(manual) = manual_percent.filter(|value| *value > 0.0) {
        return Some((manual, BodyFatSource::Manual));
    }
    if age_years == 0 || bmi_dry <= 0.0 {
        return None;
    }
    Some((
        deurenberg_body_fat(bmi_dry, age_years, gender),
        BodyFatSource::Estimated,
    ))
}

/// Weight at which `lean_mass_kg` equals `1 − desired` of body weight
#[must_use]
pub fn target_weight_for_body_fat(lean_mass_kg: f64, desired_percent: f64) -> Option<f64> {
    if desired_percent <= 0.0 || desired_percent >= 100.0 {
        return None;
    }
    Some(lean_mass_kg / (1.0 - desired_percent / 100.0))
}

/// Run the body composition stage
#[must_use]
pub fn estimate(inputs: &BodyCompositionInputs) -> Option<BodyComposition> {
    let (percent, source) = resolve_body_fat(
        inputs.manual_body_fat_percent,
        inputs.bmi_dry,
        inputs.age_years,
        inputs.gender,
    )?;
    if percent <= 0.0 || inputs.dry_weight_kg <= 0.0 {
        return None;
    }

    let fat_mass_kg = inputs.dry_weight_kg * percent / 100.0;
    let lean_mass_kg = inputs.dry_weight_kg - fat_mass_kg;
    let target = inputs.desired_body_fat_percent.and_then(|desired| {
        target_weight_for_body_fat(lean_mass_kg, desired).map(|target_weight_kg| TargetWeight {
            desired_body_fat_percent: desired,
            target_weight_kg,
            difference_kg: inputs.dry_weight_kg - target_weight_kg,
        })
    });

    Some(BodyComposition {
        body_fat_percent: percent,
        display: format!("{percent:.1}"),
        source,
        fat_mass_kg,
        lean_mass_kg,
        target,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn inputs() -> BodyCompositionInputs {
        BodyCompositionInputs {
            gender: Gender::Male,
            age_years: 30,
            dry_weight_kg: 70.0,
            bmi_dry: 24.221_453_287_197_235,
            manual_body_fat_percent: None,
            desired_body_fat_percent: None,
        }
    }

    #[test]
    fn test_deurenberg_male_adult() {
        // 1.2 × 24.2215 + 0.23 × 30 − 10.8 − 5.4 = 19.7657
        let estimate = deurenberg_body_fat(24.221_453, 30, Gender::Male);
        assert!((estimate - 19.7657).abs() < 1e-3);
    }

    #[test]
    fn test_deurenberg_clamped_at_zero() {
        assert!(deurenberg_body_fat(5.0, 1, Gender::Male).abs() < f64::EPSILON);
    }

    #[test]
    fn test_manual_value_wins() {
        let composition = estimate(&BodyCompositionInputs {
            manual_body_fat_percent: Some(25.0),
            ..inputs()
        })
        .unwrap();
        assert_eq!(composition.source, BodyFatSource::Manual);
        assert!((composition.fat_mass_kg - 17.5).abs() < 1e-9);
        assert!((composition.lean_mass_kg - 52.5).abs() < 1e-9);
        assert_eq!(composition.display, "25.0");
    }

    #[test]
    fn test_zero_manual_falls_back_to_estimate() {
        let composition = estimate(&BodyCompositionInputs {
            manual_body_fat_percent: Some(0.0),
            ..inputs()
        })
        .unwrap();
        assert_eq!(composition.source, BodyFatSource::Estimated);
    }

    #[test]
    fn test_age_zero_has_no_estimate() {
        let composition = estimate(&BodyCompositionInputs {
            age_years: 0,
            ..inputs()
        });
        assert!(composition.is_none());
    }

    #[test]
    fn test_target_weight_for_desired_fat() {
        let composition = estimate(&BodyCompositionInputs {
            manual_body_fat_percent: Some(30.0),
            desired_body_fat_percent: Some(20.0),
            dry_weight_kg: 100.0,
            ..inputs()
        })
        .unwrap();
        let target = composition.target.unwrap();
        assert!((target.target_weight_kg - 87.5).abs() < 1e-9);
        assert!((target.difference_kg - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_desired_fat_of_one_hundred_is_ignored() {
        assert!(target_weight_for_body_fat(50.0, 100.0).is_none());
        assert!(target_weight_for_body_fat(50.0, 0.0).is_none());
    }

    #[test]
    fn test_zero_dry_weight_has_no_block() {
        let composition = estimate(&BodyCompositionInputs {
            manual_body_fat_percent: Some(20.0),
            dry_weight_kg: 0.0,
            ..inputs()
        });
        assert!(composition.is_none());
    }
}
