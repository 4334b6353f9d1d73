// ABOUTME: Method 5 energy requirement: minimum requirement table by age, sex, activity and BMI
// ABOUTME: Adults over 50 lose 5 percent per full decade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ActivityTier;
use crate::anthropometry::{classify_bmi, BmiStatus};
use nutricare_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Age-reduction starts above this age
const REDUCTION_FROM_YEARS: u32 = 50;
/// Percent taken off per full decade above the reduction age
const REDUCTION_PERCENT_PER_DECADE: f64 = 5.0;

/// Row of the minimum requirement table that applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimumCategory {
    /// Age ≤ 1: flat 1000 kcal
    Infant,
    /// Ages 2-11: 1000 + 100 per year
    Child,
    /// Boys 12-15: 2000 + 200 per year over 10
    EarlyAdolescentBoy,
    /// Girls 12-15: 2000 + 75 per year over 10
    EarlyAdolescentGirl,
    /// Boys 16-18: kcal/kg by activity tier
    LateAdolescentBoy,
    /// BMI underweight: 35 kcal/kg
    AdultBmiUnderweight,
    /// BMI normal: 30 kcal/kg
    AdultBmiNormal,
    /// BMI overweight or obese: 20 kcal/kg
    AdultBmiOverweight,
}

impl MinimumCategory {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Infant => "Infant (up to 1 year)",
            Self::Child => "Child (2-11 years)",
            Self::EarlyAdolescentBoy => "Boy (12-15 years)",
            Self::EarlyAdolescentGirl => "Girl (12-15 years)",
            Self::LateAdolescentBoy => "Boy (16-18 years), by activity",
            Self::AdultBmiUnderweight => "Underweight, by BMI",
            Self::AdultBmiNormal => "Normal weight, by BMI",
            Self::AdultBmiOverweight => "Overweight or obese, by BMI",
        }
    }
}

/// M5 figure for one weight basis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumEstimate {
    /// Table row used
    pub category: MinimumCategory,
    /// kcal/kg for weight-based rows
    pub factor_kcal_per_kg: Option<f64>,
    /// Requirement before the age reduction (kcal/day)
    pub base_kcal: f64,
    /// Requirement after the age reduction (kcal/day)
    pub kcal: f64,
}

/// M5 result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumRequirementMethod {
    /// Percent removed for age (0 before 60)
    pub age_reduction_percent: f64,
    /// Dry weight basis
    pub dry: MinimumEstimate,
    /// Selected weight basis
    pub selected: MinimumEstimate,
}

/// Inputs M5 reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumInputs {
    /// Biological sex
    pub gender: Gender,
    /// Age in years
    pub age_years: u32,
    /// Raw activity factor (0 = sedentary)
    pub activity_factor: f64,
    /// Dry weight (kg)
    pub dry_weight_kg: f64,
    /// Dry-weight BMI
    pub bmi_dry: f64,
    /// Selected weight (kg)
    pub selected_weight_kg: f64,
    /// Selected-weight BMI
    pub bmi_selected: f64,
}

/// kcal/kg for boys 16-18 by activity tier
const fn late_adolescent_factor(tier: ActivityTier) -> f64 {
    match tier {
        ActivityTier::Sedentary => 30.0,
        ActivityTier::LowActive => 35.0,
        ActivityTier::Active => 40.0,
        ActivityTier::VeryActive => 50.0,
    }
}

/// Percent reduction for age: 5 % per full decade above 50
#[must_use]
pub fn age_reduction_percent(age_years: u32) -> f64 {
    if age_years <= REDUCTION_FROM_YEARS {
        return 0.0;
    }
    let decades = (age_years - REDUCTION_FROM_YEARS) / 10;
    f64::from(decades) * REDUCTION_PERCENT_PER_DECADE
}

/// Table lookup for one weight basis, before the age reduction
#[must_use]
pub fn base_requirement(
    gender: Gender,
    age_years: u32,
    activity_factor: f64,
    weight_kg: f64,
    bmi: f64,
) -> (MinimumCategory, Option<f64>, f64) {
    let age = f64::from(age_years);
    match (age_years, gender) {
        (0..=1, _) => (MinimumCategory::Infant, None, 1000.0),
        (2..=11, _) => (MinimumCategory::Child, None, 100.0f64.mul_add(age, 1000.0)),
        (12..=15, Gender::Male) => (
            MinimumCategory::EarlyAdolescentBoy,
            None,
            200.0f64.mul_add(age - 10.0, 2000.0),
        ),
        (12..=15, Gender::Female) => (
            MinimumCategory::EarlyAdolescentGirl,
            None,
            75.0f64.mul_add(age - 10.0, 2000.0),
        ),
        (16..=18, Gender::Male) => {
            let factor = late_adolescent_factor(ActivityTier::from_factor(activity_factor));
            (MinimumCategory::LateAdolescentBoy, Some(factor), factor * weight_kg)
        }
        _ => {
            let (category, factor) = match classify_bmi(bmi) {
                BmiStatus::Underweight => (MinimumCategory::AdultBmiUnderweight, 35.0),
                BmiStatus::Normal => (MinimumCategory::AdultBmiNormal, 30.0),
                BmiStatus::Overweight | BmiStatus::Obese => {
                    (MinimumCategory::AdultBmiOverweight, 20.0)
                }
            };
            (category, Some(factor), factor * weight_kg)
        }
    }
}

fn estimate(inputs: &MinimumInputs, weight_kg: f64, bmi: f64, reduction_percent: f64) -> MinimumEstimate {
    let (category, factor_kcal_per_kg, base_kcal) = base_requirement(
        inputs.gender,
        inputs.age_years,
        inputs.activity_factor,
        weight_kg,
        bmi,
    );
    MinimumEstimate {
        category,
        factor_kcal_per_kg,
        base_kcal,
        kcal: base_kcal * (1.0 - reduction_percent / 100.0),
    }
}

/// Run M5 for both weight bases
#[must_use]
pub fn calculate(inputs: &MinimumInputs) -> MinimumRequirementMethod {
    let reduction = age_reduction_percent(inputs.age_years);
    MinimumRequirementMethod {
        age_reduction_percent: reduction,
        dry: estimate(inputs, inputs.dry_weight_kg, inputs.bmi_dry, reduction),
        selected: estimate(
            inputs,
            inputs.selected_weight_kg,
            inputs.bmi_selected,
            reduction,
        ),
    }
}
