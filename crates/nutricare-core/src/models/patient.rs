// ABOUTME: Patient profile record consumed by the nutrition calculation engine
// ABOUTME: Gender, observation windows, fluid severities, pregnancy state, and raw measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Biological sex used by the gendered equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
}

impl Gender {
    /// `true` for male
    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }

    /// Sex term used by Deurenberg: 1 for male, 0 for female
    #[must_use]
    pub const fn sex_factor(self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Observation window for the usual-weight comparison
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ChangeDuration {
    /// No duration recorded
    #[default]
    #[serde(rename = "none")]
    Unset,
    /// One week
    #[serde(rename = "1w")]
    OneWeek,
    /// One month
    #[serde(rename = "1m")]
    OneMonth,
    /// Three months
    #[serde(rename = "3m")]
    ThreeMonths,
    /// Six months
    #[serde(rename = "6m")]
    SixMonths,
    /// One year
    #[serde(rename = "1y")]
    OneYear,
}

/// Clinical ascites grading, mapped to a fluid mass removed from scale weight
///
/// Reference: James, R. (1989). Nutritional support in alcoholic liver disease: a review.
/// *J Hum Nutr*, 2, 315-323.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AscitesSeverity {
    /// No ascites
    #[default]
    None,
    /// Minimal ascites
    Mild,
    /// Moderate ascites
    Moderate,
    /// Severe (tense) ascites
    Severe,
}

impl AscitesSeverity {
    /// Fluid mass to subtract from the measured weight (kg)
    #[must_use]
    pub const fn correction_kg(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Mild => 2.2,
            Self::Moderate => 6.0,
            Self::Severe => 14.0,
        }
    }
}

/// Peripheral edema grading, mapped to a fluid mass removed from scale weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdemaSeverity {
    /// No edema
    #[default]
    None,
    /// Ankle edema
    Mild,
    /// Edema to the knee
    Moderate,
    /// Sacral edema or anasarca
    Severe,
}

impl EdemaSeverity {
    /// Fluid mass to subtract from the measured weight (kg)
    #[must_use]
    pub const fn correction_kg(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Mild => 1.0,
            Self::Moderate => 5.0,
            Self::Severe => 10.0,
        }
    }
}

/// Pregnancy or lactation state (female patients only)
///
/// Reference: Institute of Medicine (2005). Dietary Reference Intakes for Energy,
/// Carbohydrate, Fiber, Fat, Fatty Acids, Cholesterol, Protein, and Amino Acids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PregnancyLactationState {
    /// Neither pregnant nor lactating
    #[default]
    None,
    /// First trimester
    FirstTrimester,
    /// Second trimester
    SecondTrimester,
    /// Third trimester
    ThirdTrimester,
    /// Lactating, 0-6 months postpartum
    LactationFirstSixMonths,
    /// Lactating, 7-12 months postpartum
    LactationSecondSixMonths,
}

impl PregnancyLactationState {
    /// Additive EER adjustment (kcal/day)
    #[must_use]
    pub const fn energy_adjustment_kcal(self) -> f64 {
        match self {
            Self::None | Self::FirstTrimester => 0.0,
            Self::SecondTrimester => 340.0,
            Self::ThirdTrimester => 452.0,
            Self::LactationFirstSixMonths => 330.0,
            Self::LactationSecondSixMonths => 400.0,
        }
    }
}

/// Raw measurements and history for one consultation
///
/// Zero means "not entered" for every optional length or mass; the engine
/// treats it that way instead of rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PatientProfile {
    /// Biological sex
    pub gender: Gender,
    /// Age in whole years, used when no birth date is recorded
    pub age: u32,
    /// Date of birth (`YYYY-MM-DD`)
    pub dob: Option<String>,
    /// Date of the consultation report (`YYYY-MM-DD`)
    pub report_date: Option<String>,
    /// Height (cm)
    pub height_cm: f64,
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Hip circumference (cm)
    pub hip_cm: f64,
    /// Mid-upper-arm circumference (cm)
    pub mid_arm_circumference_cm: f64,
    /// Triceps skinfold (mm)
    pub triceps_skinfold_mm: f64,
    /// Activity multiplier; 0 = unset
    pub activity_factor: f64,
    /// Scale weight today (kg)
    pub current_weight_kg: f64,
    /// Weight chosen by the clinician as the planning basis (kg)
    pub selected_weight_kg: f64,
    /// Usual (pre-illness) weight (kg)
    pub usual_weight_kg: f64,
    /// Window over which the usual weight was observed
    pub change_duration: ChangeDuration,
    /// Ascites grading
    pub ascites: AscitesSeverity,
    /// Peripheral edema grading
    pub edema: EdemaSeverity,
    /// Body weight share lost to amputation (0-100)
    pub amputation_percent: f64,
    /// Measured body fat, overriding the estimate
    pub body_fat_percent: Option<f64>,
    /// Target body fat for the goal-weight calculation
    pub desired_body_fat_percent: Option<f64>,
    /// Pregnancy or lactation state
    pub pregnancy_lactation: PregnancyLactationState,
    /// kcal subtracted from the selected-weight TEE
    pub deficit_kcal: f64,
}
