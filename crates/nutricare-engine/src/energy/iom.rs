// ABOUTME: Method 6 energy requirement: Institute of Medicine estimated energy requirement (EER)
// ABOUTME: Infant month bands, gendered child and adult equations, pregnancy and lactation additions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! IOM Estimated Energy Requirement
//!
//! # Reference
//!
//! Institute of Medicine (2005). *Dietary Reference Intakes for Energy,
//! Carbohydrate, Fiber, Fat, Fatty Acids, Cholesterol, Protein, and Amino Acids*.
//! National Academies Press.

use super::ActivityTier;
use nutricare_core::constants::age::{IOM_ADULT_FROM_YEARS, IOM_TODDLER_MAX_MONTHS};
use nutricare_core::models::{Gender, PregnancyLactationState};
use serde::{Deserialize, Serialize};

/// PA coefficients per tier: sedentary, low active, active, very active
const BOYS_PA: [f64; 4] = [1.00, 1.13, 1.26, 1.42];
const GIRLS_PA: [f64; 4] = [1.00, 1.16, 1.31, 1.56];
const MEN_PA: [f64; 4] = [1.00, 1.11, 1.25, 1.48];
const WOMEN_PA: [f64; 4] = [1.00, 1.12, 1.27, 1.45];

const ADULT_PROTEIN_G_PER_KG: f64 = 0.8;

/// Age band the EER came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IomBand {
    /// 0-3 months
    Infant0To3Months,
    /// 4-6 months
    Infant4To6Months,
    /// 7-12 months
    Infant7To12Months,
    /// 13-36 months
    Toddler13To36Months,
    /// 3-8 years
    Child3To8Years,
    /// 9-18 years
    Child9To18Years,
    /// 19 years and over
    Adult,
}

impl IomBand {
    /// Band for an age; infant bands are chosen by total months
    #[must_use]
    pub const fn for_age(years: u32, total_months: u32) -> Self {
        if total_months <= IOM_TODDLER_MAX_MONTHS {
            match total_months {
                0..=3 => Self::Infant0To3Months,
                4..=6 => Self::Infant4To6Months,
                7..=12 => Self::Infant7To12Months,
                _ => Self::Toddler13To36Months,
            }
        } else if years >= IOM_ADULT_FROM_YEARS {
            Self::Adult
        } else if years <= 8 {
            Self::Child3To8Years
        } else {
            Self::Child9To18Years
        }
    }

    /// Infant growth allowance added to `89 × W − 100`, for the month bands
    #[must_use]
    pub const fn infant_allowance_kcal(self) -> Option<f64> {
        match self {
            Self::Infant0To3Months => Some(175.0),
            Self::Infant4To6Months => Some(56.0),
            Self::Infant7To12Months => Some(22.0),
            Self::Toddler13To36Months => Some(20.0),
            _ => None,
        }
    }

    /// Protein reference intake (g/kg/day)
    #[must_use]
    pub const fn protein_g_per_kg(self) -> f64 {
        match self {
            Self::Infant0To3Months | Self::Infant4To6Months => 1.52,
            Self::Infant7To12Months => 1.2,
            Self::Toddler13To36Months => 1.05,
            Self::Child3To8Years => 0.95,
            Self::Child9To18Years => 0.85,
            Self::Adult => ADULT_PROTEIN_G_PER_KG,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Infant0To3Months => "0-3 months",
            Self::Infant4To6Months => "4-6 months",
            Self::Infant7To12Months => "7-12 months",
            Self::Toddler13To36Months => "13-36 months",
            Self::Child3To8Years => "3-8 years",
            Self::Child9To18Years => "9-18 years",
            Self::Adult => "19+ years",
        }
    }
}

/// Inputs M6 reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IomInputs {
    /// Biological sex
    pub gender: Gender,
    /// Age in whole years
    pub age_years: u32,
    /// Age in total months
    pub total_months: u32,
    /// Height (cm)
    pub height_cm: f64,
    /// Raw activity factor (0 = sedentary)
    pub activity_factor: f64,
    /// Dry weight (kg)
    pub dry_weight_kg: f64,
    /// Selected weight (kg)
    pub selected_weight_kg: f64,
    /// Pregnancy or lactation stage
    pub pregnancy_lactation: PregnancyLactationState,
}

/// M6 result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IomEstimate {
    /// Age band used
    pub band: IomBand,
    /// Activity tier, for the equation bands
    pub activity_tier: Option<ActivityTier>,
    /// PA coefficient, for the equation bands
    pub pa_coefficient: Option<f64>,
    /// Pregnancy or lactation addition (kcal/day)
    pub pregnancy_adjustment_kcal: f64,
    /// EER on dry weight (kcal/day)
    pub dry_kcal: f64,
    /// EER on selected weight; infant bands use dry weight only
    pub selected_kcal: Option<f64>,
    /// Protein reference intake (g/kg/day)
    pub protein_g_per_kg: f64,
    /// Protein on dry weight (g/day)
    pub protein_dry_g: f64,
    /// Protein on selected weight (g/day)
    pub protein_selected_g: Option<f64>,
}

/// Gendered child EER, 3-18 years
#[must_use]
pub fn child_eer(gender: Gender, age_years: u32, weight_kg: f64, height_m: f64, pa: f64) -> f64 {
    let age = f64::from(age_years);
    let constant = if age_years <= 8 { 20.0 } else { 25.0 };
    let eer = match gender {
        Gender::Male => {
            61.9f64.mul_add(-age, 88.5) + pa * 26.7f64.mul_add(weight_kg, 903.0 * height_m)
        }
        Gender::Female => {
            30.8f64.mul_add(-age, 135.3) + pa * 10.0f64.mul_add(weight_kg, 934.0 * height_m)
        }
    };
    eer + constant
}

/// Gendered adult EER, 19 years and over
#[must_use]
pub fn adult_eer(gender: Gender, age_years: u32, weight_kg: f64, height_m: f64, pa: f64) -> f64 {
    let age = f64::from(age_years);
    match gender {
        Gender::Male => {
            9.53f64.mul_add(-age, 662.0) + pa * 15.91f64.mul_add(weight_kg, 539.6 * height_m)
        }
        Gender::Female => {
            6.91f64.mul_add(-age, 354.0) + pa * 9.36f64.mul_add(weight_kg, 726.0 * height_m)
        }
    }
}

/// Infant and toddler EER: `89 × W − 100 + allowance`
#[must_use]
pub fn infant_eer(weight_kg: f64, allowance_kcal: f64) -> f64 {
    89.0f64.mul_add(weight_kg, -100.0) + allowance_kcal
}

/// Run M6
#[must_use]
pub fn calculate(inputs: &IomInputs) -> IomEstimate {
    let band = IomBand::for_age(inputs.age_years, inputs.total_months);
    let protein_g_per_kg = band.protein_g_per_kg();

    if let Some(allowance) = band.infant_allowance_kcal() {
        return IomEstimate {
            band,
            activity_tier: None,
            pa_coefficient: None,
            pregnancy_adjustment_kcal: 0.0,
            dry_kcal: infant_eer(inputs.dry_weight_kg, allowance),
            selected_kcal: None,
            protein_g_per_kg,
            protein_dry_g: protein_g_per_kg * inputs.dry_weight_kg,
            protein_selected_g: None,
        };
    }

    let tier = ActivityTier::from_factor(inputs.activity_factor);
    let height_m = inputs.height_cm / 100.0;
    let is_adult = matches!(band, IomBand::Adult);
    let table = match (is_adult, inputs.gender) {
        (false, Gender::Male) => &BOYS_PA,
        (false, Gender::Female) => &GIRLS_PA,
        (true, Gender::Male) => &MEN_PA,
        (true, Gender::Female) => &WOMEN_PA,
    };
    let pa = table[tier.index()];

    let pregnancy_adjustment_kcal = if is_adult && !inputs.gender.is_male() {
        inputs.pregnancy_lactation.energy_adjustment_kcal()
    } else {
        0.0
    };
    let eer = |weight_kg: f64| {
        let base = if is_adult {
            adult_eer(inputs.gender, inputs.age_years, weight_kg, height_m, pa)
        } else {
            child_eer(inputs.gender, inputs.age_years, weight_kg, height_m, pa)
        };
        base + pregnancy_adjustment_kcal
    };

    IomEstimate {
        band,
        activity_tier: Some(tier),
        pa_coefficient: Some(pa),
        pregnancy_adjustment_kcal,
        dry_kcal: eer(inputs.dry_weight_kg),
        selected_kcal: Some(eer(inputs.selected_weight_kg)),
        protein_g_per_kg,
        protein_dry_g: protein_g_per_kg * inputs.dry_weight_kg,
        protein_selected_g: Some(protein_g_per_kg * inputs.selected_weight_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adult_male() -> IomInputs {
        IomInputs {
            gender: Gender::Male,
            age_years: 30,
            total_months: 360,
            height_cm: 170.0,
            activity_factor: 1.2,
            dry_weight_kg: 70.0,
            selected_weight_kg: 70.0,
            pregnancy_lactation: PregnancyLactationState::None,
        }
    }

    #[test]
    fn test_adult_male_sedentary() {
        let estimate = calculate(&adult_male());
        assert_eq!(estimate.band, IomBand::Adult);
        assert_eq!(estimate.activity_tier, Some(ActivityTier::Sedentary));
        assert!((estimate.dry_kcal - 2407.12).abs() < 0.01);
        assert!((estimate.protein_dry_g - 56.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_selection() {
        assert_eq!(IomBand::for_age(0, 2), IomBand::Infant0To3Months);
        assert_eq!(IomBand::for_age(0, 5), IomBand::Infant4To6Months);
        assert_eq!(IomBand::for_age(0, 11), IomBand::Infant7To12Months);
        assert_eq!(IomBand::for_age(2, 30), IomBand::Toddler13To36Months);
        assert_eq!(IomBand::for_age(3, 40), IomBand::Child3To8Years);
        assert_eq!(IomBand::for_age(8, 100), IomBand::Child3To8Years);
        assert_eq!(IomBand::for_age(9, 108), IomBand::Child9To18Years);
        assert_eq!(IomBand::for_age(18, 216), IomBand::Child9To18Years);
        assert_eq!(IomBand::for_age(19, 228), IomBand::Adult);
    }

    #[test]
    fn test_infant_uses_dry_weight_only() {
        let estimate = calculate(&IomInputs {
            age_years: 0,
            total_months: 2,
            dry_weight_kg: 5.0,
            selected_weight_kg: 5.0,
            ..adult_male()
        });
        // 89 × 5 − 100 + 175
        assert!((estimate.dry_kcal - 520.0).abs() < 1e-9);
        assert!(estimate.selected_kcal.is_none());
        assert!(estimate.pa_coefficient.is_none());
        assert!((estimate.protein_g_per_kg - 1.52).abs() < f64::EPSILON);
    }

    #[test]
    fn test_child_constant_switches_at_nine() {
        let young = child_eer(Gender::Female, 8, 25.0, 1.25, 1.0);
        let expected = 30.8f64.mul_add(-8.0, 135.3) + 10.0f64.mul_add(25.0, 934.0 * 1.25) + 20.0;
        assert!((young - expected).abs() < 1e-9);

        let older = child_eer(Gender::Male, 12, 40.0, 1.50, 1.13);
        let expected =
            61.9f64.mul_add(-12.0, 88.5) + 1.13 * 26.7f64.mul_add(40.0, 903.0 * 1.50) + 25.0;
        assert!((older - expected).abs() < 1e-9);
    }

    #[test]
    fn test_pregnancy_addition_for_adult_women_only() {
        let woman = IomInputs {
            gender: Gender::Female,
            pregnancy_lactation: PregnancyLactationState::ThirdTrimester,
            ..adult_male()
        };
        let estimate = calculate(&woman);
        assert!((estimate.pregnancy_adjustment_kcal - 452.0).abs() < f64::EPSILON);
        let baseline = adult_eer(Gender::Female, 30, 70.0, 1.70, 1.0);
        assert!((estimate.dry_kcal - baseline - 452.0).abs() < 1e-9);

        let man = calculate(&IomInputs {
            pregnancy_lactation: PregnancyLactationState::ThirdTrimester,
            ..adult_male()
        });
        assert!(man.pregnancy_adjustment_kcal.abs() < f64::EPSILON);
    }

    #[test]
    fn test_very_active_woman_coefficient() {
        let estimate = calculate(&IomInputs {
            gender: Gender::Female,
            activity_factor: 1.9,
            ..adult_male()
        });
        assert_eq!(estimate.pa_coefficient, Some(1.45));
    }
}
