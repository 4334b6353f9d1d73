// ABOUTME: Anthropometric derivation: dry weight, BMI, ideal/adjusted weights, waist indices
// ABOUTME: Amputation-adjusted weight (Osterkamp) and mid-arm estimates (MAC-BMI, MAMC)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Anthropometric Derivation
//!
//! Everything downstream reads these numbers, so every ratio here guards its
//! denominator and optional measurements produce `None` rather than zero.

use nutricare_core::constants::{arm, bmi as bmi_cuts, body_weight, waist};
use nutricare_core::models::{Gender, PatientProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// BMI classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiStatus {
    /// BMI < 18.5
    Underweight,
    /// 18.5 ≤ BMI < 25
    Normal,
    /// 25 ≤ BMI < 30
    Overweight,
    /// BMI ≥ 30
    Obese,
}

impl BmiStatus {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Severity tier used by presentation layers to pick emphasis
    #[must_use]
    pub const fn severity(self) -> SeverityTier {
        match self {
            Self::Normal => SeverityTier::Ok,
            Self::Underweight | Self::Overweight => SeverityTier::Caution,
            Self::Obese => SeverityTier::Alert,
        }
    }
}

/// Coarse severity attached to a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    /// Within reference range
    Ok,
    /// Outside reference range, not urgent
    Caution,
    /// Clinically significant
    Alert,
}

/// BMI value with its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// kg/m², 0 when height or weight is missing
    pub value: f64,
    /// Band, absent when the BMI could not be computed
    pub status: Option<BmiStatus>,
    /// Severity of the band
    pub severity: Option<SeverityTier>,
}

/// Ideal body weight by formula family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealBodyWeight {
    /// Broca: height − 100
    pub simple_kg: f64,
    /// Hamwi, gendered
    pub hamwi_kg: f64,
}

/// A figure computed once from dry weight and once from selected weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    /// From dry weight
    pub dry: f64,
    /// From selected weight
    pub selected: f64,
}

/// Adjusted body weight, one pair per ideal-weight family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedBodyWeight {
    /// Based on the simple IBW
    pub simple: WeightPair,
    /// Based on the Hamwi IBW
    pub hamwi: WeightPair,
}

/// Waist circumference risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaistRisk {
    /// Below the increased-risk threshold
    Normal,
    /// Increased risk
    Increased,
    /// Substantially increased risk
    High,
}

/// Waist-to-hip risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhrRisk {
    /// At or below the threshold
    Low,
    /// Above the threshold
    High,
}

/// Waist-to-hip ratio with its risk class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaistHipRatio {
    /// waist / hip
    pub ratio: f64,
    /// Two-decimal display string
    pub display: String,
    /// Risk class
    pub risk: WhrRisk,
}

/// Waist-to-height band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhtrBand {
    /// Below 0.35
    Underweight,
    /// Slim
    Slim,
    /// Healthy
    Healthy,
    /// Overweight
    Overweight,
    /// Obese
    Obese,
    /// Very obese
    VeryObese,
}

/// Waist-to-height ratio with its band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaistHeightRatio {
    /// waist / height
    pub ratio: f64,
    /// Two-decimal display string
    pub display: String,
    /// Band
    pub band: WhtrBand,
}

/// Mid-upper-arm derived estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmAnthropometry {
    /// BMI estimated from MAC
    pub estimated_bmi: f64,
    /// Mid-arm muscle circumference (cm), needs a triceps skinfold
    pub mamc_cm: Option<f64>,
}

/// Output of the anthropometric stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anthropometrics {
    /// Scale weight minus fluid corrections, floored at zero
    pub dry_weight_kg: f64,
    /// Selected weight as entered
    pub selected_weight_kg: f64,
    /// BMI from dry weight
    pub bmi_dry: BmiAssessment,
    /// BMI from selected weight
    pub bmi_selected: BmiAssessment,
    /// Ideal body weight
    pub ideal_body_weight: IdealBodyWeight,
    /// Adjusted body weight
    pub adjusted_body_weight: AdjustedBodyWeight,
    /// Osterkamp-corrected weight, only with a valid amputation percentage
    pub amputation_adjusted_weight_kg: Option<f64>,
    /// Waist risk, needs a waist measurement
    pub waist_risk: Option<WaistRisk>,
    /// Waist-to-hip ratio, needs waist and hip
    pub waist_hip_ratio: Option<WaistHipRatio>,
    /// Waist-to-height ratio, needs waist and height
    pub waist_height_ratio: Option<WaistHeightRatio>,
    /// Mid-arm estimates, needs a MAC
    pub arm: Option<ArmAnthropometry>,
}

/// Scale weight minus ascites and edema corrections, never negative
#[must_use]
pub fn dry_weight(current_kg: f64, ascites_kg: f64, edema_kg: f64) -> f64 {
    (current_kg - ascites_kg - edema_kg).max(0.0)
}

/// Body mass index, 0 when height is not positive
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI; boundary values fall into the higher band
#[must_use]
pub fn classify_bmi(value: f64) -> BmiStatus {
    if value < bmi_cuts::UNDERWEIGHT_BELOW {
        BmiStatus::Underweight
    } else if value < bmi_cuts::OVERWEIGHT_FROM {
        BmiStatus::Normal
    } else if value < bmi_cuts::OBESE_FROM {
        BmiStatus::Overweight
    } else {
        BmiStatus::Obese
    }
}

/// BMI with classification; unclassified when it cannot be computed
#[must_use]
pub fn assess_bmi(weight_kg: f64, height_cm: f64) -> BmiAssessment {
    let value = bmi(weight_kg, height_cm);
    let status = (value > 0.0).then(|| classify_bmi(value));
    BmiAssessment {
        value,
        status,
        severity: status.map(BmiStatus::severity),
    }
}

/// Broca ideal body weight
#[must_use]
pub fn ideal_weight_simple(height_cm: f64) -> f64 {
    (height_cm - body_weight::BROCA_OFFSET_CM).max(0.0)
}

/// Hamwi ideal body weight, floored at zero for very short statures
#[must_use]
pub fn ideal_weight_hamwi(gender: Gender, height_cm: f64) -> f64 {
    let base = match gender {
        Gender::Male => body_weight::HAMWI_BASE_MALE_KG,
        Gender::Female => body_weight::HAMWI_BASE_FEMALE_KG,
    };
    (height_cm - body_weight::HAMWI_REFERENCE_HEIGHT_CM)
        .mul_add(body_weight::HAMWI_KG_PER_CM, base)
        .max(0.0)
}

/// Adjusted body weight: IBW plus a gendered share of the excess
#[must_use]
pub fn adjusted_weight(gender: Gender, weight_kg: f64, ideal_kg: f64) -> f64 {
    let multiplier = match gender {
        Gender::Male => body_weight::ABW_MULTIPLIER_MALE,
        Gender::Female => body_weight::ABW_MULTIPLIER_FEMALE,
    };
    (weight_kg - ideal_kg).mul_add(multiplier, ideal_kg)
}

/// Osterkamp amputation correction
///
/// Estimates the weight the patient would have with intact limbs.
#[must_use]
pub fn amputation_adjusted_weight(dry_weight_kg: f64, amputation_percent: f64) -> Option<f64> {
    if amputation_percent <= 0.0 {
        return None;
    }
    let remaining = 100.0 - amputation_percent;
    (remaining > 0.0).then(|| dry_weight_kg / remaining * 100.0)
}

/// Waist circumference risk class
#[must_use]
pub fn waist_risk(gender: Gender, waist_cm: f64) -> Option<WaistRisk> {
    if waist_cm <= 0.0 {
        return None;
    }
    let (high, increased) = match gender {
        Gender::Male => (waist::MALE_HIGH_RISK_CM, waist::MALE_INCREASED_RISK_CM),
        Gender::Female => (waist::FEMALE_HIGH_RISK_CM, waist::FEMALE_INCREASED_RISK_CM),
    };
    Some(if waist_cm >= high {
        WaistRisk::High
    } else if waist_cm >= increased {
        WaistRisk::Increased
    } else {
        WaistRisk::Normal
    })
}

/// Waist-to-hip ratio
#[must_use]
pub fn waist_hip_ratio(gender: Gender, waist_cm: f64, hip_cm: f64) -> Option<WaistHipRatio> {
    if waist_cm <= 0.0 || hip_cm <= 0.0 {
        return None;
    }
    let ratio = waist_cm / hip_cm;
    let threshold = match gender {
        Gender::Male => waist::WHR_MALE_THRESHOLD,
        Gender::Female => waist::WHR_FEMALE_THRESHOLD,
    };
    let risk = if ratio > threshold {
        WhrRisk::High
    } else {
        WhrRisk::Low
    };
    Some(WaistHipRatio {
        ratio,
        display: format!("{ratio:.2}"),
        risk,
    })
}

/// Waist-to-height ratio
#[must_use]
pub fn waist_height_ratio(
    gender: Gender,
    waist_cm: f64,
    height_cm: f64,
) -> Option<WaistHeightRatio> {
    if waist_cm <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let ratio = waist_cm / height_cm;
    let [slim, healthy, overweight, obese] = match gender {
        Gender::Male => waist::WHTR_MALE_CUTS,
        Gender::Female => waist::WHTR_FEMALE_CUTS,
    };
    let band = if ratio < waist::WHTR_UNDERWEIGHT_BELOW {
        WhtrBand::Underweight
    } else if ratio < slim {
        WhtrBand::Slim
    } else if ratio < healthy {
        WhtrBand::Healthy
    } else if ratio < overweight {
        WhtrBand::Overweight
    } else if ratio < obese {
        WhtrBand::Obese
    } else {
        WhtrBand::VeryObese
    };
    Some(WaistHeightRatio {
        ratio,
        display: format!("{ratio:.2}"),
        band,
    })
}

/// MAC-estimated BMI and mid-arm muscle circumference
#[must_use]
pub fn arm_anthropometry(gender: Gender, mac_cm: f64, tsf_mm: f64) -> Option<ArmAnthropometry> {
    if mac_cm <= 0.0 {
        return None;
    }
    let estimated_bmi = match gender {
        Gender::Male => arm::MALE_SLOPE.mul_add(mac_cm, arm::MALE_INTERCEPT),
        Gender::Female => arm::FEMALE_SLOPE.mul_add(mac_cm, arm::FEMALE_INTERCEPT),
    };
    let mamc_cm = (tsf_mm > 0.0).then(|| arm::MAMC_SKINFOLD_FACTOR.mul_add(-tsf_mm, mac_cm));
    Some(ArmAnthropometry {
        estimated_bmi,
        mamc_cm,
    })
}

/// Run the anthropometric stage
#[must_use]
pub fn derive(profile: &PatientProfile) -> Anthropometrics {
    let gender = profile.gender;
    let height = profile.height_cm;
    let dry = dry_weight(
        profile.current_weight_kg,
        profile.ascites.correction_kg(),
        profile.edema.correction_kg(),
    );
    let selected = profile.selected_weight_kg;

    let ideal = IdealBodyWeight {
        simple_kg: ideal_weight_simple(height),
        hamwi_kg: ideal_weight_hamwi(gender, height),
    };
    let adjusted = AdjustedBodyWeight {
        simple: WeightPair {
            dry: adjusted_weight(gender, dry, ideal.simple_kg),
            selected: adjusted_weight(gender, selected, ideal.simple_kg),
        },
        hamwi: WeightPair {
            dry: adjusted_weight(gender, dry, ideal.hamwi_kg),
            selected: adjusted_weight(gender, selected, ideal.hamwi_kg),
        },
    };

    let result = Anthropometrics {
        dry_weight_kg: dry,
        selected_weight_kg: selected,
        bmi_dry: assess_bmi(dry, height),
        bmi_selected: assess_bmi(selected, height),
        ideal_body_weight: ideal,
        adjusted_body_weight: adjusted,
        amputation_adjusted_weight_kg: amputation_adjusted_weight(dry, profile.amputation_percent),
        waist_risk: waist_risk(gender, profile.waist_cm),
        waist_hip_ratio: waist_hip_ratio(gender, profile.waist_cm, profile.hip_cm),
        waist_height_ratio: waist_height_ratio(gender, profile.waist_cm, height),
        arm: arm_anthropometry(
            gender,
            profile.mid_arm_circumference_cm,
            profile.triceps_skinfold_mm,
        ),
    };

    debug!(
        dry_weight_kg = result.dry_weight_kg,
        bmi_dry = result.bmi_dry.value,
        ibw_hamwi_kg = result.ideal_body_weight.hamwi_kg,
        "Anthropometrics derived"
    );
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EPS: f64 = 0.01;

    #[test]
    fn test_dry_weight_floor() {
        assert!(dry_weight(10.0, 14.0, 10.0).abs() < f64::EPSILON);
        assert!((dry_weight(80.0, 6.0, 1.0) - 73.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_scenario_male_170_70() {
        let assessment = assess_bmi(70.0, 170.0);
        assert!((assessment.value - 24.22).abs() < EPS);
        assert_eq!(assessment.status, Some(BmiStatus::Normal));
        assert_eq!(assessment.severity, Some(SeverityTier::Ok));
    }

    #[test]
    fn test_bmi_boundaries_fall_into_higher_band() {
        assert_eq!(classify_bmi(18.5), BmiStatus::Normal);
        assert_eq!(classify_bmi(25.0), BmiStatus::Overweight);
        assert_eq!(classify_bmi(30.0), BmiStatus::Obese);
        assert_eq!(classify_bmi(18.499), BmiStatus::Underweight);
    }

    #[test]
    fn test_zero_height_leaves_bmi_unclassified() {
        let assessment = assess_bmi(70.0, 0.0);
        assert!(assessment.value.abs() < f64::EPSILON);
        assert!(assessment.status.is_none());
        assert!(assessment.severity.is_none());
    }

    #[test]
    fn test_ideal_weights() {
        assert!((ideal_weight_simple(170.0) - 70.0).abs() < EPS);
        assert!((ideal_weight_hamwi(Gender::Male, 170.0) - 64.4).abs() < EPS);
        assert!((ideal_weight_hamwi(Gender::Female, 170.0) - 59.9).abs() < EPS);
        assert!(ideal_weight_simple(80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_adjusted_weight_male_and_female() {
        assert!((adjusted_weight(Gender::Male, 70.0, 64.4) - 66.528).abs() < 1e-9);
        assert!((adjusted_weight(Gender::Female, 100.0, 60.0) - 72.8).abs() < 1e-9);
    }

    #[test]
    fn test_amputation_adjusted_weight() {
        assert!(amputation_adjusted_weight(70.0, 0.0).is_none());
        assert!(amputation_adjusted_weight(70.0, 100.0).is_none());
        let adjusted = amputation_adjusted_weight(64.1, 5.9).unwrap();
        assert!((adjusted - 68.119).abs() < EPS);
    }

    #[test]
    fn test_waist_risk_thresholds() {
        assert_eq!(waist_risk(Gender::Male, 102.0), Some(WaistRisk::High));
        assert_eq!(waist_risk(Gender::Male, 94.0), Some(WaistRisk::Increased));
        assert_eq!(waist_risk(Gender::Male, 93.9), Some(WaistRisk::Normal));
        assert_eq!(waist_risk(Gender::Female, 88.0), Some(WaistRisk::High));
        assert_eq!(waist_risk(Gender::Female, 80.0), Some(WaistRisk::Increased));
        assert_eq!(waist_risk(Gender::Female, 0.0), None);
    }

    #[test]
    fn test_waist_hip_ratio_threshold_is_inclusive_low() {
        let at_threshold = waist_hip_ratio(Gender::Male, 90.0, 100.0).unwrap();
        assert_eq!(at_threshold.risk, WhrRisk::Low);
        assert_eq!(at_threshold.display, "0.90");

        let female = waist_hip_ratio(Gender::Female, 86.0, 100.0).unwrap();
        assert_eq!(female.risk, WhrRisk::High);
        assert!(waist_hip_ratio(Gender::Female, 86.0, 0.0).is_none());
    }

    #[test]
    fn test_waist_height_bands() {
        let band = |gender, waist| waist_height_ratio(gender, waist, 100.0).unwrap().band;
        assert_eq!(band(Gender::Male, 34.0), WhtrBand::Underweight);
        assert_eq!(band(Gender::Male, 40.0), WhtrBand::Slim);
        assert_eq!(band(Gender::Male, 43.0), WhtrBand::Healthy);
        assert_eq!(band(Gender::Male, 55.0), WhtrBand::Overweight);
        assert_eq!(band(Gender::Male, 60.0), WhtrBand::Obese);
        assert_eq!(band(Gender::Male, 63.0), WhtrBand::VeryObese);
        assert_eq!(band(Gender::Female, 50.0), WhtrBand::Overweight);
        assert_eq!(band(Gender::Female, 58.0), WhtrBand::VeryObese);
    }

    #[test]
    fn test_arm_anthropometry() {
        assert!(arm_anthropometry(Gender::Male, 0.0, 12.0).is_none());

        let male = arm_anthropometry(Gender::Male, 30.0, 0.0).unwrap();
        assert!((male.estimated_bmi - 25.6).abs() < EPS);
        assert!(male.mamc_cm.is_none());

        let female = arm_anthropometry(Gender::Female, 28.0, 20.0).unwrap();
        assert!((female.estimated_bmi - 24.1).abs() < EPS);
        assert!((female.mamc_cm.unwrap() - 21.72).abs() < EPS);
    }
}
