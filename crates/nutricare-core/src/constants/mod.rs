// ABOUTME: Clinical constants for anthropometric classification and energy equations
// ABOUTME: Cut points, multipliers, and reference tables grouped by clinical domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Clinical constants based on nutrition and anthropometry guidelines
//!
//! Every threshold the engine branches on lives here so the branching code
//! reads as a table lookup and the numbers can be reviewed in one place.

/// Body mass index cut points (kg/m²)
///
/// Reference: WHO Technical Report Series 894 (2000), Obesity: preventing and
/// managing the global epidemic.
pub mod bmi {
    /// Lower bound of the normal band; values below are underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Lower bound of the overweight band
    pub const OVERWEIGHT_FROM: f64 = 25.0;
    /// Lower bound of the obese band
    pub const OBESE_FROM: f64 = 30.0;
    /// Above this BMI the M1 method drops to its reduced factor
    pub const SEVERE_OBESITY_ABOVE: f64 = 40.0;
}

/// Ideal and adjusted body weight coefficients
///
/// Reference: Hamwi, G.J. (1964). Therapy: changing dietary concepts.
pub mod body_weight {
    /// Height offset for the simple (Broca) ideal body weight
    pub const BROCA_OFFSET_CM: f64 = 100.0;
    /// Reference height for the Hamwi formula
    pub const HAMWI_REFERENCE_HEIGHT_CM: f64 = 154.0;
    /// kg per cm above the reference height
    pub const HAMWI_KG_PER_CM: f64 = 0.9;
    /// Hamwi base weight, male
    pub const HAMWI_BASE_MALE_KG: f64 = 50.0;
    /// Hamwi base weight, female
    pub const HAMWI_BASE_FEMALE_KG: f64 = 45.5;
    /// Adjusted body weight multiplier, male
    pub const ABW_MULTIPLIER_MALE: f64 = 0.38;
    /// Adjusted body weight multiplier, female
    pub const ABW_MULTIPLIER_FEMALE: f64 = 0.32;
    /// Excess over Hamwi IBW above which adjusted weight is recommended
    pub const HIGH_OBESITY_MARGIN: f64 = 0.30;
}

/// Central adiposity thresholds
///
/// References:
/// - Lean, M.E. et al. (1995). Waist circumference as a measure for indicating
///   need for weight management. *BMJ*, 311, 158-161.
/// - Ashwell, M. & Gibson, S. (2016). Waist-to-height ratio as an indicator of
///   early health risk. *BMJ Open*, 6(3).
pub mod waist {
    /// Waist circumference, male: substantially increased risk (cm)
    pub const MALE_HIGH_RISK_CM: f64 = 102.0;
    /// Waist circumference, male: increased risk (cm)
    pub const MALE_INCREASED_RISK_CM: f64 = 94.0;
    /// Waist circumference, female: substantially increased risk (cm)
    pub const FEMALE_HIGH_RISK_CM: f64 = 88.0;
    /// Waist circumference, female: increased risk (cm)
    pub const FEMALE_INCREASED_RISK_CM: f64 = 80.0;

    /// Waist-to-hip ratio threshold, male
    pub const WHR_MALE_THRESHOLD: f64 = 0.90;
    /// Waist-to-hip ratio threshold, female
    pub const WHR_FEMALE_THRESHOLD: f64 = 0.85;

    /// Waist-to-height ratio below which a patient is classed underweight
    pub const WHTR_UNDERWEIGHT_BELOW: f64 = 0.35;
    /// Waist-to-height upper cut points (slim, healthy, overweight, obese), male
    pub const WHTR_MALE_CUTS: [f64; 4] = [0.43, 0.53, 0.58, 0.63];
    /// Waist-to-height upper cut points (slim, healthy, overweight, obese), female
    pub const WHTR_FEMALE_CUTS: [f64; 4] = [0.42, 0.49, 0.54, 0.58];
}

/// Mid-upper-arm anthropometry
///
/// Reference: Powell-Tuck, J. & Hennessy, E.M. (2003). A comparison of mid upper
/// arm circumference, body mass index and weight loss as indices of undernutrition.
pub mod arm {
    /// MAC→BMI slope, male
    pub const MALE_SLOPE: f64 = 1.01;
    /// MAC→BMI intercept, male
    pub const MALE_INTERCEPT: f64 = -4.7;
    /// MAC→BMI slope, female
    pub const FEMALE_SLOPE: f64 = 1.10;
    /// MAC→BMI intercept, female
    pub const FEMALE_INTERCEPT: f64 = -6.7;
    /// π/10: converts a triceps skinfold in mm to a circumference correction in cm
    pub const MAMC_SKINFOLD_FACTOR: f64 = 0.314;
}

/// Body composition estimation
///
/// Reference: Deurenberg, P. et al. (1991). Body mass index as a measure of body
/// fatness: age- and sex-specific prediction formulas. *Br J Nutr*, 65(2), 105-114.
pub mod body_fat {
    /// BMI coefficient
    pub const DEURENBERG_BMI_COEF: f64 = 1.20;
    /// Age coefficient
    pub const DEURENBERG_AGE_COEF: f64 = 0.23;
    /// Sex coefficient (applied with sex = 1 for male)
    pub const DEURENBERG_SEX_COEF: f64 = 10.8;
    /// Constant term
    pub const DEURENBERG_CONSTANT: f64 = 5.4;
}

/// Energy expenditure multipliers shared by the predictive equations
pub mod energy {
    /// Activity factor used when the profile leaves it unset
    pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;
    /// Thermic effect of food markup applied on top of activity
    pub const THERMIC_EFFECT_FACTOR: f64 = 1.1;
    /// ACCP kcal per kg
    pub const ACCP_KCAL_PER_KG: f64 = 25.0;
}

/// Activity factor boundaries used to map the unitless multiplier onto tiers
pub mod activity {
    /// Below this the patient is sedentary
    pub const LOW_ACTIVE_FROM: f64 = 1.3;
    /// Below this the patient is low-active
    pub const ACTIVE_FROM: f64 = 1.5;
    /// Below this the patient is active; at or above, very active
    pub const VERY_ACTIVE_FROM: f64 = 1.7;
}

/// Age boundaries (years) shared across stages
pub mod age {
    /// Below this age the resolver exposes a years/months/days breakdown
    pub const BREAKDOWN_BELOW_YEARS: u32 = 20;
    /// Default elderly advisory threshold
    pub const ELDERLY_FROM_YEARS: u32 = 65;
    /// First age at which IOM adult equations apply
    pub const IOM_ADULT_FROM_YEARS: u32 = 19;
    /// Upper bound (inclusive, in months) of the IOM infant/toddler equations
    pub const IOM_TODDLER_MAX_MONTHS: u32 = 36;
}
