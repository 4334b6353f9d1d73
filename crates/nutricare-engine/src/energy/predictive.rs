// ABOUTME: Method 3 energy requirement: seven predictive BMR equations evaluated side by side
// ABOUTME: Converts resting estimates to total energy expenditure and applies the deficit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricare_core::constants::{bmi::OVERWEIGHT_FROM, energy::ACCP_KCAL_PER_KG};
use nutricare_core::errors::AppError;
use nutricare_core::models::Gender;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// WHO/FAO/UNU (1985) weight-and-height coefficients `(weight, height_m, constant)`
/// per age band: <3, <10, <18, <30, <60, ≥60
const WHO_FAO_MALE: [(f64, f64, f64); 6] = [
    (0.167, 1517.4, -617.6),
    (19.59, 130.3, 414.9),
    (16.25, 137.2, 515.5),
    (15.4, -27.0, 717.0),
    (11.3, 16.0, 901.0),
    (8.8, 1128.0, -1071.0),
];
const WHO_FAO_FEMALE: [(f64, f64, f64); 6] = [
    (16.25, 1023.2, -413.5),
    (16.97, 161.8, 371.2),
    (8.365, 465.0, 200.0),
    (13.3, 334.0, 35.0),
    (8.7, -25.0, 865.0),
    (9.2, 637.0, -302.0),
];

/// Schofield (1985) weight-only coefficients `(weight, constant)` per band: <3, <10, <18, ≥18
const SCHOFIELD_MALE: [(f64, f64); 4] = [
    (59.512, -30.4),
    (22.706, 504.3),
    (17.686, 658.2),
    (15.057, 692.2),
];
const SCHOFIELD_FEMALE: [(f64, f64); 4] = [
    (58.317, -31.1),
    (20.315, 485.9),
    (13.384, 692.6),
    (14.818, 486.6),
];

/// Predictive energy equation
///
/// # Scientific References
///
/// - Harris, J.A. & Benedict, F.G. (1918). *A Biometric Study of Basal Metabolism in Man*.
/// - Mifflin, M.D. et al. (1990). "A new predictive equation for resting energy expenditure." *Am J Clin Nutr*, 51(2), 241-247.
/// - FAO/WHO/UNU (1985). *Energy and Protein Requirements*. Technical Report Series 724.
/// - Schofield, W.N. (1985). "Predicting basal metabolic rate." *Hum Nutr Clin Nutr*, 39C(Suppl 1), 5-41.
/// - Cerra, F.B. et al. (1997). "Applied nutrition in ICU patients: ACCP consensus statement." *Chest*, 111(3), 769-778.
/// - Ireton-Jones, C. & Jones, J.D. (2002). "Improved equations for predicting energy expenditure." *Nutr Clin Pract*, 17(1), 29-31.
/// - Katch, F.I. & McArdle, W.D. (1996). *Nutrition, Weight Control, and Exercise*.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PredictiveEquation {
    /// Harris-Benedict (1918)
    HarrisBenedict,
    /// Mifflin-St Jeor (1990)
    MifflinStJeor,
    /// WHO/FAO/UNU (1985), weight and height
    WhoFao,
    /// Schofield (1985), weight only
    Schofield,
    /// ACCP consensus, 25 kcal/kg
    Accp,
    /// Ireton-Jones, spontaneously breathing
    IretonJones,
    /// Katch-McArdle, lean-mass based
    KatchMcArdle,
}

impl Default for PredictiveEquation {
    fn default() -> Self {
        Self::MifflinStJeor
    }
}

/// What one equation needs for one weight basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationInputs {
    /// Biological sex
    pub gender: Gender,
    /// Age in years
    pub age_years: u32,
    /// Weight of this basis (kg)
    pub weight_kg: f64,
    /// Dry weight (kg), shared by both bases; Ireton-Jones is defined on it
    pub dry_weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// BMI of this basis
    pub bmi: f64,
    /// Hamwi ideal body weight (kg)
    pub ibw_hamwi_kg: f64,
    /// Lean mass (kg) from body composition, shared by both bases
    pub lean_mass_kg: Option<f64>,
}

impl PredictiveEquation {
    /// Every equation, in reporting order
    pub const ALL: [Self; 7] = [
        Self::HarrisBenedict,
        Self::MifflinStJeor,
        Self::WhoFao,
        Self::Schofield,
        Self::Accp,
        Self::IretonJones,
        Self::KatchMcArdle,
    ];

    /// Evaluate the equation, `None` when its inputs are unavailable
    #[must_use]
    pub fn evaluate(&self, inputs: &EquationInputs) -> Option<f64> {
        let EquationInputs {
            gender,
            age_years,
            weight_kg,
            height_cm,
            ..
        } = *inputs;
        match self {
            Self::HarrisBenedict => Some(harris_benedict(gender, weight_kg, height_cm, age_years)),
            Self::MifflinStJeor => Some(mifflin_st_jeor(gender, weight_kg, height_cm, age_years)),
            Self::WhoFao => Some(who_fao(gender, weight_kg, height_cm / 100.0, age_years)),
            Self::Schofield => Some(schofield(gender, weight_kg, age_years)),
            Self::Accp => Some(accp(weight_kg, inputs.bmi, inputs.ibw_hamwi_kg)),
            Self::IretonJones => Some(ireton_jones(gender, inputs.dry_weight_kg, age_years)),
            Self::KatchMcArdle => inputs.lean_mass_kg.map(katch_mcardle),
        }
    }

    /// Whether the result is a resting rate that gets converted to TEE
    ///
    /// ACCP and Ireton-Jones already estimate total requirement.
    #[must_use]
    pub const fn converts_to_tee(&self) -> bool {
        !matches!(self, Self::Accp | Self::IretonJones)
    }

    /// Get equation name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HarrisBenedict => "harris_benedict",
            Self::MifflinStJeor => "mifflin_st_jeor",
            Self::WhoFao => "who_fao",
            Self::Schofield => "schofield",
            Self::Accp => "accp",
            Self::IretonJones => "ireton_jones",
            Self::KatchMcArdle => "katch_mcardle",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::HarrisBenedict => {
                "male 66.473 + 13.7516W + 5.0033H - 6.755A; female 655.0955 + 9.5634W + 1.8496H - 4.6756A"
            }
            Self::MifflinStJeor => "10W + 6.25H - 5A + 5 (male) / - 161 (female)",
            Self::WhoFao => "age/sex banded aW + bH(m) + c",
            Self::Schofield => "age/sex banded aW + c",
            Self::Accp => "25 x W (Hamwi IBW when BMI > 25)",
            Self::IretonJones => "1784 - 11A + 5 x dry W + 244 (male)",
            Self::KatchMcArdle => "370 + 21.6 x lean mass",
        }
    }
}

impl FromStr for PredictiveEquation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "harris_benedict" | "harris" => Ok(Self::HarrisBenedict),
            "mifflin_st_jeor" | "mifflin" => Ok(Self::MifflinStJeor),
            "who_fao" | "who" => Ok(Self::WhoFao),
            "schofield" => Ok(Self::Schofield),
            "accp" => Ok(Self::Accp),
            "ireton_jones" => Ok(Self::IretonJones),
            "katch_mcardle" | "katch" => Ok(Self::KatchMcArdle),
            other => Err(AppError::invalid_input(format!(
                "Unknown predictive equation: '{other}'. Valid options: harris_benedict, \
                 mifflin_st_jeor, who_fao, schofield, accp, ireton_jones, katch_mcardle"
            ))),
        }
    }
}

/// Harris-Benedict basal metabolic rate (kcal/day)
#[must_use]
pub fn harris_benedict(gender: Gender, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let age = f64::from(age_years);
    match gender {
        Gender::Male => 13.7516f64.mul_add(
            weight_kg,
            5.0033f64.mul_add(height_cm, 6.755f64.mul_add(-age, 66.473)),
        ),
        Gender::Female => 9.5634f64.mul_add(
            weight_kg,
            1.8496f64.mul_add(height_cm, 4.6756f64.mul_add(-age, 655.0955)),
        ),
    }
}

/// Mifflin-St Jeor resting energy expenditure (kcal/day)
#[must_use]
pub fn mifflin_st_jeor(gender: Gender, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let sex_constant = if gender.is_male() { 5.0 } else { -161.0 };
    10.0f64.mul_add(
        weight_kg,
        6.25f64.mul_add(height_cm, 5.0f64.mul_add(-f64::from(age_years), sex_constant)),
    )
}

const fn who_fao_band(age_years: u32) -> usize {
    match age_years {
        0..=2 => 0,
        3..=9 => 1,
        10..=17 => 2,
        18..=29 => 3,
        30..=59 => 4,
        _ => 5,
    }
}

/// WHO/FAO/UNU basal metabolic rate from weight and height in metres (kcal/day)
#[must_use]
pub fn who_fao(gender: Gender, weight_kg: f64, height_m: f64, age_years: u32) -> f64 {
    let table = if gender.is_male() {
        &WHO_FAO_MALE
    } else {
        &WHO_FAO_FEMALE
    };
    let (weight_coef, height_coef, constant) = table[who_fao_band(age_years)];
    weight_coef.mul_add(weight_kg, height_coef.mul_add(height_m, constant))
}

const fn schofield_band(age_years: u32) -> usize {
    match age_years {
        0..=2 => 0,
        3..=9 => 1,
        10..=17 => 2,
        _ => 3,
    }
}

/// Schofield weight-only basal metabolic rate (kcal/day)
#[must_use]
pub fn schofield(gender: Gender, weight_kg: f64, age_years: u32) -> f64 {
    let table = if gender.is_male() {
        &SCHOFIELD_MALE
    } else {
        &SCHOFIELD_FEMALE
    };
    let (weight_coef, constant) = table[schofield_band(age_years)];
    weight_coef.mul_add(weight_kg, constant)
}

/// ACCP 25 kcal/kg; above BMI 25 the Hamwi ideal weight replaces actual weight
#[must_use]
pub fn accp(weight_kg: f64, bmi: f64, ibw_hamwi_kg: f64) -> f64 {
    let basis = if bmi > OVERWEIGHT_FROM {
        ibw_hamwi_kg
    } else {
        weight_kg
    };
    ACCP_KCAL_PER_KG * basis
}

/// Ireton-Jones (spontaneously breathing) energy expenditure (kcal/day)
#[must_use]
pub fn ireton_jones(gender: Gender, dry_weight_kg: f64, age_years: u32) -> f64 {
    let male_term = if gender.is_male() { 244.0 } else { 0.0 };
    5.0f64.mul_add(dry_weight_kg, 11.0f64.mul_add(-f64::from(age_years), 1784.0)) + male_term
}

/// Katch-McArdle resting metabolic rate from lean mass (kcal/day)
#[must_use]
pub fn katch_mcardle(lean_mass_kg: f64) -> f64 {
    21.6f64.mul_add(lean_mass_kg, 370.0)
}

/// Total energy expenditure: BMR × activity factor × thermic effect of food
#[must_use]
pub fn total_energy_expenditure(bmr: f64, activity_factor: f64, thermic_effect_factor: f64) -> f64 {
    bmr * activity_factor * thermic_effect_factor
}

/// One equation evaluated for one weight basis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquationEstimate {
    /// Resting rate, or the reported figure for ACCP and Ireton-Jones (kcal/day)
    pub kcal: f64,
    /// Total energy expenditure, for resting equations only
    pub tee: Option<f64>,
    /// TEE minus the deficit; selected weight basis only
    pub net_tee: Option<f64>,
}

/// All equations for one weight basis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquationSet {
    /// Harris-Benedict
    pub harris_benedict: EquationEstimate,
    /// Mifflin-St Jeor
    pub mifflin_st_jeor: EquationEstimate,
    /// WHO/FAO/UNU
    pub who_fao: EquationEstimate,
    /// Schofield
    pub schofield: EquationEstimate,
    /// ACCP
    pub accp: EquationEstimate,
    /// Ireton-Jones
    pub ireton_jones: EquationEstimate,
    /// Katch-McArdle, absent without a lean mass
    pub katch_mcardle: Option<EquationEstimate>,
}

impl EquationSet {
    /// Look up one equation's estimate
    #[must_use]
    pub const fn get(&self, equation: PredictiveEquation) -> Option<&EquationEstimate> {
        match equation {
            PredictiveEquation::HarrisBenedict => Some(&self.harris_benedict),
            PredictiveEquation::MifflinStJeor => Some(&self.mifflin_st_jeor),
            PredictiveEquation::WhoFao => Some(&self.who_fao),
            PredictiveEquation::Schofield => Some(&self.schofield),
            PredictiveEquation::Accp => Some(&self.accp),
            PredictiveEquation::IretonJones => Some(&self.ireton_jones),
            PredictiveEquation::KatchMcArdle => self.katch_mcardle.as_ref(),
        }
    }
}

/// M3 result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictiveEnsemble {
    /// Activity factor applied (default substituted when unset)
    pub activity_factor: f64,
    /// Thermic effect of food multiplier applied
    pub thermic_effect_factor: f64,
    /// Deficit subtracted from the selected-weight TEE (kcal)
    pub deficit_kcal: f64,
    /// Dry weight basis
    pub dry: EquationSet,
    /// Selected weight basis, carrying net TEE
    pub selected: EquationSet,
}

/// Conversion settings shared by every equation in one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeeSettings {
    /// Effective activity factor
    pub activity_factor: f64,
    /// Thermic effect multiplier
    pub thermic_effect_factor: f64,
}

fn estimate_one(
    equation: PredictiveEquation,
    inputs: &EquationInputs,
    settings: TeeSettings,
    deficit_kcal: Option<f64>,
) -> Option<EquationEstimate> {
    let kcal = equation.evaluate(inputs)?;
    let tee = equation.converts_to_tee().then(|| {
        total_energy_expenditure(kcal, settings.activity_factor, settings.thermic_effect_factor)
    });
    let net_tee = deficit_kcal.and_then(|deficit| tee.map(|total| total - deficit));
    Some(EquationEstimate { kcal, tee, net_tee })
}

/// Evaluate every equation for one weight basis
///
/// `deficit_kcal` is `Some` only for the selected basis, where net TEE is reported.
#[must_use]
pub fn evaluate_set(
    inputs: &EquationInputs,
    settings: TeeSettings,
    deficit_kcal: Option<f64>,
) -> EquationSet {
    let always = |equation| {
        estimate_one(equation, inputs, settings, deficit_kcal).unwrap_or(EquationEstimate {
            kcal: 0.0,
            tee: None,
            net_tee: None,
        })
    };
    EquationSet {
        harris_benedict: always(PredictiveEquation::HarrisBenedict),
        mifflin_st_jeor: always(PredictiveEquation::MifflinStJeor),
        who_fao: always(PredictiveEquation::WhoFao),
        schofield: always(PredictiveEquation::Schofield),
        accp: always(PredictiveEquation::Accp),
        ireton_jones: always(PredictiveEquation::IretonJones),
        katch_mcardle: estimate_one(
            PredictiveEquation::KatchMcArdle,
            inputs,
            settings,
            deficit_kcal,
        ),
    }
}

/// Run M3 for both weight bases
#[must_use]
pub fn calculate(
    dry: &EquationInputs,
    selected: &EquationInputs,
    settings: TeeSettings,
    deficit_kcal: f64,
) -> PredictiveEnsemble {
    PredictiveEnsemble {
        activity_factor: settings.activity_factor,
        thermic_effect_factor: settings.thermic_effect_factor,
        deficit_kcal,
        dry: evaluate_set(dry, settings, None),
        selected: evaluate_set(selected, settings, Some(deficit_kcal)),
    }
}
