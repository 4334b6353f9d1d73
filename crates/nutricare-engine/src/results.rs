// ABOUTME: Result set produced by one engine run, plus the required-kcal selector
// ABOUTME: Optional blocks are absent rather than zero-filled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::age::ResolvedAge;
use crate::anthropometry::Anthropometrics;
use crate::body_composition::BodyComposition;
use crate::energy::bmi_factor::BmiFactorMethod;
use crate::energy::fixed_factor::FixedFactorMethod;
use crate::energy::iom::IomEstimate;
use crate::energy::minimum::MinimumRequirementMethod;
use crate::energy::predictive::{PredictiveEnsemble, PredictiveEquation};
use crate::energy::ratio::RatioMethod;
use crate::malnutrition::WeightChangeAssessment;
use crate::recommendation::RecommendationProtocol;
use nutricare_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Advisory shown alongside BMI for older patients
pub const ELDERLY_ADVISORY_MESSAGE: &str =
    "BMI cut points under-read adiposity in older adults; interpret weight status with care";

/// Everything one `compute` call derives from a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Age used by every stage
    pub age: ResolvedAge,
    /// Set when the patient reached the elderly age
    pub elderly_advisory: bool,
    /// Weights, BMI, waist and arm indices
    pub anthropometrics: Anthropometrics,
    /// Weight change against usual weight
    pub weight_change: WeightChangeAssessment,
    /// Body fat, fat and lean mass
    pub body_composition: Option<BodyComposition>,
    /// M1
    pub bmi_factor: BmiFactorMethod,
    /// M2
    pub fixed_factor: FixedFactorMethod,
    /// M3
    pub predictive: PredictiveEnsemble,
    /// M4
    pub ratio: RatioMethod,
    /// M5
    pub minimum_requirement: MinimumRequirementMethod,
    /// M6
    pub iom: IomEstimate,
    /// Ideal vs adjusted weight
    pub recommendation: RecommendationProtocol,
}

/// Which figure seeds the meal plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "method", content = "equation")]
pub enum RequiredKcalSource {
    /// Selected-weight net TEE of one predictive equation
    Predictive(PredictiveEquation),
    /// Selected-weight IOM estimated energy requirement
    Iom,
}

impl Default for RequiredKcalSource {
    fn default() -> Self {
        Self::Predictive(PredictiveEquation::MifflinStJeor)
    }
}

impl fmt::Display for RequiredKcalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predictive(equation) => f.write_str(equation.name()),
            Self::Iom => f.write_str("iom"),
        }
    }
}

impl FromStr for RequiredKcalSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("iom") {
            return Ok(Self::Iom);
        }
        s.parse().map(Self::Predictive)
    }
}

impl ResultSet {
    /// Single kcal/day figure handed to meal planning
    ///
    /// Predictive sources return the selected-weight net TEE; ACCP and
    /// Ireton-Jones have no TEE and return their reported figure. `None` when
    /// the source has no value for this patient (Katch-McArdle without lean
    /// mass, IOM infant bands).
    #[must_use]
    pub fn required_kcal(&self, source: RequiredKcalSource) -> Option<f64> {
        match source {
            RequiredKcalSource::Predictive(equation) => self
                .predictive
                .selected
                .get(equation)
                .map(|estimate| estimate.net_tee.unwrap_or(estimate.kcal)),
            RequiredKcalSource::Iom => self.iom.selected_kcal,
        }
    }

    /// Advisory text when the elderly flag is set
    #[must_use]
    pub const fn elderly_advisory_message(&self) -> Option<&'static str> {
        if self.elderly_advisory {
            Some(ELDERLY_ADVISORY_MESSAGE)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            "iom".parse::<RequiredKcalSource>().unwrap(),
            RequiredKcalSource::Iom
        );
        assert_eq!(
            "harris_benedict".parse::<RequiredKcalSource>().unwrap(),
            RequiredKcalSource::Predictive(PredictiveEquation::HarrisBenedict)
        );
        assert!("bogus".parse::<RequiredKcalSource>().is_err());
    }

    #[test]
    fn test_default_source_is_mifflin() {
        assert_eq!(
            RequiredKcalSource::default().to_string(),
            "mifflin_st_jeor"
        );
    }
}
