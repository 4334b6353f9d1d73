// ABOUTME: Method 4 energy requirement: kcal/kg triples keyed on dry-weight BMI status
// ABOUTME: Sedentary, moderate and heavy activity figures for each weight basis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricare_core::constants::bmi::{OVERWEIGHT_FROM, UNDERWEIGHT_BELOW};
use serde::{Deserialize, Serialize};

/// Three-way weight status used by the ratio table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioWeightStatus {
    /// BMI < 18.5
    Underweight,
    /// 18.5 ≤ BMI < 25
    Normal,
    /// BMI ≥ 25
    Overweight,
}

impl RatioWeightStatus {
    /// Status from a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < OVERWEIGHT_FROM {
            Self::Normal
        } else {
            Self::Overweight
        }
    }

    /// kcal/kg factors for this status
    #[must_use]
    pub const fn factors(self) -> ActivityTriple {
        match self {
            Self::Underweight => ActivityTriple {
                sedentary: 35.0,
                moderate: 40.0,
                heavy: 47.5,
            },
            Self::Normal => ActivityTriple {
                sedentary: 30.0,
                moderate: 35.0,
                heavy: 40.0,
            },
            Self::Overweight => ActivityTriple {
                sedentary: 22.5,
                moderate: 30.0,
                heavy: 35.0,
            },
        }
    }
}

/// Sedentary / moderate / heavy values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityTriple {
    /// Sedentary
    pub sedentary: f64,
    /// Moderate activity
    pub moderate: f64,
    /// Heavy activity
    pub heavy: f64,
}

impl ActivityTriple {
    fn scaled(self, weight_kg: f64) -> Self {
        Self {
            sedentary: self.sedentary * weight_kg,
            moderate: self.moderate * weight_kg,
            heavy: self.heavy * weight_kg,
        }
    }
}

/// M4 result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioMethod {
    /// Status from dry-weight BMI; drives both bases
    pub status: RatioWeightStatus,
    /// kcal/kg factors
    pub factors: ActivityTriple,
    /// kcal/day on dry weight
    pub dry: ActivityTriple,
    /// kcal/day on selected weight
    pub selected: ActivityTriple,
}

/// Run M4
#[must_use]
pub fn calculate(bmi_dry: f64, dry_weight_kg: f64, selected_weight_kg: f64) -> RatioMethod {
    let status = RatioWeightStatus::from_bmi(bmi_dry);
    let factors = status.factors();
    RatioMethod {
        status,
        factors,
        dry: factors.scaled(dry_weight_kg),
        selected: factors.scaled(selected_weight_kg),
    }
}
