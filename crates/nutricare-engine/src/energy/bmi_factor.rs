// ABOUTME: Method 1 energy requirement: kcal/kg factor tiered on BMI
// ABOUTME: 15 kcal/kg above BMI 40, otherwise 20 kcal/kg
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutricare_core::constants::bmi::SEVERE_OBESITY_ABOVE;
use serde::{Deserialize, Serialize};

const REDUCED_FACTOR: f64 = 15.0;
const STANDARD_FACTOR: f64 = 20.0;

/// One BMI/weight pair evaluated under M1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiFactorEstimate {
    /// BMI the factor was chosen from
    pub bmi: f64,
    /// kcal per kg
    pub factor_kcal_per_kg: f64,
    /// kcal/day
    pub kcal: f64,
}

/// M1 result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiFactorMethod {
    /// Dry-weight BMI and dry weight
    pub dry: BmiFactorEstimate,
    /// Selected-weight BMI and selected weight
    pub selected: BmiFactorEstimate,
}

/// kcal/kg factor for a BMI
#[must_use]
pub fn factor_for_bmi(bmi: f64) -> f64 {
    if bmi > SEVERE_OBESITY_ABOVE {
        REDUCED_FACTOR
    } else {
        STANDARD_FACTOR
    }
}

/// Evaluate one BMI/weight pair
#[must_use]
pub fn estimate(bmi: f64, weight_kg: f64) -> BmiFactorEstimate {
    let factor = factor_for_bmi(bmi);
    BmiFactorEstimate {
        bmi,
        factor_kcal_per_kg: factor,
        kcal: factor * weight_kg,
    }
}

/// Run M1 for both weight bases
#[must_use]
pub fn calculate(
    bmi_dry: f64,
    dry_weight_kg: f64,
    bmi_selected: f64,
    selected_weight_kg: f64,
) -> BmiFactorMethod {
    BmiFactorMethod {
        dry: estimate(bmi_dry, dry_weight_kg),
        selected: estimate(bmi_selected, selected_weight_kg),
    }
}
