// ABOUTME: Recommendation protocol choosing ideal or adjusted body weight as the dosing weight
// ABOUTME: High obesity when dry weight exceeds Hamwi ideal weight by more than the margin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which weight the protocol recommends for dosing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetWeightBasis {
    /// Hamwi ideal body weight
    IdealBodyWeight,
    /// Hamwi adjusted body weight on dry weight
    AdjustedBodyWeight,
}

impl TargetWeightBasis {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IdealBodyWeight => "Use Ideal Body Weight",
            Self::AdjustedBodyWeight => "Use Adjusted Body Weight",
        }
    }
}

/// Protocol outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationProtocol {
    /// Hamwi ideal body weight (kg)
    pub ibw_hamwi_kg: f64,
    /// Excess allowance: IBW × margin (kg)
    pub ibw_margin_kg: f64,
    /// IBW + allowance (kg)
    pub threshold_kg: f64,
    /// Dry weight strictly above the threshold
    pub is_high_obesity: bool,
    /// Weight to dose on (kg)
    pub recommended_weight_kg: f64,
    /// Which weight was picked
    pub basis: TargetWeightBasis,
}

/// Run the protocol
///
/// `margin` is a fraction; 0.30 in the standard protocol.
#[must_use]
pub fn recommend(
    dry_weight_kg: f64,
    ibw_hamwi_kg: f64,
    abw_hamwi_dry_kg: f64,
    margin: f64,
) -> RecommendationProtocol {
    let ibw_margin_kg = ibw_hamwi_kg * margin;
    let threshold_kg = ibw_hamwi_kg + ibw_margin_kg;
    let is_high_obesity = dry_weight_kg > threshold_kg;
    let (recommended_weight_kg, basis) = if is_high_obesity {
        (abw_hamwi_dry_kg, TargetWeightBasis::AdjustedBodyWeight)
    } else {
        (ibw_hamwi_kg, TargetWeightBasis::IdealBodyWeight)
    };
    debug!(
        dry_weight_kg,
        threshold_kg,
        is_high_obesity,
        recommended_weight_kg,
        "recommendation protocol"
    );
    RecommendationProtocol {
        ibw_hamwi_kg,
        ibw_margin_kg,
        threshold_kg,
        is_high_obesity,
        recommended_weight_kg,
        basis,
    }
}
