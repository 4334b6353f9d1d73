// ABOUTME: Weight change classifier comparing dry weight against usual weight
// ABOUTME: Duration-bucketed severe/moderate malnutrition cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Malnutrition / Weight Change Classifier
//!
//! # Reference
//!
//! Blackburn, G.L. et al. (1977). Nutritional and metabolic assessment of the
//! hospitalized patient. *JPEN*, 1(1), 11-22.

use nutricare_core::models::ChangeDuration;
use serde::{Deserialize, Serialize};

/// Classification of a weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightChangeClass {
    /// Weight went up; informational only
    WeightGain,
    /// Loss below the moderate cutoff for the window
    NoSignificantLoss,
    /// Loss at or above the moderate cutoff
    ModerateMalnutrition,
    /// Loss above the severe cutoff
    SevereMalnutrition,
}

impl WeightChangeClass {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WeightGain => "Weight Gain",
            Self::NoSignificantLoss => "No Significant Loss",
            Self::ModerateMalnutrition => "Moderate Malnutrition",
            Self::SevereMalnutrition => "Severe Malnutrition",
        }
    }
}

/// Weight loss assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightChangeAssessment {
    /// Percentage loss relative to usual weight; negative means gain
    pub loss_percent: f64,
    /// One-decimal display string
    pub display: String,
    /// Classification, absent when no label applies
    pub classification: Option<WeightChangeClass>,
}

/// (severe-above, moderate-from) cutoffs in percent for a window
const fn cutoffs(duration: ChangeDuration) -> Option<(f64, f64)> {
    match duration {
        ChangeDuration::Unset => None,
        ChangeDuration::OneWeek => Some((2.0, 1.0)),
        ChangeDuration::OneMonth => Some((5.0, 5.0)),
        ChangeDuration::ThreeMonths => Some((7.5, 7.5)),
        ChangeDuration::SixMonths => Some((10.0, 10.0)),
        ChangeDuration::OneYear => Some((20.0, 20.0)),
    }
}

/// Percentage weight loss, 0 when the usual weight is unknown
#[must_use]
pub fn weight_loss_percent(usual_weight_kg: f64, dry_weight_kg: f64) -> f64 {
    if usual_weight_kg <= 0.0 {
        return 0.0;
    }
    (usual_weight_kg - dry_weight_kg) / usual_weight_kg * 100.0
}

/// Classify a loss percentage for the given observation window
#[must_use]
pub fn classify_weight_change(
    loss_percent: f64,
    duration: ChangeDuration,
) -> Option<WeightChangeClass> {
    if loss_percent < 0.0 {
        return Some(WeightChangeClass::WeightGain);
    }
    if loss_percent <= 0.0 {
        return None;
    }
    let (severe_above, moderate_from) = cutoffs(duration)?;
    Some(if loss_percent > severe_above {
        WeightChangeClass::SevereMalnutrition
    } else if loss_percent >= moderate_from {
        WeightChangeClass::ModerateMalnutrition
    } else {
        WeightChangeClass::NoSignificantLoss
    })
}

/// Run the weight change stage
#[must_use]
pub fn assess(
    usual_weight_kg: f64,
    dry_weight_kg: f64,
    duration: ChangeDuration,
) -> WeightChangeAssessment {
    let loss_percent = weight_loss_percent(usual_weight_kg, dry_weight_kg);
    WeightChangeAssessment {
        loss_percent,
        display: format!("{loss_percent:.1}"),
        classification: classify_weight_change(loss_percent, duration),
    }
}
