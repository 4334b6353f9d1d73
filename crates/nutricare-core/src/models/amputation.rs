// ABOUTME: Amputated limb segments with Osterkamp body-weight percentages
// ABOUTME: Aggregates segment selections into the single percentage the engine consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A limb segment that has been amputated
///
/// Percentages are the share of total body weight the segment represents.
///
/// Reference: Osterkamp, L.K. (1995). Current perspective on assessment of human
/// body proportions of relevance to amputees. *J Am Diet Assoc*, 95(2), 215-218.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmputatedSegment {
    /// Hand only
    Hand,
    /// Forearm including the hand
    Forearm,
    /// Entire arm
    EntireArm,
    /// Foot only
    Foot,
    /// Lower leg including the foot (below-knee)
    LowerLeg,
    /// Entire leg
    EntireLeg,
}

impl AmputatedSegment {
    /// Share of total body weight, in percent
    #[must_use]
    pub const fn body_weight_percent(self) -> f64 {
        match self {
            Self::Hand => 0.7,
            Self::Forearm => 2.3,
            Self::EntireArm => 5.0,
            Self::Foot => 1.5,
            Self::LowerLeg => 5.9,
            Self::EntireLeg => 16.0,
        }
    }

    /// Parse from the form/database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hand" => Some(Self::Hand),
            "forearm" => Some(Self::Forearm),
            "entire_arm" | "arm" => Some(Self::EntireArm),
            "foot" => Some(Self::Foot),
            "lower_leg" | "below_knee" => Some(Self::LowerLeg),
            "entire_leg" | "leg" => Some(Self::EntireLeg),
            _ => None,
        }
    }
}

/// Sum the selected segments into a single amputation percentage, capped at 100
#[must_use]
pub fn aggregate_amputation_percent(segments: &[AmputatedSegment]) -> f64 {
    segments
        .iter()
        .map(|segment| segment.body_weight_percent())
        .sum::<f64>()
        .min(100.0)
}

/// Aggregate segment codes such as `"below_knee"` into an amputation percentage
///
/// # Errors
///
/// Returns an invalid-input error naming the first unrecognized code
pub fn amputation_percent_from_codes<S: AsRef<str>>(codes: &[S]) -> AppResult<f64> {
    let segments = codes
        .iter()
        .map(|code| {
            AmputatedSegment::parse(code.as_ref()).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown amputation segment '{}': expected hand, forearm, entire_arm, \
                     foot, lower_leg or entire_leg",
                    code.as_ref()
                ))
            })
        })
        .collect::<AppResult<Vec<_>>>()?;
    Ok(aggregate_amputation_percent(&segments))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_aggregate_bilateral_below_knee() {
        let percent =
            aggregate_amputation_percent(&[AmputatedSegment::LowerLeg, AmputatedSegment::LowerLeg]);
        assert!((percent - 11.8).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        assert!(aggregate_amputation_percent(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aggregate_is_capped() {
        let segments = [AmputatedSegment::EntireLeg; 8];
        assert!((aggregate_amputation_percent(&segments) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_from_codes() {
        let percent = amputation_percent_from_codes(&["below_knee", "Hand"]).unwrap();
        assert!((percent - 6.6).abs() < 1e-9);
        assert!(amputation_percent_from_codes::<&str>(&[]).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_from_codes_rejects_unknown_segment() {
        let err = amputation_percent_from_codes(&["foot", "tail"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("tail"));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(AmputatedSegment::parse("below_knee"), Some(AmputatedSegment::LowerLeg));
        assert_eq!(AmputatedSegment::parse("ARM"), Some(AmputatedSegment::EntireArm));
        assert_eq!(AmputatedSegment::parse("tail"), None);
    }
}
