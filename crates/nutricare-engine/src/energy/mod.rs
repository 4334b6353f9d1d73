// ABOUTME: Energy requirement calculators: six independent methods plus shared activity tiers
// ABOUTME: Each method is a free function over the normalized inputs it needs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Requirement Calculators
//!
//! | Method | Module | Basis |
//! |---|---|---|
//! | M1 | `bmi_factor` | 15 or 20 kcal/kg by BMI |
//! | M2 | `fixed_factor` | 25/30/35/40 kcal/kg |
//! | M3 | `predictive` | BMR equation ensemble → TEE |
//! | M4 | `ratio` | BMI-status factor triples |
//! | M5 | `minimum` | age/sex minimum requirement table |
//! | M6 | `iom` | IOM estimated energy requirement |
//!
//! None of the methods reads another method's output.

/// M1: BMI-tiered kcal/kg factor
pub mod bmi_factor;
/// M2: fixed kcal/kg factor table
pub mod fixed_factor;
/// M6: IOM estimated energy requirement
pub mod iom;
/// M5: minimum requirement table
pub mod minimum;
/// M3: predictive equation ensemble
pub mod predictive;
/// M4: ratio equation
pub mod ratio;

use nutricare_core::constants::activity;
use serde::{Deserialize, Serialize};

/// Physical activity tier derived from the unitless activity factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTier {
    /// Factor below 1.3, or unset
    Sedentary,
    /// 1.3 ≤ factor < 1.5
    LowActive,
    /// 1.5 ≤ factor < 1.7
    Active,
    /// factor ≥ 1.7
    VeryActive,
}

impl ActivityTier {
    /// Map an activity factor onto a tier; an unset factor (0) is sedentary
    #[must_use]
    pub fn from_factor(factor: f64) -> Self {
        if factor < activity::LOW_ACTIVE_FROM {
            Self::Sedentary
        } else if factor < activity::ACTIVE_FROM {
            Self::LowActive
        } else if factor < activity::VERY_ACTIVE_FROM {
            Self::Active
        } else {
            Self::VeryActive
        }
    }

    /// Position in the four-entry coefficient tables
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Sedentary => 0,
            Self::LowActive => 1,
            Self::Active => 2,
            Self::VeryActive => 3,
        }
    }
}

/// Activity factor for the predictive equations: the profile value, or the default when unset
#[must_use]
pub fn effective_activity_factor(profile_factor: f64, default_factor: f64) -> f64 {
    if profile_factor > 0.0 {
        profile_factor
    } else {
        default_factor
    }
}
