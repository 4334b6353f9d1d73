// ABOUTME: Method 2 energy requirement: fixed 25/30/35/40 kcal/kg table
// ABOUTME: Applied to dry weight and selected weight separately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// kcal/kg factors reported side by side
pub const FACTORS_KCAL_PER_KG: [f64; 4] = [25.0, 30.0, 35.0, 40.0];

/// One factor applied to one weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorKcal {
    /// kcal per kg
    pub factor_kcal_per_kg: f64,
    /// kcal/day
    pub kcal: f64,
}

/// M2 result: four figures per weight basis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedFactorMethod {
    /// Factors applied to dry weight
    pub dry: [FactorKcal; 4],
    /// Factors applied to selected weight
    pub selected: [FactorKcal; 4],
}

fn apply(weight_kg: f64) -> [FactorKcal; 4] {
    FACTORS_KCAL_PER_KG.map(|factor| FactorKcal {
        factor_kcal_per_kg: factor,
        kcal: factor * weight_kg,
    })
}

/// Run M2 for both weight bases
#[must_use]
pub fn calculate(dry_weight_kg: f64, selected_weight_kg: f64) -> FixedFactorMethod {
    FixedFactorMethod {
        dry: apply(dry_weight_kg),
        selected: apply(selected_weight_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_figures() {
        let method = calculate(70.0, 60.0);
        let dry: Vec<f64> = method.dry.iter().map(|entry| entry.kcal).collect();
        let selected: Vec<f64> = method.selected.iter().map(|entry| entry.kcal).collect();
        assert_eq!(dry, vec![1750.0, 2100.0, 2450.0, 2800.0]);
        assert_eq!(selected, vec![1500.0, 1800.0, 2100.0, 2400.0]);
    }
}
