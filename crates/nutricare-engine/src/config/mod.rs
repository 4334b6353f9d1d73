// ABOUTME: Engine configuration with validated defaults and environment overrides
// ABOUTME: Holds the tunable multipliers shared by the energy and protocol stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! The clinical formulas are fixed; what a deployment may tune is the
//! small set of policy multipliers that wrap them. Defaults reproduce the
//! published protocol exactly.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use nutricare_core::constants::{age, body_weight, energy};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Tunable policy for the calculation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Activity factor substituted when the profile leaves it unset (predictive equations only)
    pub default_activity_factor: f64,
    /// Thermic effect of food multiplier applied when converting BMR to TEE
    pub thermic_effect_factor: f64,
    /// Fractional excess over Hamwi IBW that switches the target to adjusted weight
    pub high_obesity_margin: f64,
    /// Age at which the elderly advisory is raised
    pub elderly_age_years: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_activity_factor: energy::DEFAULT_ACTIVITY_FACTOR,
            thermic_effect_factor: energy::THERMIC_EFFECT_FACTOR,
            high_obesity_margin: body_weight::HIGH_OBESITY_MARGIN,
            elderly_age_years: age::ELDERLY_FROM_YEARS,
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a multiplier would shrink energy figures or the
    /// obesity margin is not a sensible fraction
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1.0..=2.5).contains(&self.default_activity_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "default_activity_factor must be between 1.0 and 2.5",
            ));
        }
        if !(1.0..=1.5).contains(&self.thermic_effect_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "thermic_effect_factor must be between 1.0 and 1.5",
            ));
        }
        if self.high_obesity_margin <= 0.0 || self.high_obesity_margin >= 1.0 {
            return Err(ConfigError::InvalidRange(
                "high_obesity_margin must be > 0 and < 1",
            ));
        }
        if self.elderly_age_years == 0 {
            return Err(ConfigError::InvalidRange("elderly_age_years must be > 0"));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRICARE_DEFAULT_ACTIVITY_FACTOR",
            &mut self.default_activity_factor,
        )?;
        Self::apply_env_var(
            "NUTRICARE_THERMIC_EFFECT_FACTOR",
            &mut self.thermic_effect_factor,
        )?;
        Self::apply_env_var(
            "NUTRICARE_HIGH_OBESITY_MARGIN",
            &mut self.high_obesity_margin,
        )?;
        Self::apply_env_var("NUTRICARE_ELDERLY_AGE_YEARS", &mut self.elderly_age_years)?;
        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.default_activity_factor - 1.2).abs() < f64::EPSILON);
        assert!((config.thermic_effect_factor - 1.1).abs() < f64::EPSILON);
        assert!((config.high_obesity_margin - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_shrinking_thermic_factor() {
        let config = EngineConfig {
            thermic_effect_factor: 0.9,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_rejects_margin_outside_unit_interval() {
        let config = EngineConfig {
            high_obesity_margin: 1.3,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    #[serial]
    fn test_env_override_applied() {
        env::set_var("NUTRICARE_ELDERLY_AGE_YEARS", "70");
        let loaded = EngineConfig::load();
        env::remove_var("NUTRICARE_ELDERLY_AGE_YEARS");

        assert_eq!(loaded.unwrap().elderly_age_years, 70);
    }

    #[test]
    #[serial]
    fn test_env_override_parse_failure() {
        env::set_var("NUTRICARE_THERMIC_EFFECT_FACTOR", "ten percent");
        let loaded = EngineConfig::load();
        env::remove_var("NUTRICARE_THERMIC_EFFECT_FACTOR");

        assert!(matches!(loaded, Err(ConfigError::Parse(_))));
    }
}
