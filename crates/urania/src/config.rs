//! Engine configuration.
//!
//! Defaults match the tuning the engine was designed around; a TOML
//! file can override individual fields.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::AstroError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Orb tolerance in degrees used when the caller does not supply one.
    pub default_orb: f64,
    /// Coarse-scan step for transit searches, in minutes.
    pub default_step_minutes: u32,
    /// Smallest accepted scan step.
    pub min_step_minutes: u32,
    /// Largest accepted scan step.
    pub max_step_minutes: u32,
    /// Bisection stops once the bracket is at most this wide.
    pub bisection_tolerance_seconds: f64,
    /// Hard cap on bisection iterations, guaranteeing termination.
    pub max_bisection_iterations: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_orb: 6.0,
            default_step_minutes: 15,
            min_step_minutes: 1,
            max_step_minutes: 60,
            bisection_tolerance_seconds: 30.0,
            max_bisection_iterations: 20,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Load from a TOML file, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check a requested scan step against the configured bounds.
    pub fn check_step(&self, minutes: u32) -> Result<(), AstroError> {
        if minutes < self.min_step_minutes || minutes > self.max_step_minutes {
            return Err(AstroError::StepOutOfRange {
                minutes,
                min: self.min_step_minutes,
                max: self.max_step_minutes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.default_orb, 6.0);
        assert_eq!(config.default_step_minutes, 15);
        assert_eq!(config.max_bisection_iterations, 20);
    }

    #[test]
    fn partial_toml_overrides() {
        let config = EngineConfig::from_toml_str("default_orb = 8.0\n").unwrap();
        assert_eq!(config.default_orb, 8.0);
        assert_eq!(config.default_step_minutes, 15);
    }

    #[test]
    fn step_bounds() {
        let config = EngineConfig::default();
        assert!(config.check_step(1).is_ok());
        assert!(config.check_step(60).is_ok());
        assert!(config.check_step(0).is_err());
        assert!(config.check_step(61).is_err());
    }
}
