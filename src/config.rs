//! Snapshot sequence configuration.
//!
//! Controls how kind-dependent fields are converted, whether sequences are
//! structurally validated when built, and how sequences are split into
//! train/validation/test ranges. Configurations serialize to TOML or JSON so
//! a data-loading setup can be versioned alongside an experiment.
//!
//! # Example
//!
//! ```ignore
//! use temporal_graph_signal::config::{DtypePolicy, SignalConfig};
//!
//! let config = SignalConfig::default().with_dtype_policy(DtypePolicy::PromoteBool);
//! config.save_toml("signal.toml")?;
//!
//! let loaded = SignalConfig::load_toml("signal.toml")?;
//! assert_eq!(loaded.dtype_policy, DtypePolicy::PromoteBool);
//! ```

use crate::validation::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Policy for target and additional-feature arrays whose element kind is
/// neither integer nor floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtypePolicy {
    /// Reject with `SignalError::UnsupportedDtype`.
    #[default]
    Strict,
    /// Widen boolean arrays to integer tensors (0/1).
    PromoteBool,
}

/// Chronological split ratios.
///
/// `train_ratio` and `val_ratio` are fractions of the snapshot count; the
/// test range receives whatever remains. Boundaries are floored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of snapshots in the training range
    pub train_ratio: f64,

    /// Fraction of snapshots in the validation range
    #[serde(default)]
    pub val_ratio: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            val_ratio: 0.0,
        }
    }
}

impl SplitConfig {
    /// Train/test split with no validation range.
    pub fn new(train_ratio: f64) -> Self {
        Self {
            train_ratio,
            val_ratio: 0.0,
        }
    }

    /// Set the validation fraction.
    pub fn with_val_ratio(mut self, val_ratio: f64) -> Self {
        self.val_ratio = val_ratio;
        self
    }

    /// Validate split ratios.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(format!(
                "train_ratio must be in [0, 1], got {}",
                self.train_ratio
            ));
        }

        if !(0.0..=1.0).contains(&self.val_ratio) {
            return Err(format!("val_ratio must be in [0, 1], got {}", self.val_ratio));
        }

        if self.train_ratio + self.val_ratio > 1.0 {
            return Err(format!(
                "train_ratio + val_ratio must be <= 1, got {}",
                self.train_ratio + self.val_ratio
            ));
        }

        Ok(())
    }
}

/// Unified snapshot sequence configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Conversion policy for targets and additional features
    #[serde(default)]
    pub dtype_policy: DtypePolicy,

    /// Run structural validation when a sequence is built
    #[serde(default)]
    pub validate_on_build: bool,

    /// Structural validation checks
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Split ratios (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitConfig>,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            dtype_policy: DtypePolicy::Strict,
            validate_on_build: false,
            validation: ValidationConfig::default(),
            split: None,
        }
    }
}

impl SignalConfig {
    /// Set the dtype policy.
    pub fn with_dtype_policy(mut self, policy: DtypePolicy) -> Self {
        self.dtype_policy = policy;
        self
    }

    /// Enable or disable validation on build.
    pub fn with_validation_on_build(mut self, enabled: bool) -> Self {
        self.validate_on_build = enabled;
        self
    }

    /// Set the validation checks.
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Set the split ratios.
    pub fn with_split(mut self, split: SplitConfig) -> Self {
        self.split = Some(split);
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(split) = &self.split {
            split.validate()?;
        }

        self.validation.validate()?;

        Ok(())
    }

    /// Save configuration to TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Load configuration from TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: SignalConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json_string = serde_json::to_string_pretty(self)?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// Load configuration from JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: SignalConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SignalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dtype_policy, DtypePolicy::Strict);
        assert!(!config.validate_on_build);
    }

    #[test]
    fn test_split_ratio_bounds() {
        assert!(SplitConfig::new(0.8).validate().is_ok());
        assert!(SplitConfig::new(0.0).validate().is_ok());
        assert!(SplitConfig::new(1.0).validate().is_ok());
        assert!(SplitConfig::new(1.5).validate().is_err());
        assert!(SplitConfig::new(-0.1).validate().is_err());
        assert!(SplitConfig::new(0.7).with_val_ratio(0.4).validate().is_err());
        assert!(SplitConfig::new(0.7).with_val_ratio(0.2).validate().is_ok());
    }

    #[test]
    fn test_invalid_split_rejected_by_config() {
        let config = SignalConfig::default().with_split(SplitConfig::new(2.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_string_roundtrip() {
        let config = SignalConfig::default()
            .with_dtype_policy(DtypePolicy::PromoteBool)
            .with_validation_on_build(true)
            .with_split(SplitConfig::new(0.6).with_val_ratio(0.2));

        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("promote_bool"));

        let parsed: SignalConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let parsed: SignalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SignalConfig::default());
    }
}
