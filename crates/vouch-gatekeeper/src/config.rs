//! Gatekeeper configuration

use crate::{GatekeeperError, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use vouch_domain::prominence::DEFAULT_COMPONENT_MINIMUMS;
use vouch_domain::{default_section_weights, ComponentThresholds, SectionWeights, DEFAULT_MIN_CONFIDENCE};

/// Configuration for gating rules
///
/// # Examples
///
/// ```
/// use vouch_gatekeeper::GatingConfig;
///
/// let config = GatingConfig::default();
/// assert_eq!(config.default_min_confidence, 0.5);
///
/// let config = GatingConfig::strict();
/// assert_eq!(config.default_min_confidence, 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatingConfig {
    /// Floor for components without an entry in `component_minimums`
    /// Default: 0.50
    #[serde(default = "default_min_confidence")]
    pub default_min_confidence: f64,

    /// Attributes not verified within this many days are penalized as stale
    /// Default: 180
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: u32,

    /// Minimum confidence per component id
    /// Default: the built-in table (contact.phone = 0.85, hero.title = 0.70, ...)
    #[serde(default = "default_component_minimums")]
    pub component_minimums: BTreeMap<String, f64>,

    /// Weight per top-level section when scoring documents
    /// Default: identity 5, operations 4, offerings 3, trust 3, brand 2,
    /// marketing 2, media 1, seo 2
    #[serde(default = "default_section_weights")]
    pub section_weights: SectionWeights,
}

fn default_min_confidence() -> f64 {
    DEFAULT_MIN_CONFIDENCE
}

fn default_component_minimums() -> BTreeMap<String, f64> {
    DEFAULT_COMPONENT_MINIMUMS
        .iter()
        .map(|(id, min)| (id.to_string(), *min))
        .collect()
}

fn default_stale_after_days() -> u32 {
    180
}

impl Default for GatingConfig {
    fn default() -> Self {
        Self {
            default_min_confidence: default_min_confidence(),
            component_minimums: default_component_minimums(),
            section_weights: default_section_weights(),
            stale_after_days: default_stale_after_days(),
        }
    }
}

impl GatingConfig {
    /// Create a permissive configuration (show almost everything)
    pub fn permissive() -> Self {
        Self {
            default_min_confidence: 0.0,
            component_minimums: BTreeMap::new(),
            section_weights: default_section_weights(),
            stale_after_days: 365,
        }
    }

    /// Create a strict configuration (higher floors, shorter freshness window)
    pub fn strict() -> Self {
        let component_minimums = default_component_minimums()
            .into_iter()
            .map(|(id, min)| (id, (((min + 0.05) * 100.0).round() / 100.0).min(0.95)))
            .collect();

        Self {
            default_min_confidence: 0.70,
            component_minimums,
            section_weights: default_section_weights(),
            stale_after_days: 90,
        }
    }

    /// Parse a configuration from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GatingConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file and validate it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check that every threshold is in [0, 1] and every weight is non-negative
    pub fn validate(&self) -> Result<()> {
        check_threshold("default_min_confidence", self.default_min_confidence)?;

        for (component, min) in &self.component_minimums {
            check_threshold(&format!("component_minimums.{}", component), *min)?;
        }

        for (section, weight) in &self.section_weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(GatekeeperError::Config(format!(
                    "section_weights.{} must be a non-negative number, got {}",
                    section, weight
                )));
            }
        }

        Ok(())
    }

    /// Component thresholds described by this configuration
    pub fn thresholds(&self) -> ComponentThresholds {
        ComponentThresholds {
            default_min: self.default_min_confidence,
            minimums: self.component_minimums.clone(),
        }
    }

    /// Freshness window as a Duration
    pub fn stale_after(&self) -> Duration {
        Duration::days(i64::from(self.stale_after_days))
    }
}

fn check_threshold(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GatekeeperError::Config(format!(
            "{} must be within [0.0, 1.0], got {}",
            name, value
        )));
    }
    Ok(())
}
