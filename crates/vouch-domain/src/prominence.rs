//! Prominence tiers and per-component display floors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Floor for components without a configured minimum
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.50;

/// Built-in component minimums
pub const DEFAULT_COMPONENT_MINIMUMS: [(&str, f64); 13] = [
    ("hero.title", 0.70),
    ("hero.subtitle", 0.60),
    ("hero.image", 0.60),
    ("contact.phone", 0.85),
    ("contact.email", 0.85),
    ("contact.address", 0.80),
    ("hours.table", 0.80),
    ("map.embed", 0.80),
    ("services.list", 0.70),
    ("reviews.testimonials", 0.75),
    ("social.links", 0.70),
    ("about.story", 0.60),
    ("gallery.images", 0.55),
];

/// How prominently a downstream renderer should show a value
///
/// Derived purely from a confidence score:
/// - Prominent: ≥ 0.85
/// - Standard: ≥ 0.70
/// - Deemphasize: ≥ 0.50
/// - HideOrPlaceholder: below 0.50
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProminenceLevel {
    /// Hide, or show a placeholder in its place
    HideOrPlaceholder,

    /// Show, visually de-emphasized
    Deemphasize,

    /// Show normally
    Standard,

    /// Feature the value
    Prominent,
}

impl ProminenceLevel {
    /// Levels with their minimum confidence, highest first
    pub const THRESHOLDS: [(ProminenceLevel, f64); 4] = [
        (ProminenceLevel::Prominent, 0.85),
        (ProminenceLevel::Standard, 0.70),
        (ProminenceLevel::Deemphasize, 0.50),
        (ProminenceLevel::HideOrPlaceholder, 0.0),
    ];

    /// Minimum confidence for this level
    pub fn min_confidence(&self) -> f64 {
        match self {
            ProminenceLevel::Prominent => 0.85,
            ProminenceLevel::Standard => 0.70,
            ProminenceLevel::Deemphasize => 0.50,
            ProminenceLevel::HideOrPlaceholder => 0.0,
        }
    }

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProminenceLevel::Prominent => "prominent",
            ProminenceLevel::Standard => "standard",
            ProminenceLevel::Deemphasize => "deemphasize",
            ProminenceLevel::HideOrPlaceholder => "hide_or_placeholder",
        }
    }

    /// Parse a level from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prominent" => Some(ProminenceLevel::Prominent),
            "standard" => Some(ProminenceLevel::Standard),
            "deemphasize" => Some(ProminenceLevel::Deemphasize),
            "hide_or_placeholder" => Some(ProminenceLevel::HideOrPlaceholder),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProminenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProminenceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid prominence level: {}", s))
    }
}

/// Map a confidence score to a prominence level
///
/// Thresholds are checked from the top with `>=`, so a score on a boundary
/// gets the higher level. Scores below zero (or NaN) hide.
pub fn get_prominence_level(confidence: f64) -> ProminenceLevel {
    ProminenceLevel::THRESHOLDS
        .iter()
        .find(|(_, min)| confidence >= *min)
        .map(|(level, _)| *level)
        .unwrap_or(ProminenceLevel::HideOrPlaceholder)
}

/// Minimum confidence required to display each UI component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentThresholds {
    /// Floor for components not listed in `minimums`
    pub default_min: f64,

    /// Component id → minimum confidence
    pub minimums: BTreeMap<String, f64>,
}

impl Default for ComponentThresholds {
    fn default() -> Self {
        Self {
            default_min: DEFAULT_MIN_CONFIDENCE,
            minimums: DEFAULT_COMPONENT_MINIMUMS
                .iter()
                .map(|(id, min)| (id.to_string(), *min))
                .collect(),
        }
    }
}

static DEFAULT_THRESHOLDS: LazyLock<ComponentThresholds> = LazyLock::new(ComponentThresholds::default);

impl ComponentThresholds {
    /// The built-in table
    pub fn builtin() -> &'static ComponentThresholds {
        &DEFAULT_THRESHOLDS
    }

    /// Minimum confidence for a component, falling back to the default floor
    pub fn minimum_for(&self, component_id: &str) -> f64 {
        self.minimums
            .get(component_id)
            .copied()
            .unwrap_or(self.default_min)
    }

    /// Whether a component with this confidence should be displayed
    pub fn should_show(&self, component_id: &str, confidence: f64) -> bool {
        confidence >= self.minimum_for(component_id)
    }
}

/// Whether a component should be displayed under the built-in table
pub fn should_show_component(component_id: &str, confidence: f64) -> bool {
    ComponentThresholds::builtin().should_show(component_id, confidence)
}
