//! Component gating and document scoring

use crate::{GatingConfig, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use vouch_domain::{
    apply_revalidation_penalties, collect_leaf_confidences, compute_aggregate_confidence,
    get_prominence_level, AttributeNode, AttributeValue, ComponentThresholds, Conf,
    ProminenceLevel, QualitySignals,
};

/// Binds a UI component to the attribute that feeds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBinding {
    /// Component id, e.g. `contact.phone`
    pub component: String,
    /// Attribute path in the profile tree, e.g. `contact.phone` or `media.images[0]`
    pub attribute: String,
}

impl ComponentBinding {
    /// Create a new binding
    pub fn new(component: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            attribute: attribute.into(),
        }
    }
}

/// The gating outcome for one component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDecision {
    /// Component id
    pub component: String,
    /// Attribute path the component reads
    pub attribute: String,
    /// Confidence of the attribute (0 when missing)
    pub confidence: f64,
    /// Prominence tier for the confidence
    pub prominence: ProminenceLevel,
    /// Whether the component meets its minimum confidence
    pub visible: bool,
    /// Whether the renderer should fall back to placeholder content
    pub placeholder: bool,
    /// The attribute path did not resolve to a scored attribute
    pub missing: bool,
}

/// Decisions for every bound component, in binding order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderPlan {
    /// One decision per binding
    pub decisions: Vec<ComponentDecision>,
}

impl RenderPlan {
    /// Number of components cleared for display
    pub fn visible_count(&self) -> usize {
        self.decisions.iter().filter(|d| d.visible).count()
    }

    /// Decisions for components that must not be shown
    pub fn hidden(&self) -> impl Iterator<Item = &ComponentDecision> {
        self.decisions.iter().filter(|d| !d.visible)
    }

    /// Look up the decision for a component
    pub fn decision(&self, component: &str) -> Option<&ComponentDecision> {
        self.decisions.iter().find(|d| d.component == component)
    }
}

/// Aggregate scores for a profile document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentScore {
    /// Section-weighted score over every leaf
    pub overall: f64,
    /// Unweighted score per top-level section that has scored attributes
    pub sections: BTreeMap<String, f64>,
    /// Number of scored attributes
    pub leaf_count: usize,
}

/// The Gatekeeper decides what a renderer may show
pub struct Gatekeeper {
    config: GatingConfig,
    thresholds: ComponentThresholds,
}

impl Gatekeeper {
    /// Create a new Gatekeeper, validating the configuration
    pub fn new(config: GatingConfig) -> Result<Self> {
        config.validate()?;
        let thresholds = config.thresholds();
        Ok(Self { config, thresholds })
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        let config = GatingConfig::default();
        let thresholds = config.thresholds();
        Self { config, thresholds }
    }

    /// The active configuration
    pub fn config(&self) -> &GatingConfig {
        &self.config
    }

    /// The active component thresholds
    pub fn thresholds(&self) -> &ComponentThresholds {
        &self.thresholds
    }

    /// Whether a component with this confidence may be displayed
    pub fn should_show(&self, component: &str, confidence: f64) -> bool {
        self.thresholds.should_show(component, confidence)
    }

    /// Prominence tier for a confidence
    pub fn prominence(&self, confidence: f64) -> ProminenceLevel {
        get_prominence_level(confidence)
    }

    /// Score a profile overall and per section
    pub fn score_document(&self, tree: &AttributeNode) -> DocumentScore {
        let overall = compute_aggregate_confidence(tree, Some(&self.config.section_weights));

        let mut sections = BTreeMap::new();
        if let AttributeNode::Mapping(children) = tree {
            for (section, subtree) in children {
                if collect_leaf_confidences(subtree).is_empty() {
                    continue;
                }
                sections.insert(section.clone(), compute_aggregate_confidence(subtree, None));
            }
        }

        let leaf_count = collect_leaf_confidences(tree).len();
        debug!(overall, leaf_count, "Scored document");

        DocumentScore {
            overall,
            sections,
            leaf_count,
        }
    }

    /// Gating view of a stored attribute at `now`
    ///
    /// Applies the staleness penalty when the attribute falls outside the
    /// configured freshness window, and the format penalty when `signals`
    /// reports a failed validation. Adjustments already in the stored score
    /// are left alone, so a fresh attribute with no new signals keeps its
    /// score. The result is for gating; keep storing the original wrapper.
    pub fn refresh<T>(&self, conf: &Conf<T>, signals: QualitySignals, now: DateTime<Utc>) -> Conf<T>
    where
        T: AttributeValue + Clone,
    {
        let signals = QualitySignals {
            is_stale: signals.is_stale || conf.is_stale(now, self.config.stale_after()),
            ..signals
        };
        let confidence = apply_revalidation_penalties(conf.confidence, signals);
        let refreshed = conf.clone().with_confidence(confidence);

        debug!(
            before = conf.confidence,
            after = refreshed.confidence,
            stale = signals.is_stale,
            "Refreshed attribute"
        );
        refreshed
    }

    /// Decide visibility and prominence for every bound component
    pub fn plan(&self, tree: &AttributeNode, bindings: &[ComponentBinding]) -> RenderPlan {
        let decisions: Vec<ComponentDecision> = bindings
            .iter()
            .map(|binding| self.decide(tree, binding))
            .collect();

        let plan = RenderPlan { decisions };
        info!(
            components = plan.decisions.len(),
            visible = plan.visible_count(),
            "Built render plan"
        );
        plan
    }

    fn decide(&self, tree: &AttributeNode, binding: &ComponentBinding) -> ComponentDecision {
        let Some(conf) = tree.leaf_at(&binding.attribute) else {
            warn!(
                component = %binding.component,
                attribute = %binding.attribute,
                "Bound attribute not found, hiding component"
            );
            return ComponentDecision {
                component: binding.component.clone(),
                attribute: binding.attribute.clone(),
                confidence: 0.0,
                prominence: ProminenceLevel::HideOrPlaceholder,
                visible: false,
                placeholder: true,
                missing: true,
            };
        };

        let visible = self.should_show(&binding.component, conf.confidence);
        let decision = ComponentDecision {
            component: binding.component.clone(),
            attribute: binding.attribute.clone(),
            confidence: conf.confidence,
            prominence: self.prominence(conf.confidence),
            visible,
            placeholder: !visible || conf.is_placeholder,
            missing: false,
        };

        debug!(
            component = %decision.component,
            confidence = decision.confidence,
            prominence = %decision.prominence,
            visible = decision.visible,
            "Gated component"
        );
        decision
    }
}
