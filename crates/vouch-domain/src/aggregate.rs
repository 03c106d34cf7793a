//! Aggregate confidence over nested attribute trees
//!
//! A business profile is a tree of sections (`identity`, `operations`, ...)
//! whose leaves are [`Conf`] wrappers. Leaves are distinguished from plain
//! nested objects by an explicit variant rather than by probing for fields.

use crate::conf::round2;
use crate::Conf;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Per-section weights keyed by top-level path segment
pub type SectionWeights = BTreeMap<String, f64>;

/// Default section weights for business profiles
pub const DEFAULT_SECTION_WEIGHTS: [(&str, f64); 8] = [
    ("identity", 5.0),
    ("operations", 4.0),
    ("offerings", 3.0),
    ("trust", 3.0),
    ("brand", 2.0),
    ("marketing", 2.0),
    ("media", 1.0),
    ("seo", 2.0),
];

/// [`DEFAULT_SECTION_WEIGHTS`] as an owned table
pub fn default_section_weights() -> SectionWeights {
    DEFAULT_SECTION_WEIGHTS
        .iter()
        .map(|(section, weight)| (section.to_string(), *weight))
        .collect()
}

/// A node in an attribute tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", content = "data", rename_all = "snake_case")]
pub enum AttributeNode {
    /// A scored attribute; traversal stops here
    Leaf(Conf<serde_json::Value>),

    /// Named children
    Mapping(BTreeMap<String, AttributeNode>),

    /// Ordered children
    Sequence(Vec<AttributeNode>),

    /// Unscored data carried alongside attributes; ignored by aggregation
    Scalar(serde_json::Value),
}

impl AttributeNode {
    /// Build a mapping node
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AttributeNode)>,
    {
        AttributeNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a sequence node
    pub fn sequence<I: IntoIterator<Item = AttributeNode>>(items: I) -> Self {
        AttributeNode::Sequence(items.into_iter().collect())
    }

    /// The wrapper if this node is a leaf
    pub fn as_leaf(&self) -> Option<&Conf<serde_json::Value>> {
        match self {
            AttributeNode::Leaf(conf) => Some(conf),
            _ => None,
        }
    }

    /// Resolve a path such as `contact.phone` or `media.images[2]`
    ///
    /// The empty path resolves to the node itself.
    pub fn get(&self, path: &str) -> Option<&AttributeNode> {
        let mut node = self;
        for segment in parse_path(path)? {
            node = match (node, segment) {
                (AttributeNode::Mapping(children), PathSegment::Key(key)) => children.get(key)?,
                (AttributeNode::Sequence(items), PathSegment::Index(i)) => items.get(i)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Resolve a path to a leaf wrapper
    pub fn leaf_at(&self, path: &str) -> Option<&Conf<serde_json::Value>> {
        self.get(path).and_then(AttributeNode::as_leaf)
    }
}

impl From<Conf<serde_json::Value>> for AttributeNode {
    fn from(conf: Conf<serde_json::Value>) -> Self {
        AttributeNode::Leaf(conf)
    }
}

impl From<Conf<String>> for AttributeNode {
    fn from(conf: Conf<String>) -> Self {
        AttributeNode::Leaf(conf.map(serde_json::Value::String))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathSegment<'a> {
    Key(&'a str),
    Index(usize),
}

fn parse_path(path: &str) -> Option<Vec<PathSegment<'_>>> {
    let mut segments = Vec::new();
    if path.is_empty() {
        return Some(segments);
    }

    for part in path.split('.') {
        let (key, mut rest) = match part.find('[') {
            Some(pos) => part.split_at(pos),
            None => (part, ""),
        };
        if !key.is_empty() {
            segments.push(PathSegment::Key(key));
        } else if rest.is_empty() {
            return None;
        }
        while !rest.is_empty() {
            let close = rest.find(']')?;
            let index = rest[1..close].parse().ok()?;
            segments.push(PathSegment::Index(index));
            rest = &rest[close + 1..];
            if !rest.is_empty() && !rest.starts_with('[') {
                return None;
            }
        }
    }
    Some(segments)
}

/// A leaf confidence collected during traversal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafConfidence {
    /// Path from the root, e.g. `media.images[0]`
    pub path: String,
    /// Top-level segment of the path, used for weighting
    pub section: String,
    /// The leaf's confidence
    pub confidence: f64,
}

/// Collect every leaf confidence in the tree, in traversal order
pub fn collect_leaf_confidences(tree: &AttributeNode) -> Vec<LeafConfidence> {
    let mut leaves = Vec::new();
    visit(tree, &mut String::new(), None, &mut leaves);
    leaves
}

fn visit(node: &AttributeNode, path: &mut String, section: Option<&str>, out: &mut Vec<LeafConfidence>) {
    match node {
        AttributeNode::Leaf(conf) => out.push(LeafConfidence {
            path: path.clone(),
            section: section.unwrap_or_default().to_string(),
            confidence: conf.confidence,
        }),
        AttributeNode::Mapping(children) => {
            for (key, child) in children {
                let len = path.len();
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(key);
                visit(child, path, Some(section.unwrap_or(key.as_str())), out);
                path.truncate(len);
            }
        }
        AttributeNode::Sequence(items) => {
            for (i, child) in items.iter().enumerate() {
                let len = path.len();
                let _ = write!(path, "[{}]", i);
                match section {
                    Some(section) => visit(child, path, Some(section), out),
                    None => {
                        let top = path.clone();
                        visit(child, path, Some(top.as_str()), out);
                    }
                }
                path.truncate(len);
            }
        }
        AttributeNode::Scalar(_) => {}
    }
}

/// Weighted mean of all leaf confidences, rounded to two decimals
///
/// Each leaf is weighted by `weights[section]`, or 1 when the section is not
/// listed or no weights are given. Negative or non-finite weights count as 0.
/// Returns 0 when the tree has no leaves or no positive weight.
pub fn compute_aggregate_confidence(tree: &AttributeNode, weights: Option<&SectionWeights>) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for leaf in collect_leaf_confidences(tree) {
        let weight = weights
            .and_then(|w| w.get(&leaf.section))
            .copied()
            .map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
            .unwrap_or(1.0);
        weighted_sum += leaf.confidence * weight;
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return 0.0;
    }
    round2(weighted_sum / total_weight)
}
