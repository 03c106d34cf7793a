//! Building wrappers from raw observations

use crate::conf::{penalize, round2};
use crate::{AttributeValue, Conf, SourceKind, SourceRef, SourceRegistry};
use chrono::{DateTime, Utc};

/// Penalty for an absent or empty value
pub const EMPTY_PENALTY: f64 = 0.15;

/// Penalty for placeholder content
pub const PLACEHOLDER_PENALTY: f64 = 0.10;

/// Optional inputs to [`wrap_conf`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapOptions {
    /// Free-text justification
    pub rationale: Option<String>,
    /// Marks synthetic filler content
    pub is_placeholder: bool,
    /// External identifier of the source record
    pub source_id: Option<String>,
    /// URL the value was retrieved from
    pub source_url: Option<String>,
    /// Note attached to the source record
    pub notes: Option<String>,
    /// Starting confidence instead of the registry weight
    pub confidence_override: Option<f64>,
}

impl WrapOptions {
    /// Options for placeholder content
    pub fn placeholder() -> Self {
        Self {
            is_placeholder: true,
            ..Self::default()
        }
    }
}

/// Wrap a raw observation, stamped with the current time
///
/// See [`wrap_conf_at`] for the scoring rules.
pub fn wrap_conf<T: AttributeValue>(value: T, kind: SourceKind, options: WrapOptions) -> Conf<T> {
    wrap_conf_at(value, kind, options, Utc::now())
}

/// Wrap a raw observation retrieved at `now`
///
/// 1. Start from `confidence_override` (clamped to [0, 1]) or the registry weight
/// 2. Empty value: −0.15, floored at 0
/// 3. Placeholder: −0.10, floored at 0
/// 4. Round to two decimals
///
/// The wrapper cites exactly one source and is verified at `now`.
pub fn wrap_conf_at<T: AttributeValue>(
    value: T,
    kind: SourceKind,
    options: WrapOptions,
    now: DateTime<Utc>,
) -> Conf<T> {
    let mut confidence = match options.confidence_override {
        Some(c) if c.is_finite() => c.clamp(0.0, 1.0),
        _ => SourceRegistry::global().weight(kind),
    };

    if value.is_empty_value() {
        confidence = penalize(confidence, EMPTY_PENALTY);
    }
    if options.is_placeholder {
        confidence = penalize(confidence, PLACEHOLDER_PENALTY);
    }

    let source = SourceRef {
        kind,
        id: options.source_id,
        url: options.source_url,
        retrieved_at: now,
        notes: options.notes,
    };

    Conf {
        value,
        confidence: round2(confidence),
        sources: vec![source],
        rationale: options.rationale,
        last_verified_at: Some(now),
        is_placeholder: options.is_placeholder,
    }
}
