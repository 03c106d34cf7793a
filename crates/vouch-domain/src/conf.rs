//! Confidence wrapper: a value paired with a trust score and its provenance

use crate::SourceRef;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest confidence any boost may produce
pub const MAX_BOOSTED_CONFIDENCE: f64 = 0.98;

/// Confidence added when two or more distinct source kinds agree
pub const CORROBORATION_BOOST: f64 = 0.05;

/// Round a score to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Subtract a penalty, flooring at zero
pub(crate) fn penalize(score: f64, penalty: f64) -> f64 {
    (score - penalty).max(0.0)
}

/// Whether the sources span at least two distinct kinds
pub(crate) fn is_corroborated(sources: &[SourceRef]) -> bool {
    match sources.split_first() {
        Some((first, rest)) => rest.iter().any(|s| s.kind != first.kind),
        None => false,
    }
}

/// Reasons a stored wrapper is rejected on load
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfError {
    /// The wrapper cites no source
    #[error("wrapper must cite at least one source")]
    NoSources,

    /// The confidence is not a number in [0.0, 1.0]
    #[error("confidence must be within [0.0, 1.0], got {0}")]
    InvalidConfidence(f64),
}

/// Confidence wrapper around a single attribute value
///
/// Every attribute of a business profile is stored as a `Conf`. Wrappers are
/// never mutated in place; construction, rescoring and merging all return a
/// new wrapper.
///
/// Invariants:
/// - `confidence` is in [0.0, 1.0], rounded to two decimals
/// - `sources` is non-empty
///
/// Deserialization enforces the same invariants: a stored wrapper without
/// sources or with a confidence outside [0, 1] is rejected, and the score is
/// re-rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "StoredConf<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Conf<T> {
    /// The attribute value
    pub value: T,

    /// Trust score [0.0, 1.0]
    pub confidence: f64,

    /// Attribution, oldest first
    pub sources: Vec<SourceRef>,

    /// Free-text justification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,

    /// When the value was last confirmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_verified_at: Option<DateTime<Utc>>,

    /// Synthetic filler rather than a real observation
    #[serde(default)]
    pub is_placeholder: bool,
}

/// Wire shape of [`Conf`] before validation
#[derive(Deserialize)]
struct StoredConf<T> {
    value: T,
    confidence: f64,
    sources: Vec<SourceRef>,
    #[serde(default)]
    rationale: Option<String>,
    #[serde(default)]
    last_verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    is_placeholder: bool,
}

impl<T> TryFrom<StoredConf<T>> for Conf<T> {
    type Error = ConfError;

    fn try_from(stored: StoredConf<T>) -> Result<Self, Self::Error> {
        if stored.sources.is_empty() {
            return Err(ConfError::NoSources);
        }
        if !(0.0..=1.0).contains(&stored.confidence) {
            return Err(ConfError::InvalidConfidence(stored.confidence));
        }

        Ok(Self {
            value: stored.value,
            confidence: round2(stored.confidence),
            sources: stored.sources,
            rationale: stored.rationale,
            last_verified_at: stored.last_verified_at,
            is_placeholder: stored.is_placeholder,
        })
    }
}

impl<T> Conf<T> {
    /// Create a new wrapper
    ///
    /// The confidence is clamped to [0, 1] and rounded to two decimals.
    ///
    /// # Panics
    /// Panics if `sources` is empty; every wrapper must cite a source.
    pub fn new(value: T, confidence: f64, sources: Vec<SourceRef>) -> Self {
        assert!(!sources.is_empty(), "Conf must cite at least one source");

        Self {
            value,
            confidence: round2(confidence.clamp(0.0, 1.0)),
            sources,
            rationale: None,
            last_verified_at: None,
            is_placeholder: false,
        }
    }

    /// Attach a rationale
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    /// Set the verification timestamp
    pub fn with_last_verified_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_verified_at = Some(at);
        self
    }

    /// Mark as placeholder content
    pub fn with_placeholder(mut self, is_placeholder: bool) -> Self {
        self.is_placeholder = is_placeholder;
        self
    }

    /// Same wrapper with a different confidence score
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = round2(confidence.clamp(0.0, 1.0));
        self
    }

    /// Whether the sources span at least two distinct kinds
    pub fn is_corroborated(&self) -> bool {
        is_corroborated(&self.sources)
    }

    /// Most recent point at which the value was known to be right: the
    /// verification time, or the newest retrieval when never verified
    pub fn freshness(&self) -> Option<DateTime<Utc>> {
        self.last_verified_at
            .or_else(|| self.sources.iter().map(|s| s.retrieved_at).max())
    }

    /// Whether the value is older than `max_age` at `now`
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        match self.freshness() {
            Some(at) => now - at > max_age,
            None => true,
        }
    }

    /// Transform the value, keeping score and provenance
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Conf<U> {
        Conf {
            value: f(self.value),
            confidence: self.confidence,
            sources: self.sources,
            rationale: self.rationale,
            last_verified_at: self.last_verified_at,
            is_placeholder: self.is_placeholder,
        }
    }
}
