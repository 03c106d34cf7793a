//! Boost/penalty engine
//!
//! Recomputes a wrapper's score from corroboration and quality signals,
//! independently of how the wrapper was constructed.

use crate::conf::{is_corroborated, penalize, round2, CORROBORATION_BOOST, MAX_BOOSTED_CONFIDENCE};
use crate::construction::{EMPTY_PENALTY, PLACEHOLDER_PENALTY};
use crate::{AttributeValue, Conf};

/// Penalty for a value past its freshness window
pub const STALE_PENALTY: f64 = 0.10;

/// Penalty for a value that failed format validation
pub const FORMAT_INVALID_PENALTY: f64 = 0.10;

/// Quality signals observed by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualitySignals {
    /// Treat the value as empty regardless of its content
    pub is_empty: bool,
    /// The value is past its freshness window
    pub is_stale: bool,
    /// Result of format validation; `None` when not validated
    pub format_valid: Option<bool>,
}

impl QualitySignals {
    /// Signals for a stale value
    pub fn stale() -> Self {
        Self {
            is_stale: true,
            ..Self::default()
        }
    }
}

/// Compute a new confidence for `conf` under the given signals
///
/// Applied in order, each step floored at 0, the result rounded:
/// 1. Corroboration: +0.05 (capped at 0.98) when sources span ≥2 kinds
/// 2. Empty (signal or value): −0.15
/// 3. Placeholder: −0.10
/// 4. Stale: −0.10
/// 5. Format explicitly invalid: −0.10
pub fn apply_boost_penalties<T: AttributeValue>(conf: &Conf<T>, signals: QualitySignals) -> f64 {
    let mut score = conf.confidence;

    if is_corroborated(&conf.sources) {
        score = (score + CORROBORATION_BOOST).min(MAX_BOOSTED_CONFIDENCE);
    }
    if signals.is_empty || conf.value.is_empty_value() {
        score = penalize(score, EMPTY_PENALTY);
    }
    if conf.is_placeholder {
        score = penalize(score, PLACEHOLDER_PENALTY);
    }
    if signals.is_stale {
        score = penalize(score, STALE_PENALTY);
    }
    if signals.format_valid == Some(false) {
        score = penalize(score, FORMAT_INVALID_PENALTY);
    }

    round2(score.max(0.0))
}

/// Apply only the penalties that describe evidence gathered after the score
/// was computed: staleness and failed format validation
///
/// Corroboration, emptiness and placeholder adjustments are already part of a
/// stored score, so they are not applied again and `signals.is_empty` is
/// ignored. A score with neither signal set comes back unchanged.
pub fn apply_revalidation_penalties(confidence: f64, signals: QualitySignals) -> f64 {
    let mut score = confidence;

    if signals.is_stale {
        score = penalize(score, STALE_PENALTY);
    }
    if signals.format_valid == Some(false) {
        score = penalize(score, FORMAT_INVALID_PENALTY);
    }

    round2(score.max(0.0))
}

impl<T: AttributeValue> Conf<T> {
    /// A copy of this wrapper rescored by [`apply_boost_penalties`]
    pub fn rescored(&self, signals: QualitySignals) -> Conf<T>
    where
        T: Clone,
    {
        let confidence = apply_boost_penalties(self, signals);
        self.clone().with_confidence(confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{wrap_conf, SourceKind, SourceRef, WrapOptions};
    use chrono::Utc;

    fn places(value: &'static str) -> Conf<&'static str> {
        wrap_conf(value, SourceKind::GooglePlaces, WrapOptions::default())
    }

    #[test]
    fn test_no_signals_is_identity() {
        let conf = places("555-0100");
        assert_eq!(apply_boost_penalties(&conf, QualitySignals::default()), 0.90);
    }

    #[test]
    fn test_corroboration_boost() {
        let mut conf = places("555-0100");
        conf.sources.push(SourceRef::new(SourceKind::Osm, Utc::now()));
        assert_eq!(apply_boost_penalties(&conf, QualitySignals::default()), 0.95);
    }

    #[test]
    fn test_corroboration_boost_capped() {
        let mut conf = wrap_conf("x", SourceKind::Owner, WrapOptions::default());
        conf.sources.push(SourceRef::new(SourceKind::Osm, Utc::now()));
        // 0.95 + 0.05 capped at 0.98
        assert_eq!(apply_boost_penalties(&conf, QualitySignals::default()), 0.98);
    }

    #[test]
    fn test_same_kind_sources_no_boost() {
        let mut conf = places("x");
        conf.sources.push(SourceRef::new(SourceKind::GooglePlaces, Utc::now()).with_id("other"));
        assert_eq!(apply_boost_penalties(&conf, QualitySignals::default()), 0.90);
    }

    #[test]
    fn test_empty_signal_or_value() {
        let conf = places("x");
        let signals = QualitySignals {
            is_empty: true,
            ..QualitySignals::default()
        };
        assert_eq!(apply_boost_penalties(&conf, signals), 0.75);

        // Construction already penalized once; the engine penalizes again
        let empty = places("");
        assert_eq!(empty.confidence, 0.75);
        assert_eq!(apply_boost_penalties(&empty, QualitySignals::default()), 0.60);
    }

    #[test]
    fn test_penalties_are_additive() {
        let conf = places("x");
        let signals = QualitySignals {
            is_empty: true,
            is_stale: true,
            format_valid: Some(false),
        };
        // 0.90 - 0.15 - 0.10 - 0.10
        assert_eq!(apply_boost_penalties(&conf, signals), 0.55);
    }

    #[test]
    fn test_format_valid_only_penalized_when_false() {
        let conf = places("x");
        let valid = QualitySignals {
            format_valid: Some(true),
            ..QualitySignals::default()
        };
        assert_eq!(apply_boost_penalties(&conf, valid), 0.90);

        let invalid = QualitySignals {
            format_valid: Some(false),
            ..QualitySignals::default()
        };
        assert_eq!(apply_boost_penalties(&conf, invalid), 0.80);
    }

    #[test]
    fn test_floor_at_zero() {
        let conf = wrap_conf("", SourceKind::Stock, WrapOptions::placeholder());
        let signals = QualitySignals {
            is_empty: true,
            is_stale: true,
            format_valid: Some(false),
        };
        assert_eq!(apply_boost_penalties(&conf, signals), 0.0);
    }

    #[test]
    fn test_revalidation_skips_stored_adjustments() {
        assert_eq!(apply_revalidation_penalties(0.95, QualitySignals::default()), 0.95);
        assert_eq!(apply_revalidation_penalties(0.95, QualitySignals::stale()), 0.85);

        let signals = QualitySignals {
            is_empty: true,
            is_stale: true,
            format_valid: Some(false),
        };
        assert_eq!(apply_revalidation_penalties(0.50, signals), 0.30);
        assert_eq!(apply_revalidation_penalties(0.05, signals), 0.0);
    }

    #[test]
    fn test_rescored_returns_new_wrapper() {
        let conf = places("x");
        let stale = conf.rescored(QualitySignals::stale());

        assert_eq!(stale.confidence, 0.80);
        assert_eq!(conf.confidence, 0.90);
        assert_eq!(stale.sources, conf.sources);
    }
}
