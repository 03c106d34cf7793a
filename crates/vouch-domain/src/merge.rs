//! Merging two observations of the same attribute

use crate::conf::{is_corroborated, round2, CORROBORATION_BOOST, MAX_BOOSTED_CONFIDENCE};
use crate::{Conf, SourceRef};
use std::collections::HashSet;

/// Merge two wrappers describing the same logical attribute
///
/// - The higher-confidence wrapper is primary (ties favor `a`) and supplies
///   the value and `last_verified_at`
/// - Sources are `a`'s then `b`'s, deduplicated by kind plus id-or-url,
///   first occurrence wins
/// - +0.05 (capped at 0.98) over the primary's confidence when the merged
///   sources span two or more kinds
/// - Placeholder only if both inputs are placeholders
/// - Rationale: primary's, else `a`'s, else `b`'s
///
/// The rationale fallback checks `a` before `b` regardless of which one is
/// primary. Ties make `a` primary, so with equal scores the result depends
/// on argument order; callers merging a chain of observations must keep a
/// fixed pairwise order.
pub fn merge_conf<T: Clone>(a: &Conf<T>, b: &Conf<T>) -> Conf<T> {
    let a_is_primary = a.confidence >= b.confidence;
    let (primary, secondary) = if a_is_primary { (a, b) } else { (b, a) };

    let sources = dedup_sources(a.sources.iter().chain(b.sources.iter()));

    let confidence = if is_corroborated(&sources) {
        round2((primary.confidence + CORROBORATION_BOOST).min(MAX_BOOSTED_CONFIDENCE))
    } else {
        primary.confidence
    };

    let rationale = primary
        .rationale
        .as_ref()
        .or(a.rationale.as_ref())
        .or(b.rationale.as_ref())
        .cloned();

    Conf {
        value: primary.value.clone(),
        confidence,
        sources,
        rationale,
        last_verified_at: primary.last_verified_at,
        is_placeholder: primary.is_placeholder && secondary.is_placeholder,
    }
}

fn dedup_sources<'a>(sources: impl Iterator<Item = &'a SourceRef>) -> Vec<SourceRef> {
    let mut seen = HashSet::new();
    sources
        .filter(|s| seen.insert(s.dedup_key()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{wrap_conf_at, SourceKind, WrapOptions};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    fn observe(value: &'static str, kind: SourceKind, id: &str, hour: u32) -> Conf<&'static str> {
        let options = WrapOptions {
            source_id: Some(id.to_string()),
            ..WrapOptions::default()
        };
        wrap_conf_at(value, kind, options, at(hour))
    }

    #[test]
    fn test_merge_places_and_osm() {
        let places = observe("Blue Door Bakery", SourceKind::GooglePlaces, "ChIJ1", 9);
        let osm = observe("Blue Door Bakery & Cafe", SourceKind::Osm, "node/7", 10);

        let merged = merge_conf(&places, &osm);

        assert_eq!(merged.confidence, 0.95);
        assert_eq!(merged.value, "Blue Door Bakery");
        assert_eq!(merged.sources.len(), 2);
        assert_eq!(merged.sources[0].kind, SourceKind::GooglePlaces);
        assert_eq!(merged.sources[1].kind, SourceKind::Osm);
        assert_eq!(merged.last_verified_at, Some(at(9)));
    }

    #[test]
    fn test_primary_is_higher_confidence() {
        let osm = observe("Main St 1", SourceKind::Osm, "node/7", 9);
        let owner = observe("Main Street 1", SourceKind::Owner, "form", 10);

        let merged = merge_conf(&osm, &owner);

        assert_eq!(merged.value, "Main Street 1");
        assert_eq!(merged.confidence, 0.98);
        assert_eq!(merged.last_verified_at, Some(at(10)));
        // Source order follows argument order, not primacy
        assert_eq!(merged.sources[0].kind, SourceKind::Osm);
    }

    #[test]
    fn test_tie_favors_a() {
        let osm = observe("first", SourceKind::Osm, "node/1", 9);
        let reviews = observe("second", SourceKind::ReviewPlatform, "biz/1", 10);

        let merged = merge_conf(&osm, &reviews);
        assert_eq!(merged.value, "first");

        let merged = merge_conf(&reviews, &osm);
        assert_eq!(merged.value, "second");
    }

    #[test]
    fn test_same_kind_no_boost() {
        let a = observe("x", SourceKind::Osm, "node/1", 9);
        let b = observe("x", SourceKind::Osm, "node/2", 10);

        let merged = merge_conf(&a, &b);
        assert_eq!(merged.confidence, 0.70);
        assert_eq!(merged.sources.len(), 2);
    }

    #[test]
    fn test_dedup_by_url_when_no_id() {
        let options = || WrapOptions {
            source_url: Some("https://example.com/about".to_string()),
            ..WrapOptions::default()
        };
        let a = wrap_conf_at("x", SourceKind::Whois, options(), at(9));
        let b = wrap_conf_at("x", SourceKind::Whois, options(), at(10));

        let merged = merge_conf(&a, &b);
        assert_eq!(merged.sources.len(), 1);
        assert_eq!(merged.sources[0].retrieved_at, at(9));
    }

    #[test]
    fn test_self_merge_is_idempotent() {
        let w = observe("x", SourceKind::GooglePlaces, "ChIJ1", 9);
        let merged = merge_conf(&w, &w);

        assert_eq!(merged.confidence, w.confidence);
        assert_eq!(merged.sources, w.sources);
        assert_eq!(merged, w);
    }

    #[test]
    fn test_placeholder_requires_both() {
        let p1 = wrap_conf_at("x", SourceKind::LlmGenerated, WrapOptions::placeholder(), at(9));
        let p2 = wrap_conf_at("y", SourceKind::Stock, WrapOptions::placeholder(), at(10));
        let real = observe("z", SourceKind::Osm, "node/1", 11);

        assert!(merge_conf(&p1, &p2).is_placeholder);
        assert!(!merge_conf(&p1, &real).is_placeholder);
        assert!(!merge_conf(&real, &p1).is_placeholder);
    }

    #[test]
    fn test_rationale_prefers_primary() {
        let low = observe("x", SourceKind::Osm, "node/1", 9).with_rationale("from map");
        let high = observe("y", SourceKind::Owner, "form", 10).with_rationale("owner said so");

        assert_eq!(merge_conf(&low, &high).rationale.as_deref(), Some("owner said so"));
    }

    #[test]
    fn test_rationale_fallback_when_primary_has_none() {
        let a = observe("x", SourceKind::Osm, "node/1", 9).with_rationale("rationale a");
        let b = observe("y", SourceKind::Owner, "form", 10);
        let c = observe("z", SourceKind::Stock, "img/1", 11).with_rationale("rationale c");

        // b is primary in both orders and has no rationale
        assert_eq!(merge_conf(&a, &b).rationale.as_deref(), Some("rationale a"));
        assert_eq!(merge_conf(&b, &a).rationale.as_deref(), Some("rationale a"));
        assert_eq!(merge_conf(&b, &c).rationale.as_deref(), Some("rationale c"));
        assert_eq!(merge_conf(&c, &b).rationale.as_deref(), Some("rationale c"));
    }

    #[test]
    fn test_rationale_on_tie_depends_on_argument_order() {
        let a = observe("x", SourceKind::Osm, "node/1", 9).with_rationale("rationale a");
        let b = observe("y", SourceKind::ReviewPlatform, "biz/1", 10).with_rationale("rationale b");

        assert_eq!(merge_conf(&a, &b).rationale.as_deref(), Some("rationale a"));
        assert_eq!(merge_conf(&b, &a).rationale.as_deref(), Some("rationale b"));
    }

    #[test]
    fn test_no_rationale_anywhere() {
        let a = observe("x", SourceKind::Osm, "node/1", 9);
        let b = observe("y", SourceKind::Owner, "form", 10);
        assert!(merge_conf(&a, &b).rationale.is_none());
    }
}
