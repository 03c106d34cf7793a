//! Source registry and provenance records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Category of data origin
///
/// Each kind carries a fixed base trust weight. Weights decrease roughly:
/// owner > user-provided ≈ places API > open map / reviews >
/// registry / imagery / social > generated / inferred > stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Entered directly by the business owner
    Owner,

    /// Entered by a user of the product on the owner's behalf
    UserProvided,

    /// Mapping / places API listing
    GooglePlaces,

    /// OpenStreetMap data
    Osm,

    /// Review platform listing
    ReviewPlatform,

    /// Domain registration records
    Whois,

    /// Street-level imagery
    StreetView,

    /// Social media profile
    SocialProfile,

    /// Generative model output
    LlmGenerated,

    /// Internal inference from other attributes
    Inferred,

    /// Stock asset library
    Stock,
}

impl SourceKind {
    /// Every source kind, in descending trust order
    pub const ALL: [SourceKind; 11] = [
        SourceKind::Owner,
        SourceKind::UserProvided,
        SourceKind::GooglePlaces,
        SourceKind::Osm,
        SourceKind::ReviewPlatform,
        SourceKind::Whois,
        SourceKind::StreetView,
        SourceKind::SocialProfile,
        SourceKind::LlmGenerated,
        SourceKind::Inferred,
        SourceKind::Stock,
    ];

    /// Base trust weight in [0, 1]
    pub const fn base_weight(&self) -> f64 {
        match self {
            SourceKind::Owner => 0.95,
            SourceKind::UserProvided => 0.90,
            SourceKind::GooglePlaces => 0.90,
            SourceKind::Osm => 0.70,
            SourceKind::ReviewPlatform => 0.70,
            SourceKind::Whois => 0.65,
            SourceKind::StreetView => 0.65,
            SourceKind::SocialProfile => 0.65,
            SourceKind::LlmGenerated => 0.60,
            SourceKind::Inferred => 0.55,
            SourceKind::Stock => 0.30,
        }
    }

    /// Get the source kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Owner => "owner",
            SourceKind::UserProvided => "user_provided",
            SourceKind::GooglePlaces => "google_places",
            SourceKind::Osm => "osm",
            SourceKind::ReviewPlatform => "review_platform",
            SourceKind::Whois => "whois",
            SourceKind::StreetView => "street_view",
            SourceKind::SocialProfile => "social_profile",
            SourceKind::LlmGenerated => "llm_generated",
            SourceKind::Inferred => "inferred",
            SourceKind::Stock => "stock",
        }
    }

    /// Parse a source kind from its serialized name
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid source kind: {}", s))
    }
}

/// Immutable lookup table from source kind to base weight
///
/// Built once per process; use [`SourceRegistry::global`] rather than
/// constructing new tables.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    weights: HashMap<SourceKind, f64>,
}

static GLOBAL_REGISTRY: LazyLock<SourceRegistry> = LazyLock::new(SourceRegistry::builtin);

impl SourceRegistry {
    fn builtin() -> Self {
        let weights = SourceKind::ALL
            .into_iter()
            .map(|kind| (kind, kind.base_weight()))
            .collect();
        Self { weights }
    }

    /// The process-wide registry
    pub fn global() -> &'static SourceRegistry {
        &GLOBAL_REGISTRY
    }

    /// Base weight for a source kind
    pub fn weight(&self, kind: SourceKind) -> f64 {
        self.weights
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.base_weight())
    }
}

/// A single attribution record
///
/// Immutable once created; builders consume and return `self`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Provenance category
    pub kind: SourceKind,

    /// Identifier in the external system (place id, OSM node, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// URL the value was retrieved from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// When the value was retrieved
    pub retrieved_at: DateTime<Utc>,

    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SourceRef {
    /// Create a new source reference
    pub fn new(kind: SourceKind, retrieved_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            id: None,
            url: None,
            retrieved_at,
            notes: None,
        }
    }

    /// Attach an external identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach a source URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attach a note
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Identity used when deduplicating merged sources: the kind plus the
    /// external id, or the url when no id is present
    pub fn dedup_key(&self) -> (SourceKind, Option<&str>) {
        (self.kind, self.id.as_deref().or(self.url.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_in_range() {
        for kind in SourceKind::ALL {
            let w = kind.base_weight();
            assert!((0.0..=1.0).contains(&w), "{} weight {} out of range", kind, w);
        }
    }

    #[test]
    fn test_weight_ordering() {
        assert!(SourceKind::Owner.base_weight() > SourceKind::UserProvided.base_weight());
        assert_eq!(SourceKind::UserProvided.base_weight(), SourceKind::GooglePlaces.base_weight());
        assert!(SourceKind::GooglePlaces.base_weight() > SourceKind::Osm.base_weight());
        assert!(SourceKind::ReviewPlatform.base_weight() > SourceKind::Whois.base_weight());
        assert!(SourceKind::SocialProfile.base_weight() > SourceKind::LlmGenerated.base_weight());
        assert!(SourceKind::Inferred.base_weight() > SourceKind::Stock.base_weight());
    }

    #[test]
    fn test_registry_matches_kind_weights() {
        let registry = SourceRegistry::global();
        for kind in SourceKind::ALL {
            assert_eq!(registry.weight(kind), kind.base_weight());
        }
        assert_eq!(registry.weight(SourceKind::GooglePlaces), 0.90);
    }

    #[test]
    fn test_parse_and_display() {
        for kind in SourceKind::ALL {
            assert_eq!(SourceKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!("OSM".parse::<SourceKind>(), Ok(SourceKind::Osm));
        assert!("carrier_pigeon".parse::<SourceKind>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SourceKind::GooglePlaces).unwrap();
        assert_eq!(json, "\"google_places\"");
    }

    #[test]
    fn test_dedup_key_prefers_id() {
        let now = Utc::now();
        let with_both = SourceRef::new(SourceKind::Osm, now)
            .with_id("node/42")
            .with_url("https://osm.org/node/42");
        assert_eq!(with_both.dedup_key(), (SourceKind::Osm, Some("node/42")));

        let url_only = SourceRef::new(SourceKind::Osm, now).with_url("https://osm.org/node/42");
        assert_eq!(url_only.dedup_key(), (SourceKind::Osm, Some("https://osm.org/node/42")));

        let bare = SourceRef::new(SourceKind::Stock, now);
        assert_eq!(bare.dedup_key(), (SourceKind::Stock, None));
    }
}
