//! Vouch Domain Layer
//!
//! This crate contains the confidence-weighted attribute model for business
//! profiles. Every attribute gathered about a business (name, hours, contact
//! details, imagery, copy) is stored as a [`Conf`] wrapper carrying a trust
//! score and the sources it came from.
//!
//! ## Key Concepts
//!
//! - **Source kind**: Category of data origin with a fixed base trust weight
//! - **Conf**: A value plus confidence, provenance and placeholder flag
//! - **Corroboration boost**: +0.05 when two or more distinct source kinds agree
//! - **Aggregate confidence**: Weighted mean of every leaf in an attribute tree
//! - **Prominence**: UI visibility tier derived from a confidence score
//!
//! ## Architecture
//!
//! - Pure, synchronous functions only; no I/O and no shared mutable state
//! - Wrappers are never mutated in place, every operation returns a new one
//! - Policy crates (gating, CLI) live elsewhere and consume these types
//!
//! # Examples
//!
//! ```
//! use vouch_domain::{merge_conf, wrap_conf, SourceKind, WrapOptions};
//!
//! let places = wrap_conf("Blue Door Bakery".to_string(), SourceKind::GooglePlaces, WrapOptions::default());
//! let osm = wrap_conf("Blue Door Bakery".to_string(), SourceKind::Osm, WrapOptions::default());
//!
//! let merged = merge_conf(&places, &osm);
//! assert_eq!(merged.confidence, 0.95);
//! assert_eq!(merged.sources.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod boost;
pub mod conf;
pub mod construction;
pub mod merge;
pub mod prominence;
pub mod source;
pub mod value;

// Re-exports for convenience
pub use aggregate::{
    collect_leaf_confidences, compute_aggregate_confidence, default_section_weights,
    AttributeNode, LeafConfidence, SectionWeights, DEFAULT_SECTION_WEIGHTS,
};
pub use boost::{apply_boost_penalties, apply_revalidation_penalties, QualitySignals};
pub use conf::{Conf, ConfError};
pub use construction::{wrap_conf, wrap_conf_at, WrapOptions};
pub use merge::merge_conf;
pub use prominence::{
    get_prominence_level, should_show_component, ComponentThresholds, ProminenceLevel,
    DEFAULT_MIN_CONFIDENCE,
};
pub use source::{SourceKind, SourceRef, SourceRegistry};
pub use value::AttributeValue;
