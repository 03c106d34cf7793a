//! Vouch Gatekeeper
//!
//! Decides what a downstream renderer may show, based on attribute
//! confidence.
//!
//! The Gatekeeper provides:
//! - Component gating against configurable minimum confidences
//! - Prominence tiers for every bound component
//! - Per-section and overall document scores
//! - Staleness-aware rescoring of individual attributes
//!
//! # Examples
//!
//! ```
//! use vouch_gatekeeper::{ComponentBinding, Gatekeeper, GatingConfig};
//! use vouch_domain::{wrap_conf, AttributeNode, SourceKind, WrapOptions};
//!
//! let gatekeeper = Gatekeeper::new(GatingConfig::default()).unwrap();
//!
//! let phone = wrap_conf("+1 555 0100".to_string(), SourceKind::Osm, WrapOptions::default());
//! let tree = AttributeNode::mapping([("contact", AttributeNode::mapping([("phone", phone.into())]))]);
//!
//! let plan = gatekeeper.plan(&tree, &[ComponentBinding::new("contact.phone", "contact.phone")]);
//! assert!(!plan.decisions[0].visible);
//! ```
//!
//! # Configuration
//!
//! The Gatekeeper can be configured via TOML:
//!
//! ```toml
//! default_min_confidence = 0.5
//! stale_after_days = 180
//!
//! [component_minimums]
//! "contact.phone" = 0.85
//! "hero.title" = 0.7
//!
//! [section_weights]
//! identity = 5.0
//! operations = 4.0
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod gate;

pub use config::GatingConfig;
pub use error::{GatekeeperError, Result};
pub use gate::{ComponentBinding, ComponentDecision, DocumentScore, Gatekeeper, RenderPlan};
