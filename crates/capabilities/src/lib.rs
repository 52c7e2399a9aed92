#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Pure capability derivations for collective profiles.
//!
//! Every derivation here follows one shape: build an exclusion set as the
//! union of independent, attribute-keyed rules, then subtract it from a
//! master catalog while preserving the catalog's canonical order. The
//! functions are total (a kind no rule names keeps the ungrouped remainder
//! of its catalog) and deterministic, so callers may cache results by
//! input identity with [`Memo`].

/// Call-to-action flags for the profile header.
pub mod actions;
/// Webhook activity catalogs filtered per collective.
pub mod activities;
/// Single-slot memoization keyed by input identity.
pub mod memo;
/// Visible profile sections per collective.
pub mod sections;

pub use actions::{CallsToAction, calls_to_action};
pub use activities::webhook_activities;
pub use memo::Memo;
pub use sections::profile_sections;
