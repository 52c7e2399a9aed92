#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Core domain types for collective profile pages: the collective itself,
//! its page sections, the notification activity catalog, and persisted
//! webhook records.
//!
//! Everything here is a plain value type with the platform's wire names
//! attached via serde; derivation rules and stateful controllers live in
//! `portico-capabilities` and `portico-page`.

/// Notification activity catalog and wire ids.
pub mod activity;
/// Collective identity and attributes.
pub mod collective;
/// Profile page section catalog.
pub mod section;
/// Persisted webhook records.
pub mod webhook;

pub use activity::ActivityKind;
pub use collective::{CollectiveId, CollectiveKind, CollectiveProfile};
pub use section::Section;
pub use webhook::{WebhookId, WebhookRecord};
