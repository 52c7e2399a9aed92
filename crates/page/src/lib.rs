#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Stateful controllers behind a collective's profile page.
//!
//! [`viewport`] keeps the sticky navbar and active-section highlight in
//! sync with scroll position; [`webhooks`] runs the editable webhook
//! collection with validation, dirty tracking, and an optimistic commit
//! protocol; [`ProfilePage`] wires both to the capability derivations for
//! one profile.
//!
//! Everything external (viewport metrics, navigation history, the remote
//! persistence service) enters through the traits in [`viewport::provider`]
//! and [`webhooks::store`], and time enters as caller-supplied [`Instant`]s,
//! so the controllers run deterministically under test.
//!
//! [`Instant`]: std::time::Instant

/// Page-level orchestration of tracker, editor, and capabilities.
pub mod page;
/// Scroll tracking: section registry, throttle, and the tracker itself.
pub mod viewport;
/// The webhook collection editor and its persistence boundary.
pub mod webhooks;

pub use page::ProfilePage;
pub use viewport::{ScrollPolicy, SectionRegistry, SectionTracker, ViewState};
pub use webhooks::{Submission, Validity, WebhookEditor};
