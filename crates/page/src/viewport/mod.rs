//! Scroll-synchronized state for the profile page chrome.
//!
//! The tracker never owns anchors or timers: the page feeds it a
//! [`SectionRegistry`] it maintains as sections mount, a [`Viewport`] to
//! sample, and the current [`Instant`]. Scroll events arrive through
//! [`SectionTracker::on_scroll`]; the host's frame loop drives
//! [`SectionTracker::poll`] so bursts coalesced by the throttle still get
//! their trailing evaluation.

/// Embedding-facing traits: viewport metrics, scroll subscription,
/// navigation history.
pub mod provider;

mod registry;
mod throttle;

use std::time::{Duration, Instant};

use portico_primitives::Section;

pub use provider::{NavigationSink, ScrollSubscription, Viewport, ViewportSample};
pub use registry::SectionRegistry;
pub use throttle::Throttle;

/// Derived scroll state for the page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
	/// Whether the navbar is pinned to the viewport's top edge.
	pub nav_fixed: bool,
	/// Section currently highlighted in the navbar.
	pub active_section: Option<Section>,
}

/// Tuning for scroll tracking.
///
/// The defaults are the behavioral contract; embeddings override them only
/// for instrumentation.
#[derive(Debug, Clone, Copy)]
pub struct ScrollPolicy {
	/// How far above the viewport's bottom edge a section top must sit to
	/// count as reached.
	pub distance_threshold: f64,
	/// Minimum spacing between scroll evaluations.
	pub throttle_window: Duration,
	/// Viewport height below which the small-screen alignment applies.
	pub small_viewport_breakpoint: f64,
	/// Anchor alignment on small viewports.
	pub small_viewport_alignment: f64,
	/// Anchor alignment otherwise; negative keeps the heading clear of the
	/// pinned navbar.
	pub alignment: f64,
}

impl Default for ScrollPolicy {
	fn default() -> Self {
		Self {
			distance_threshold: 400.0,
			throttle_window: Duration::from_millis(100),
			small_viewport_breakpoint: 640.0,
			small_viewport_alignment: 5.0,
			alignment: -50.0,
		}
	}
}

/// Keeps the sticky navbar and active-section highlight in sync with the
/// scroll position.
///
/// State changes only inside an evaluation, and an evaluation reports
/// `Some` only when something actually changed, so hosts can redraw on the
/// return value alone. Identical re-evaluations are silent.
#[derive(Debug)]
pub struct SectionTracker {
	policy: ScrollPolicy,
	throttle: Throttle,
	state: ViewState,
	subscription: Option<ScrollSubscription>,
}

impl SectionTracker {
	pub fn new(policy: ScrollPolicy) -> Self {
		Self {
			throttle: Throttle::new(policy.throttle_window),
			policy,
			state: ViewState::default(),
			subscription: None,
		}
	}

	pub fn state(&self) -> ViewState {
		self.state
	}

	pub fn policy(&self) -> &ScrollPolicy {
		&self.policy
	}

	pub fn is_running(&self) -> bool {
		self.subscription.is_some()
	}

	/// Attaches the scroll subscription and evaluates once immediately, so
	/// a page restored mid-document highlights the right section before the
	/// first scroll event arrives. Starting a started tracker re-evaluates
	/// without re-subscribing.
	pub fn start(&mut self, registry: &SectionRegistry, sections: &[Section], viewport: &dyn Viewport, now: Instant) -> Option<ViewState> {
		if self.subscription.is_none() {
			self.subscription = Some(viewport.subscribe_scroll());
		}
		self.on_scroll(registry, sections, viewport, now)
	}

	/// Drops the scroll subscription. [`Drop`] does the same, so teardown
	/// happens on every exit path.
	pub fn stop(&mut self) {
		self.subscription = None;
	}

	/// Scroll-event entry point, throttled to one evaluation per policy
	/// window. Calls landing inside the window coalesce into a trailing
	/// [`Self::poll`] evaluation rather than being dropped.
	pub fn on_scroll(&mut self, registry: &SectionRegistry, sections: &[Section], viewport: &dyn Viewport, now: Instant) -> Option<ViewState> {
		if !self.throttle.admit(now) {
			return None;
		}
		self.evaluate(registry, sections, viewport.sample())
	}

	/// Frame-loop entry point: runs the coalesced trailing evaluation once
	/// the throttle window has elapsed, evaluating the viewport's latest
	/// position.
	pub fn poll(&mut self, registry: &SectionRegistry, sections: &[Section], viewport: &dyn Viewport, now: Instant) -> Option<ViewState> {
		if !self.throttle.take_pending(now) {
			return None;
		}
		self.evaluate(registry, sections, viewport.sample())
	}

	/// Scrolls to `section`'s anchor and records its fragment in history.
	///
	/// Returns whether the section was reachable: a missing anchor leaves
	/// both the viewport and history untouched. The highlight itself is not
	/// written here; the scroll this triggers re-enters through
	/// [`Self::on_scroll`] and the evaluation keeps sole ownership of state.
	pub fn activate_section(&self, section: Section, registry: &SectionRegistry, viewport: &dyn Viewport, nav: &mut dyn NavigationSink) -> bool {
		let Some(offset) = registry.offset_of(section) else {
			tracing::trace!(section = section.name(), "page.section.activate.miss");
			return false;
		};
		let alignment = if viewport.sample().height < self.policy.small_viewport_breakpoint {
			self.policy.small_viewport_alignment
		} else {
			self.policy.alignment
		};
		viewport.scroll_to(offset + alignment);
		let fragment = section.fragment();
		if !nav.push_fragment(&fragment) {
			nav.assign_fragment(&fragment);
		}
		true
	}

	fn evaluate(&mut self, registry: &SectionRegistry, sections: &[Section], sample: ViewportSample) -> Option<ViewState> {
		let Some(navbar_offset) = registry.navbar_offset() else {
			tracing::trace!("page.scroll.navbar_anchor.miss");
			return None;
		};
		let mut next = self.state;
		next.nav_fixed = navbar_offset - sample.scroll_y <= 0.0;

		// Reverse scan: the lowest section whose top has risen above the
		// reach line wins, so overlapping thresholds resolve to the latest
		// section. Nothing qualifying keeps the previous highlight.
		let reach = sample.scroll_y + sample.height - self.policy.distance_threshold;
		for &section in sections.iter().rev() {
			let Some(offset) = registry.offset_of(section) else {
				continue;
			};
			if offset < reach {
				next.active_section = Some(section);
				break;
			}
		}

		if next == self.state {
			return None;
		}
		tracing::trace!(
			nav_fixed = next.nav_fixed,
			active_section = ?next.active_section,
			"page.scroll.state"
		);
		self.state = next;
		Some(next)
	}
}

#[cfg(test)]
mod tests;
