use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use portico_primitives::Section;
use pretty_assertions::assert_eq;

use super::*;

/// Scriptable viewport: settable metrics plus logs of programmatic scrolls
/// and live subscriptions.
struct FakeViewport {
	scroll_y: Cell<f64>,
	height: Cell<f64>,
	scrolled_to: RefCell<Vec<f64>>,
	live_subscriptions: Rc<Cell<usize>>,
}

impl FakeViewport {
	fn new(height: f64) -> Self {
		Self {
			scroll_y: Cell::new(0.0),
			height: Cell::new(height),
			scrolled_to: RefCell::new(Vec::new()),
			live_subscriptions: Rc::new(Cell::new(0)),
		}
	}

	fn set_scroll(&self, scroll_y: f64) {
		self.scroll_y.set(scroll_y);
	}
}

impl Viewport for FakeViewport {
	fn sample(&self) -> ViewportSample {
		ViewportSample { scroll_y: self.scroll_y.get(), height: self.height.get() }
	}

	fn scroll_to(&self, offset: f64) {
		self.scrolled_to.borrow_mut().push(offset);
		self.scroll_y.set(offset.max(0.0));
	}

	fn subscribe_scroll(&self) -> ScrollSubscription {
		self.live_subscriptions.set(self.live_subscriptions.get() + 1);
		let live = Rc::clone(&self.live_subscriptions);
		ScrollSubscription::new(move || live.set(live.get() - 1))
	}
}

struct FakeNav {
	history_available: bool,
	pushed: Vec<String>,
	assigned: Vec<String>,
}

impl FakeNav {
	fn new() -> Self {
		Self { history_available: true, pushed: Vec::new(), assigned: Vec::new() }
	}
}

impl NavigationSink for FakeNav {
	fn push_fragment(&mut self, fragment: &str) -> bool {
		if !self.history_available {
			return false;
		}
		self.pushed.push(fragment.to_owned());
		true
	}

	fn assign_fragment(&mut self, fragment: &str) {
		self.assigned.push(fragment.to_owned());
	}
}

const SECTIONS: [Section; 3] = [Section::Contribute, Section::Budget, Section::About];

fn registry_with(navbar: f64, anchors: &[(Section, f64)]) -> SectionRegistry {
	let mut registry = SectionRegistry::new();
	registry.set_navbar(navbar);
	for &(section, offset) in anchors {
		registry.register(section, offset);
	}
	registry
}

fn tracker() -> SectionTracker {
	SectionTracker::new(ScrollPolicy::default())
}

const AFTER_WINDOW: Duration = Duration::from_millis(150);

#[test]
fn start_subscribes_and_evaluates_the_restored_position() {
	let registry = registry_with(5_000.0, &[(Section::Contribute, 0.0), (Section::Budget, 500.0), (Section::About, 1_000.0)]);
	let viewport = FakeViewport::new(800.0);
	viewport.set_scroll(50.0);
	let mut tracker = tracker();

	let state = tracker.start(&registry, &SECTIONS, &viewport, Instant::now());
	assert_eq!(state, Some(ViewState { nav_fixed: false, active_section: Some(Section::Contribute) }));
	assert!(tracker.is_running());
	assert_eq!(viewport.live_subscriptions.get(), 1);

	// A second start only re-evaluates.
	tracker.start(&registry, &SECTIONS, &viewport, Instant::now() + AFTER_WINDOW);
	assert_eq!(viewport.live_subscriptions.get(), 1);
}

#[test]
fn reverse_scan_prefers_the_latest_qualifying_section() {
	let registry = registry_with(5_000.0, &[(Section::Contribute, 0.0), (Section::Budget, 500.0), (Section::About, 1_000.0)]);
	let viewport = FakeViewport::new(800.0);
	let mut tracker = tracker();
	let base = Instant::now();

	// Reach 450: only the first section's top is above the reach line.
	viewport.set_scroll(50.0);
	let state = tracker.on_scroll(&registry, &SECTIONS, &viewport, base);
	assert_eq!(state.and_then(|s| s.active_section), Some(Section::Contribute));

	// Reach 700: two sections qualify; the scan takes the latest one.
	viewport.set_scroll(300.0);
	let state = tracker.on_scroll(&registry, &SECTIONS, &viewport, base + AFTER_WINDOW);
	assert_eq!(state.and_then(|s| s.active_section), Some(Section::Budget));

	// Reach 900: the last section is still short of its threshold, so the
	// selection does not change and nothing is emitted.
	viewport.set_scroll(500.0);
	let state = tracker.on_scroll(&registry, &SECTIONS, &viewport, base + AFTER_WINDOW * 2);
	assert_eq!(state, None);
	assert_eq!(tracker.state().active_section, Some(Section::Budget));
}

#[test]
fn nothing_qualifying_retains_the_previous_selection() {
	let registry = registry_with(5_000.0, &[(Section::Budget, 600.0), (Section::About, 1_200.0)]);
	let sections = [Section::Budget, Section::About];
	let viewport = FakeViewport::new(800.0);
	let mut tracker = tracker();
	let base = Instant::now();

	viewport.set_scroll(400.0);
	let state = tracker.on_scroll(&registry, &sections, &viewport, base);
	assert_eq!(state.and_then(|s| s.active_section), Some(Section::Budget));

	// Back above every anchor: no section qualifies, the highlight stays.
	viewport.set_scroll(0.0);
	let state = tracker.on_scroll(&registry, &sections, &viewport, base + AFTER_WINDOW);
	assert_eq!(state, None);
	assert_eq!(tracker.state().active_section, Some(Section::Budget));
}

#[test]
fn navbar_crossing_emits_one_change_per_direction() {
	let registry = registry_with(200.0, &[]);
	let viewport = FakeViewport::new(800.0);
	let mut tracker = tracker();
	let base = Instant::now();

	// Above the anchor: nothing changed from the initial state.
	assert_eq!(tracker.on_scroll(&registry, &[], &viewport, base), None);

	// Crossing the anchor exactly pins the navbar.
	viewport.set_scroll(200.0);
	let state = tracker.on_scroll(&registry, &[], &viewport, base + AFTER_WINDOW);
	assert_eq!(state, Some(ViewState { nav_fixed: true, active_section: None }));

	// Deeper scrolls re-derive the same state silently.
	viewport.set_scroll(350.0);
	assert_eq!(tracker.on_scroll(&registry, &[], &viewport, base + AFTER_WINDOW * 2), None);

	// Scrolling back above releases it again.
	viewport.set_scroll(100.0);
	let state = tracker.on_scroll(&registry, &[], &viewport, base + AFTER_WINDOW * 3);
	assert_eq!(state, Some(ViewState { nav_fixed: false, active_section: None }));
}

#[test]
fn missing_navbar_anchor_skips_the_whole_tick() {
	let mut registry = SectionRegistry::new();
	registry.register(Section::About, 100.0);
	let viewport = FakeViewport::new(800.0);
	viewport.set_scroll(600.0);
	let mut tracker = tracker();
	let base = Instant::now();

	assert_eq!(tracker.on_scroll(&registry, &[Section::About], &viewport, base), None);
	assert_eq!(tracker.state(), ViewState::default());

	// Once the navbar mounts, the next evaluation proceeds.
	registry.set_navbar(200.0);
	let state = tracker.on_scroll(&registry, &[Section::About], &viewport, base + AFTER_WINDOW);
	assert_eq!(state, Some(ViewState { nav_fixed: true, active_section: Some(Section::About) }));
}

#[test]
fn unregistered_sections_are_skipped_not_errors() {
	let registry = registry_with(5_000.0, &[(Section::Budget, 100.0)]);
	let viewport = FakeViewport::new(800.0);
	let mut tracker = tracker();

	let state = tracker.on_scroll(&registry, &SECTIONS, &viewport, Instant::now());
	assert_eq!(state.and_then(|s| s.active_section), Some(Section::Budget));
}

#[test]
fn bursts_coalesce_and_poll_evaluates_the_latest_position() {
	let registry = registry_with(5_000.0, &[(Section::Contribute, 0.0), (Section::Budget, 500.0), (Section::About, 1_000.0)]);
	let viewport = FakeViewport::new(800.0);
	let mut tracker = tracker();
	let base = Instant::now();

	assert!(tracker.on_scroll(&registry, &SECTIONS, &viewport, base).is_some());

	// Inside the window: both events coalesce, no evaluation runs.
	viewport.set_scroll(300.0);
	assert_eq!(tracker.on_scroll(&registry, &SECTIONS, &viewport, base + Duration::from_millis(30)), None);
	viewport.set_scroll(900.0);
	assert_eq!(tracker.on_scroll(&registry, &SECTIONS, &viewport, base + Duration::from_millis(60)), None);

	// Still inside: the trailing run waits.
	assert_eq!(tracker.poll(&registry, &SECTIONS, &viewport, base + Duration::from_millis(90)), None);

	// Window elapsed: the trailing run sees the final burst position.
	let state = tracker.poll(&registry, &SECTIONS, &viewport, base + Duration::from_millis(120));
	assert_eq!(state.and_then(|s| s.active_section), Some(Section::About));

	// Nothing left pending.
	assert_eq!(tracker.poll(&registry, &SECTIONS, &viewport, base + Duration::from_millis(300)), None);
}

#[test]
fn activate_section_scrolls_with_the_large_viewport_alignment() {
	let registry = registry_with(200.0, &[(Section::Budget, 600.0)]);
	let viewport = FakeViewport::new(800.0);
	let tracker = tracker();
	let mut nav = FakeNav::new();

	assert!(tracker.activate_section(Section::Budget, &registry, &viewport, &mut nav));
	assert_eq!(*viewport.scrolled_to.borrow(), [550.0]);
	assert_eq!(nav.pushed, ["section-budget"]);
	assert_eq!(nav.assigned, Vec::<String>::new());
}

#[test]
fn activate_section_aligns_below_the_anchor_on_small_viewports() {
	let registry = registry_with(200.0, &[(Section::Budget, 600.0)]);
	let viewport = FakeViewport::new(500.0);
	let tracker = tracker();
	let mut nav = FakeNav::new();

	assert!(tracker.activate_section(Section::Budget, &registry, &viewport, &mut nav));
	assert_eq!(*viewport.scrolled_to.borrow(), [605.0]);
}

#[test]
fn activate_section_falls_back_when_history_is_unavailable() {
	let registry = registry_with(200.0, &[(Section::About, 900.0)]);
	let viewport = FakeViewport::new(800.0);
	let tracker = tracker();
	let mut nav = FakeNav::new();
	nav.history_available = false;

	assert!(tracker.activate_section(Section::About, &registry, &viewport, &mut nav));
	assert_eq!(nav.pushed, Vec::<String>::new());
	assert_eq!(nav.assigned, ["section-about"]);
}

#[test]
fn activate_section_without_an_anchor_touches_nothing() {
	let registry = registry_with(200.0, &[]);
	let viewport = FakeViewport::new(800.0);
	let tracker = tracker();
	let mut nav = FakeNav::new();

	assert!(!tracker.activate_section(Section::Budget, &registry, &viewport, &mut nav));
	assert!(viewport.scrolled_to.borrow().is_empty());
	assert!(nav.pushed.is_empty());
	assert!(nav.assigned.is_empty());
}

#[test]
fn stop_and_drop_release_the_subscription() {
	let registry = registry_with(200.0, &[]);
	let viewport = FakeViewport::new(800.0);
	let mut tracker = tracker();

	tracker.start(&registry, &[], &viewport, Instant::now());
	assert_eq!(viewport.live_subscriptions.get(), 1);

	tracker.stop();
	assert!(!tracker.is_running());
	assert_eq!(viewport.live_subscriptions.get(), 0);

	tracker.start(&registry, &[], &viewport, Instant::now() + AFTER_WINDOW);
	assert_eq!(viewport.live_subscriptions.get(), 1);
	drop(tracker);
	assert_eq!(viewport.live_subscriptions.get(), 0);
}
