use std::time::Instant;

use portico_capabilities::{CallsToAction, Memo, calls_to_action, profile_sections, webhook_activities};
use portico_primitives::{ActivityKind, CollectiveKind, CollectiveProfile, Section, WebhookRecord};

use crate::viewport::{NavigationSink, ScrollPolicy, SectionRegistry, SectionTracker, ViewState, Viewport};
use crate::webhooks::WebhookEditor;

/// Wiring for one collective's profile page.
///
/// Owns the profile and the viewer's admin signal, the anchor registry the
/// page writes as sections mount and unmount, and the scroll tracker. The
/// section list and call-to-action flags are derived once, since the
/// profile does not change under a mounted page, while the webhook
/// activity catalog is memoized by its deriving attributes.
pub struct ProfilePage {
	profile: CollectiveProfile,
	is_admin: bool,
	sections: Vec<Section>,
	actions: CallsToAction,
	registry: SectionRegistry,
	tracker: SectionTracker,
	activity_memo: Memo<(CollectiveKind, bool), Vec<ActivityKind>>,
}

impl ProfilePage {
	pub fn new(profile: CollectiveProfile, is_admin: bool) -> Self {
		Self::with_policy(profile, is_admin, ScrollPolicy::default())
	}

	pub fn with_policy(profile: CollectiveProfile, is_admin: bool, policy: ScrollPolicy) -> Self {
		Self {
			sections: profile_sections(&profile),
			actions: calls_to_action(&profile, is_admin),
			registry: SectionRegistry::new(),
			tracker: SectionTracker::new(policy),
			activity_memo: Memo::new(),
			profile,
			is_admin,
		}
	}

	pub fn profile(&self) -> &CollectiveProfile {
		&self.profile
	}

	pub fn is_admin(&self) -> bool {
		self.is_admin
	}

	/// Sections this profile shows, in page order.
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	pub fn calls_to_action(&self) -> CallsToAction {
		self.actions
	}

	/// The navbar highlight: the tracked active section, defaulting to the
	/// first derived section before any scroll has selected one.
	pub fn selected_section(&self) -> Option<Section> {
		self.tracker.state().active_section.or_else(|| self.sections.first().copied())
	}

	pub fn view_state(&self) -> ViewState {
		self.tracker.state()
	}

	/// Registry handle for mounting and unmounting section anchors.
	pub fn registry_mut(&mut self) -> &mut SectionRegistry {
		&mut self.registry
	}

	pub fn start(&mut self, viewport: &dyn Viewport, now: Instant) -> Option<ViewState> {
		self.tracker.start(&self.registry, &self.sections, viewport, now)
	}

	pub fn stop(&mut self) {
		self.tracker.stop();
	}

	/// Forwarded scroll event; throttled inside the tracker.
	pub fn handle_scroll(&mut self, viewport: &dyn Viewport, now: Instant) -> Option<ViewState> {
		self.tracker.on_scroll(&self.registry, &self.sections, viewport, now)
	}

	/// Frame-loop hook for the tracker's coalesced trailing evaluation.
	pub fn poll(&mut self, viewport: &dyn Viewport, now: Instant) -> Option<ViewState> {
		self.tracker.poll(&self.registry, &self.sections, viewport, now)
	}

	/// Navbar click: scroll to the section and record its fragment.
	pub fn open_section(&self, section: Section, viewport: &dyn Viewport, nav: &mut dyn NavigationSink) -> bool {
		self.tracker.activate_section(section, &self.registry, viewport, nav)
	}

	/// Masthead click: back to the top of the page.
	pub fn scroll_to_top(&self, viewport: &dyn Viewport) {
		viewport.scroll_to(0.0);
	}

	/// Activity filters webhooks on this profile may use, memoized by the
	/// deriving attributes.
	pub fn webhook_activities(&mut self) -> &[ActivityKind] {
		let key = (self.profile.kind, self.profile.is_host);
		self.activity_memo.get_or_insert_with(key, |&(kind, is_host)| webhook_activities(kind, is_host))
	}

	/// A webhook editor seeded for this profile from a remote read.
	pub fn webhook_editor(&self, records: Vec<WebhookRecord>) -> WebhookEditor {
		WebhookEditor::new(&self.profile, records)
	}
}
