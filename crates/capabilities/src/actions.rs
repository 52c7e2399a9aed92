use portico_primitives::{CollectiveKind, CollectiveProfile};

/// Header actions offered to the current viewer.
///
/// One flag per button in the profile header's action strip; the rendering
/// layer shows whatever is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallsToAction {
	/// Contact the collective's team.
	pub has_contact: bool,
	/// File an expense against the collective's budget.
	pub has_submit_expense: bool,
	/// Apply to be hosted by this host.
	pub has_apply: bool,
	/// Open the host's admin dashboard.
	pub has_dashboard: bool,
	/// Manage the viewer's own recurring contributions.
	pub has_manage_subscriptions: bool,
}

/// Derives the action flags from the profile and the viewer's admin status.
pub fn calls_to_action(profile: &CollectiveProfile, is_admin: bool) -> CallsToAction {
	let is_collective = profile.kind == CollectiveKind::Collective;
	CallsToAction {
		has_contact: is_collective,
		has_submit_expense: is_collective,
		has_apply: profile.is_host,
		has_dashboard: profile.is_host && is_admin,
		has_manage_subscriptions: !profile.is_host && is_admin && !is_collective,
	}
}
