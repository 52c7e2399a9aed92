use portico_primitives::{CollectiveKind, CollectiveProfile, Section};
use rustc_hash::FxHashSet;

/// Sections shown on a collective's profile page, in canonical page order.
///
/// Derivation is by exclusion: each rule removes the sections its attribute
/// rules out, and whatever survives is shown. [`Section::About`] is in no
/// rule, so kinds that match nothing still render an About page.
pub fn profile_sections(profile: &CollectiveProfile) -> Vec<Section> {
	let mut excluded = FxHashSet::default();
	if profile.kind != CollectiveKind::Collective {
		excluded.extend([Section::Updates, Section::Budget, Section::Contributors]);
	}
	if !matches!(profile.kind, CollectiveKind::Collective | CollectiveKind::Event) {
		excluded.insert(Section::Contribute);
	}
	if !matches!(profile.kind, CollectiveKind::Individual | CollectiveKind::Organization) {
		excluded.extend([Section::Contributions, Section::Transactions]);
	}
	if profile.is_archived {
		excluded.insert(Section::Contribute);
	}
	Section::ALL
		.into_iter()
		.filter(|section| !excluded.contains(section))
		.collect()
}
