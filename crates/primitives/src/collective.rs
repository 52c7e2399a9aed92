use serde::{Deserialize, Serialize};

/// Stable numeric identifier of a collective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectiveId(pub i64);

/// The kind of entity a profile page belongs to.
///
/// Capability rules key on the four kinds that carry dedicated behavior
/// (`Collective`, `Organization`, `Event`, `Individual`). Any other kind
/// falls through every kind-specific rule, which is the intended permissive
/// default; `Bot` exists so that path stays concrete and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CollectiveKind {
	Individual,
	Collective,
	Organization,
	Event,
	Bot,
}

/// Attributes of the collective being viewed.
///
/// Immutable from the page core's perspective: the hosting page supplies it
/// from the last successful remote read and replaces the whole value when
/// the read changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectiveProfile {
	pub id: CollectiveId,
	/// URL slug; the read-side entity reference.
	pub slug: String,
	#[serde(rename = "type")]
	pub kind: CollectiveKind,
	#[serde(rename = "isHost")]
	pub is_host: bool,
	#[serde(rename = "isArchived", default)]
	pub is_archived: bool,
}

impl CollectiveProfile {
	/// Creates a profile with host and archived flags cleared.
	pub fn new(id: i64, slug: impl Into<String>, kind: CollectiveKind) -> Self {
		Self {
			id: CollectiveId(id),
			slug: slug.into(),
			kind,
			is_host: false,
			is_archived: false,
		}
	}
}
