use serde::{Deserialize, Serialize};

/// A named content block of the profile page, addressable by scroll anchor
/// and URL fragment.
///
/// Declaration order is the canonical catalog order: every derived section
/// list is an order-preserving subsequence of [`Section::ALL`], never
/// re-sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
	Contribute,
	Updates,
	Budget,
	Contributors,
	Contributions,
	Transactions,
	About,
}

impl Section {
	/// Master catalog, in canonical display order.
	pub const ALL: [Section; 7] = [
		Section::Contribute,
		Section::Updates,
		Section::Budget,
		Section::Contributors,
		Section::Contributions,
		Section::Transactions,
		Section::About,
	];

	/// Stable kebab name used in anchors and wire payloads.
	pub const fn name(self) -> &'static str {
		match self {
			Section::Contribute => "contribute",
			Section::Updates => "updates",
			Section::Budget => "budget",
			Section::Contributors => "contributors",
			Section::Contributions => "contributions",
			Section::Transactions => "transactions",
			Section::About => "about",
		}
	}

	/// URL fragment identifier for deep-linking.
	pub fn fragment(self) -> String {
		format!("section-{}", self.name())
	}
}
