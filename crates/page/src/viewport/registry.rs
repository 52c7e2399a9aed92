use portico_primitives::Section;
use rustc_hash::FxHashMap;

/// Document offsets for the mounted section anchors and the navbar anchor.
///
/// The page writes entries as sections mount and unmount; the tracker only
/// reads. Offsets shift whenever layout reflows, so readers take them fresh
/// on every evaluation and a missing entry is an expected transient, not an
/// error.
#[derive(Debug, Default)]
pub struct SectionRegistry {
	anchors: FxHashMap<Section, f64>,
	navbar: Option<f64>,
}

impl SectionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, section: Section, offset_top: f64) {
		self.anchors.insert(section, offset_top);
	}

	pub fn unregister(&mut self, section: Section) {
		self.anchors.remove(&section);
	}

	pub fn offset_of(&self, section: Section) -> Option<f64> {
		self.anchors.get(&section).copied()
	}

	pub fn set_navbar(&mut self, offset_top: f64) {
		self.navbar = Some(offset_top);
	}

	pub fn clear_navbar(&mut self) {
		self.navbar = None;
	}

	pub fn navbar_offset(&self) -> Option<f64> {
		self.navbar
	}
}
