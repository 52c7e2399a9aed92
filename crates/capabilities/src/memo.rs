/// A single-slot memo: remembers the value for the most recent key only.
///
/// The derivations in this crate are cheap and pure, so one slot keyed by
/// input identity is all the caching the page loop needs. A new key evicts
/// the old entry.
#[derive(Debug)]
pub struct Memo<K, V> {
	slot: Option<(K, V)>,
}

impl<K: PartialEq, V> Memo<K, V> {
	pub const fn new() -> Self {
		Self { slot: None }
	}

	/// Returns the cached value for `key`, computing it only on key change.
	pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
		if !self.slot.as_ref().is_some_and(|(cached, _)| *cached == key) {
			self.slot = None;
		}
		let (_, value) = self.slot.get_or_insert_with(|| {
			let value = compute(&key);
			(key, value)
		});
		value
	}
}

impl<K: PartialEq, V> Default for Memo<K, V> {
	fn default() -> Self {
		Self::new()
	}
}
