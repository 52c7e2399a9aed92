use std::time::{Duration, Instant};

/// Trailing-edge coalescing rate limiter for scroll evaluation.
///
/// The first call of a quiet period passes immediately; calls landing
/// inside the window are coalesced into one pending trailing run instead
/// of being dropped, so the final position of a scroll burst is always
/// evaluated.
#[derive(Debug)]
pub struct Throttle {
	window: Duration,
	last_fired: Option<Instant>,
	pending: bool,
}

impl Throttle {
	pub fn new(window: Duration) -> Self {
		Self { window, last_fired: None, pending: false }
	}

	/// Leading edge: whether a call arriving at `now` may run.
	///
	/// A call inside the window is recorded as pending rather than run.
	pub fn admit(&mut self, now: Instant) -> bool {
		match self.last_fired {
			Some(fired) if now.duration_since(fired) < self.window => {
				self.pending = true;
				false
			}
			_ => {
				self.last_fired = Some(now);
				self.pending = false;
				true
			}
		}
	}

	/// Trailing edge: whether the coalesced call should run at `now`.
	pub fn take_pending(&mut self, now: Instant) -> bool {
		if !self.pending {
			return false;
		}
		match self.last_fired {
			Some(fired) if now.duration_since(fired) < self.window => false,
			_ => {
				self.last_fired = Some(now);
				self.pending = false;
				true
			}
		}
	}

	/// Whether a coalesced call is waiting for the window to elapse.
	pub fn pending(&self) -> bool {
		self.pending
	}
}
