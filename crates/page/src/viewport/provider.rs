use std::fmt;

/// One reading of the viewport's scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSample {
	/// Document offset scrolled past the viewport's top edge.
	pub scroll_y: f64,
	/// Visible viewport height.
	pub height: f64,
}

/// Source of viewport metrics and target of programmatic scrolls.
pub trait Viewport {
	fn sample(&self) -> ViewportSample;

	fn scroll_to(&self, offset: f64);

	/// Attaches the scroll listener. Dropping the returned guard detaches
	/// it again.
	fn subscribe_scroll(&self) -> ScrollSubscription;
}

/// Guard for an attached scroll listener.
///
/// Holds the teardown closure; dropping the guard runs it, so a listener
/// cannot outlive its owner on any exit path.
pub struct ScrollSubscription {
	teardown: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
	pub fn new(teardown: impl FnOnce() + 'static) -> Self {
		Self { teardown: Some(Box::new(teardown)) }
	}

	/// A guard with nothing to detach, for viewports without listeners.
	pub fn detached() -> Self {
		Self { teardown: None }
	}
}

impl Drop for ScrollSubscription {
	fn drop(&mut self) {
		if let Some(teardown) = self.teardown.take() {
			teardown();
		}
	}
}

impl fmt::Debug for ScrollSubscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScrollSubscription")
			.field("armed", &self.teardown.is_some())
			.finish()
	}
}

/// History sink for section fragments.
pub trait NavigationSink {
	/// Records `fragment` in history without navigating. `false` means
	/// history manipulation is unavailable in this embedding.
	fn push_fragment(&mut self, fragment: &str) -> bool;

	/// Fallback assignment; the platform may native-jump to the anchor.
	fn assign_fragment(&mut self, fragment: &str);
}
