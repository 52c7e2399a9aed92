//! The editable webhook collection for one collective.
//!
//! [`WebhookEditor`] owns the draft list outright; the page mutates it
//! only through the operations here. Commits are optimistic and
//! two-phase: [`WebhookEditor::begin_commit`] snapshots the payload and
//! guards against a second in-flight write, the host awaits the
//! [`store::WebhookStore`], and [`WebhookEditor::finish_commit`] applies
//! the outcome.

/// Persistence trait, error shapes, and the read-cache decorator.
pub mod store;
/// Endpoint URL normalization and validation.
pub mod url;

use std::time::{Duration, Instant};

use portico_capabilities::webhook_activities;
use portico_primitives::{ActivityKind, CollectiveId, CollectiveProfile, WebhookRecord};

pub use store::{CommitError, CommitErrorKind};

/// Aggregate syntactic state of the draft list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
	Valid,
	Invalid,
}

/// Where the last commit stands, as shown next to the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
	Idle,
	InFlight,
	Succeeded,
	Failed(CommitError),
}

/// Payload snapshot handed to the transport by
/// [`WebhookEditor::begin_commit`].
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRequest {
	pub collective: CollectiveId,
	pub records: Vec<WebhookRecord>,
}

/// How long the saved confirmation stays visible before the control
/// reverts to idle.
const STATUS_WINDOW: Duration = Duration::from_secs(3);

/// Editable webhook list with validation, dirty tracking, and the commit
/// protocol.
///
/// Seeding derives the legal activity catalog from the collective's kind
/// and host status, so the option list offered per record is already
/// filtered. Aggregate validity is recomputed on every mutation that can
/// change the URL set, seeding included, so `validity` always reflects
/// the current drafts.
///
/// Edits stay permitted while a commit is in flight: a success echo
/// replaces them (the server's answer is authoritative), a failure keeps
/// them for the retry.
#[derive(Debug)]
pub struct WebhookEditor {
	collective: CollectiveId,
	activities: Vec<ActivityKind>,
	drafts: Vec<WebhookRecord>,
	dirty: bool,
	validity: Validity,
	submission: Submission,
	status_expiry: Option<Instant>,
}

impl WebhookEditor {
	/// Seeds the editor from the last successful read of this collective.
	pub fn new(profile: &CollectiveProfile, records: Vec<WebhookRecord>) -> Self {
		let mut editor = Self {
			collective: profile.id,
			activities: webhook_activities(profile.kind, profile.is_host),
			drafts: records,
			dirty: false,
			validity: Validity::Valid,
			submission: Submission::Idle,
			status_expiry: None,
		};
		editor.revalidate();
		editor
	}

	/// Activity filters legal for this collective, in catalog order.
	pub fn activities(&self) -> &[ActivityKind] {
		&self.activities
	}

	pub fn records(&self) -> &[WebhookRecord] {
		&self.drafts
	}

	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	pub fn validity(&self) -> Validity {
		self.validity
	}

	pub fn submission(&self) -> &Submission {
		&self.submission
	}

	/// Appends a blank webhook subscribed to every activity.
	pub fn add(&mut self) {
		self.drafts.push(WebhookRecord::new("", ActivityKind::All));
		self.touch();
	}

	/// Removes the record at `index`.
	///
	/// An out-of-range index is a complete no-op, not an error: the list
	/// may have shifted under a queued UI event.
	pub fn remove(&mut self, index: usize) {
		if index >= self.drafts.len() {
			return;
		}
		self.drafts.remove(index);
		self.touch();
	}

	/// Stores the normalized form of `raw` as the record's endpoint, then
	/// revalidates the whole list. Out-of-range indexes are ignored.
	pub fn set_url(&mut self, index: usize, raw: &str) {
		let Some(draft) = self.drafts.get_mut(index) else {
			return;
		};
		draft.url = url::clean_url(raw);
		self.touch();
	}

	/// Points the record at a different activity filter. Out-of-range
	/// indexes are ignored.
	pub fn set_activity(&mut self, index: usize, activity: ActivityKind) {
		let Some(draft) = self.drafts.get_mut(index) else {
			return;
		};
		draft.activity = activity;
		self.touch();
	}

	/// Whether the record at `index` holds a syntactically valid endpoint.
	pub fn url_valid(&self, index: usize) -> bool {
		self.drafts.get(index).is_some_and(|draft| url::is_valid_url(&draft.url))
	}

	/// The record's endpoint with its scheme restored, for display.
	pub fn display_url(&self, index: usize) -> Option<String> {
		self.drafts.get(index).map(|draft| url::display_url(&draft.url))
	}

	/// Whether the submit affordance is enabled: something changed, every
	/// endpoint validates, and no commit is outstanding.
	pub fn can_submit(&self) -> bool {
		self.dirty && self.validity == Validity::Valid && self.submission != Submission::InFlight
	}

	/// Opens a commit: transitions to in-flight and snapshots the payload.
	///
	/// Returns `None` while a commit is already outstanding, so no second
	/// write can leave the editor regardless of how fast submits arrive.
	pub fn begin_commit(&mut self) -> Option<CommitRequest> {
		if self.submission == Submission::InFlight {
			tracing::debug!(collective = self.collective.0, "webhooks.commit.already_in_flight");
			return None;
		}
		self.submission = Submission::InFlight;
		self.status_expiry = None;
		let records = self.drafts.clone();
		tracing::debug!(collective = self.collective.0, records = records.len(), "webhooks.commit.begin");
		Some(CommitRequest { collective: self.collective, records })
	}

	/// Closes a commit with the transport's outcome.
	///
	/// Success replaces the drafts with the server's echo (ids assigned),
	/// clears the dirty flag, and arms the saved-status window. Failure
	/// keeps every local edit so the user can correct and retry.
	pub fn finish_commit(&mut self, result: Result<Vec<WebhookRecord>, CommitError>, now: Instant) {
		match result {
			Ok(echo) => {
				tracing::debug!(collective = self.collective.0, records = echo.len(), "webhooks.commit.ok");
				self.drafts = echo;
				self.dirty = false;
				self.revalidate();
				self.submission = Submission::Succeeded;
				self.status_expiry = Some(now + STATUS_WINDOW);
			}
			Err(error) => {
				tracing::debug!(
					collective = self.collective.0,
					kind = ?error.kind,
					error = %error,
					"webhooks.commit.err"
				);
				self.submission = Submission::Failed(error);
				self.status_expiry = None;
			}
		}
	}

	/// Advances the status display; returns whether it changed.
	///
	/// Only the saved confirmation auto-reverts; a failure stays visible
	/// until the user acts. Data and dirty state are never touched here.
	pub fn tick(&mut self, now: Instant) -> bool {
		match self.status_expiry {
			Some(expiry) if now >= expiry => {
				self.status_expiry = None;
				self.submission = Submission::Idle;
				true
			}
			_ => false,
		}
	}

	fn touch(&mut self) {
		self.dirty = true;
		self.revalidate();
	}

	fn revalidate(&mut self) {
		let all_valid = self.drafts.iter().all(|draft| url::is_valid_url(&draft.url));
		self.validity = if all_valid { Validity::Valid } else { Validity::Invalid };
	}
}
