//! Persistence boundary for webhook collections.
//!
//! [`WebhookStore`] is the remote service as the page sees it; everything
//! behind it (transport, query shapes, retries) is the embedding's
//! business. [`CachedWebhookStore`] adds the read cache the platform keeps
//! per collective, reconciled from write acknowledgments so a commit never
//! leaves a stale read behind.

use async_trait::async_trait;
use parking_lot::Mutex;
use portico_primitives::{CollectiveId, CollectiveProfile, WebhookRecord};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// A collective's webhook state as the read side returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectiveWebhooks {
	pub profile: CollectiveProfile,
	pub records: Vec<WebhookRecord>,
}

/// Read-side failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReadError {
	/// No collective answers to the slug.
	#[error("unknown collective: {0}")]
	UnknownCollective(String),
	/// The transport failed before a response arrived.
	#[error("transport failed: {0}")]
	Transport(String),
}

/// One structured field-level write error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
	pub field: String,
	pub message: String,
}

/// Write-side failure, in the three shapes the remote service produces:
/// structured field errors, transport-level errors, and a bare message.
///
/// The page never sees this directly; [`CommitError`] collapses it to one
/// displayable aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteFailure {
	/// Per-field rejections, most specific first.
	pub field_errors: Vec<FieldError>,
	/// Transport or protocol level messages.
	pub transport_errors: Vec<String>,
	/// Catch-all message.
	pub message: String,
}

/// The single aggregate write error surfaced next to the submit control.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CommitError {
	pub kind: CommitErrorKind,
	pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitErrorKind {
	/// The payload itself was rejected.
	Field,
	/// The transport failed.
	Transport,
	/// Anything else, including requests the host abandoned.
	Other,
}

impl CommitError {
	/// For hosts that abandon an outstanding commit on their own clock;
	/// feeding this to `finish_commit` returns the editor to a retryable
	/// state.
	pub fn timed_out() -> Self {
		Self {
			kind: CommitErrorKind::Other,
			message: "the request timed out".to_owned(),
		}
	}
}

impl From<WriteFailure> for CommitError {
	/// Most specific wins: the first field error, else the first transport
	/// error, else the bare message, else a stable fallback.
	fn from(failure: WriteFailure) -> Self {
		if let Some(field) = failure.field_errors.into_iter().next() {
			return Self { kind: CommitErrorKind::Field, message: field.message };
		}
		if let Some(transport) = failure.transport_errors.into_iter().next() {
			return Self { kind: CommitErrorKind::Transport, message: transport };
		}
		let message = if failure.message.is_empty() {
			"the webhook update could not be saved".to_owned()
		} else {
			failure.message
		};
		Self { kind: CommitErrorKind::Other, message }
	}
}

/// Remote persistence service for webhook collections.
#[async_trait]
pub trait WebhookStore: Send + Sync {
	/// Loads a collective's profile attributes and existing webhooks.
	async fn read(&self, slug: &str) -> Result<CollectiveWebhooks, ReadError>;

	/// Writes the full record set and returns the authoritative echo,
	/// server-assigned ids included.
	async fn write(&self, collective: CollectiveId, records: Vec<WebhookRecord>) -> Result<Vec<WebhookRecord>, WriteFailure>;
}

#[derive(Default)]
struct ReadCache {
	by_slug: FxHashMap<String, CollectiveWebhooks>,
	slug_of: FxHashMap<CollectiveId, String>,
}

/// Read-through cache over any [`WebhookStore`].
///
/// A successful write rewrites the cached read for the same collective
/// from the acknowledgment's echo, so the next read is consistent without
/// another round trip. Failed reads are not cached.
pub struct CachedWebhookStore<S> {
	inner: S,
	cache: Mutex<ReadCache>,
}

impl<S> CachedWebhookStore<S> {
	pub fn new(inner: S) -> Self {
		Self { inner, cache: Mutex::new(ReadCache::default()) }
	}

	pub fn into_inner(self) -> S {
		self.inner
	}
}

#[async_trait]
impl<S: WebhookStore> WebhookStore for CachedWebhookStore<S> {
	async fn read(&self, slug: &str) -> Result<CollectiveWebhooks, ReadError> {
		let cached = self.cache.lock().by_slug.get(slug).cloned();
		if let Some(hit) = cached {
			tracing::trace!(slug, "webhooks.store.read.cache_hit");
			return Ok(hit);
		}
		let loaded = self.inner.read(slug).await?;
		let mut cache = self.cache.lock();
		cache.slug_of.insert(loaded.profile.id, slug.to_owned());
		cache.by_slug.insert(slug.to_owned(), loaded.clone());
		Ok(loaded)
	}

	async fn write(&self, collective: CollectiveId, records: Vec<WebhookRecord>) -> Result<Vec<WebhookRecord>, WriteFailure> {
		let echo = self.inner.write(collective, records).await?;
		let mut cache = self.cache.lock();
		if let Some(slug) = cache.slug_of.get(&collective).cloned()
			&& let Some(entry) = cache.by_slug.get_mut(&slug)
		{
			entry.records = echo.clone();
			tracing::trace!(slug, records = echo.len(), "webhooks.store.write.reconciled");
		}
		Ok(echo)
	}
}
