use serde::{Deserialize, Serialize};

use crate::ActivityKind;

/// Server-assigned identifier of a persisted webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebhookId(pub i64);

/// A webhook as the platform persists it.
///
/// `url` is stored without a scheme prefix; editors re-apply `https://` for
/// display and validation. Webhooks that have never been written have no
/// id; the server assigns one and echoes it back on the first successful
/// write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookRecord {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<WebhookId>,
	#[serde(rename = "webhookUrl")]
	pub url: String,
	#[serde(rename = "type")]
	pub activity: ActivityKind,
}

impl WebhookRecord {
	/// A record that has not been persisted yet.
	pub fn new(url: impl Into<String>, activity: ActivityKind) -> Self {
		Self {
			id: None,
			url: url.into(),
			activity,
		}
	}

	/// A record echoed back by the server.
	pub fn persisted(id: i64, url: impl Into<String>, activity: ActivityKind) -> Self {
		Self {
			id: Some(WebhookId(id)),
			url: url.into(),
			activity,
		}
	}
}
