//! Normalization and validation for webhook endpoint URLs.
//!
//! Endpoints are stored scheme-less; the scheme is restored for display
//! and for validation, so what the user sees and what gets validated are
//! always the same string.

use url::Url;

/// Canonical stored form: surrounding whitespace trimmed, one leading
/// scheme prefix removed.
///
/// Only the very front of the string is touched, once, so an inner
/// occurrence (`example.com/jump?to=https://other.org`) survives intact.
pub fn clean_url(raw: &str) -> String {
	let trimmed = raw.trim();
	trimmed
		.strip_prefix("https://")
		.or_else(|| trimmed.strip_prefix("http://"))
		.unwrap_or(trimmed)
		.to_owned()
}

/// Display form of a stored URL: the scheme restored.
pub fn display_url(stored: &str) -> String {
	format!("https://{stored}")
}

/// Whether a stored URL names a plausible endpoint.
///
/// The scheme-restored form must parse and carry a host that looks fully
/// qualified (contains a dot), so IPv4 literals pass while `localhost` and
/// bare words fail.
pub fn is_valid_url(stored: &str) -> bool {
	if stored.is_empty() {
		return false;
	}
	let Ok(parsed) = Url::parse(&display_url(stored)) else {
		return false;
	};
	parsed.host_str().is_some_and(|host| host.contains('.'))
}
