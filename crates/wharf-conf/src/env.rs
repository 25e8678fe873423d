//! Environment variable lookup with prefix support

use std::collections::HashMap;

/// Default prefix for wharf environment variables
pub const DEFAULT_PREFIX: &str = "WHARF_";

/// Where environment values come from
#[derive(Debug, Clone)]
enum Source {
	Process,
	Fixed(HashMap<String, String>),
}

/// Environment variable reader with a key prefix
///
/// Reading from a fixed map keeps tests free of process-global state.
///
/// ```
/// use wharf_conf::Env;
///
/// let env = Env::from_pairs([("WHARF_LOCALE", "en-US")]);
/// assert_eq!(env.get("LOCALE").as_deref(), Some("en-US"));
/// assert_eq!(env.get("DATE_FORMAT"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Env {
	prefix: String,
	source: Source,
}

impl Env {
	/// Reads from the process environment with the default prefix
	pub fn process() -> Self {
		Self {
			prefix: DEFAULT_PREFIX.to_string(),
			source: Source::Process,
		}
	}

	/// Reads from a fixed set of key/value pairs with the default prefix
	pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			prefix: DEFAULT_PREFIX.to_string(),
			source: Source::Fixed(
				pairs
					.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	/// Replaces the key prefix
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Full variable name for a key
	pub fn key_name(&self, key: &str) -> String {
		format!("{}{}", self.prefix, key)
	}

	/// Returns the value for `key` (prefix added), ignoring empty values
	pub fn get(&self, key: &str) -> Option<String> {
		let full_key = self.key_name(key);
		let value = match &self.source {
			Source::Process => std::env::var(&full_key).ok(),
			Source::Fixed(map) => map.get(&full_key).cloned(),
		};
		value.filter(|v| !v.is_empty())
	}
}
