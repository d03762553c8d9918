//! Environment lookup used as the fallback layer for provider attributes.

// self
use crate::_prelude::*;

/// Read-only source of environment variables.
pub trait EnvSource
where
	Self: Send + Sync,
{
	/// Returns the variable's value, or `None` when it is unset or not valid Unicode.
	fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;
impl EnvSource for ProcessEnv {
	fn var(&self, key: &str) -> Option<String> {
		std::env::var(key).ok()
	}
}

/// In-memory environment for tests and embedding hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapEnv(HashMap<String, String>);
impl MapEnv {
	/// Adds or replaces a variable.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Removes a variable.
	pub fn without(mut self, key: &str) -> Self {
		self.0.remove(key);

		self
	}
}
impl EnvSource for MapEnv {
	fn var(&self, key: &str) -> Option<String> {
		self.0.get(key).cloned()
	}
}
impl<K, V> FromIterator<(K, V)> for MapEnv
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}
