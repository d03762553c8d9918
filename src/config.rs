//! Configuration surface: client timeouts, provider attributes, and environment fallback.
//!
//! [`ClientConfig`] carries the HTTP defaults bound to client construction so tests and hosts can
//! override them. [`ProviderConfig`] models the eight provider attributes a hosting shell hands
//! over; [`ProviderConfig::resolve`] merges them with `SALESFORCE_*` environment variables and
//! reports every unresolved attribute as its own [`Diagnostic`].

pub mod attribute;
pub mod diagnostic;
pub mod env;
pub mod settings;

pub use attribute::*;
pub use diagnostic::*;
pub use env::*;
pub use settings::*;

// self
use crate::_prelude::*;

/// HTTP defaults applied to every client built from this configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Timeout for the token exchange against the auth endpoint.
	pub auth_timeout: StdDuration,
	/// Timeout for authenticated API calls (describe).
	pub request_timeout: StdDuration,
	/// `User-Agent` header sent with every request.
	pub user_agent: String,
}
impl ClientConfig {
	/// Default token exchange timeout.
	pub const DEFAULT_AUTH_TIMEOUT: StdDuration = StdDuration::from_secs(5);
	/// Default authenticated request timeout.
	pub const DEFAULT_REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(10);

	/// Overrides the token exchange timeout.
	pub fn with_auth_timeout(mut self, timeout: StdDuration) -> Self {
		self.auth_timeout = timeout;

		self
	}

	/// Overrides the authenticated request timeout.
	pub fn with_request_timeout(mut self, timeout: StdDuration) -> Self {
		self.request_timeout = timeout;

		self
	}

	/// Overrides the `User-Agent` header.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			auth_timeout: Self::DEFAULT_AUTH_TIMEOUT,
			request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
			user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
		}
	}
}
