//! Bearer token wrapper and the auth endpoint's response shape.

// crates.io
use oauth2::AccessToken;
// self
use crate::_prelude::*;

/// Redacted bearer token keeping sensitive material out of logs.
#[derive(Clone)]
pub struct BearerToken(AccessToken);
impl BearerToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(AccessToken::new(value.into()))
	}

	/// Token used by clients that skipped acquisition.
	pub fn empty() -> Self {
		Self::new(String::new())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		self.0.secret()
	}

	/// Returns true when no token was acquired.
	pub fn is_empty(&self) -> bool {
		self.expose().is_empty()
	}
}
impl Debug for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("BearerToken").field(&"<redacted>").finish()
	}
}
impl Display for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// JSON body returned by the auth endpoint.
#[derive(Clone, Default, Deserialize)]
pub struct TokenResponse {
	/// Issued access token.
	#[serde(default)]
	pub access_token: Option<String>,
	/// Token type, normally `Bearer`.
	#[serde(default)]
	pub token_type: Option<String>,
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse")
			.field("access_token_set", &self.access_token.is_some())
			.field("token_type", &self.token_type)
			.finish()
	}
}
