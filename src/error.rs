//! Client-level error types shared across authentication, describe calls, and configuration.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Token exchange failed.
	#[error(transparent)]
	Authentication(#[from] AuthenticationError),
	/// Response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Authenticated call returned a non-200 status.
	#[error("status: {status}, body: {body}")]
	Request {
		/// HTTP status code returned by the API host.
		status: u16,
		/// Raw response body text.
		body: String,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// A configured host or endpoint is not a valid URL.
	#[error("The {field} value `{value}` is not a valid URL.")]
	InvalidUrl {
		/// Which setting failed validation.
		field: &'static str,
		/// Offending value.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A configured host parses but cannot carry a request path (e.g. `mailto:`).
	#[error("The {field} value `{value}` cannot be used as a base URL.")]
	NotABaseUrl {
		/// Which setting failed validation.
		field: &'static str,
		/// Offending value.
		value: String,
	},
	/// Object name is a `.` or `..` segment, which URL normalization would resolve away.
	#[error("Object name `{object}` cannot be addressed as a URL path segment.")]
	UnaddressableObject {
		/// Offending object name.
		object: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Token exchange failures raised while acquiring a bearer token.
#[derive(Debug, ThisError)]
pub enum AuthenticationError {
	/// Auth endpoint answered with a non-200 status.
	#[error("Auth endpoint rejected the token request with status {status}: {body}.")]
	Rejected {
		/// HTTP status code returned by the auth endpoint.
		status: u16,
		/// Raw response body text.
		body: String,
	},
	/// Auth endpoint responded with JSON that could not be parsed.
	#[error("Auth endpoint returned malformed JSON.")]
	MalformedResponse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Auth endpoint responded without an access token.
	#[error("Auth endpoint response does not contain an access token.")]
	EmptyToken,
}

/// Describe payload decoding failure.
#[derive(Debug, ThisError)]
#[error("Describe response for `{object}` is malformed.")]
pub struct DecodeError {
	/// Object name whose description failed to decode.
	pub object: String,
	/// Structured parsing failure.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {endpoint}.")]
	Network {
		/// Endpoint label (`auth` or `describe`).
		endpoint: &'static str,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request exceeded its configured timeout.
	#[error("Request to {endpoint} timed out.")]
	Timeout {
		/// Endpoint label (`auth` or `describe`).
		endpoint: &'static str,
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(endpoint: &'static str, src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { endpoint, source: Box::new(src) }
	}

	/// Classifies a reqwest failure for the given endpoint label.
	pub fn from_reqwest(endpoint: &'static str, e: ReqwestError) -> Self {
		if e.is_timeout() {
			Self::Timeout { endpoint, source: Box::new(e) }
		} else {
			Self::network(endpoint, e)
		}
	}
}
