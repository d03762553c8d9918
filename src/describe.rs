//! Description fetcher: one authenticated `GET` against the describe endpoint per call.

pub mod model;

pub use model::*;

// self
use crate::{
	_prelude::*,
	client::Session,
	error::{ConfigError, DecodeError},
	http::HttpClient,
	obs::{self, Operation, OperationOutcome, OperationSpan},
};

/// Builds `{host}/services/data/{version}/sobjects/{object}/describe`.
///
/// The object name becomes exactly one path segment: `/`, `%`, `?`, and `#` are percent-encoded
/// instead of changing the path structure. `.` and `..` are rejected because URL normalization
/// would otherwise redirect the call to a different endpoint.
pub fn describe_url(host: &str, version: &str, object: &str) -> Result<Url> {
	if matches!(object, "." | "..") {
		return Err(ConfigError::UnaddressableObject { object: object.to_owned() }.into());
	}

	let base = format!("{host}/services/data/{version}/sobjects");
	let mut url = Url::parse(&base).map_err(|source| ConfigError::InvalidUrl {
		field: "api_host",
		value: base.clone(),
		source,
	})?;

	url.path_segments_mut()
		.map_err(|()| ConfigError::NotABaseUrl { field: "api_host", value: host.to_owned() })?
		.push(object)
		.push("describe");

	Ok(url)
}

/// Fetches the description of `object` through `session`.
///
/// Non-200 replies fail with [`Error::Request`] carrying the status and literal body; a 200
/// reply with a malformed body fails with [`Error::Decode`].
pub async fn describe(http: &HttpClient, session: &Session, object: &str) -> Result<Description> {
	const OPERATION: Operation = Operation::Describe;

	let span = OperationSpan::new(OPERATION, "describe");

	obs::record_outcome(OPERATION, OperationOutcome::Attempt);

	let result = span
		.instrument(async move {
			let url = describe_url(session.api_host(), session.api_version(), object)?;
			let body = http.get_authorized(url, session.token()).await?;

			decode_description(object, &body)
		})
		.await;

	obs::record_result(OPERATION, &result);

	result
}

/// Decodes a describe payload for `object`.
pub fn decode_description(object: &str, body: &str) -> Result<Description> {
	let deserializer = &mut serde_json::Deserializer::from_str(body);

	serde_path_to_error::deserialize(deserializer)
		.map_err(|source| DecodeError { object: object.to_owned(), source }.into())
}
