//! Token acquirer: one multipart password-grant exchange per call.
//!
//! The exchange posts `client_id`, `client_secret`, `grant_type`, `username`, and `password` as
//! `multipart/form-data` to the auth endpoint and reads `access_token` from the JSON reply.
//! Failures are surfaced instead of being logged and ignored: a non-200 status, undecodable
//! JSON, or a reply without a token all fail with [`AuthenticationError`]. There is no retry,
//! caching, or expiry tracking.

// crates.io
use reqwest::multipart::Form;
// self
use crate::{
	_prelude::*,
	auth::{BearerToken, Credentials, TokenResponse},
	error::AuthenticationError,
	http::HttpClient,
	obs::{self, Operation, OperationOutcome, OperationSpan},
};

/// Exchanges `credentials` for a bearer token.
pub async fn acquire(http: &HttpClient, credentials: &Credentials) -> Result<BearerToken> {
	const OPERATION: Operation = Operation::Authenticate;

	let span = OperationSpan::new(OPERATION, "acquire");

	obs::record_outcome(OPERATION, OperationOutcome::Attempt);

	let result = span
		.instrument(async move {
			let form = credentials
				.form_fields()
				.into_iter()
				.fold(Form::new(), |form, (name, value)| form.text(name, value));
			let response = http.post_form(credentials.auth_url(), form).await?;

			if !response.is_ok() {
				obs::event!(
					warn,
					status = response.status.as_u16(),
					body = %response.body,
					"auth endpoint rejected the token request"
				);

				return Err(AuthenticationError::Rejected {
					status: response.status.as_u16(),
					body: response.body,
				}
				.into());
			}

			parse_token_response(&response.body)
		})
		.await;

	obs::record_result(OPERATION, &result);

	result
}

/// Extracts the bearer token from an auth endpoint JSON body.
pub fn parse_token_response(body: &str) -> Result<BearerToken> {
	let deserializer = &mut serde_json::Deserializer::from_str(body);
	let response: TokenResponse = serde_path_to_error::deserialize(deserializer)
		.map_err(|source| AuthenticationError::MalformedResponse { source })?;

	match response.access_token {
		Some(token) if !token.is_empty() => Ok(BearerToken::new(token)),
		_ => Err(AuthenticationError::EmptyToken.into()),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parses_access_token() {
		let token = parse_token_response(r#"{"access_token":"XYZ","token_type":"Bearer"}"#)
			.expect("Token response should parse.");

		assert_eq!(token.expose(), "XYZ");
	}

	#[test]
	fn token_type_is_optional() {
		let token =
			parse_token_response(r#"{"access_token":"T"}"#).expect("Token response should parse.");

		assert_eq!(token.expose(), "T");
	}

	#[test]
	fn missing_token_is_an_error() {
		let err = parse_token_response(r#"{"token_type":"Bearer"}"#)
			.expect_err("Response without token should fail.");

		assert!(matches!(err, Error::Authentication(AuthenticationError::EmptyToken)));

		let err = parse_token_response(r#"{"access_token":""}"#)
			.expect_err("Response with empty token should fail.");

		assert!(matches!(err, Error::Authentication(AuthenticationError::EmptyToken)));
	}

	#[test]
	fn malformed_json_reports_path() {
		let err = parse_token_response(r#"{"access_token":42}"#)
			.expect_err("Numeric token should fail to decode.");

		match err {
			Error::Authentication(AuthenticationError::MalformedResponse { source }) =>
				assert_eq!(source.path().to_string(), "access_token"),
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}
}
