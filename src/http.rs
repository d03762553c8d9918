//! Transport primitives shared by the token acquirer and the description fetcher.
//!
//! [`HttpClient`] wraps a [`ReqwestClient`] together with the [`ClientConfig`] it was built from
//! so every call applies the right per-request timeout: the short auth timeout for the token
//! exchange and the request timeout for authenticated API calls. Redirects are never followed;
//! a redirect surfaces as a non-200 status instead of silently dropping the `Authorization`
//! header on the next hop.

// crates.io
use reqwest::{multipart::Form, redirect::Policy};
// self
use crate::{
	_prelude::*,
	auth::BearerToken,
	config::ClientConfig,
	error::{ConfigError, TransportError},
	obs,
};

/// Raw HTTP response captured in full before any decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: StatusCode,
	/// Response body text.
	pub body: String,
}
impl RawResponse {
	/// Returns true for `200 OK`.
	pub fn is_ok(&self) -> bool {
		self.status == StatusCode::OK
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug)]
pub struct HttpClient {
	client: ReqwestClient,
	config: ClientConfig,
}
impl HttpClient {
	/// Builds a reqwest client from `config`.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let client = ReqwestClient::builder()
			.user_agent(config.user_agent.as_str())
			.redirect(Policy::none())
			.build()
			.map_err(ConfigError::http_client_build)?;

		Ok(Self { client, config })
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	///
	/// The caller is responsible for disabling redirects on `client`; timeouts still come from
	/// `config`.
	pub fn with_client(client: ReqwestClient, config: ClientConfig) -> Self {
		Self { client, config }
	}

	/// Configuration the client applies to each request.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Posts a multipart form to the auth endpoint using the auth timeout.
	pub async fn post_form(&self, url: &Url, form: Form) -> Result<RawResponse> {
		const ENDPOINT: &str = "auth";

		let request = self
			.client
			.post(url.clone())
			.multipart(form)
			.timeout(self.config.auth_timeout);

		self.execute(ENDPOINT, request).await
	}

	/// Issues an authenticated `GET` using the request timeout.
	///
	/// The token is attached verbatim as `Authorization: Bearer {token}`, even when empty. Any
	/// status other than `200 OK` fails with [`Error::Request`] carrying the raw body text.
	pub async fn get_authorized(&self, url: Url, token: &BearerToken) -> Result<String> {
		const ENDPOINT: &str = "describe";

		let request = self
			.client
			.get(url)
			.bearer_auth(token.expose())
			.timeout(self.config.request_timeout);
		let response = self.execute(ENDPOINT, request).await?;

		if !response.is_ok() {
			obs::event!(
				debug,
				status = response.status.as_u16(),
				"authenticated request returned a non-200 status"
			);

			return Err(Error::Request { status: response.status.as_u16(), body: response.body });
		}

		Ok(response.body)
	}

	async fn execute(
		&self,
		endpoint: &'static str,
		request: reqwest::RequestBuilder,
	) -> Result<RawResponse> {
		let response =
			request.send().await.map_err(|e| TransportError::from_reqwest(endpoint, e))?;
		let status = response.status();
		let body = response.text().await.map_err(|e| TransportError::from_reqwest(endpoint, e))?;

		Ok(RawResponse { status, body })
	}
}
