//! Salesforce API client: acquires a bearer token once, then serves describe calls.
//!
//! A [`Client`] is read-only after construction. The token stored in its [`Session`] is never
//! refreshed or replaced, so clones of one client can serve concurrent describe calls without
//! synchronization. An expired or rejected token surfaces as [`Error::Request`] on the next call.

// self
use crate::{
	_prelude::*,
	auth::{self, BearerToken, Credentials},
	config::ClientConfig,
	describe::{self, Description},
	error::ConfigError,
	http::HttpClient,
	obs,
};

/// Authentication state fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientState {
	/// Acquisition was skipped; requests carry an empty bearer token.
	Unauthenticated,
	/// A token was acquired and is used for every request.
	Authenticated,
}

/// Post-authentication state shared by every request issued through a [`Client`].
#[derive(Clone, Debug)]
pub struct Session {
	api_host: String,
	api_version: String,
	token: BearerToken,
}
impl Session {
	/// Creates a session from already known parts.
	pub fn new(
		api_host: impl Into<String>,
		api_version: impl Into<String>,
		token: BearerToken,
	) -> Self {
		Self { api_host: api_host.into(), api_version: api_version.into(), token }
	}

	/// Base URI of the Salesforce API, used verbatim when building request paths.
	pub fn api_host(&self) -> &str {
		&self.api_host
	}

	/// API version path segment.
	pub fn api_version(&self) -> &str {
		&self.api_version
	}

	/// Bearer token attached to every request.
	pub fn token(&self) -> &BearerToken {
		&self.token
	}

	/// Derives the state from the stored token.
	pub fn state(&self) -> ClientState {
		if self.token.is_empty() { ClientState::Unauthenticated } else { ClientState::Authenticated }
	}
}

/// Authenticated handle to the Salesforce API.
#[derive(Clone, Debug)]
pub struct Client {
	http: HttpClient,
	session: Arc<Session>,
}
impl Client {
	/// Builds a client, acquiring a token when credentials are supplied.
	///
	/// Without credentials acquisition is skipped and the client stays
	/// [`ClientState::Unauthenticated`]. With credentials a failed exchange fails construction.
	pub async fn new(
		config: ClientConfig,
		api_host: impl Into<String>,
		api_version: impl Into<String>,
		credentials: Option<Credentials>,
	) -> Result<Self> {
		let http = HttpClient::new(config)?;

		Self::with_http_client(http, api_host, api_version, credentials).await
	}

	/// Same as [`Client::new`] but reuses a caller-provided transport.
	pub async fn with_http_client(
		http: HttpClient,
		api_host: impl Into<String>,
		api_version: impl Into<String>,
		credentials: Option<Credentials>,
	) -> Result<Self> {
		let api_host = api_host.into();

		Url::parse(&api_host).map_err(|source| ConfigError::InvalidUrl {
			field: "api_host",
			value: api_host.clone(),
			source,
		})?;

		let token = match credentials {
			Some(credentials) => auth::acquire(&http, &credentials).await?,
			None => {
				obs::event!(debug, "no credentials supplied, skipping token acquisition");

				BearerToken::empty()
			},
		};
		let session = Session::new(api_host, api_version, token);

		obs::event!(info, state = ?session.state(), "constructed Salesforce client");

		Ok(Self { http, session: Arc::new(session) })
	}

	/// Session holding the host, version, and token used for every request.
	pub fn session(&self) -> &Session {
		&self.session
	}

	/// Authentication state fixed at construction.
	pub fn state(&self) -> ClientState {
		self.session.state()
	}

	/// Transport shared by every request.
	pub fn http_client(&self) -> &HttpClient {
		&self.http
	}

	/// Fetches the description of `object`.
	pub async fn describe(&self, object: &str) -> Result<Description> {
		describe::describe(&self.http, &self.session, object).await
	}
}
