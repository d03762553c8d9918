//! Immutable OAuth2 password-grant credentials.

// crates.io
use oauth2::{ClientId, ClientSecret, ResourceOwnerPassword, ResourceOwnerUsername, TokenUrl};
// self
use crate::{_prelude::*, error::ConfigError};

/// Credentials exchanged once for a bearer token.
///
/// Values are opaque strings supplied at construction and never change afterwards. The client id,
/// client secret, and password are kept out of `Debug` output.
#[derive(Clone)]
pub struct Credentials {
	token_url: TokenUrl,
	client_id: ClientId,
	client_secret: ClientSecret,
	grant_type: String,
	username: ResourceOwnerUsername,
	password: ResourceOwnerPassword,
}
impl Credentials {
	/// Validates the auth endpoint and bundles the credential values.
	pub fn new(
		auth_url: &str,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		grant_type: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Result<Self> {
		let token_url = TokenUrl::new(auth_url.to_owned()).map_err(|source| {
			ConfigError::InvalidUrl { field: "auth_host", value: auth_url.to_owned(), source }
		})?;

		Ok(Self {
			token_url,
			client_id: ClientId::new(client_id.into()),
			client_secret: ClientSecret::new(client_secret.into()),
			grant_type: grant_type.into(),
			username: ResourceOwnerUsername::new(username.into()),
			password: ResourceOwnerPassword::new(password.into()),
		})
	}

	/// Auth endpoint the token request is posted to.
	pub fn auth_url(&self) -> &Url {
		self.token_url.url()
	}

	/// Connected app client id.
	pub fn client_id(&self) -> &str {
		self.client_id.as_str()
	}

	/// Connected app client secret. Callers must avoid logging this string.
	pub fn client_secret(&self) -> &str {
		self.client_secret.secret()
	}

	/// Grant type sent verbatim in the token request.
	pub fn grant_type(&self) -> &str {
		&self.grant_type
	}

	/// Resource owner username.
	pub fn username(&self) -> &str {
		self.username.as_str()
	}

	/// Resource owner password. Callers must avoid logging this string.
	pub fn password(&self) -> &str {
		self.password.secret()
	}

	/// Form fields in wire order.
	pub(crate) fn form_fields(&self) -> [(&'static str, String); 5] {
		[
			("client_id", self.client_id().to_owned()),
			("client_secret", self.client_secret().to_owned()),
			("grant_type", self.grant_type.clone()),
			("username", self.username().to_owned()),
			("password", self.password().to_owned()),
		]
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("auth_url", &self.token_url.as_str())
			.field("client_id", &"<redacted>")
			.field("client_secret", &"<redacted>")
			.field("grant_type", &self.grant_type)
			.field("username", &self.username.as_str())
			.field("password", &"<redacted>")
			.finish()
	}
}
