//! Provider attributes and their environment variable fallbacks.

// self
use crate::_prelude::*;

/// Provider attributes that must resolve to a non-empty value before a client can be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderAttribute {
	/// Base URI of the Salesforce API.
	ApiHost,
	/// API version segment, e.g. `v58.0`.
	ApiVersion,
	/// Token endpoint URI.
	AuthHost,
	/// Connected app client id.
	ClientId,
	/// Connected app client secret.
	ClientSecret,
	/// OAuth grant type, normally `password`.
	GrantType,
	/// Resource owner username.
	Username,
	/// Resource owner password.
	Password,
}
impl ProviderAttribute {
	/// Every attribute, in schema order.
	pub const ALL: [ProviderAttribute; 8] = [
		ProviderAttribute::ApiHost,
		ProviderAttribute::ApiVersion,
		ProviderAttribute::AuthHost,
		ProviderAttribute::ClientId,
		ProviderAttribute::ClientSecret,
		ProviderAttribute::GrantType,
		ProviderAttribute::Username,
		ProviderAttribute::Password,
	];

	/// Returns the attribute name used in provider configuration blocks.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderAttribute::ApiHost => "api_host",
			ProviderAttribute::ApiVersion => "api_version",
			ProviderAttribute::AuthHost => "auth_host",
			ProviderAttribute::ClientId => "client_id",
			ProviderAttribute::ClientSecret => "client_secret",
			ProviderAttribute::GrantType => "grant_type",
			ProviderAttribute::Username => "username",
			ProviderAttribute::Password => "password",
		}
	}

	/// Returns the environment variable consulted when the attribute is not configured.
	pub const fn env_var(self) -> &'static str {
		match self {
			ProviderAttribute::ApiHost => "SALESFORCE_API_HOST",
			ProviderAttribute::ApiVersion => "SALESFORCE_API_VERSION",
			ProviderAttribute::AuthHost => "SALESFORCE_AUTH_HOST",
			ProviderAttribute::ClientId => "SALESFORCE_CLIENT_ID",
			ProviderAttribute::ClientSecret => "SALESFORCE_CLIENT_SECRET",
			ProviderAttribute::GrantType => "SALESFORCE_GRANT_TYPE",
			ProviderAttribute::Username => "SALESFORCE_USERNAME",
			ProviderAttribute::Password => "SALESFORCE_PASSWORD",
		}
	}

	/// Human-readable noun, e.g. `API host`.
	pub const fn noun(self) -> &'static str {
		match self {
			ProviderAttribute::ApiHost => "API host",
			ProviderAttribute::ApiVersion => "API version",
			ProviderAttribute::AuthHost => "auth host",
			ProviderAttribute::ClientId => "client id",
			ProviderAttribute::ClientSecret => "client secret",
			ProviderAttribute::GrantType => "grant type",
			ProviderAttribute::Username => "username",
			ProviderAttribute::Password => "password",
		}
	}

	/// Title-cased noun used in diagnostic summaries, e.g. `API Host`.
	pub const fn title(self) -> &'static str {
		match self {
			ProviderAttribute::ApiHost => "API Host",
			ProviderAttribute::ApiVersion => "API Version",
			ProviderAttribute::AuthHost => "Auth Host",
			ProviderAttribute::ClientId => "Client ID",
			ProviderAttribute::ClientSecret => "Client Secret",
			ProviderAttribute::GrantType => "Grant Type",
			ProviderAttribute::Username => "Username",
			ProviderAttribute::Password => "Password",
		}
	}

	/// Whether values must be masked in logs and schemas.
	pub const fn is_sensitive(self) -> bool {
		matches!(
			self,
			ProviderAttribute::ClientId
				| ProviderAttribute::ClientSecret
				| ProviderAttribute::Password
		)
	}
}
impl Display for ProviderAttribute {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
