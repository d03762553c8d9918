//! Provider attribute values and their resolution against the environment.

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	config::{Diagnostic, Diagnostics, EnvSource, ProviderAttribute},
};

/// Value of a single provider attribute as handed over by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ConfigValue {
	/// Attribute was not set.
	#[default]
	Null,
	/// Attribute is set but its value is not known yet (computed by the host later).
	Unknown,
	/// Attribute carries a concrete value, possibly empty.
	Known(String),
}
impl ConfigValue {
	/// Wraps a concrete value.
	pub fn known(value: impl Into<String>) -> Self {
		Self::Known(value.into())
	}

	/// Returns true for [`ConfigValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns true for [`ConfigValue::Unknown`].
	pub fn is_unknown(&self) -> bool {
		matches!(self, Self::Unknown)
	}

	/// Returns the concrete value, if any.
	pub fn as_known(&self) -> Option<&str> {
		match self {
			Self::Known(value) => Some(value),
			_ => None,
		}
	}
}
impl From<Option<String>> for ConfigValue {
	fn from(value: Option<String>) -> Self {
		value.map_or(Self::Null, Self::Known)
	}
}
impl From<ConfigValue> for Option<String> {
	fn from(value: ConfigValue) -> Self {
		match value {
			ConfigValue::Known(value) => Some(value),
			ConfigValue::Null | ConfigValue::Unknown => None,
		}
	}
}
impl From<&str> for ConfigValue {
	fn from(value: &str) -> Self {
		Self::known(value)
	}
}
impl From<String> for ConfigValue {
	fn from(value: String) -> Self {
		Self::Known(value)
	}
}

/// Provider configuration block with every attribute optional.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
	/// URI for the Salesforce API.
	pub api_host: ConfigValue,
	/// Version for the Salesforce API.
	pub api_version: ConfigValue,
	/// URI for Salesforce API authentication.
	pub auth_host: ConfigValue,
	/// Client id for the Salesforce API.
	pub client_id: ConfigValue,
	/// Client secret for the Salesforce API.
	pub client_secret: ConfigValue,
	/// Grant type for the Salesforce API.
	pub grant_type: ConfigValue,
	/// Username for the Salesforce API.
	pub username: ConfigValue,
	/// Password for the Salesforce API.
	pub password: ConfigValue,
}
impl ProviderConfig {
	/// Sets one attribute.
	pub fn with(mut self, attribute: ProviderAttribute, value: impl Into<ConfigValue>) -> Self {
		*self.value_mut(attribute) = value.into();

		self
	}

	/// Returns the configured value for `attribute`.
	pub fn value(&self, attribute: ProviderAttribute) -> &ConfigValue {
		match attribute {
			ProviderAttribute::ApiHost => &self.api_host,
			ProviderAttribute::ApiVersion => &self.api_version,
			ProviderAttribute::AuthHost => &self.auth_host,
			ProviderAttribute::ClientId => &self.client_id,
			ProviderAttribute::ClientSecret => &self.client_secret,
			ProviderAttribute::GrantType => &self.grant_type,
			ProviderAttribute::Username => &self.username,
			ProviderAttribute::Password => &self.password,
		}
	}

	fn value_mut(&mut self, attribute: ProviderAttribute) -> &mut ConfigValue {
		match attribute {
			ProviderAttribute::ApiHost => &mut self.api_host,
			ProviderAttribute::ApiVersion => &mut self.api_version,
			ProviderAttribute::AuthHost => &mut self.auth_host,
			ProviderAttribute::ClientId => &mut self.client_id,
			ProviderAttribute::ClientSecret => &mut self.client_secret,
			ProviderAttribute::GrantType => &mut self.grant_type,
			ProviderAttribute::Username => &mut self.username,
			ProviderAttribute::Password => &mut self.password,
		}
	}

	/// Merges explicit values with `SALESFORCE_*` environment variables.
	///
	/// Unknown values are reported first, one diagnostic per attribute, and stop resolution.
	/// Otherwise every attribute falls back to its environment variable unless configured
	/// explicitly, and every attribute that ends up empty is reported. All diagnostics are
	/// collected before returning.
	pub fn resolve(&self, env: &dyn EnvSource) -> Result<ResolvedConfig, Diagnostics> {
		let mut diagnostics = Diagnostics::default();

		for attribute in ProviderAttribute::ALL {
			if self.value(attribute).is_unknown() {
				diagnostics.push(Diagnostic::unknown_attribute(attribute));
			}
		}

		if diagnostics.has_error() {
			return Err(diagnostics);
		}

		let values = ProviderAttribute::ALL.map(|attribute| {
			let value = match self.value(attribute).as_known() {
				Some(explicit) => explicit.to_owned(),
				None => env.var(attribute.env_var()).unwrap_or_default(),
			};

			if value.is_empty() {
				diagnostics.push(Diagnostic::missing_attribute(attribute));
			}

			value
		});

		if diagnostics.has_error() {
			return Err(diagnostics);
		}

		let [
			api_host,
			api_version,
			auth_host,
			client_id,
			client_secret,
			grant_type,
			username,
			password,
		] = values;

		Ok(ResolvedConfig {
			api_host,
			api_version,
			auth_host,
			client_id,
			client_secret,
			grant_type,
			username,
			password,
		})
	}
}
impl Debug for ProviderConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut debug = f.debug_struct("ProviderConfig");

		for attribute in ProviderAttribute::ALL {
			let value = self.value(attribute);

			if attribute.is_sensitive() && value.as_known().is_some() {
				debug.field(attribute.as_str(), &"<redacted>");
			} else {
				debug.field(attribute.as_str(), value);
			}
		}

		debug.finish()
	}
}

/// Fully resolved provider configuration; every value is non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
	/// URI for the Salesforce API.
	pub api_host: String,
	/// Version for the Salesforce API.
	pub api_version: String,
	/// URI for Salesforce API authentication.
	pub auth_host: String,
	/// Client id for the Salesforce API.
	pub client_id: String,
	/// Client secret for the Salesforce API.
	pub client_secret: String,
	/// Grant type for the Salesforce API.
	pub grant_type: String,
	/// Username for the Salesforce API.
	pub username: String,
	/// Password for the Salesforce API.
	pub password: String,
}
impl ResolvedConfig {
	/// Builds password-grant credentials from the resolved values.
	pub fn credentials(&self) -> Result<Credentials> {
		Credentials::new(
			&self.auth_host,
			&self.client_id,
			&self.client_secret,
			&self.grant_type,
			&self.username,
			&self.password,
		)
	}
}
impl Debug for ResolvedConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ResolvedConfig")
			.field("api_host", &self.api_host)
			.field("api_version", &self.api_version)
			.field("auth_host", &self.auth_host)
			.field("client_id", &"<redacted>")
			.field("client_secret", &"<redacted>")
			.field("grant_type", &self.grant_type)
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}
