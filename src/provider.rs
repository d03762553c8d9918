//! Provider adapter shell for plugin hosts.
//!
//! The hosting plugin framework drives a fixed lifecycle: metadata, schema, configure, then
//! reads through data sources. [`Provider`] and [`DescriptionDataSource`] implement that
//! lifecycle on top of the plain [`Client`] API so any shell (plugin, CLI, service) can reuse
//! the same configuration resolution and diagnostics without reaching into client internals.

pub mod data_source;
pub mod schema;

pub use data_source::*;
pub use schema::*;

// self
use crate::{
	_prelude::*,
	client::Client,
	config::{ClientConfig, Diagnostic, Diagnostics, EnvSource, ProviderAttribute, ProviderConfig},
	obs::{self, Operation, OperationOutcome, OperationSpan},
};

/// Static provider metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
	/// Provider type name used as the prefix of every data source.
	pub type_name: String,
	/// Provider version: the release version, `dev` for local builds, `test` under tests.
	pub version: String,
}

/// Salesforce provider.
#[derive(Clone, Debug)]
pub struct Provider {
	version: String,
	client_config: ClientConfig,
}
impl Provider {
	/// Provider type name.
	pub const TYPE_NAME: &'static str = "salesforce";

	/// Creates a provider reporting `version`.
	pub fn new(version: impl Into<String>) -> Self {
		Self { version: version.into(), client_config: ClientConfig::default() }
	}

	/// Overrides the HTTP defaults used by configured clients.
	pub fn with_client_config(mut self, client_config: ClientConfig) -> Self {
		self.client_config = client_config;

		self
	}

	/// Returns the provider type name and version.
	pub fn metadata(&self) -> ProviderMetadata {
		ProviderMetadata { type_name: Self::TYPE_NAME.into(), version: self.version.clone() }
	}

	/// Provider-level configuration schema; every attribute is optional.
	pub fn schema(&self) -> Schema {
		Schema {
			description: "Interact with Salesforce".into(),
			attributes: ProviderAttribute::ALL
				.into_iter()
				.map(|attribute| {
					Attribute::string(
						attribute.as_str(),
						attribute_description(attribute),
						AttributeMode::Optional,
					)
					.sensitive(attribute.is_sensitive())
				})
				.collect(),
		}
	}

	/// Resolves `config` against `env` and builds an authenticated client.
	///
	/// Resolution problems are reported one diagnostic per attribute. A failure while building
	/// the client (invalid URL, rejected token exchange, transport failure) becomes a single
	/// diagnostic carrying the client error.
	pub async fn configure(
		&self,
		config: &ProviderConfig,
		env: &dyn EnvSource,
	) -> Result<Client, Diagnostics> {
		const OPERATION: Operation = Operation::Configure;

		obs::record_outcome(OPERATION, OperationOutcome::Attempt);
		obs::event!(info, "configuring Salesforce client");

		let result: Result<Client, Diagnostics> = async {
			let resolved =
				OperationSpan::new(OPERATION, "resolve").in_scope(|| config.resolve(env))?;

			obs::event!(
				debug,
				salesforce_api_host = %resolved.api_host,
				salesforce_api_version = %resolved.api_version,
				salesforce_auth_host = %resolved.auth_host,
				salesforce_grant_type = %resolved.grant_type,
				salesforce_username = %resolved.username,
				"creating Salesforce client"
			);

			let credentials = resolved.credentials().map_err(client_error)?;

			OperationSpan::new(OPERATION, "connect")
				.instrument(async move {
					let client = Client::new(
						self.client_config.clone(),
						resolved.api_host,
						resolved.api_version,
						Some(credentials),
					)
					.await
					.map_err(client_error)?;

					obs::event!(info, success = true, "configured Salesforce client");

					Ok::<_, Diagnostics>(client)
				})
				.await
		}
		.await;

		obs::record_result(OPERATION, &result);

		result
	}

	/// Data sources offered by the provider, wired to `client` when one was configured.
	pub fn data_sources(&self, client: Option<&Client>) -> Vec<Box<dyn DataSource>> {
		let description = match client {
			Some(client) => DescriptionDataSource::default().with_client(client.clone()),
			None => DescriptionDataSource::default(),
		};

		vec![Box::new(description)]
	}
}

fn attribute_description(attribute: ProviderAttribute) -> String {
	let lead = match attribute {
		ProviderAttribute::ApiHost => "URI for Salesforce API",
		ProviderAttribute::ApiVersion => "Version for Salesforce API",
		ProviderAttribute::AuthHost => "URI for Salesforce API Authentication",
		ProviderAttribute::ClientId => "Client ID for Salesforce API",
		ProviderAttribute::ClientSecret => "Client Secret for Salesforce API",
		ProviderAttribute::GrantType => "Grant type for Salesforce API",
		ProviderAttribute::Username => "Username for Salesforce API",
		ProviderAttribute::Password => "Password for Salesforce API",
	};

	format!("{lead}. May also be provided via {} environment variable.", attribute.env_var())
}

fn client_error(e: Error) -> Diagnostics {
	Diagnostics::single(Diagnostic::error(
		"Unable to Create Salesforce API Client",
		format!(
			"An unexpected error occurred when creating the Salesforce API client. If the error \
			 is not clear, please contact the provider developers.\n\nSalesforce Client Error: {e}"
		),
	))
}
