//! Demonstrates configuring the provider from `SALESFORCE_*` variables and reading an object
//! description through the `salesforce_description` data source.
//!
//! A local mock server stands in for both the auth host and the API host.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use salesforce_describe::{
	config::{MapEnv, ProviderConfig},
	provider::{DataSource, Provider},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/services/oauth2/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"demo-access\",\"token_type\":\"Bearer\"}");
		})
		.await;
	let describe_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/services/data/v58.0/sobjects/Training_Course__c/describe")
				.header("authorization", "Bearer demo-access");
			then.status(200).header("content-type", "application/json").body(
				r#"{"name":"Training_Course__c","label":"Training Course","fields":[
					{"name":"Id","label":"Record ID","type":"id"},
					{"name":"Name","label":"Training Course Name","type":"string"}
				]}"#,
			);
		})
		.await;
	let env = MapEnv::default()
		.with("SALESFORCE_API_HOST", server.base_url())
		.with("SALESFORCE_API_VERSION", "v58.0")
		.with("SALESFORCE_AUTH_HOST", server.url("/services/oauth2/token"))
		.with("SALESFORCE_CLIENT_ID", "demo-client")
		.with("SALESFORCE_CLIENT_SECRET", "demo-secret")
		.with("SALESFORCE_GRANT_TYPE", "password")
		.with("SALESFORCE_USERNAME", "demo@example.com")
		.with("SALESFORCE_PASSWORD", "demo-password");
	let provider = Provider::new("dev");
	let client = provider.configure(&ProviderConfig::default(), &env).await?;

	println!("Client state: {:?}.", client.state());

	for source in provider.data_sources(Some(&client)) {
		let state = source.read(json!({ "name": "Training_Course__c" })).await?;

		println!(
			"{}: {}",
			source.type_name(Provider::TYPE_NAME),
			serde_json::to_string_pretty(&state)?
		);
	}

	token_mock.assert_async().await;
	describe_mock.assert_async().await;

	Ok(())
}
