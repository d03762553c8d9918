mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use salesforce_describe::{
	client::ClientState,
	config::{ConfigValue, ProviderAttribute, ProviderConfig},
	provider::{DataSource, PLACEHOLDER_ID, Provider},
};

fn provider() -> Provider {
	Provider::new("test").with_client_config(client_config())
}

#[tokio::test]
async fn configure_from_env_then_read_description() {
	let server = MockServer::start_async().await;
	let token = mock_token_endpoint(&server, "T").await;
	let describe = server
		.mock_async(|when, then| {
			when.method(GET).path(describe_path("Account")).header("authorization", "Bearer T");
			then.status(200).header("content-type", "application/json").body(
				r#"{"name":"Account","label":"Account","fields":[
					{"name":"Id","label":"Account ID","type":"id"},
					{"name":"OwnerId","label":"Owner ID","type":"reference"}
				]}"#,
			);
		})
		.await;
	let provider = provider();
	let client = provider
		.configure(&ProviderConfig::default(), &full_env(&server))
		.await
		.expect("Environment-only configuration should succeed.");

	assert_eq!(client.state(), ClientState::Authenticated);

	let sources = provider.data_sources(Some(&client));
	let state = sources[0]
		.read(json!({ "name": "Account" }))
		.await
		.expect("Description read should succeed.");

	token.assert_async().await;
	describe.assert_async().await;

	assert_eq!(
		state,
		json!({
			"id": PLACEHOLDER_ID,
			"name": "Account",
			"label": "Account",
			"fields": [
				{ "name": "Id", "label": "Account ID", "type": "id" },
				{ "name": "OwnerId", "label": "Owner ID", "type": "reference" }
			]
		})
	);
}

#[tokio::test]
async fn missing_username_yields_one_diagnostic() {
	let server = MockServer::start_async().await;
	let token = mock_token_endpoint(&server, "T").await;
	let diagnostics = provider()
		.configure(&ProviderConfig::default(), &full_env(&server).without("SALESFORCE_USERNAME"))
		.await
		.expect_err("Configuration without a username should fail.");

	token.assert_calls_async(0).await;

	assert_eq!(diagnostics.len(), 1);
	assert_eq!(diagnostics.for_attribute("username").count(), 1);
	assert!(diagnostics.has_error());
}

#[tokio::test]
async fn unknown_value_short_circuits_configuration() {
	let server = MockServer::start_async().await;
	let token = mock_token_endpoint(&server, "T").await;
	let config = ProviderConfig::default().with(ProviderAttribute::Password, ConfigValue::Unknown);
	let diagnostics = provider()
		.configure(&config, &full_env(&server))
		.await
		.expect_err("Unknown password should stop configuration.");

	token.assert_calls_async(0).await;

	assert_eq!(diagnostics.len(), 1);
	assert_eq!(diagnostics.for_attribute("password").count(), 1);
}

#[tokio::test]
async fn explicit_config_overrides_env() {
	let server = MockServer::start_async().await;
	let token = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH).body_includes("explicit-user");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"explicit\"}");
		})
		.await;
	let config = ProviderConfig::default()
		.with(ProviderAttribute::Username, "explicit-user")
		.with(ProviderAttribute::ApiVersion, "v60.0");
	let client = provider()
		.configure(&config, &full_env(&server))
		.await
		.expect("Explicit configuration should succeed.");

	token.assert_async().await;

	assert_eq!(client.session().token().expose(), "explicit");
	assert_eq!(client.session().api_version(), "v60.0");
}

#[tokio::test]
async fn rejected_exchange_fails_configuration() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(401).body("{\"error\":\"invalid_client\"}");
		})
		.await;

	let diagnostics = provider()
		.configure(&ProviderConfig::default(), &full_env(&server))
		.await
		.expect_err("Rejected token exchange should fail configuration.");
	let diagnostic = diagnostics.iter().next().expect("One diagnostic should be reported.");

	assert_eq!(diagnostics.len(), 1);
	assert_eq!(diagnostic.summary, "Unable to Create Salesforce API Client");
	assert!(diagnostic.detail.contains("invalid_client"));
}

#[tokio::test]
async fn failed_read_reports_diagnostic() {
	let server = MockServer::start_async().await;

	mock_token_endpoint(&server, "T").await;
	server
		.mock_async(|when, then| {
			when.method(GET).path(describe_path("Nope__c"));
			then.status(404).body("{\"error\":\"not found\"}");
		})
		.await;

	let provider = provider();
	let client = provider
		.configure(&ProviderConfig::default(), &full_env(&server))
		.await
		.expect("Environment-only configuration should succeed.");
	let diagnostics = provider.data_sources(Some(&client))[0]
		.read(json!({ "name": "Nope__c" }))
		.await
		.expect_err("Reading a missing object should fail.");
	let diagnostic = diagnostics.iter().next().expect("One diagnostic should be reported.");

	assert_eq!(diagnostics.len(), 1);
	assert_eq!(diagnostic.summary, "Unable to Read Salesforce descriptions");
	assert!(diagnostic.detail.contains("status: 404"));
}
