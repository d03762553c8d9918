//! Shared fixtures for integration tests.

#![allow(dead_code)]

// std
use std::time::Duration;
// crates.io
use httpmock::prelude::*;
// self
use salesforce_describe::{
	auth::Credentials,
	client::Client,
	config::{ClientConfig, MapEnv},
};

pub const CLIENT_ID: &str = "a";
pub const CLIENT_SECRET: &str = "b";
pub const GRANT_TYPE: &str = "password";
pub const USERNAME: &str = "u";
pub const PASSWORD: &str = "p";
pub const API_VERSION: &str = "v58.0";
pub const TOKEN_PATH: &str = "/services/oauth2/token";

/// Client configuration with short timeouts so failing tests return quickly.
pub fn client_config() -> ClientConfig {
	ClientConfig::default()
		.with_auth_timeout(Duration::from_secs(2))
		.with_request_timeout(Duration::from_secs(2))
}

/// Fixture credentials pointed at the mock token endpoint.
pub fn credentials(server: &MockServer) -> Credentials {
	Credentials::new(&server.url(TOKEN_PATH), CLIENT_ID, CLIENT_SECRET, GRANT_TYPE, USERNAME, PASSWORD)
		.expect("Fixture credentials should build for the mock server URL.")
}

/// Registers a token endpoint that issues `token`.
pub async fn mock_token_endpoint<'a>(server: &'a MockServer, token: &str) -> httpmock::Mock<'a> {
	let body = format!("{{\"access_token\":\"{token}\",\"token_type\":\"Bearer\"}}");

	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(body);
		})
		.await
}

/// Builds a client authenticated against the mock server with `token`.
pub async fn authenticated_client(server: &MockServer, token: &str) -> Client {
	mock_token_endpoint(server, token).await;

	Client::new(client_config(), server.base_url(), API_VERSION, Some(credentials(server)))
		.await
		.expect("Authenticated client should build against the mock server.")
}

/// Path of the describe endpoint for `object`.
pub fn describe_path(object: &str) -> String {
	format!("/services/data/{API_VERSION}/sobjects/{object}/describe")
}

/// Environment populated with every `SALESFORCE_*` variable, pointing at the mock server.
pub fn full_env(server: &MockServer) -> MapEnv {
	MapEnv::default()
		.with("SALESFORCE_API_HOST", server.base_url())
		.with("SALESFORCE_API_VERSION", API_VERSION)
		.with("SALESFORCE_AUTH_HOST", server.url(TOKEN_PATH))
		.with("SALESFORCE_CLIENT_ID", CLIENT_ID)
		.with("SALESFORCE_CLIENT_SECRET", CLIENT_SECRET)
		.with("SALESFORCE_GRANT_TYPE", GRANT_TYPE)
		.with("SALESFORCE_USERNAME", USERNAME)
		.with("SALESFORCE_PASSWORD", PASSWORD)
}
