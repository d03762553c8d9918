mod common;

// std
use std::time::Duration;
// crates.io
use httpmock::prelude::*;
// self
use common::*;
use salesforce_describe::{
	client::Client,
	describe::Field,
	error::{ConfigError, DecodeError, Error, TransportError},
};

const TRAINING_COURSE: &str = r#"{
	"name": "Training_Course__c",
	"label": "Training Course",
	"custom": true,
	"fields": [
		{ "name": "Id", "label": "Record ID", "type": "id", "length": 18 },
		{ "name": "Name", "label": "Training Course Name", "type": "string" },
		{ "name": "Duration__c", "label": "Duration", "type": "double" }
	]
}"#;

#[tokio::test]
async fn describe_sends_bearer_token_to_versioned_path() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "T").await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(describe_path("test")).header("authorization", "Bearer T");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"name\":\"test\",\"label\":\"Test\",\"fields\":[]}");
		})
		.await;
	let description = client.describe("test").await.expect("Describe call should succeed.");

	mock.assert_async().await;

	assert_eq!(description.name, "test");
	assert_eq!(description.label, "Test");
	assert!(description.fields.is_empty());
}

#[tokio::test]
async fn describe_decodes_fields_in_order() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "T").await;

	server
		.mock_async(|when, then| {
			when.method(GET).path(describe_path("Training_Course__c"));
			then.status(200).header("content-type", "application/json").body(TRAINING_COURSE);
		})
		.await;

	let description =
		client.describe("Training_Course__c").await.expect("Describe call should succeed.");

	assert_eq!(description.name, "Training_Course__c");
	assert_eq!(description.label, "Training Course");
	assert_eq!(
		description.fields,
		[
			Field::new("Id", "Record ID", "id"),
			Field::new("Name", "Training Course Name", "string"),
			Field::new("Duration__c", "Duration", "double"),
		]
	);
}

#[tokio::test]
async fn non_ok_status_returns_raw_body() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "T").await;

	server
		.mock_async(|when, then| {
			when.method(GET).path(describe_path("Missing__c"));
			then.status(404).body("{\"error\":\"not found\"}");
		})
		.await;

	let err = client.describe("Missing__c").await.expect_err("Describe call should fail on 404.");

	assert_eq!(err.to_string(), "status: 404, body: {\"error\":\"not found\"}");

	match err {
		Error::Request { status, body } => {
			assert_eq!(status, 404);
			assert_eq!(body, "{\"error\":\"not found\"}");
		},
		other => panic!("Expected a request error, got {other:?}."),
	}
}

#[tokio::test]
async fn malformed_description_reports_decode_error() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "T").await;

	server
		.mock_async(|when, then| {
			when.method(GET).path(describe_path("Account"));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"name\":\"Account\",\"label\":\"Account\",\"fields\":[{\"name\":42}]}");
		})
		.await;

	let err = client.describe("Account").await.expect_err("Malformed fields should fail.");

	match err {
		Error::Decode(DecodeError { object, source }) => {
			assert_eq!(object, "Account");
			assert_eq!(source.path().to_string(), "fields[0].name");
		},
		other => panic!("Expected a decode error, got {other:?}."),
	}
}

#[tokio::test]
async fn unauthenticated_client_sends_empty_bearer() {
	let server = MockServer::start_async().await;
	let client = Client::new(client_config(), server.base_url(), API_VERSION, None)
		.await
		.expect("Client without credentials should build.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(describe_path("Account")).header_exists("authorization");
			then.status(401).body("[{\"errorCode\":\"INVALID_SESSION_ID\"}]");
		})
		.await;
	let err = client.describe("Account").await.expect_err("Unauthenticated call should fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Request { status: 401, .. }));
}

#[tokio::test]
async fn dot_segment_object_is_never_requested() {
	let server = MockServer::start_async().await;
	let client = authenticated_client(&server, "T").await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET);
			then.status(200).body("{}");
		})
		.await;
	let err = client.describe("..").await.expect_err("Dot segment object should be rejected.");

	mock.assert_calls_async(0).await;

	assert!(matches!(err, Error::Config(ConfigError::UnaddressableObject { .. })));
}

#[tokio::test]
async fn slow_describe_endpoint_times_out() {
	let server = MockServer::start_async().await;

	mock_token_endpoint(&server, "T").await;
	server
		.mock_async(|when, then| {
			when.method(GET).path(describe_path("Account"));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"name\":\"Account\",\"label\":\"Account\",\"fields\":[]}")
				.delay(Duration::from_millis(800));
		})
		.await;

	let config = client_config().with_request_timeout(Duration::from_millis(100));
	let client = Client::new(config, server.base_url(), API_VERSION, Some(credentials(&server)))
		.await
		.expect("Token exchange should finish within the auth timeout.");
	let err = client.describe("Account").await.expect_err("Slow describe should time out.");

	assert!(matches!(err, Error::Transport(TransportError::Timeout { endpoint: "describe", .. })));
}

#[tokio::test]
async fn clones_share_one_token() {
	let server = MockServer::start_async().await;
	let token = mock_token_endpoint(&server, "shared").await;
	let client = Client::new(
		client_config(),
		server.base_url(),
		API_VERSION,
		Some(credentials(&server)),
	)
	.await
	.expect("Client should authenticate against the mock token endpoint.");
	let describe = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(describe_path("Account"))
				.header("authorization", "Bearer shared");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"name\":\"Account\",\"label\":\"Account\",\"fields\":[]}");
		})
		.await;
	let clone = client.clone();
	let (first, second) = tokio::join!(client.describe("Account"), clone.describe("Account"));

	first.expect("First concurrent describe should succeed.");
	second.expect("Second concurrent describe should succeed.");
	token.assert_calls_async(1).await;
	describe.assert_calls_async(2).await;
}
