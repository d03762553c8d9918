//! The `salesforce_description` data source.

// std
use std::pin::Pin;
// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	client::Client,
	config::{Diagnostic, Diagnostics},
	describe::Field,
	obs,
	provider::{Attribute, AttributeMode, Schema},
};

/// Boxed future returned by [`DataSource::read`].
pub type DataSourceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Read-only data source contract implemented for hosting shells.
///
/// Configuration and state cross the boundary as JSON values so hosts do not depend on the
/// crate's typed models.
pub trait DataSource
where
	Self: Send + Sync,
{
	/// Full type name, derived from the provider's type name.
	fn type_name(&self, provider_type_name: &str) -> String;

	/// Attribute schema of the data source.
	fn schema(&self) -> Schema;

	/// Reads the remote state described by `config`.
	fn read(&self, config: Value) -> DataSourceFuture<'_, Result<Value, Diagnostics>>;
}

/// Identifier stored for every description read.
pub const PLACEHOLDER_ID: &str = "placeholder";

/// Input of a description read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionQuery {
	/// Object name to describe.
	pub name: String,
}
impl DescriptionQuery {
	/// Creates a query for `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// Output of a description read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionState {
	/// Always [`PLACEHOLDER_ID`].
	pub id: String,
	/// Object name reported by the API.
	pub name: String,
	/// Object label reported by the API.
	pub label: String,
	/// Fields in API order.
	pub fields: Vec<Field>,
}

/// Data source that reads object descriptions through a configured [`Client`].
#[derive(Clone, Debug, Default)]
pub struct DescriptionDataSource {
	client: Option<Client>,
}
impl DescriptionDataSource {
	/// Suffix appended to the provider type name.
	pub const TYPE_SUFFIX: &'static str = "_description";

	/// Attaches the provider-configured client.
	pub fn with_client(mut self, client: Client) -> Self {
		self.client = Some(client);

		self
	}

	/// Fetches the description named by `query`.
	pub async fn read_description(
		&self,
		query: &DescriptionQuery,
	) -> Result<DescriptionState, Diagnostics> {
		obs::event!(info, object = %query.name, "reading Salesforce description data source");

		let client = self.client.as_ref().ok_or_else(|| {
			Diagnostics::single(Diagnostic::error(
				"Unconfigured Salesforce Client",
				"The data source was read before the provider configured a Salesforce API client. \
				 Please report this issue to the provider developers.",
			))
		})?;
		let description = client.describe(&query.name).await.map_err(|e| {
			Diagnostics::single(Diagnostic::error(
				"Unable to Read Salesforce descriptions",
				e.to_string(),
			))
		})?;

		Ok(DescriptionState {
			id: PLACEHOLDER_ID.into(),
			name: description.name,
			label: description.label,
			fields: description.fields,
		})
	}
}
impl DataSource for DescriptionDataSource {
	fn type_name(&self, provider_type_name: &str) -> String {
		format!("{provider_type_name}{}", Self::TYPE_SUFFIX)
	}

	fn schema(&self) -> Schema {
		Schema {
			description: "Fetches a description.".into(),
			attributes: vec![
				Attribute::string(
					"id",
					"Placeholder identifier attribute.",
					AttributeMode::Computed,
				),
				Attribute::string("name", "Name of the described object.", AttributeMode::Required),
				Attribute::string(
					"label",
					"Label of the described object.",
					AttributeMode::Computed,
				),
				Attribute::computed_list(
					"fields",
					"Fields of the described object.",
					vec![
						Attribute::string("name", "Name of the field.", AttributeMode::Computed),
						Attribute::string("label", "Label of the field.", AttributeMode::Computed),
						Attribute::string("type", "Type of the field.", AttributeMode::Computed),
					],
				),
			],
		}
	}

	fn read(&self, config: Value) -> DataSourceFuture<'_, Result<Value, Diagnostics>> {
		Box::pin(async move {
			let query: DescriptionQuery = serde_json::from_value(config).map_err(|e| {
				Diagnostics::single(
					Diagnostic::error("Invalid Salesforce Description Configuration", e.to_string())
						.with_attribute("name"),
				)
			})?;
			let state = self.read_description(&query).await?;

			serde_json::to_value(state).map_err(|e| {
				Diagnostics::single(Diagnostic::error(
					"Unable to Encode Salesforce Description State",
					e.to_string(),
				))
			})
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::provider::AttributeType;

	#[test]
	fn type_name_appends_suffix() {
		assert_eq!(
			DescriptionDataSource::default().type_name("salesforce"),
			"salesforce_description"
		);
	}

	#[test]
	fn schema_marks_only_name_required() {
		let schema = DescriptionDataSource::default().schema();
		let required = schema
			.attributes
			.iter()
			.filter(|attribute| attribute.mode == AttributeMode::Required)
			.map(|attribute| attribute.name.as_str())
			.collect::<Vec<_>>();

		assert_eq!(required, ["name"]);

		let fields = schema.attribute("fields").expect("Fields attribute should exist.");

		assert!(matches!(
			&fields.attribute_type,
			AttributeType::ListNested(nested) if nested.len() == 3
		));
	}

	#[tokio::test]
	async fn unconfigured_read_reports_diagnostic() {
		let diagnostics = DescriptionDataSource::default()
			.read_description(&DescriptionQuery::new("Account"))
			.await
			.expect_err("Reading without a client should fail.");

		assert_eq!(diagnostics.len(), 1);
		assert!(diagnostics.has_error());
	}

	#[tokio::test]
	async fn read_rejects_missing_name() {
		let diagnostics = DescriptionDataSource::default()
			.read(serde_json::json!({}))
			.await
			.expect_err("Configuration without a name should fail.");

		assert_eq!(diagnostics.for_attribute("name").count(), 1);
	}
}
