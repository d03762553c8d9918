//! Attribute schemas exposed to hosting shells.

// self
use crate::_prelude::*;

/// How an attribute's value is supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeMode {
	/// Practitioner must set the value.
	Required,
	/// Practitioner may set the value.
	Optional,
	/// Value is filled in by the provider.
	Computed,
}

/// Value type of an attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
	/// Plain string.
	String,
	/// Ordered list of nested objects.
	ListNested(Vec<Attribute>),
}

/// Single attribute definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
	/// Attribute name.
	pub name: String,
	/// Human-readable description.
	pub description: String,
	/// Requiredness of the value.
	pub mode: AttributeMode,
	/// Whether the value must be masked in plans and logs.
	pub sensitive: bool,
	/// Value type.
	#[serde(rename = "type")]
	pub attribute_type: AttributeType,
}
impl Attribute {
	/// String attribute with the given mode.
	pub fn string(
		name: impl Into<String>,
		description: impl Into<String>,
		mode: AttributeMode,
	) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			mode,
			sensitive: false,
			attribute_type: AttributeType::String,
		}
	}

	/// Computed list of nested objects.
	pub fn computed_list(
		name: impl Into<String>,
		description: impl Into<String>,
		nested: Vec<Attribute>,
	) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			mode: AttributeMode::Computed,
			sensitive: false,
			attribute_type: AttributeType::ListNested(nested),
		}
	}

	/// Marks the attribute as sensitive.
	pub fn sensitive(mut self, sensitive: bool) -> Self {
		self.sensitive = sensitive;

		self
	}
}

/// Schema of a provider or data source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
	/// Human-readable description.
	pub description: String,
	/// Attribute definitions in declaration order.
	pub attributes: Vec<Attribute>,
}
impl Schema {
	/// Looks up a top-level attribute by name.
	pub fn attribute(&self, name: &str) -> Option<&Attribute> {
		self.attributes.iter().find(|attribute| attribute.name == name)
	}
}
