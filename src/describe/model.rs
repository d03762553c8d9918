//! Description records returned by the describe endpoint.

// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// Metadata for one remote object type.
///
/// Decoding is tolerant: unknown JSON fields are ignored and missing or `null` fields become
/// empty strings or an empty field list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
	/// Object API name.
	#[serde(deserialize_with = "null_as_default")]
	pub name: String,
	/// Object label.
	#[serde(deserialize_with = "null_as_default")]
	pub label: String,
	/// Fields in the order the API returned them.
	#[serde(deserialize_with = "null_as_default")]
	pub fields: Vec<Field>,
}
impl Description {
	/// Looks up a field by API name.
	pub fn field(&self, name: &str) -> Option<&Field> {
		self.fields.iter().find(|field| field.name == name)
	}
}

/// Metadata for one field of a [`Description`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
	/// Field API name.
	#[serde(deserialize_with = "null_as_default")]
	pub name: String,
	/// Field label.
	#[serde(deserialize_with = "null_as_default")]
	pub label: String,
	/// Field type, e.g. `reference` or `string`.
	#[serde(rename = "type", deserialize_with = "null_as_default")]
	pub field_type: String,
}
impl Field {
	/// Creates a field from its three attributes.
	pub fn new(
		name: impl Into<String>,
		label: impl Into<String>,
		field_type: impl Into<String>,
	) -> Self {
		Self { name: name.into(), label: label.into(), field_type: field_type.into() }
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
