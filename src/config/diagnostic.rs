//! Diagnostics reported back to hosting shells.

// std
use std::slice::Iter;
// self
use crate::{_prelude::*, config::ProviderAttribute};

/// Severity attached to a [`Diagnostic`].
///
/// Configuration and reads only ever stop with errors; hosts map this onto their own levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
	/// Operation cannot continue.
	Error,
}

/// Single user-facing message, optionally bound to an attribute path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
	/// Severity of the message.
	pub severity: Severity,
	/// Short headline.
	pub summary: String,
	/// Longer explanation with remediation guidance.
	pub detail: String,
	/// Attribute the message refers to, if any.
	pub attribute: Option<String>,
}
impl Diagnostic {
	/// Creates an error diagnostic that is not tied to an attribute.
	pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			summary: summary.into(),
			detail: detail.into(),
			attribute: None,
		}
	}

	/// Binds the diagnostic to an attribute path.
	pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.attribute = Some(attribute.into());

		self
	}

	/// Reports an attribute whose configured value is not known yet.
	pub fn unknown_attribute(attribute: ProviderAttribute) -> Self {
		Self::error(
			format!("Unknown Salesforce {}", attribute.title()),
			format!(
				"The provider cannot create the Salesforce API client as there is an unknown \
				 configuration value for the Salesforce {}. Either target apply the source of the \
				 value first, set the value statically in the configuration, or use the {} \
				 environment variable.",
				attribute.noun(),
				attribute.env_var(),
			),
		)
		.with_attribute(attribute.as_str())
	}

	/// Reports an attribute that is missing or empty after environment fallback.
	pub fn missing_attribute(attribute: ProviderAttribute) -> Self {
		Self::error(
			format!("Missing Salesforce {}", attribute.title()),
			format!(
				"The provider cannot create the Salesforce API client as there is a missing or \
				 empty value for the Salesforce {noun}. Set the {noun} value in the configuration \
				 or use the {env} environment variable. If either is already set, ensure the value \
				 is not empty.",
				noun = attribute.noun(),
				env = attribute.env_var(),
			),
		)
		.with_attribute(attribute.as_str())
	}

	/// Returns true for error-severity diagnostics.
	pub fn is_error(&self) -> bool {
		self.severity == Severity::Error
	}
}
impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match &self.attribute {
			Some(attribute) => write!(f, "{} ({attribute}): {}", self.summary, self.detail),
			None => write!(f, "{}: {}", self.summary, self.detail),
		}
	}
}

/// Ordered collection of diagnostics gathered during one host call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);
impl Diagnostics {
	/// Wraps a single diagnostic.
	pub fn single(diagnostic: Diagnostic) -> Self {
		Self(vec![diagnostic])
	}

	/// Appends a diagnostic.
	pub fn push(&mut self, diagnostic: Diagnostic) {
		self.0.push(diagnostic);
	}

	/// Returns true when at least one error-severity diagnostic was recorded.
	pub fn has_error(&self) -> bool {
		self.0.iter().any(Diagnostic::is_error)
	}

	/// Number of recorded diagnostics.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when nothing was recorded.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over the recorded diagnostics.
	pub fn iter(&self) -> Iter<'_, Diagnostic> {
		self.0.iter()
	}

	/// Returns the diagnostics bound to `attribute`.
	pub fn for_attribute<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
		self.0.iter().filter(move |diagnostic| diagnostic.attribute.as_deref() == Some(attribute))
	}
}
impl From<Diagnostic> for Diagnostics {
	fn from(diagnostic: Diagnostic) -> Self {
		Self::single(diagnostic)
	}
}
impl IntoIterator for Diagnostics {
	type IntoIter = std::vec::IntoIter<Diagnostic>;
	type Item = Diagnostic;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
impl<'a> IntoIterator for &'a Diagnostics {
	type IntoIter = Iter<'a, Diagnostic>;
	type Item = &'a Diagnostic;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
impl Display for Diagnostics {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		for (idx, diagnostic) in self.0.iter().enumerate() {
			if idx > 0 {
				f.write_str("\n")?;
			}

			Display::fmt(diagnostic, f)?;
		}

		Ok(())
	}
}
impl StdError for Diagnostics {}
