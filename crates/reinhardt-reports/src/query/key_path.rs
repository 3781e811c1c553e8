//! Dotted references to columns reachable from a query's root model.

use crate::error::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A column reachable from the root model through zero or more relationships.
///
/// `"patient_field_values.field.key"` has the ancestors
/// `["patient_field_values", "field"]` and the column `"key"`.
///
/// Equality and hashing are structural over the full segment sequence, so a
/// `KeyPath` can key a cache independently of where it was parsed from.
///
/// # Example
///
/// ```rust
/// use reinhardt_reports::KeyPath;
///
/// let key_path: KeyPath = "patient_payments.amount".parse().unwrap();
/// assert_eq!(key_path.ancestor_names(), ["patient_payments"]);
/// assert_eq!(key_path.column_name(), "amount");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyPath {
	ancestors: Vec<String>,
	column: String,
}

impl KeyPath {
	/// Create a key path from already split parts.
	///
	/// Applies the same rules as [`parse`](Self::parse): every segment must be
	/// non-blank, and a segment may not contain a `.`.
	pub fn new<I, S>(ancestors: I, column: impl Into<String>) -> ReportResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let ancestors: Vec<String> = ancestors.into_iter().map(Into::into).collect();
		let column = column.into();

		let valid = |segment: &String| !segment.trim().is_empty() && !segment.contains('.');
		if !ancestors.iter().all(valid) || !valid(&column) {
			let mut segments = ancestors;
			segments.push(column);
			return Err(ReportError::InvalidKeyPath(segments.join(".")));
		}

		Ok(Self { ancestors, column })
	}

	/// Parse a dotted key path.
	///
	/// Fails on empty input or empty segments (`"a..b"`, `"a."`).
	pub fn parse(input: &str) -> ReportResult<Self> {
		let mut segments: Vec<String> = input
			.split('.')
			.map(|segment| segment.trim().to_string())
			.collect();
		let column = segments.pop().unwrap_or_default();

		Self::new(segments, column).map_err(|_| ReportError::InvalidKeyPath(input.to_string()))
	}

	/// Relationship names leading from the root model to the column's table.
	pub fn ancestor_names(&self) -> &[String] {
		&self.ancestors
	}

	/// The terminal column name.
	pub fn column_name(&self) -> &str {
		&self.column
	}

	/// Returns `true` if the column lives on the root model's table.
	pub fn is_root(&self) -> bool {
		self.ancestors.is_empty()
	}
}

impl fmt::Display for KeyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for ancestor in &self.ancestors {
			write!(f, "{}.", ancestor)?;
		}
		f.write_str(&self.column)
	}
}

impl FromStr for KeyPath {
	type Err = ReportError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<String> for KeyPath {
	type Error = ReportError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl TryFrom<&str> for KeyPath {
	type Error = ReportError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl From<KeyPath> for String {
	fn from(key_path: KeyPath) -> Self {
		key_path.to_string()
	}
}
