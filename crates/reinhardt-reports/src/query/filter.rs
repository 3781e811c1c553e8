//! Filters and the closed set of filter operators.

use super::KeyPath;
use crate::error::{ReportError, ReportResult};
use crate::value::FilterValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison applied by a [`Filter`].
///
/// Deserializes from snake_case names (`"equals"`, `"not_contain"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
	/// `column = value`, or `IN (...)` for several values
	#[default]
	Equals,
	/// `column <> value`, or `NOT IN (...)` for several values
	NotEquals,
	/// `column LIKE '%value%'`
	Contains,
	/// `column NOT LIKE '%value%'`
	NotContain,
	/// `column LIKE 'value%'`
	StartsWith,
	/// `column NOT LIKE 'value%'`
	NotStartWith,
	/// `column > value`
	GreaterThan,
	/// `column >= value`
	GreaterThanOrEqual,
	/// `column < value`
	LessThan,
	/// `column <= value`
	LessThanOrEqual,
}

impl Operator {
	/// All operators, in declaration order.
	pub const ALL: [Operator; 10] = [
		Self::Equals,
		Self::NotEquals,
		Self::Contains,
		Self::NotContain,
		Self::StartsWith,
		Self::NotStartWith,
		Self::GreaterThan,
		Self::GreaterThanOrEqual,
		Self::LessThan,
		Self::LessThanOrEqual,
	];

	/// The snake_case name of this operator.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Equals => "equals",
			Self::NotEquals => "not_equals",
			Self::Contains => "contains",
			Self::NotContain => "not_contain",
			Self::StartsWith => "starts_with",
			Self::NotStartWith => "not_start_with",
			Self::GreaterThan => "greater_than",
			Self::GreaterThanOrEqual => "greater_than_or_equal",
			Self::LessThan => "less_than",
			Self::LessThanOrEqual => "less_than_or_equal",
		}
	}

	/// Whether a null comparison under this operator means `IS NOT NULL`.
	///
	/// The negative family (not_equals, not_contain, not_start_with) maps to
	/// `IS NOT NULL`; every other operator maps to `IS NULL`.
	pub fn is_negative(&self) -> bool {
		matches!(
			self,
			Self::NotEquals | Self::NotContain | Self::NotStartWith
		)
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Operator {
	type Err = ReportError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|operator| operator.as_str() == s)
			.ok_or_else(|| ReportError::UnsupportedOperator(s.to_string()))
	}
}

impl TryFrom<String> for Operator {
	type Error = ReportError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Operator> for String {
	fn from(operator: Operator) -> Self {
		operator.as_str().to_string()
	}
}

/// A predicate over one key path.
///
/// # Example
///
/// ```rust
/// use reinhardt_reports::{Filter, KeyPath, Operator};
///
/// let filter = Filter::new(
///     KeyPath::parse("patient_field_values.key").unwrap(),
///     Operator::Equals,
///     "dob",
/// );
/// assert_eq!(filter.operator(), Operator::Equals);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
	key_path: KeyPath,
	#[serde(default)]
	operator: Operator,
	#[serde(default)]
	value: FilterValue,
}

impl Filter {
	/// Create a filter.
	pub fn new(key_path: KeyPath, operator: Operator, value: impl Into<FilterValue>) -> Self {
		Self {
			key_path,
			operator,
			value: value.into(),
		}
	}

	/// Parse `key_path` and create a filter.
	pub fn parse(
		key_path: &str,
		operator: Operator,
		value: impl Into<FilterValue>,
	) -> ReportResult<Self> {
		Ok(Self::new(KeyPath::parse(key_path)?, operator, value))
	}

	/// The filtered key path.
	pub fn key_path(&self) -> &KeyPath {
		&self.key_path
	}

	/// The comparison operator.
	pub fn operator(&self) -> Operator {
		self.operator
	}

	/// The value compared against.
	pub fn value(&self) -> &FilterValue {
		&self.value
	}
}
