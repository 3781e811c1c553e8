//! Projected fields and their aggregators.

use super::{Filter, KeyPath};
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregate function wrapped around a projected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Aggregator {
	/// `SUM(...)`
	Sum,
	/// `COUNT(...)`
	Count,
	/// `AVG(...)`
	Avg,
	/// `MIN(...)`
	Min,
	/// `MAX(...)`
	Max,
}

impl Aggregator {
	/// The snake_case name of this aggregator.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Sum => "sum",
			Self::Count => "count",
			Self::Avg => "avg",
			Self::Min => "min",
			Self::Max => "max",
		}
	}

	/// The SQL aggregate function name.
	pub fn function_name(&self) -> &'static str {
		match self {
			Self::Sum => "SUM",
			Self::Count => "COUNT",
			Self::Avg => "AVG",
			Self::Min => "MIN",
			Self::Max => "MAX",
		}
	}
}

impl fmt::Display for Aggregator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Aggregator {
	type Err = ReportError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"sum" => Ok(Self::Sum),
			"count" => Ok(Self::Count),
			"avg" | "ave" => Ok(Self::Avg),
			"min" => Ok(Self::Min),
			"max" => Ok(Self::Max),
			_ => Err(ReportError::UnsupportedAggregator(s.to_string())),
		}
	}
}

impl TryFrom<String> for Aggregator {
	type Error = ReportError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Aggregator> for String {
	fn from(aggregator: Aggregator) -> Self {
		aggregator.as_str().to_string()
	}
}

/// An output column of a report.
///
/// Scoped filters turn the field into a conditional expression
/// (`CASE WHEN <filters> THEN <column> END`), which combined with an
/// aggregator pivots child rows into named columns.
///
/// # Example
///
/// ```rust
/// use reinhardt_reports::{Aggregator, Field, Filter, KeyPath, Operator};
///
/// let dob = Field::new(KeyPath::parse("patient_field_values.value").unwrap())
///     .with_display("Date of Birth")
///     .with_aggregator(Aggregator::Max)
///     .with_filter(Filter::parse("patient_field_values.key", Operator::Equals, "dob").unwrap());
///
/// assert_eq!(dob.display(), "Date of Birth");
/// assert!(dob.is_aggregated());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
	key_path: KeyPath,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	display: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	aggregator: Option<Aggregator>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	filters: Vec<Filter>,
}

impl Field {
	/// Create a plain, non-aggregated field.
	pub fn new(key_path: KeyPath) -> Self {
		Self {
			key_path,
			display: None,
			aggregator: None,
			filters: Vec::new(),
		}
	}

	/// Set the display name used for the column alias.
	#[must_use]
	pub fn with_display(mut self, display: impl Into<String>) -> Self {
		self.display = Some(display.into());
		self
	}

	/// Wrap the field in an aggregate function.
	#[must_use]
	pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
		self.aggregator = Some(aggregator);
		self
	}

	/// Add a filter scoped to this field only.
	#[must_use]
	pub fn with_filter(mut self, filter: Filter) -> Self {
		self.filters.push(filter);
		self
	}

	/// The projected key path.
	pub fn key_path(&self) -> &KeyPath {
		&self.key_path
	}

	/// Display name, defaulting to the dotted key path.
	pub fn display(&self) -> String {
		self.display
			.clone()
			.unwrap_or_else(|| self.key_path.to_string())
	}

	/// The aggregator, if any.
	pub fn aggregator(&self) -> Option<Aggregator> {
		self.aggregator
	}

	/// Returns `true` if the field carries an aggregator.
	pub fn is_aggregated(&self) -> bool {
		self.aggregator.is_some()
	}

	/// Filters scoped to this field.
	pub fn filters(&self) -> &[Filter] {
		&self.filters
	}
}
