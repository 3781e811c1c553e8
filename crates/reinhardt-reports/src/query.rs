//! Abstract report queries.
//!
//! A [`Query`] names a root model and lists the fields to project, the
//! filters to apply, the sort order and an optional row limit. Every column
//! reference is a [`KeyPath`] relative to the root model.

mod field;
mod filter;
mod key_path;
mod sorter;

pub use field::{Aggregator, Field};
pub use filter::{Filter, Operator};
pub use key_path::KeyPath;
pub use sorter::{Direction, Sorter};

use serde::{Deserialize, Serialize};

/// A report query over one root model.
///
/// # Example
///
/// ```rust
/// use reinhardt_reports::{Aggregator, Field, Filter, KeyPath, Operator, Query, Sorter};
///
/// let query = Query::new("patients")
///     .with_field(Field::new(KeyPath::parse("id").unwrap()).with_display("ID #"))
///     .with_field(
///         Field::new(KeyPath::parse("patient_payments.amount").unwrap())
///             .with_display("Ave Payment")
///             .with_aggregator(Aggregator::Avg),
///     )
///     .with_filter(Filter::parse("id", Operator::Equals, 123).unwrap())
///     .with_sorter(Sorter::ascending(KeyPath::parse("id").unwrap()));
///
/// assert_eq!(query.from(), "patients");
/// assert_eq!(query.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
	from: String,
	#[serde(default)]
	fields: Vec<Field>,
	#[serde(default)]
	filters: Vec<Filter>,
	#[serde(default)]
	sorters: Vec<Sorter>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	limit: Option<u64>,
}

impl Query {
	/// Create an empty query over the model named `from`.
	pub fn new(from: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			fields: Vec::new(),
			filters: Vec::new(),
			sorters: Vec::new(),
			limit: None,
		}
	}

	/// Append a projected field.
	#[must_use]
	pub fn with_field(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}

	/// Append a statement-level filter.
	#[must_use]
	pub fn with_filter(mut self, filter: Filter) -> Self {
		self.filters.push(filter);
		self
	}

	/// Append a sort term.
	#[must_use]
	pub fn with_sorter(mut self, sorter: Sorter) -> Self {
		self.sorters.push(sorter);
		self
	}

	/// Cap the number of returned rows.
	#[must_use]
	pub fn with_limit(mut self, limit: u64) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn from(&self) -> &str {
		&self.from
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn filters(&self) -> &[Filter] {
		&self.filters
	}

	pub fn sorters(&self) -> &[Sorter] {
		&self.sorters
	}

	pub fn limit(&self) -> Option<u64> {
		self.limit
	}
}
