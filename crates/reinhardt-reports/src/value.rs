//! Scalar values used by filters, constraints and partitioners.
//!
//! - [`Value`]: a single scalar (null, bool, integer, float, string)
//! - [`FilterValue`]: what a filter compares against, a scalar or a list
//! - [`Values`]: bind parameters collected while rendering parameterized SQL

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar SQL value.
///
/// Deserializes from any JSON/YAML scalar; `null` maps to [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// SQL `NULL`
	#[default]
	Null,
	/// Boolean value
	Bool(bool),
	/// 64-bit signed integer
	Int(i64),
	/// 64-bit floating point
	Float(f64),
	/// Text value
	String(String),
}

impl Value {
	/// Returns `true` if this value is null.
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("NULL"),
			Self::Bool(v) => write!(f, "{}", v),
			Self::Int(v) => write!(f, "{}", v),
			Self::Float(v) => write!(f, "{}", v),
			Self::String(v) => f.write_str(v),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Self::Int(i64::from(v))
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Self::Int(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Self::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::String(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::String(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map_or(Self::Null, Into::into)
	}
}

/// The right-hand side of a filter: one scalar or a list of scalars.
///
/// A list may mix nulls with real values, e.g. `['a', null, 'c']`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
	/// A list of scalars
	List(Vec<Value>),
	/// A single scalar (possibly null)
	Single(Value),
}

impl FilterValue {
	/// Returns `true` for a single null, the `IS [NOT] NULL` shortcut.
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Single(Value::Null))
	}

	/// Flatten into a list of scalars, preserving input order.
	pub fn values(&self) -> &[Value] {
		match self {
			Self::List(values) => values,
			Self::Single(value) => std::slice::from_ref(value),
		}
	}
}

impl Default for FilterValue {
	fn default() -> Self {
		Self::Single(Value::Null)
	}
}

impl From<Value> for FilterValue {
	fn from(v: Value) -> Self {
		Self::Single(v)
	}
}

impl From<&str> for FilterValue {
	fn from(v: &str) -> Self {
		Self::Single(v.into())
	}
}

impl From<String> for FilterValue {
	fn from(v: String) -> Self {
		Self::Single(v.into())
	}
}

impl From<i32> for FilterValue {
	fn from(v: i32) -> Self {
		Self::Single(v.into())
	}
}

impl From<i64> for FilterValue {
	fn from(v: i64) -> Self {
		Self::Single(v.into())
	}
}

impl From<bool> for FilterValue {
	fn from(v: bool) -> Self {
		Self::Single(v.into())
	}
}

impl<T: Into<Value>> From<Vec<T>> for FilterValue {
	fn from(values: Vec<T>) -> Self {
		Self::List(values.into_iter().map(Into::into).collect())
	}
}

/// Bind parameters collected while rendering a parameterized statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(pub Vec<Value>);

impl Values {
	/// Append a parameter.
	pub fn push(&mut self, value: Value) {
		self.0.push(value);
	}

	/// Number of collected parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if no parameters were collected.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over the collected parameters.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
