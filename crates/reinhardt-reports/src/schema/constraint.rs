//! Join constraints and partitioners.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// One term of a relationship's ON clause.
///
/// Serialized with a `type` tag:
///
/// ```yaml
/// - type: reference
///   name: patient_id
///   parent: id
/// - type: static
///   name: phone_type
///   value: cell
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
	/// `child.name = parent.parent`
	Reference {
		/// Column on the joined (child) table
		name: String,
		/// Column on the previously joined (parent) table
		parent: String,
	},
	/// A fixed literal compared against the child column, the parent column,
	/// or both.
	Static {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		name: Option<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		parent: Option<String>,
		#[serde(default)]
		value: Value,
	},
}

impl Constraint {
	/// `child.name = parent.parent`.
	pub fn reference(name: impl Into<String>, parent: impl Into<String>) -> Self {
		Self::Reference {
			name: name.into(),
			parent: parent.into(),
		}
	}

	/// `child.name = value`.
	pub fn static_child(name: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Static {
			name: Some(name.into()),
			parent: None,
			value: value.into(),
		}
	}

	/// `parent.parent = value`.
	pub fn static_parent(parent: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Static {
			name: None,
			parent: Some(parent.into()),
			value: value.into(),
		}
	}
}

/// A fixed `column = value` predicate applied wherever a model's table is
/// selected from or joined, e.g. tenant scoping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partitioner {
	name: String,
	#[serde(default)]
	value: Value,
}

impl Partitioner {
	pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}

	/// The partitioned column.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &Value {
		&self.value
	}
}
