//! Models and the relationships between them.

use super::{Constraint, Partitioner};
use crate::error::{ReportError, ReportResult};
use crate::query::KeyPath;
use serde::{Deserialize, Serialize};

/// A table that reports can select from or join to.
///
/// A model owns its child relationships, so the graph reachable from any
/// root model is a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
	name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	table: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	relationships: Vec<Relationship>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	partitioners: Vec<Partitioner>,
}

impl Model {
	/// Create a model whose table is named after it.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			table: None,
			relationships: Vec::new(),
			partitioners: Vec::new(),
		}
	}

	/// Use a physical table name different from the model name.
	#[must_use]
	pub fn with_table(mut self, table: impl Into<String>) -> Self {
		self.table = Some(table.into());
		self
	}

	/// Add a child relationship.
	#[must_use]
	pub fn with_relationship(mut self, relationship: Relationship) -> Self {
		self.relationships.push(relationship);
		self
	}

	/// Add a partitioner applied whenever this model's table is used.
	#[must_use]
	pub fn with_partitioner(mut self, partitioner: Partitioner) -> Self {
		self.partitioners.push(partitioner);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Physical table name, defaulting to the model name.
	pub fn table(&self) -> &str {
		self.table.as_deref().unwrap_or(&self.name)
	}

	pub fn relationships(&self) -> &[Relationship] {
		&self.relationships
	}

	pub fn partitioners(&self) -> &[Partitioner] {
		&self.partitioners
	}

	/// Look up a direct child relationship by name.
	pub fn relationship(&self, name: &str) -> Option<&Relationship> {
		self.relationships.iter().find(|r| r.name() == name)
	}

	/// Walk `key_path`'s ancestor names from this model.
	///
	/// Returns one relationship per ancestor, in order. Fails with
	/// [`ReportError::UnresolvedKeyPath`] on the first name that is not a
	/// relationship of the model reached so far.
	pub fn ancestors(&self, key_path: &KeyPath) -> ReportResult<Vec<&Relationship>> {
		let mut current = self;
		let mut chain = Vec::with_capacity(key_path.ancestor_names().len());

		for segment in key_path.ancestor_names() {
			let relationship =
				current
					.relationship(segment)
					.ok_or_else(|| ReportError::UnresolvedKeyPath {
						key_path: key_path.to_string(),
						segment: segment.clone(),
					})?;
			chain.push(relationship);
			current = relationship.model();
		}

		Ok(chain)
	}
}

/// A named edge from a parent model to a child model.
///
/// The child model's fields are flattened into the relationship, so a
/// relationship is written exactly like a model plus its `constraints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
	#[serde(flatten)]
	model: Model,
	#[serde(default)]
	constraints: Vec<Constraint>,
}

impl Relationship {
	pub fn new(model: Model) -> Self {
		Self {
			model,
			constraints: Vec::new(),
		}
	}

	/// Add a join constraint. Constraints combine with AND.
	#[must_use]
	pub fn with_constraint(mut self, constraint: Constraint) -> Self {
		self.constraints.push(constraint);
		self
	}

	/// Relationship name, which is the child model's name.
	pub fn name(&self) -> &str {
		self.model.name()
	}

	/// The child model.
	pub fn model(&self) -> &Model {
		&self.model
	}

	pub fn constraints(&self) -> &[Constraint] {
		&self.constraints
	}
}
