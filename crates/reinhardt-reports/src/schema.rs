//! Schema graphs.
//!
//! A [`Schema`] is an ordered list of root [`Model`]s. Each model owns its
//! child [`Relationship`]s together with the [`Constraint`]s that join them,
//! and may carry [`Partitioner`]s that scope every use of its table.

mod constraint;
mod model;

pub use constraint::{Constraint, Partitioner};
pub use model::{Model, Relationship};

use serde::{Deserialize, Serialize};

/// The set of models reports can be built from.
///
/// # Example
///
/// ```rust
/// use reinhardt_reports::{Constraint, Model, Relationship, Schema};
///
/// let schema = Schema::new().with_model(
///     Model::new("patients").with_relationship(
///         Relationship::new(Model::new("patient_payments"))
///             .with_constraint(Constraint::reference("patient_id", "id")),
///     ),
/// );
///
/// assert!(schema.model("patients").is_some());
/// assert!(schema.model("doctors").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
	#[serde(default)]
	models: Vec<Model>,
}

impl Schema {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a root model.
	#[must_use]
	pub fn with_model(mut self, model: Model) -> Self {
		self.models.push(model);
		self
	}

	pub fn models(&self) -> &[Model] {
		&self.models
	}

	/// Look up a root model by name. The first match wins.
	pub fn model(&self, name: &str) -> Option<&Model> {
		self.models.iter().find(|m| m.name() == name)
	}
}
