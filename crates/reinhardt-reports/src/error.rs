//! Error types for report compilation.
//!
//! Every variant is fatal: compilation stops at the first error and no
//! partial statement is returned.

use thiserror::Error;

/// Errors that can occur while compiling a report query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
	/// The query's `from` names a model the schema does not define.
	#[error("Model not found: {0}")]
	UnknownModel(String),

	/// A key path string could not be parsed.
	#[error("Invalid key path: {0:?}")]
	InvalidKeyPath(String),

	/// A key path names a relationship that does not exist on the model
	/// reached so far.
	#[error("Unresolved key path: {key_path} (no relationship named {segment:?})")]
	UnresolvedKeyPath {
		/// The offending key path in dotted form.
		key_path: String,
		/// The relationship name that could not be found.
		segment: String,
	},

	/// A relationship's constraints produced no join predicate.
	#[error("Missing constraint for relationship {relationship:?} (path: {path})")]
	MissingConstraint {
		/// Name of the relationship being joined.
		relationship: String,
		/// Dotted ancestor path leading to the relationship.
		path: String,
	},

	/// A filter operator outside the supported set.
	#[error("Unsupported operator: {0}")]
	UnsupportedOperator(String),

	/// A sort direction outside the supported set.
	#[error("Unsupported direction: {0}")]
	UnsupportedDirection(String),

	/// An aggregator outside the supported set.
	#[error("Unsupported aggregator: {0}")]
	UnsupportedAggregator(String),
}

/// Result type alias for report compilation.
pub type ReportResult<T> = Result<T, ReportError>;
