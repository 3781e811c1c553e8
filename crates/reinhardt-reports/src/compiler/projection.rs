//! Projected field expressions.

use super::AliasMaker;
use crate::query::Field;
use crate::sql::{ColumnRef, Predicate, SqlExpr};

/// A compiled field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Projection {
	pub(crate) expr: SqlExpr,
	pub(crate) alias: String,
	/// The raw column to group by, set only for non-aggregated fields.
	pub(crate) group_column: Option<ColumnRef>,
}

pub(crate) struct ProjectionCompiler;

impl ProjectionCompiler {
	/// Compile `field` over its resolved `column`.
	///
	/// `scoped` is the AND of the field's own filters; when present the
	/// column is gated as `CASE WHEN scoped THEN column END`. The aggregator,
	/// if any, wraps the result.
	pub(crate) fn compile(
		field: &Field,
		scoped: Option<Predicate>,
		column: ColumnRef,
		aliases: &mut AliasMaker,
	) -> Projection {
		let alias = aliases.make(&[field.display().as_str()]);

		let value = SqlExpr::Column(column.clone());
		let expr = match scoped {
			Some(when) => SqlExpr::case(when, value),
			None => value,
		};

		match field.aggregator() {
			Some(aggregator) => Projection {
				expr: expr.call(aggregator.function_name()),
				alias,
				group_column: None,
			},
			None => Projection {
				expr,
				alias,
				group_column: Some(column),
			},
		}
	}
}
