//! Join ON-predicates from relationship constraints.

use crate::schema::Constraint;
use crate::sql::{ColumnRef, Predicate, TableRef};
use crate::value::Value;

/// `column = value`, or `column IS NULL` for a null literal.
pub(crate) fn literal_eq(column: ColumnRef, value: &Value) -> Predicate {
	if value.is_null() {
		column.is_null()
	} else {
		column.eq(value.clone())
	}
}

pub(crate) struct ConstraintCompiler;

impl ConstraintCompiler {
	/// AND together every term the constraints produce for joining `table`
	/// onto `previous`.
	///
	/// Returns `None` when no term is produced, which callers treat as an
	/// unconstrained join.
	pub(crate) fn compile(
		constraints: &[Constraint],
		table: &TableRef,
		previous: &TableRef,
	) -> Option<Predicate> {
		Predicate::all(
			constraints
				.iter()
				.flat_map(|constraint| Self::terms(constraint, table, previous)),
		)
	}

	fn terms(constraint: &Constraint, table: &TableRef, previous: &TableRef) -> Vec<Predicate> {
		match constraint {
			Constraint::Reference { name, parent } => {
				vec![table.column(name).eq_column(&previous.column(parent))]
			}
			Constraint::Static {
				name,
				parent,
				value,
			} => {
				// An absent or blank column contributes no term.
				let mut terms = Vec::with_capacity(2);
				if let Some(name) = name.as_deref().filter(|n| !n.is_empty()) {
					terms.push(literal_eq(table.column(name), value));
				}
				if let Some(parent) = parent.as_deref().filter(|p| !p.is_empty()) {
					terms.push(literal_eq(previous.column(parent), value));
				}
				terms
			}
		}
	}
}
