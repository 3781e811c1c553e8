//! Filter predicates.

use crate::query::{Filter, Operator};
use crate::sql::{ColumnRef, Predicate};
use crate::value::Value;

pub(crate) struct PredicateCompiler;

impl PredicateCompiler {
	/// Compile `filter` against its resolved `column`.
	///
	/// A single null becomes `IS NULL` / `IS NOT NULL`. Otherwise the values
	/// are split into nulls and non-nulls: one null-form term comes first,
	/// followed by either one `IN` / `NOT IN` term (equals / not_equals over
	/// two or more values) or one term per value, all folded with OR in input
	/// order. Returns `None` for an empty list.
	pub(crate) fn compile(filter: &Filter, column: &ColumnRef) -> Option<Predicate> {
		let operator = filter.operator();

		if filter.value().is_null() {
			return Some(Self::null_form(operator, column));
		}

		let (nulls, values): (Vec<&Value>, Vec<&Value>) =
			filter.value().values().iter().partition(|v| v.is_null());

		let mut terms = Vec::with_capacity(values.len() + 1);
		if !nulls.is_empty() {
			terms.push(Self::null_form(operator, column));
		}

		match operator {
			Operator::Equals if values.len() > 1 => {
				terms.push(column.is_in(values.into_iter().cloned()));
			}
			Operator::NotEquals if values.len() > 1 => {
				terms.push(column.is_not_in(values.into_iter().cloned()));
			}
			_ => terms.extend(
				values
					.into_iter()
					.map(|value| Self::compare(operator, column, value)),
			),
		}

		Predicate::any(terms)
	}

	fn null_form(operator: Operator, column: &ColumnRef) -> Predicate {
		if operator.is_negative() {
			column.is_not_null()
		} else {
			column.is_null()
		}
	}

	fn compare(operator: Operator, column: &ColumnRef, value: &Value) -> Predicate {
		match operator {
			Operator::Equals => column.eq(value.clone()),
			Operator::NotEquals => column.not_eq(value.clone()),
			Operator::Contains => column.like(format!("%{}%", value)),
			Operator::NotContain => column.not_like(format!("%{}%", value)),
			Operator::StartsWith => column.like(format!("{}%", value)),
			Operator::NotStartWith => column.not_like(format!("{}%", value)),
			Operator::GreaterThan => column.gt(value.clone()),
			Operator::GreaterThanOrEqual => column.gte(value.clone()),
			Operator::LessThan => column.lt(value.clone()),
			Operator::LessThanOrEqual => column.lte(value.clone()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::{PostgresDialect, render_select};
	use crate::query::KeyPath;
	use crate::sql::{SelectStatement, TableRef};
	use crate::value::FilterValue;
	use rstest::rstest;

	/// Render the WHERE clause produced by one filter on `"test"."foo"`.
	fn where_clause(operator: Operator, value: impl Into<FilterValue>) -> Option<String> {
		let table = TableRef::new("test", "test");
		let filter = Filter::new(KeyPath::new(Vec::<String>::new(), "foo").unwrap(), operator, value);

		let predicate = PredicateCompiler::compile(&filter, &table.column("foo"))?;

		let mut stmt = SelectStatement::new(table);
		stmt.and_where(predicate);
		let (sql, _) = render_select(&PostgresDialect, &stmt, false);
		sql.split_once(" WHERE ").map(|(_, clause)| clause.to_string())
	}

	#[rstest]
	#[case(Operator::Equals, "\"test\".\"foo\" IS NULL")]
	#[case(Operator::NotEquals, "\"test\".\"foo\" IS NOT NULL")]
	#[case(Operator::Contains, "\"test\".\"foo\" IS NULL")]
	#[case(Operator::NotContain, "\"test\".\"foo\" IS NOT NULL")]
	#[case(Operator::StartsWith, "\"test\".\"foo\" IS NULL")]
	#[case(Operator::NotStartWith, "\"test\".\"foo\" IS NOT NULL")]
	#[case(Operator::GreaterThan, "\"test\".\"foo\" IS NULL")]
	#[case(Operator::GreaterThanOrEqual, "\"test\".\"foo\" IS NULL")]
	#[case(Operator::LessThan, "\"test\".\"foo\" IS NULL")]
	#[case(Operator::LessThanOrEqual, "\"test\".\"foo\" IS NULL")]
	fn test_null_value(#[case] operator: Operator, #[case] expected: &str) {
		assert_eq!(where_clause(operator, Value::Null).as_deref(), Some(expected));
	}

	#[rstest]
	#[case(Operator::Equals, "\"test\".\"foo\" = 'bar'")]
	#[case(Operator::NotEquals, "\"test\".\"foo\" <> 'bar'")]
	#[case(Operator::Contains, "\"test\".\"foo\" LIKE '%bar%'")]
	#[case(Operator::NotContain, "\"test\".\"foo\" NOT LIKE '%bar%'")]
	#[case(Operator::StartsWith, "\"test\".\"foo\" LIKE 'bar%'")]
	#[case(Operator::NotStartWith, "\"test\".\"foo\" NOT LIKE 'bar%'")]
	#[case(Operator::GreaterThan, "\"test\".\"foo\" > 'bar'")]
	#[case(Operator::GreaterThanOrEqual, "\"test\".\"foo\" >= 'bar'")]
	#[case(Operator::LessThan, "\"test\".\"foo\" < 'bar'")]
	#[case(Operator::LessThanOrEqual, "\"test\".\"foo\" <= 'bar'")]
	fn test_single_value(#[case] operator: Operator, #[case] expected: &str) {
		assert_eq!(where_clause(operator, "bar").as_deref(), Some(expected));
	}

	#[rstest]
	#[case(
		Operator::Equals,
		"(\"test\".\"foo\" IS NULL OR \"test\".\"foo\" IN ('a', 'c'))"
	)]
	#[case(
		Operator::NotEquals,
		"(\"test\".\"foo\" IS NOT NULL OR \"test\".\"foo\" NOT IN ('a', 'c'))"
	)]
	#[case(
		Operator::Contains,
		"((\"test\".\"foo\" IS NULL OR \"test\".\"foo\" LIKE '%a%') OR \"test\".\"foo\" LIKE '%c%')"
	)]
	#[case(
		Operator::NotContain,
		"((\"test\".\"foo\" IS NOT NULL OR \"test\".\"foo\" NOT LIKE '%a%') OR \"test\".\"foo\" NOT LIKE '%c%')"
	)]
	#[case(
		Operator::StartsWith,
		"((\"test\".\"foo\" IS NULL OR \"test\".\"foo\" LIKE 'a%') OR \"test\".\"foo\" LIKE 'c%')"
	)]
	#[case(
		Operator::NotStartWith,
		"((\"test\".\"foo\" IS NOT NULL OR \"test\".\"foo\" NOT LIKE 'a%') OR \"test\".\"foo\" NOT LIKE 'c%')"
	)]
	#[case(
		Operator::GreaterThan,
		"((\"test\".\"foo\" IS NULL OR \"test\".\"foo\" > 'a') OR \"test\".\"foo\" > 'c')"
	)]
	#[case(
		Operator::LessThanOrEqual,
		"((\"test\".\"foo\" IS NULL OR \"test\".\"foo\" <= 'a') OR \"test\".\"foo\" <= 'c')"
	)]
	fn test_list_with_null(#[case] operator: Operator, #[case] expected: &str) {
		let value = vec![Value::from("a"), Value::Null, Value::from("c")];
		assert_eq!(where_clause(operator, value).as_deref(), Some(expected));
	}

	#[rstest]
	fn test_list_without_null_collapses_to_in() {
		assert_eq!(
			where_clause(Operator::Equals, vec![1, 2, 3]).as_deref(),
			Some("\"test\".\"foo\" IN (1, 2, 3)")
		);
	}

	#[rstest]
	fn test_single_element_list_stays_a_comparison() {
		assert_eq!(
			where_clause(Operator::NotEquals, vec!["a"]).as_deref(),
			Some("\"test\".\"foo\" <> 'a'")
		);
	}

	#[rstest]
	fn test_list_of_only_nulls() {
		assert_eq!(
			where_clause(Operator::Contains, vec![Value::Null]).as_deref(),
			Some("\"test\".\"foo\" IS NULL")
		);
	}

	#[rstest]
	fn test_empty_list_produces_nothing() {
		assert_eq!(where_clause(Operator::Equals, Vec::<Value>::new()), None);
	}

	#[rstest]
	fn test_numeric_contains_uses_text_pattern() {
		assert_eq!(
			where_clause(Operator::Contains, 42).as_deref(),
			Some("\"test\".\"foo\" LIKE '%42%'")
		);
	}
}
