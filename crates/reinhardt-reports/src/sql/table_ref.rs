//! Aliased table and column references.

use super::{BinOper, Predicate, SqlExpr};
use crate::value::Value;

/// A physical table under an alias: `"table" AS "alias"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
	/// Physical table name
	pub table: String,
	/// Alias every column reference is qualified with
	pub alias: String,
}

impl TableRef {
	pub fn new(table: impl Into<String>, alias: impl Into<String>) -> Self {
		Self {
			table: table.into(),
			alias: alias.into(),
		}
	}

	/// A column of this table, qualified by the alias.
	pub fn column(&self, column: impl Into<String>) -> ColumnRef {
		ColumnRef::new(self.alias.clone(), column)
	}

	/// `"alias".*`
	pub fn asterisk(&self) -> SqlExpr {
		SqlExpr::TableAsterisk(self.alias.clone())
	}
}

/// A column qualified by its table alias: `"alias"."column"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
	/// Alias of the owning table
	pub table: String,
	pub column: String,
}

impl ColumnRef {
	pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
		Self {
			table: table.into(),
			column: column.into(),
		}
	}

	fn binary(&self, op: BinOper, right: SqlExpr) -> Predicate {
		Predicate::Binary(SqlExpr::Column(self.clone()), op, right)
	}

	/// `column = value`
	pub fn eq(&self, value: impl Into<Value>) -> Predicate {
		self.binary(BinOper::Equal, SqlExpr::Value(value.into()))
	}

	/// `column = other`
	pub fn eq_column(&self, other: &ColumnRef) -> Predicate {
		self.binary(BinOper::Equal, SqlExpr::Column(other.clone()))
	}

	/// `column <> value`
	pub fn not_eq(&self, value: impl Into<Value>) -> Predicate {
		self.binary(BinOper::NotEqual, SqlExpr::Value(value.into()))
	}

	/// `column > value`
	pub fn gt(&self, value: impl Into<Value>) -> Predicate {
		self.binary(BinOper::GreaterThan, SqlExpr::Value(value.into()))
	}

	/// `column >= value`
	pub fn gte(&self, value: impl Into<Value>) -> Predicate {
		self.binary(BinOper::GreaterThanOrEqual, SqlExpr::Value(value.into()))
	}

	/// `column < value`
	pub fn lt(&self, value: impl Into<Value>) -> Predicate {
		self.binary(BinOper::SmallerThan, SqlExpr::Value(value.into()))
	}

	/// `column <= value`
	pub fn lte(&self, value: impl Into<Value>) -> Predicate {
		self.binary(BinOper::SmallerThanOrEqual, SqlExpr::Value(value.into()))
	}

	/// `column LIKE pattern`
	pub fn like(&self, pattern: impl Into<String>) -> Predicate {
		self.binary(BinOper::Like, SqlExpr::Value(Value::String(pattern.into())))
	}

	/// `column NOT LIKE pattern`
	pub fn not_like(&self, pattern: impl Into<String>) -> Predicate {
		self.binary(
			BinOper::NotLike,
			SqlExpr::Value(Value::String(pattern.into())),
		)
	}

	/// `column IS NULL`
	pub fn is_null(&self) -> Predicate {
		Predicate::IsNull(SqlExpr::Column(self.clone()))
	}

	/// `column IS NOT NULL`
	pub fn is_not_null(&self) -> Predicate {
		Predicate::IsNotNull(SqlExpr::Column(self.clone()))
	}

	/// `column IN (values...)`
	pub fn is_in<I>(&self, values: I) -> Predicate
	where
		I: IntoIterator<Item = Value>,
	{
		Predicate::InList(
			SqlExpr::Column(self.clone()),
			values.into_iter().map(SqlExpr::Value).collect(),
		)
	}

	/// `column NOT IN (values...)`
	pub fn is_not_in<I>(&self, values: I) -> Predicate
	where
		I: IntoIterator<Item = Value>,
	{
		Predicate::NotInList(
			SqlExpr::Column(self.clone()),
			values.into_iter().map(SqlExpr::Value).collect(),
		)
	}
}

impl From<ColumnRef> for SqlExpr {
	fn from(column: ColumnRef) -> Self {
		SqlExpr::Column(column)
	}
}
