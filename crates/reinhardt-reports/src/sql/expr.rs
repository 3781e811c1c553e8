//! Scalar expressions and boolean predicates.

use super::ColumnRef;
use crate::value::Value;

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOper {
	/// Equal (=)
	Equal,
	/// Not equal (<>)
	NotEqual,
	/// Greater than (>)
	GreaterThan,
	/// Greater than or equal (>=)
	GreaterThanOrEqual,
	/// Less than (<)
	SmallerThan,
	/// Less than or equal (<=)
	SmallerThanOrEqual,
	/// LIKE
	Like,
	/// NOT LIKE
	NotLike,
}

impl BinOper {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Equal => "=",
			Self::NotEqual => "<>",
			Self::GreaterThan => ">",
			Self::GreaterThanOrEqual => ">=",
			Self::SmallerThan => "<",
			Self::SmallerThanOrEqual => "<=",
			Self::Like => "LIKE",
			Self::NotLike => "NOT LIKE",
		}
	}
}

/// A scalar SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlExpr {
	/// `"alias"."column"`
	Column(ColumnRef),
	/// `"alias".*`
	TableAsterisk(String),
	/// A literal, inlined or bound depending on the render mode
	Value(Value),
	/// `CASE WHEN <predicate> THEN <expr> END`
	Case(Box<Predicate>, Box<SqlExpr>),
	/// `NAME(args...)`
	FunctionCall(String, Vec<SqlExpr>),
}

impl SqlExpr {
	/// `CASE WHEN when THEN then END`
	pub fn case(when: Predicate, then: SqlExpr) -> Self {
		Self::Case(Box::new(when), Box::new(then))
	}

	/// `name(self)`
	pub fn call(self, name: impl Into<String>) -> Self {
		Self::FunctionCall(name.into(), vec![self])
	}
}

/// A boolean SQL expression.
///
/// Conjunctions are kept flat and render as `a AND b AND c`; disjunctions
/// are binary and render parenthesised, so a left fold over three terms
/// gives `((a OR b) OR c)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
	Binary(SqlExpr, BinOper, SqlExpr),
	IsNull(SqlExpr),
	IsNotNull(SqlExpr),
	InList(SqlExpr, Vec<SqlExpr>),
	NotInList(SqlExpr, Vec<SqlExpr>),
	And(Vec<Predicate>),
	Or(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
	/// `self AND other`, flattening nested conjunctions.
	#[must_use]
	pub fn and(self, other: Predicate) -> Self {
		let mut terms = match self {
			Self::And(terms) => terms,
			single => vec![single],
		};
		match other {
			Self::And(more) => terms.extend(more),
			single => terms.push(single),
		}
		Self::And(terms)
	}

	/// `(self OR other)`
	#[must_use]
	pub fn or(self, other: Predicate) -> Self {
		Self::Or(Box::new(self), Box::new(other))
	}

	/// Fold `terms` with AND. Returns `None` for no terms and the bare term
	/// for exactly one.
	pub fn all<I>(terms: I) -> Option<Self>
	where
		I: IntoIterator<Item = Predicate>,
	{
		terms.into_iter().reduce(Self::and)
	}

	/// Fold `terms` left to right with OR. Returns `None` for no terms.
	pub fn any<I>(terms: I) -> Option<Self>
	where
		I: IntoIterator<Item = Predicate>,
	{
		terms.into_iter().reduce(Self::or)
	}
}
