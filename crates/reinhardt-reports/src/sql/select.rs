//! SELECT statements.

use super::{ColumnRef, Predicate, SqlExpr, TableRef};

/// Sort order of an ORDER BY term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
	Asc,
	Desc,
}

/// One ORDER BY term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderExpr {
	pub column: ColumnRef,
	pub order: Order,
}

/// One projected expression. The alias is raw text; it is quoted when the
/// statement is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectExpr {
	pub expr: SqlExpr,
	pub alias: Option<String>,
}

/// A `LEFT OUTER JOIN <table> ON <predicate>` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinExpr {
	pub table: TableRef,
	pub on: Predicate,
}

/// A single-table SELECT with left outer joins.
///
/// The statement is dialect-neutral; [`crate::backend::render_select`] turns
/// it into text.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
	pub(crate) selects: Vec<SelectExpr>,
	pub(crate) from: TableRef,
	pub(crate) joins: Vec<JoinExpr>,
	pub(crate) conditions: Vec<Predicate>,
	pub(crate) groups: Vec<ColumnRef>,
	pub(crate) orders: Vec<OrderExpr>,
	pub(crate) limit: Option<u64>,
}

impl SelectStatement {
	/// Create `SELECT ... FROM from`.
	pub fn new(from: TableRef) -> Self {
		Self {
			selects: Vec::new(),
			from,
			joins: Vec::new(),
			conditions: Vec::new(),
			groups: Vec::new(),
			orders: Vec::new(),
			limit: None,
		}
	}

	/// Add a projected expression.
	pub fn expr_as(&mut self, expr: SqlExpr, alias: impl Into<String>) -> &mut Self {
		self.selects.push(SelectExpr {
			expr,
			alias: Some(alias.into()),
		});
		self
	}

	/// Add a projected expression without an alias.
	pub fn expr(&mut self, expr: SqlExpr) -> &mut Self {
		self.selects.push(SelectExpr { expr, alias: None });
		self
	}

	pub fn left_join(&mut self, table: TableRef, on: Predicate) -> &mut Self {
		self.joins.push(JoinExpr { table, on });
		self
	}

	/// AND a predicate into the WHERE clause.
	pub fn and_where(&mut self, predicate: Predicate) -> &mut Self {
		self.conditions.push(predicate);
		self
	}

	pub fn group_by(&mut self, column: ColumnRef) -> &mut Self {
		self.groups.push(column);
		self
	}

	pub fn order_by(&mut self, column: ColumnRef, order: Order) -> &mut Self {
		self.orders.push(OrderExpr { column, order });
		self
	}

	pub fn limit(&mut self, limit: u64) -> &mut Self {
		self.limit = Some(limit);
		self
	}

	pub fn selects(&self) -> &[SelectExpr] {
		&self.selects
	}

	pub fn from_table(&self) -> &TableRef {
		&self.from
	}

	pub fn joins(&self) -> &[JoinExpr] {
		&self.joins
	}

	pub fn conditions(&self) -> &[Predicate] {
		&self.conditions
	}

	pub fn groups(&self) -> &[ColumnRef] {
		&self.groups
	}

	pub fn orders(&self) -> &[OrderExpr] {
		&self.orders
	}

	pub fn limit_value(&self) -> Option<u64> {
		self.limit
	}
}
