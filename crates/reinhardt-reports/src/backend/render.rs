//! SELECT renderer shared by every dialect.

use super::{Dialect, SqlWriter};
use crate::sql::{ColumnRef, JoinExpr, Order, Predicate, SelectStatement, SqlExpr, TableRef};
use crate::value::{Value, Values};

/// Render `stmt` for `dialect`.
///
/// With `parameterized` set, every literal except NULL becomes a dialect
/// placeholder and is returned in the collected [`Values`]; otherwise
/// literals are quoted inline and the returned values are empty. LIMIT is
/// always inline.
pub fn render_select(
	dialect: &dyn Dialect,
	stmt: &SelectStatement,
	parameterized: bool,
) -> (String, Values) {
	let renderer = SelectRenderer {
		dialect,
		parameterized,
	};
	let mut writer = SqlWriter::new();
	renderer.write_select(&mut writer, stmt);
	writer.finish()
}

struct SelectRenderer<'a> {
	dialect: &'a dyn Dialect,
	parameterized: bool,
}

impl SelectRenderer<'_> {
	fn write_select(&self, writer: &mut SqlWriter, stmt: &SelectStatement) {
		writer.push("SELECT");
		writer.push_space();

		if stmt.selects().is_empty() {
			writer.push("*");
		} else {
			writer.push_list(stmt.selects(), ", ", |w, select| {
				self.write_expr(w, &select.expr);
				if let Some(alias) = &select.alias {
					w.push_keyword("AS");
					w.push_space();
					w.push_identifier(alias, |s| self.dialect.quote_alias(s));
				}
			});
		}

		writer.push_keyword("FROM");
		writer.push_space();
		self.write_table_ref(writer, stmt.from_table());

		for join in stmt.joins() {
			writer.push_space();
			self.write_join_expr(writer, join);
		}

		if !stmt.conditions().is_empty() {
			writer.push_keyword("WHERE");
			writer.push_space();
			writer.push_list(stmt.conditions(), " AND ", |w, predicate| {
				self.write_predicate(w, predicate);
			});
		}

		if !stmt.groups().is_empty() {
			writer.push_keyword("GROUP BY");
			writer.push_space();
			writer.push_list(stmt.groups(), ", ", |w, column| {
				self.write_column_ref(w, column);
			});
		}

		if !stmt.orders().is_empty() {
			writer.push_keyword("ORDER BY");
			writer.push_space();
			writer.push_list(stmt.orders(), ", ", |w, order| {
				self.write_column_ref(w, &order.column);
				if order.order == Order::Desc {
					w.push_keyword("DESC");
				}
			});
		}

		if let Some(limit) = stmt.limit_value() {
			writer.push_space();
			writer.push(&self.dialect.limit_clause(limit));
		}
	}

	fn write_table_ref(&self, writer: &mut SqlWriter, table: &TableRef) {
		writer.push_identifier(&table.table, |s| self.dialect.quote_identifier(s));
		writer.push_keyword("AS");
		writer.push_space();
		writer.push_identifier(&table.alias, |s| self.dialect.quote_identifier(s));
	}

	fn write_column_ref(&self, writer: &mut SqlWriter, column: &ColumnRef) {
		writer.push_identifier(&column.table, |s| self.dialect.quote_identifier(s));
		writer.push(".");
		writer.push_identifier(&column.column, |s| self.dialect.quote_identifier(s));
	}

	fn write_join_expr(&self, writer: &mut SqlWriter, join: &JoinExpr) {
		writer.push_keyword("LEFT OUTER JOIN");
		writer.push_space();
		self.write_table_ref(writer, &join.table);
		writer.push_keyword("ON");
		writer.push_space();
		self.write_predicate(writer, &join.on);
	}

	fn write_value(&self, writer: &mut SqlWriter, value: &Value) {
		let bindable = !matches!(value, Value::Float(v) if !v.is_finite());
		if self.parameterized && bindable {
			writer.push_value(value.clone(), |i| self.dialect.placeholder(i));
		} else {
			writer.push(&self.dialect.quote_value(value));
		}
	}

	fn write_expr(&self, writer: &mut SqlWriter, expr: &SqlExpr) {
		match expr {
			SqlExpr::Column(column) => self.write_column_ref(writer, column),
			SqlExpr::TableAsterisk(alias) => {
				writer.push_identifier(alias, |s| self.dialect.quote_identifier(s));
				writer.push(".*");
			}
			SqlExpr::Value(value) => self.write_value(writer, value),
			SqlExpr::Case(when, then) => {
				writer.push("CASE WHEN ");
				self.write_predicate(writer, when);
				writer.push(" THEN ");
				self.write_expr(writer, then);
				writer.push(" END");
			}
			SqlExpr::FunctionCall(name, args) => {
				writer.push(name);
				writer.push("(");
				writer.push_list(args, ", ", |w, arg| self.write_expr(w, arg));
				writer.push(")");
			}
		}
	}

	fn write_predicate(&self, writer: &mut SqlWriter, predicate: &Predicate) {
		match predicate {
			Predicate::Binary(left, op, right) => {
				self.write_expr(writer, left);
				writer.push_space();
				writer.push(op.as_str());
				writer.push_space();
				self.write_expr(writer, right);
			}
			Predicate::IsNull(expr) => {
				self.write_expr(writer, expr);
				writer.push(" IS NULL");
			}
			Predicate::IsNotNull(expr) => {
				self.write_expr(writer, expr);
				writer.push(" IS NOT NULL");
			}
			Predicate::InList(expr, items) => self.write_in_list(writer, expr, "IN", items),
			Predicate::NotInList(expr, items) => {
				self.write_in_list(writer, expr, "NOT IN", items)
			}
			Predicate::And(terms) => {
				writer.push_list(terms, " AND ", |w, term| self.write_predicate(w, term));
			}
			Predicate::Or(left, right) => {
				writer.push("(");
				self.write_or_operand(writer, left);
				writer.push(" OR ");
				self.write_or_operand(writer, right);
				writer.push(")");
			}
		}
	}

	fn write_or_operand(&self, writer: &mut SqlWriter, operand: &Predicate) {
		match operand {
			Predicate::And(terms) if terms.len() > 1 => {
				writer.push("(");
				self.write_predicate(writer, operand);
				writer.push(")");
			}
			_ => self.write_predicate(writer, operand),
		}
	}

	fn write_in_list(&self, writer: &mut SqlWriter, expr: &SqlExpr, op: &str, items: &[SqlExpr]) {
		self.write_expr(writer, expr);
		writer.push_space();
		writer.push(op);
		writer.push(" (");
		writer.push_list(items, ", ", |w, item| self.write_expr(w, item));
		writer.push(")");
	}
}
