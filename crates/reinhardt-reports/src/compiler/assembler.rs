//! Per-call statement assembly.

use super::join_graph::{JoinGraph, apply_partitioners};
use super::order::OrderCompiler;
use super::predicate::PredicateCompiler;
use super::projection::ProjectionCompiler;
use super::AliasMaker;
use crate::error::{ReportError, ReportResult};
use crate::query::{Field, Filter, Query, Sorter};
use crate::schema::Schema;
use crate::settings::CompilerSettings;
use crate::sql::{ColumnRef, Predicate, SelectStatement};
use tracing::warn;

/// Builds one [`SelectStatement`] from one query.
///
/// Owns every piece of state a compilation needs (join cache, alias
/// counters, GROUP BY candidates) and is consumed by [`finish`](Self::finish).
pub(crate) struct StatementAssembler<'s> {
	graph: JoinGraph<'s>,
	statement: SelectStatement,
	column_aliases: AliasMaker,
	group_candidates: Vec<ColumnRef>,
	requires_group_by: bool,
	has_fields: bool,
}

impl<'s> StatementAssembler<'s> {
	/// Compile `query` against `schema` in one pass: fields, then sorters,
	/// then filters, then the limit.
	pub(crate) fn assemble(
		schema: &'s Schema,
		query: &Query,
		settings: &CompilerSettings,
	) -> ReportResult<SelectStatement> {
		let mut assembler = Self::new(schema, query.from(), settings)?;

		for field in query.fields() {
			assembler.add_field(field)?;
		}
		for sorter in query.sorters() {
			assembler.add_sorter(sorter)?;
		}
		for filter in query.filters() {
			assembler.add_filter(filter)?;
		}
		if let Some(limit) = query.limit() {
			assembler.add_limit(limit);
		}

		Ok(assembler.finish())
	}

	/// Select from the root model named `from` and apply its partitioners.
	pub(crate) fn new(
		schema: &'s Schema,
		from: &str,
		settings: &CompilerSettings,
	) -> ReportResult<Self> {
		let root = schema
			.model(from)
			.ok_or_else(|| ReportError::UnknownModel(from.to_string()))?;

		let graph = JoinGraph::new(
			root,
			AliasMaker::from_settings(settings.readable, &settings.table_prefix),
		);
		let mut statement = SelectStatement::new(graph.base().clone());
		apply_partitioners(root, graph.base(), &mut statement);

		Ok(Self {
			graph,
			statement,
			column_aliases: AliasMaker::from_settings(settings.readable, &settings.column_prefix),
			group_candidates: Vec::new(),
			requires_group_by: false,
			has_fields: false,
		})
	}

	pub(crate) fn add_field(&mut self, field: &Field) -> ReportResult<()> {
		let column = self.graph.resolve(field.key_path(), &mut self.statement)?;

		let mut scoped = Vec::with_capacity(field.filters().len());
		for filter in field.filters() {
			let filter_column = self.graph.resolve(filter.key_path(), &mut self.statement)?;
			scoped.extend(PredicateCompiler::compile(filter, &filter_column));
		}

		let projection = ProjectionCompiler::compile(
			field,
			Predicate::all(scoped),
			column,
			&mut self.column_aliases,
		);
		self.statement.expr_as(projection.expr, projection.alias);
		self.has_fields = true;

		match projection.group_column {
			None => self.requires_group_by = true,
			Some(column) => {
				if !self.group_candidates.contains(&column) {
					self.group_candidates.push(column);
				}
			}
		}

		Ok(())
	}

	pub(crate) fn add_sorter(&mut self, sorter: &Sorter) -> ReportResult<()> {
		let column = self.graph.resolve(sorter.key_path(), &mut self.statement)?;
		let order = OrderCompiler::compile(sorter, column);
		self.statement.order_by(order.column, order.order);
		Ok(())
	}

	/// Filters producing no predicate (an empty value list) are skipped.
	pub(crate) fn add_filter(&mut self, filter: &Filter) -> ReportResult<()> {
		let column = self.graph.resolve(filter.key_path(), &mut self.statement)?;
		if let Some(predicate) = PredicateCompiler::compile(filter, &column) {
			self.statement.and_where(predicate);
		}
		Ok(())
	}

	pub(crate) fn add_limit(&mut self, limit: u64) {
		self.statement.limit(limit);
	}

	/// Project `base.*` when no field was added; otherwise emit GROUP BY when
	/// an aggregated field needs it.
	pub(crate) fn finish(mut self) -> SelectStatement {
		if !self.has_fields {
			self.statement.expr(self.graph.base().asterisk());
			return self.statement;
		}

		if !self.requires_group_by {
			return self.statement;
		}

		for order in self.statement.orders() {
			if !self.group_candidates.contains(&order.column) {
				warn!(
					table = %order.column.table,
					column = %order.column.column,
					"aggregated report is ordered by a column outside GROUP BY"
				);
			}
		}

		for column in self.group_candidates.drain(..) {
			self.statement.group_by(column);
		}

		self.statement
	}
}
