//! Key path resolution and join bookkeeping.

use super::constraint::{ConstraintCompiler, literal_eq};
use super::AliasMaker;
use crate::error::{ReportError, ReportResult};
use crate::query::KeyPath;
use crate::schema::{Model, Relationship};
use crate::sql::{ColumnRef, SelectStatement, TableRef};
use std::collections::HashMap;
use tracing::trace;

/// AND every partitioner of `model`, scoped to `table`, into the WHERE clause.
pub(crate) fn apply_partitioners(model: &Model, table: &TableRef, statement: &mut SelectStatement) {
	for partitioner in model.partitioners() {
		statement.and_where(literal_eq(
			table.column(partitioner.name()),
			partitioner.value(),
		));
	}
}

/// Tables joined so far in one compilation, keyed by ancestor path.
///
/// Two key paths that share ancestors resolve to the same joined table, so
/// every relationship is joined at most once per statement.
#[derive(Debug)]
pub(crate) struct JoinGraph<'s> {
	root: &'s Model,
	base: TableRef,
	aliases: AliasMaker,
	tables: HashMap<Vec<String>, TableRef>,
	columns: HashMap<KeyPath, ColumnRef>,
}

impl<'s> JoinGraph<'s> {
	/// Start a graph at `root`. The base table alias is the first alias
	/// `aliases` hands out.
	pub(crate) fn new(root: &'s Model, mut aliases: AliasMaker) -> Self {
		let base = TableRef::new(root.table(), aliases.make(&[root.name()]));
		Self {
			root,
			base,
			aliases,
			tables: HashMap::new(),
			columns: HashMap::new(),
		}
	}

	pub(crate) fn base(&self) -> &TableRef {
		&self.base
	}

	/// Resolve `key_path` to a column, joining any ancestor relationship not
	/// joined yet onto `statement`.
	pub(crate) fn resolve(
		&mut self,
		key_path: &KeyPath,
		statement: &mut SelectStatement,
	) -> ReportResult<ColumnRef> {
		if let Some(column) = self.columns.get(key_path) {
			return Ok(column.clone());
		}

		let root = self.root;
		let chain = root.ancestors(key_path)?;

		let mut path: Vec<String> = Vec::with_capacity(chain.len());
		let mut previous = self.base.clone();
		for relationship in chain {
			path.push(relationship.name().to_string());
			previous = match self.tables.get(&path) {
				Some(table) => table.clone(),
				None => self.join(&path, relationship, &previous, statement)?,
			};
		}

		let column = previous.column(key_path.column_name());
		self.columns.insert(key_path.clone(), column.clone());
		Ok(column)
	}

	fn join(
		&mut self,
		path: &[String],
		relationship: &Relationship,
		previous: &TableRef,
		statement: &mut SelectStatement,
	) -> ReportResult<TableRef> {
		let names: Vec<&str> = path.iter().map(String::as_str).collect();
		let model = relationship.model();
		let table = TableRef::new(model.table(), self.aliases.make(&names));

		let on = ConstraintCompiler::compile(relationship.constraints(), &table, previous)
			.ok_or_else(|| ReportError::MissingConstraint {
				relationship: relationship.name().to_string(),
				path: path.join("."),
			})?;

		statement.left_join(table.clone(), on);
		apply_partitioners(model, &table, statement);

		trace!(
			path = %path.join("."),
			table = %table.table,
			alias = %table.alias,
			"joined relationship"
		);

		self.tables.insert(path.to_vec(), table.clone());
		Ok(table)
	}
}
