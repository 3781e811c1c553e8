//! Report query compiler.
//!
//! [`Compiler`] turns a [`Schema`] and a [`Query`] into one SQL `SELECT`:
//!
//! 1. The root model named by the query becomes the base table, scoped by
//!    its partitioners.
//! 2. Fields, then sorters, then filters resolve their key paths. Each
//!    relationship on a path is LEFT OUTER JOINed once, on the AND of its
//!    constraints, and its partitioners are added to WHERE.
//! 3. Any aggregated field turns the non-aggregated field columns into the
//!    GROUP BY list.
//! 4. The statement is rendered by the configured [`Dialect`].
//!
//! Compilation is deterministic: the same inputs always give the same text.

mod alias;
mod assembler;
mod constraint;
mod join_graph;
mod order;
mod predicate;
mod projection;

pub use alias::AliasMaker;

use crate::backend::{Dialect, render_select};
use crate::error::ReportResult;
use crate::query::Query;
use crate::schema::Schema;
use crate::settings::CompilerSettings;
use crate::sql::SelectStatement;
use crate::value::Values;
use assembler::StatementAssembler;
use std::sync::Arc;
use tracing::debug;

/// Compiles report queries into SQL.
///
/// A `Compiler` holds only configuration; every call builds its own join
/// cache and alias counters, so one compiler can be shared across threads.
///
/// # Example
///
/// ```rust
/// use reinhardt_reports::{Compiler, CompilerSettings, Constraint, Field, KeyPath, Model, Query, Relationship, Schema};
///
/// let schema = Schema::new().with_model(
///     Model::new("patients").with_relationship(
///         Relationship::new(Model::new("patient_payments"))
///             .with_constraint(Constraint::reference("patient_id", "id")),
///     ),
/// );
/// let query = Query::new("patients")
///     .with_field(Field::new(KeyPath::parse("patient_payments.amount").unwrap()).with_display("Amount"));
///
/// let sql = Compiler::new(CompilerSettings::default()).compile(&schema, &query).unwrap();
/// assert_eq!(
///     sql,
///     "SELECT \"patient_payments\".\"amount\" AS \"Amount\" \
///      FROM \"patients\" AS \"patients\" \
///      LEFT OUTER JOIN \"patient_payments\" AS \"patient_payments\" \
///      ON \"patient_payments\".\"patient_id\" = \"patients\".\"id\""
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Compiler {
	settings: CompilerSettings,
	dialect: Arc<dyn Dialect>,
}

impl Compiler {
	/// Create a compiler rendering through the dialect named in `settings`.
	pub fn new(settings: CompilerSettings) -> Self {
		let dialect = settings.dialect.dialect();
		Self { settings, dialect }
	}

	/// Render through a custom dialect instead of the configured one.
	#[must_use]
	pub fn with_dialect<D>(mut self, dialect: D) -> Self
	where
		D: Dialect + 'static,
	{
		self.dialect = Arc::new(dialect);
		self
	}

	pub fn settings(&self) -> &CompilerSettings {
		&self.settings
	}

	pub fn dialect(&self) -> &dyn Dialect {
		self.dialect.as_ref()
	}

	/// Build the dialect-neutral statement without rendering it.
	pub fn build(&self, schema: &Schema, query: &Query) -> ReportResult<SelectStatement> {
		debug!(
			from = query.from(),
			fields = query.fields().len(),
			filters = query.filters().len(),
			sorters = query.sorters().len(),
			dialect = self.dialect.name(),
			"compiling report query"
		);

		let statement = StatementAssembler::assemble(schema, query, &self.settings)?;

		debug!(
			joins = statement.joins().len(),
			grouped = !statement.groups().is_empty(),
			"compiled report query"
		);

		Ok(statement)
	}

	/// Compile to SQL text with every literal inlined.
	pub fn compile(&self, schema: &Schema, query: &Query) -> ReportResult<String> {
		let statement = self.build(schema, query)?;
		let (sql, _) = render_select(self.dialect.as_ref(), &statement, false);
		Ok(sql)
	}

	/// Compile to SQL text with bind placeholders, returning the bound values
	/// in placeholder order. NULL and LIMIT stay inline.
	pub fn compile_parameterized(
		&self,
		schema: &Schema,
		query: &Query,
	) -> ReportResult<(String, Values)> {
		let statement = self.build(schema, query)?;
		Ok(render_select(self.dialect.as_ref(), &statement, true))
	}
}

impl Default for Compiler {
	fn default() -> Self {
		Self::new(CompilerSettings::default())
	}
}

/// Compile with default settings: readable aliases, PostgreSQL.
pub fn compile(schema: &Schema, query: &Query) -> ReportResult<String> {
	Compiler::default().compile(schema, query)
}
