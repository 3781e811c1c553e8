//! SQL dialects.
//!
//! A [`Dialect`] is the quoting service the compiler renders through: it
//! quotes identifiers, column aliases and literals, and decides boolean,
//! placeholder and LIMIT syntax. The statement layout itself is shared by
//! all dialects and lives in [`render_select`].

mod ansi;
mod mysql;
mod postgres;
mod render;
mod sql_writer;
mod sqlite;

pub use ansi::AnsiDialect;
pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use render::render_select;
pub use sql_writer::SqlWriter;
pub use sqlite::SqliteDialect;

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Dialect-specific quoting and syntax.
///
/// Only [`Dialect::name`] and [`Dialect::quote_identifier`] are required;
/// the remaining methods default to ANSI-style behavior.
///
/// # Examples
///
/// ```rust
/// use reinhardt_reports::backend::{Dialect, PostgresDialect};
/// use reinhardt_reports::Value;
///
/// let dialect = PostgresDialect;
/// assert_eq!(dialect.quote_identifier("user"), "\"user\"");
/// assert_eq!(dialect.quote_value(&Value::from("it's")), "'it''s'");
/// assert_eq!(dialect.placeholder(2), "$2");
/// ```
pub trait Dialect: fmt::Debug + Send + Sync {
	/// Short dialect name, used in logs.
	fn name(&self) -> &'static str;

	/// Quote a table, alias or column identifier.
	fn quote_identifier(&self, ident: &str) -> String;

	/// Quote a string literal.
	fn quote_string(&self, s: &str) -> String {
		format!("'{}'", s.replace('\'', "''"))
	}

	fn boolean_literal(&self, value: bool) -> &'static str {
		if value { "TRUE" } else { "FALSE" }
	}

	/// Bind placeholder for the 1-based parameter `index`.
	fn placeholder(&self, _index: usize) -> String {
		"?".to_string()
	}

	/// Quote a projected column alias.
	fn quote_alias(&self, alias: &str) -> String {
		self.quote_identifier(alias)
	}

	fn limit_clause(&self, limit: u64) -> String {
		format!("LIMIT {}", limit)
	}

	/// Render a literal inline. Non-finite floats have no SQL literal and
	/// render as `NULL`.
	fn quote_value(&self, value: &Value) -> String {
		match value {
			Value::Null => "NULL".to_string(),
			Value::Bool(v) => self.boolean_literal(*v).to_string(),
			Value::Int(v) => v.to_string(),
			Value::Float(v) if !v.is_finite() => "NULL".to_string(),
			Value::Float(v) => v.to_string(),
			Value::String(v) => self.quote_string(v),
		}
	}
}

/// Double `"` inside an identifier and wrap it in double quotes.
pub(crate) fn double_quote(ident: &str) -> String {
	format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Built-in dialect selector, usable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
	#[default]
	Postgres,
	Mysql,
	Sqlite,
	Ansi,
}

impl DialectKind {
	/// Instantiate the selected dialect.
	pub fn dialect(&self) -> Arc<dyn Dialect> {
		match self {
			Self::Postgres => Arc::new(PostgresDialect),
			Self::Mysql => Arc::new(MySqlDialect),
			Self::Sqlite => Arc::new(SqliteDialect),
			Self::Ansi => Arc::new(AnsiDialect),
		}
	}
}
