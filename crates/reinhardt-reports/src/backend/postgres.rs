//! PostgreSQL dialect.

use super::{Dialect, double_quote};

/// PostgreSQL conventions:
/// - Identifiers: double quotes (`"table_name"`)
/// - Placeholders: numbered (`$1`, `$2`, ...)
/// - Booleans: `TRUE` / `FALSE`
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
	fn name(&self) -> &'static str {
		"postgres"
	}

	fn quote_identifier(&self, ident: &str) -> String {
		double_quote(ident)
	}

	fn placeholder(&self, index: usize) -> String {
		format!("${}", index)
	}
}
