//! SQLite dialect.

use super::{Dialect, double_quote};

/// SQLite conventions:
/// - Identifiers: double quotes
/// - Placeholders: `?`
/// - Booleans: `1` / `0`
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl Dialect for SqliteDialect {
	fn name(&self) -> &'static str {
		"sqlite"
	}

	fn quote_identifier(&self, ident: &str) -> String {
		double_quote(ident)
	}

	fn boolean_literal(&self, value: bool) -> &'static str {
		if value { "1" } else { "0" }
	}
}
