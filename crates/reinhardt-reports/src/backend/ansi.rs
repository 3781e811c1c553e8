//! Standard SQL dialect.

use super::{Dialect, double_quote};

/// SQL:2008 conventions: double-quoted identifiers, `TRUE` / `FALSE`, and
/// `FETCH FIRST n ROWS ONLY` in place of `LIMIT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDialect;

impl Dialect for AnsiDialect {
	fn name(&self) -> &'static str {
		"ansi"
	}

	fn quote_identifier(&self, ident: &str) -> String {
		double_quote(ident)
	}

	fn limit_clause(&self, limit: u64) -> String {
		format!("FETCH FIRST {} ROWS ONLY", limit)
	}
}
