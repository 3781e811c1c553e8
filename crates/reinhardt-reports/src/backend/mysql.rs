//! MySQL dialect.

use super::Dialect;

/// MySQL conventions:
/// - Identifiers: backticks (`` `table_name` ``)
/// - Placeholders: `?`
/// - Strings: single quotes, with backslashes escaped as well
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
	fn name(&self) -> &'static str {
		"mysql"
	}

	fn quote_identifier(&self, ident: &str) -> String {
		format!("`{}`", ident.replace('`', "``"))
	}

	fn quote_string(&self, s: &str) -> String {
		format!("'{}'", s.replace('\\', "\\\\").replace('\'', "''"))
	}
}
