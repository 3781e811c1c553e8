//! Compiler configuration.

use crate::backend::DialectKind;
use serde::{Deserialize, Serialize};

/// Settings for [`crate::Compiler`].
///
/// Every field has a default, so a partial document deserializes:
///
/// ```rust
/// use reinhardt_reports::{CompilerSettings, DialectKind};
///
/// let settings: CompilerSettings = serde_json::from_str(r#"{ "readable": false }"#).unwrap();
/// assert!(!settings.readable);
/// assert_eq!(settings.table_prefix, "t");
/// assert_eq!(settings.dialect, DialectKind::Postgres);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerSettings {
	/// Derive aliases from model and field names. When `false`, aliases are
	/// opaque `prefix + counter` strings.
	pub readable: bool,
	/// Prefix for obfuscated table aliases
	pub table_prefix: String,
	/// Prefix for obfuscated column aliases
	pub column_prefix: String,
	pub dialect: DialectKind,
}

impl CompilerSettings {
	/// Settings with opaque aliases.
	pub fn obfuscated() -> Self {
		Self {
			readable: false,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_dialect(mut self, dialect: DialectKind) -> Self {
		self.dialect = dialect;
		self
	}
}

impl Default for CompilerSettings {
	fn default() -> Self {
		Self {
			readable: true,
			table_prefix: "t".to_string(),
			column_prefix: "c".to_string(),
			dialect: DialectKind::default(),
		}
	}
}
