//! String builder used by the SELECT renderer.

use crate::value::{Value, Values};

/// Accumulates SQL text and, in parameterized mode, bind values.
///
/// # Examples
///
/// ```rust
/// use reinhardt_reports::backend::SqlWriter;
/// use reinhardt_reports::Value;
///
/// let mut writer = SqlWriter::new();
/// writer.push("SELECT");
/// writer.push_space();
/// writer.push_value(Value::Int(42), |i| format!("${}", i));
///
/// let (sql, values) = writer.finish();
/// assert_eq!(sql, "SELECT $1");
/// assert_eq!(values.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SqlWriter {
	sql: String,
	values: Values,
	/// 1-based index of the next placeholder
	param_index: usize,
}

impl SqlWriter {
	pub fn new() -> Self {
		Self {
			sql: String::new(),
			values: Values::default(),
			param_index: 1,
		}
	}

	/// Append raw text.
	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Append a single space unless the text already ends with one.
	pub fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with(' ') {
			self.sql.push(' ');
		}
	}

	/// Append a space-separated keyword.
	pub fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	/// Append an identifier through `escape_fn`.
	pub fn push_identifier<F>(&mut self, ident: &str, escape_fn: F)
	where
		F: FnOnce(&str) -> String,
	{
		self.sql.push_str(&escape_fn(ident));
	}

	/// Append a placeholder for `value` and collect it.
	///
	/// NULL is always written inline and consumes no placeholder; returns
	/// `None` in that case, otherwise the index used.
	pub fn push_value<F>(&mut self, value: Value, format_fn: F) -> Option<usize>
	where
		F: FnOnce(usize) -> String,
	{
		if value.is_null() {
			self.sql.push_str("NULL");
			return None;
		}

		let index = self.param_index;
		self.sql.push_str(&format_fn(index));
		self.values.push(value);
		self.param_index += 1;
		Some(index)
	}

	/// Append `items` separated by `separator`, writing each with `f`.
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F)
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T),
	{
		let mut first = true;
		for item in items {
			if !first {
				self.sql.push_str(separator);
			}
			f(self, item);
			first = false;
		}
	}

	pub fn sql(&self) -> &str {
		&self.sql
	}

	pub fn values(&self) -> &Values {
		&self.values
	}

	/// Consume the writer and return `(sql, values)`.
	pub fn finish(self) -> (String, Values) {
		(self.sql, self.values)
	}
}

impl Default for SqlWriter {
	fn default() -> Self {
		Self::new()
	}
}
