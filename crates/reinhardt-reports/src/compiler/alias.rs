//! Alias generation.

/// Produces table and column aliases for one compilation.
///
/// - `Readable` joins the given parts with `_` and replaces any `.` with `_`,
///   so `["patient_field_values", "field"]` becomes
///   `patient_field_values_field`.
/// - `Obfuscated` ignores its input and hands out `prefix + counter`, starting
///   at 0 and counting up for every call on this instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasMaker {
	Readable,
	Obfuscated { prefix: String, counter: usize },
}

impl AliasMaker {
	pub fn readable() -> Self {
		Self::Readable
	}

	pub fn obfuscated(prefix: impl Into<String>) -> Self {
		Self::Obfuscated {
			prefix: prefix.into(),
			counter: 0,
		}
	}

	/// Readable when `readable` is set, otherwise obfuscated with `prefix`.
	pub fn from_settings(readable: bool, prefix: &str) -> Self {
		if readable {
			Self::readable()
		} else {
			Self::obfuscated(prefix)
		}
	}

	pub fn make(&mut self, parts: &[&str]) -> String {
		match self {
			Self::Readable => parts.join("_").replace('.', "_"),
			Self::Obfuscated { prefix, counter } => {
				let alias = format!("{}{}", prefix, counter);
				*counter += 1;
				alias
			}
		}
	}
}
