//! Sort terms.

use super::KeyPath;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
	/// Ascending order (the column as-is)
	#[default]
	Ascending,
	/// Descending order (`DESC`)
	Descending,
}

impl Direction {
	/// The snake_case name of this direction.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "ascending",
			Self::Descending => "descending",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Direction {
	type Err = ReportError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ascending" | "asc" => Ok(Self::Ascending),
			"descending" | "desc" => Ok(Self::Descending),
			_ => Err(ReportError::UnsupportedDirection(s.to_string())),
		}
	}
}

impl TryFrom<String> for Direction {
	type Error = ReportError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Direction> for String {
	fn from(direction: Direction) -> Self {
		direction.as_str().to_string()
	}
}

/// An ORDER BY term over one key path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorter {
	key_path: KeyPath,
	#[serde(default)]
	direction: Direction,
}

impl Sorter {
	/// Create a sorter.
	pub fn new(key_path: KeyPath, direction: Direction) -> Self {
		Self {
			key_path,
			direction,
		}
	}

	/// Ascending sorter.
	pub fn ascending(key_path: KeyPath) -> Self {
		Self::new(key_path, Direction::Ascending)
	}

	/// Descending sorter.
	pub fn descending(key_path: KeyPath) -> Self {
		Self::new(key_path, Direction::Descending)
	}

	/// The sorted key path.
	pub fn key_path(&self) -> &KeyPath {
		&self.key_path
	}

	/// The sort direction.
	pub fn direction(&self) -> Direction {
		self.direction
	}
}
