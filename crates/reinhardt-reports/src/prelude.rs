//! Commonly used types.
//!
//! ```rust
//! use reinhardt_reports::prelude::*;
//! ```

pub use crate::backend::{Dialect, DialectKind};
pub use crate::compiler::{Compiler, compile};
pub use crate::error::{ReportError, ReportResult};
pub use crate::query::{Aggregator, Direction, Field, Filter, KeyPath, Operator, Query, Sorter};
pub use crate::schema::{Constraint, Model, Partitioner, Relationship, Schema};
pub use crate::settings::CompilerSettings;
pub use crate::value::{FilterValue, Value};
