//! Report query compilation for the Reinhardt framework.
//!
//! This crate turns a declarative schema graph and an abstract report query
//! into a single SQL `SELECT` statement:
//!
//! - **Schema**: models, the relationships between them, the constraints
//!   those relationships join on, and partitioners that scope every use of a
//!   table
//! - **Query**: projected fields (optionally aggregated or pivoted through
//!   per-field filters), filters, sorters and a row limit, all addressed by
//!   dotted key paths
//! - **Compiler**: resolves key paths into a deduplicated LEFT OUTER JOIN
//!   graph, compiles the filter algebra, infers GROUP BY and renders through a
//!   dialect
//!
//! The crate never talks to a database; it only produces SQL text (or text
//! plus bind values).
//!
//! # Quick Start
//!
//! ```rust
//! use reinhardt_reports::prelude::*;
//!
//! let schema = Schema::new().with_model(
//!     Model::new("patients").with_relationship(
//!         Relationship::new(Model::new("patient_payments"))
//!             .with_constraint(Constraint::reference("patient_id", "id")),
//!     ),
//! );
//!
//! let query = Query::new("patients")
//!     .with_field(Field::new(KeyPath::parse("id")?).with_display("ID #"))
//!     .with_field(
//!         Field::new(KeyPath::parse("patient_payments.amount")?)
//!             .with_display("Ave Payment")
//!             .with_aggregator(Aggregator::Avg),
//!     )
//!     .with_filter(Filter::parse("id", Operator::Equals, 123)?)
//!     .with_sorter(Sorter::ascending(KeyPath::parse("id")?));
//!
//! let sql = compile(&schema, &query)?;
//! assert!(sql.contains("GROUP BY \"patients\".\"id\""));
//! # Ok::<(), ReportError>(())
//! ```
//!
//! Schemas and queries also deserialize with serde, so they can be loaded
//! from JSON or YAML by the caller.
//!
//! # Architecture
//!
//! - [`schema`] and [`query`] - the inputs
//! - [`sql`] - the dialect-neutral statement the compiler builds
//! - [`backend`] - the [`Dialect`](backend::Dialect) quoting service and the
//!   shared renderer
//! - [`compiler`] - key path resolution, predicates, projections and statement
//!   assembly
//! - [`settings`] - alias strategy and dialect selection

pub mod backend;
pub mod compiler;
pub mod error;
pub mod prelude;
pub mod query;
pub mod schema;
pub mod settings;
pub mod sql;
pub mod value;

pub use backend::{Dialect, DialectKind};
pub use compiler::{AliasMaker, Compiler, compile};
pub use error::{ReportError, ReportResult};
pub use query::{Aggregator, Direction, Field, Filter, KeyPath, Operator, Query, Sorter};
pub use schema::{Constraint, Model, Partitioner, Relationship, Schema};
pub use settings::CompilerSettings;
pub use value::{FilterValue, Value, Values};
