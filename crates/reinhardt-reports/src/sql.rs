//! Dialect-neutral SQL AST.
//!
//! - [`TableRef`] / [`ColumnRef`]: aliased tables and alias-qualified columns
//! - [`SqlExpr`]: scalar expressions (columns, literals, CASE, function calls)
//! - [`Predicate`]: boolean expressions with flat AND and nested OR
//! - [`SelectStatement`]: the statement the compiler builds
//!
//! Nothing in this module knows about quoting; see [`crate::backend`].

mod expr;
mod select;
mod table_ref;

pub use expr::{BinOper, Predicate, SqlExpr};
pub use select::{JoinExpr, Order, OrderExpr, SelectExpr, SelectStatement};
pub use table_ref::{ColumnRef, TableRef};
