//! ORDER BY terms.

use crate::query::{Direction, Sorter};
use crate::sql::{ColumnRef, Order, OrderExpr};

pub(crate) struct OrderCompiler;

impl OrderCompiler {
	pub(crate) fn compile(sorter: &Sorter, column: ColumnRef) -> OrderExpr {
		let order = match sorter.direction() {
			Direction::Ascending => Order::Asc,
			Direction::Descending => Order::Desc,
		};
		OrderExpr { column, order }
	}
}
