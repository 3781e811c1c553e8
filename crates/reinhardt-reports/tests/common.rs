//! Shared schemas and helpers for the report compiler integration tests

// Each test binary compiles common.rs separately, so not every helper is
// used everywhere.
#![allow(dead_code, unreachable_pub)]

use reinhardt_reports::prelude::*;
use rstest::fixture;

/// Patients with free-form field values and payments.
///
/// ```text
/// patients
/// ├── patient_field_values  (patient_id = patients.id)
/// │   └── field -> fields   (id = patient_field_values.field_id)
/// └── patient_payments      (patient_id = patients.id)
/// ```
#[fixture]
pub fn patients_schema() -> Schema {
	Schema::new().with_model(
		Model::new("patients")
			.with_relationship(
				Relationship::new(
					Model::new("patient_field_values").with_relationship(
						Relationship::new(Model::new("field").with_table("fields"))
							.with_constraint(Constraint::reference("id", "field_id")),
					),
				)
				.with_constraint(Constraint::reference("patient_id", "id")),
			)
			.with_relationship(
				Relationship::new(Model::new("patient_payments"))
					.with_constraint(Constraint::reference("patient_id", "id")),
			),
	)
}

/// Partitioned theaters with members, their demographics and cell phones.
///
/// ```text
/// theaters                  [partition = 99]
/// ├── members               (tid = theaters.id AND partition = theaters.partition) [deleted = false]
/// │   └── demos -> demographics      (member_id = members.id)
/// │       └── phone_numbers          (demographic_id = demos.id AND phone_type = 'cell')
/// └── movies                (theater_id = theaters.id)
/// ```
#[fixture]
pub fn theaters_schema() -> Schema {
	Schema::new().with_model(
		Model::new("theaters")
			.with_partitioner(Partitioner::new("partition", 99))
			.with_relationship(
				Relationship::new(
					Model::new("members")
						.with_partitioner(Partitioner::new("deleted", false))
						.with_relationship(
							Relationship::new(
								Model::new("demos")
									.with_table("demographics")
									.with_relationship(
										Relationship::new(Model::new("phone_numbers"))
											.with_constraint(Constraint::reference(
												"demographic_id",
												"id",
											))
											.with_constraint(Constraint::static_child(
												"phone_type",
												"cell",
											)),
									),
							)
							.with_constraint(Constraint::reference("member_id", "id")),
						),
				)
				.with_constraint(Constraint::reference("tid", "id"))
				.with_constraint(Constraint::reference("partition", "partition")),
			)
			.with_relationship(
				Relationship::new(Model::new("movies"))
					.with_constraint(Constraint::reference("theater_id", "id")),
			),
	)
}

/// Parse a key path, panicking on malformed test input.
pub fn kp(input: &str) -> KeyPath {
	KeyPath::parse(input).unwrap()
}

pub fn field(key_path: &str, display: &str) -> Field {
	Field::new(kp(key_path)).with_display(display)
}

pub fn filter(key_path: &str, operator: Operator, value: impl Into<FilterValue>) -> Filter {
	Filter::new(kp(key_path), operator, value)
}

/// The id / average payment report.
pub fn id_and_average_query() -> Query {
	Query::new("patients")
		.with_field(field("id", "ID #"))
		.with_field(field("patient_payments.amount", "Ave Payment").with_aggregator(Aggregator::Avg))
		.with_sorter(Sorter::ascending(kp("id")))
		.with_filter(filter("id", Operator::Equals, 123))
}

/// Theater names with their members' cell numbers.
pub fn theater_cells_query() -> Query {
	Query::new("theaters")
		.with_field(field("name", "Theater"))
		.with_field(field("members.demos.phone_numbers.phone_number", "Cell"))
		.with_filter(filter("members.account_number", Operator::StartsWith, "A"))
}

/// Number of joins in rendered SQL.
pub fn join_count(sql: &str) -> usize {
	sql.matches("LEFT OUTER JOIN").count()
}
