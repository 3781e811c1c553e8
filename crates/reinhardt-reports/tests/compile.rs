//! End-to-end compilation against the default dialect (PostgreSQL, readable aliases)

mod common;

use common::*;
use reinhardt_reports::prelude::*;
use rstest::rstest;

#[rstest]
fn test_id_and_average_payment(patients_schema: Schema) {
	// Act
	let sql = compile(&patients_schema, &id_and_average_query()).unwrap();

	// Assert
	assert_eq!(
		sql,
		concat!(
			r#"SELECT "patients"."id" AS "ID #", AVG("patient_payments"."amount") AS "Ave Payment" "#,
			r#"FROM "patients" AS "patients" "#,
			r#"LEFT OUTER JOIN "patient_payments" AS "patient_payments" "#,
			r#"ON "patient_payments"."patient_id" = "patients"."id" "#,
			r#"WHERE "patients"."id" = 123 "#,
			r#"GROUP BY "patients"."id" "#,
			r#"ORDER BY "patients"."id""#,
		)
	);
}

#[rstest]
fn test_pivot_child_rows_into_columns(patients_schema: Schema) {
	// Arrange
	let query = Query::new("patients")
		.with_field(field("first", "First Name"))
		.with_field(
			field("patient_field_values.value", "Date of Birth")
				.with_aggregator(Aggregator::Sum)
				.with_filter(filter("patient_field_values.key", Operator::Equals, "dob")),
		)
		.with_field(
			field("patient_field_values.value", "Drivers License #")
				.with_aggregator(Aggregator::Max)
				.with_filter(filter(
					"patient_field_values.key",
					Operator::Equals,
					"drivers_license",
				)),
		);

	// Act
	let sql = compile(&patients_schema, &query).unwrap();

	// Assert
	assert_eq!(
		sql,
		concat!(
			r#"SELECT "patients"."first" AS "First Name", "#,
			r#"SUM(CASE WHEN "patient_field_values"."key" = 'dob' THEN "patient_field_values"."value" END) AS "Date of Birth", "#,
			r#"MAX(CASE WHEN "patient_field_values"."key" = 'drivers_license' THEN "patient_field_values"."value" END) AS "Drivers License #" "#,
			r#"FROM "patients" AS "patients" "#,
			r#"LEFT OUTER JOIN "patient_field_values" AS "patient_field_values" "#,
			r#"ON "patient_field_values"."patient_id" = "patients"."id" "#,
			r#"GROUP BY "patients"."first""#,
		)
	);
}

#[rstest]
fn test_scoped_filters_are_anded_and_may_join(patients_schema: Schema) {
	// Arrange
	let query = Query::new("patients").with_field(
		field("patient_field_values.value", "Notes")
			.with_filter(filter("patient_field_values.field.label", Operator::Equals, "notes"))
			.with_filter(filter("patient_field_values.value", Operator::NotEquals, Value::Null)),
	);

	// Act
	let sql = compile(&patients_schema, &query).unwrap();

	// Assert
	assert_eq!(
		sql,
		concat!(
			r#"SELECT CASE WHEN "patient_field_values_field"."label" = 'notes' "#,
			r#"AND "patient_field_values"."value" IS NOT NULL "#,
			r#"THEN "patient_field_values"."value" END AS "Notes" "#,
			r#"FROM "patients" AS "patients" "#,
			r#"LEFT OUTER JOIN "patient_field_values" AS "patient_field_values" "#,
			r#"ON "patient_field_values"."patient_id" = "patients"."id" "#,
			r#"LEFT OUTER JOIN "fields" AS "patient_field_values_field" "#,
			r#"ON "patient_field_values_field"."id" = "patient_field_values"."field_id""#,
		)
	);
}

#[rstest]
fn test_shared_ancestors_are_joined_once(theaters_schema: Schema) {
	// Arrange
	let query = Query::new("theaters")
		.with_field(field("members.demos.name", "Name"))
		.with_field(field("members.demos.dob", "DOB"))
		.with_field(field("members.account_number", "Account"))
		.with_sorter(Sorter::descending(kp("members.demos.dob")))
		.with_filter(filter("members.demos.name", Operator::Contains, "Smith"));

	// Act
	let sql = compile(&theaters_schema, &query).unwrap();

	// Assert
	assert_eq!(join_count(&sql), 2);
	assert!(sql.contains(r#"LEFT OUTER JOIN "members" AS "members""#));
	assert!(sql.contains(r#"LEFT OUTER JOIN "demographics" AS "members_demos""#));
	assert!(sql.ends_with(
		r#"AND "members_demos"."name" LIKE '%Smith%' ORDER BY "members_demos"."dob" DESC"#
	));
}

#[rstest]
fn test_partitioners_and_static_constraints(theaters_schema: Schema) {
	// Act
	let sql = compile(&theaters_schema, &theater_cells_query()).unwrap();

	// Assert
	assert_eq!(
		sql,
		concat!(
			r#"SELECT "theaters"."name" AS "Theater", "members_demos_phone_numbers"."phone_number" AS "Cell" "#,
			r#"FROM "theaters" AS "theaters" "#,
			r#"LEFT OUTER JOIN "members" AS "members" "#,
			r#"ON "members"."tid" = "theaters"."id" AND "members"."partition" = "theaters"."partition" "#,
			r#"LEFT OUTER JOIN "demographics" AS "members_demos" "#,
			r#"ON "members_demos"."member_id" = "members"."id" "#,
			r#"LEFT OUTER JOIN "phone_numbers" AS "members_demos_phone_numbers" "#,
			r#"ON "members_demos_phone_numbers"."demographic_id" = "members_demos"."id" "#,
			r#"AND "members_demos_phone_numbers"."phone_type" = 'cell' "#,
			r#"WHERE "theaters"."partition" = 99 "#,
			r#"AND "members"."deleted" = FALSE "#,
			r#"AND "members"."account_number" LIKE 'A%'"#,
		)
	);
}

#[rstest]
fn test_no_fields_selects_everything_from_base(theaters_schema: Schema) {
	// Arrange
	let query = Query::new("theaters")
		.with_filter(filter("movies.title", Operator::Equals, vec!["Alien", "Heat"]))
		.with_sorter(Sorter::ascending(kp("name")))
		.with_limit(10);

	// Act
	let sql = compile(&theaters_schema, &query).unwrap();

	// Assert
	assert_eq!(
		sql,
		concat!(
			r#"SELECT "theaters".* FROM "theaters" AS "theaters" "#,
			r#"LEFT OUTER JOIN "movies" AS "movies" ON "movies"."theater_id" = "theaters"."id" "#,
			r#"WHERE "theaters"."partition" = 99 AND "movies"."title" IN ('Alien', 'Heat') "#,
			r#"ORDER BY "theaters"."name" "#,
			r#"LIMIT 10"#,
		)
	);
}

#[rstest]
fn test_aggregates_without_plain_fields_do_not_group(patients_schema: Schema) {
	let query = Query::new("patients")
		.with_field(field("patient_payments.amount", "Total").with_aggregator(Aggregator::Sum))
		.with_field(field("patient_payments.id", "Count").with_aggregator(Aggregator::Count));

	let sql = compile(&patients_schema, &query).unwrap();

	assert_eq!(
		sql,
		concat!(
			r#"SELECT SUM("patient_payments"."amount") AS "Total", COUNT("patient_payments"."id") AS "Count" "#,
			r#"FROM "patients" AS "patients" "#,
			r#"LEFT OUTER JOIN "patient_payments" AS "patient_payments" "#,
			r#"ON "patient_payments"."patient_id" = "patients"."id""#,
		)
	);
}

#[rstest]
#[case::plain_only(&[None, None], None)]
#[case::one_aggregate(
	&[None, Some(Aggregator::Min), None],
	Some(r#"GROUP BY "patients"."first", "patients"."last""#)
)]
#[case::aggregate_first(
	&[Some(Aggregator::Avg), None, None],
	Some(r#"GROUP BY "patients"."first", "patients"."last""#)
)]
#[case::three_plain(
	&[None, None, Some(Aggregator::Count), None],
	Some(r#"GROUP BY "patients"."first", "patients"."last", "patients"."middle""#)
)]
fn test_group_by_inference(
	patients_schema: Schema,
	#[case] aggregators: &[Option<Aggregator>],
	#[case] expected: Option<&str>,
) {
	// Arrange
	let columns = ["first", "last", "middle"];
	let mut plain = columns.iter();
	let mut query = Query::new("patients");
	for aggregator in aggregators {
		query = match aggregator {
			Some(aggregator) => query.with_field(
				field("patient_payments.amount", "Amount").with_aggregator(*aggregator),
			),
			None => {
				let column = plain.next().unwrap();
				query.with_field(field(column, column))
			}
		};
	}

	// Act
	let sql = compile(&patients_schema, &query).unwrap();

	// Assert
	match expected {
		Some(group_by) => {
			assert!(sql.ends_with(group_by), "unexpected SQL: {}", sql);
			assert!(!sql.contains(r#"GROUP BY "patient_payments""#));
		}
		None => assert!(!sql.contains("GROUP BY"), "unexpected SQL: {}", sql),
	}
}

#[rstest]
fn test_sort_and_filter_columns_are_not_grouped(patients_schema: Schema) {
	// Arrange
	let query = Query::new("patients")
		.with_field(field("id", "ID"))
		.with_field(field("patient_payments.amount", "Total").with_aggregator(Aggregator::Sum))
		.with_sorter(Sorter::ascending(kp("last")))
		.with_filter(filter("first", Operator::NotEquals, "Bozo"));

	// Act
	let sql = compile(&patients_schema, &query).unwrap();

	// Assert
	assert!(sql.contains(r#"GROUP BY "patients"."id" ORDER BY "patients"."last""#));
	assert!(sql.contains(r#"WHERE "patients"."first" <> 'Bozo'"#));
}

#[rstest]
fn test_filter_values_are_escaped(patients_schema: Schema) {
	let query = Query::new("patients").with_filter(filter("last", Operator::Equals, "O'Brien"));

	let sql = compile(&patients_schema, &query).unwrap();

	assert!(sql.ends_with(r#"WHERE "patients"."last" = 'O''Brien'"#));
}

#[rstest]
fn test_empty_list_filter_is_skipped(patients_schema: Schema) {
	let query = Query::new("patients")
		.with_filter(filter("id", Operator::Equals, Vec::<Value>::new()))
		.with_filter(filter("id", Operator::GreaterThan, 5));

	let sql = compile(&patients_schema, &query).unwrap();

	assert!(sql.ends_with(r#"WHERE "patients"."id" > 5"#));
}

#[rstest]
fn test_field_display_defaults_to_key_path(patients_schema: Schema) {
	let query = Query::new("patients").with_field(Field::new(kp("patient_payments.amount")));

	let sql = compile(&patients_schema, &query).unwrap();

	assert!(sql.starts_with(
		r#"SELECT "patient_payments"."amount" AS "patient_payments_amount" FROM"#
	));
}

#[rstest]
fn test_relationship_without_constraints_is_an_error() {
	// Arrange
	let schema = Schema::new().with_model(
		Model::new("users").with_relationship(Relationship::new(Model::new("logins"))),
	);
	let query = Query::new("users")
		.with_field(field("id", "ID"))
		.with_field(field("logins.id", "Login"));

	// Act
	let result = compile(&schema, &query);

	// Assert
	assert_eq!(
		result,
		Err(ReportError::MissingConstraint {
			relationship: "logins".to_string(),
			path: "logins".to_string(),
		})
	);
}

#[rstest]
fn test_blank_static_constraint_is_an_error() {
	// Arrange
	let schema: Schema = serde_json::from_str(
		r#"{
			"models": [{
				"name": "users",
				"relationships": [{
					"name": "logins",
					"constraints": [{ "type": "static", "name": "", "parent": "", "value": 1 }]
				}]
			}]
		}"#,
	)
	.unwrap();
	let query = Query::new("users").with_field(field("logins.id", "Login"));

	// Act
	let result = compile(&schema, &query);

	// Assert
	assert_eq!(
		result,
		Err(ReportError::MissingConstraint {
			relationship: "logins".to_string(),
			path: "logins".to_string(),
		})
	);
}

#[rstest]
#[case::field(Query::new("patients").with_field(field("payments.amount", "Amount")))]
#[case::sorter(Query::new("patients").with_sorter(Sorter::descending(kp("payments.amount"))))]
#[case::filter(Query::new("patients").with_filter(filter("payments.amount", Operator::GreaterThan, 0)))]
fn test_unknown_relationship_is_an_error(patients_schema: Schema, #[case] query: Query) {
	let result = compile(&patients_schema, &query);

	assert_eq!(
		result,
		Err(ReportError::UnresolvedKeyPath {
			key_path: "payments.amount".to_string(),
			segment: "payments".to_string(),
		})
	);
}

#[rstest]
fn test_unknown_nested_relationship_is_an_error(theaters_schema: Schema) {
	let query = Query::new("theaters").with_field(field("members.pets.name", "Pet"));

	let result = compile(&theaters_schema, &query);

	assert!(matches!(
		result,
		Err(ReportError::UnresolvedKeyPath { segment, .. }) if segment == "pets"
	));
}

#[rstest]
fn test_unknown_root_model_is_an_error(patients_schema: Schema) {
	let result = compile(&patients_schema, &Query::new("doctors"));

	assert_eq!(result, Err(ReportError::UnknownModel("doctors".to_string())));
}

#[rstest]
fn test_compiler_is_reusable(theaters_schema: Schema, patients_schema: Schema) {
	// Arrange
	let compiler = Compiler::default();

	// Act
	let first = compiler.compile(&theaters_schema, &theater_cells_query()).unwrap();
	let other = compiler.compile(&patients_schema, &id_and_average_query()).unwrap();
	let second = compiler.compile(&theaters_schema, &theater_cells_query()).unwrap();

	// Assert
	assert_eq!(first, second);
	assert_ne!(first, other);
}
