//! Tests for admin form payloads, API error messages and table cells.

use common::admin_entity::{EntityKind, FieldType, display_cell};
use common::form_data::{
    FormValues, clean_form_data, describe_api_error, empty_form, form_data_from_item, missing_required_fields,
};
use serde_json::{Value, json};

#[test]
fn clean_drops_blanks_and_converts_numbers() {
    let fields = EntityKind::Course.form_fields();
    let mut values = empty_form(fields);
    values.insert("title".to_string(), json!("Compilers"));
    values.insert("teacher".to_string(), json!("4"));
    values.insert("year".to_string(), json!(" 2025 "));
    values.insert("credits".to_string(), json!("7.5"));
    values.insert("course_code".to_string(), json!("S12345"));
    values.insert("unknown".to_string(), json!("x"));

    let cleaned = clean_form_data(&values, fields);

    assert_eq!(cleaned.get("title"), Some(&json!("Compilers")));
    assert_eq!(cleaned.get("teacher"), Some(&json!(4)));
    assert_eq!(cleaned.get("year"), Some(&json!(2025)));
    assert_eq!(cleaned.get("credits"), Some(&json!(7.5)));
    assert_eq!(cleaned.get("course_code"), Some(&json!("S12345")));
    assert_eq!(cleaned.get("gender_diversity"), Some(&json!(false)));
    assert!(cleaned.get("description").is_none());
    assert!(cleaned.get("institute").is_none());
    assert!(cleaned.get("unknown").is_none());
}

#[test]
fn text_fields_stay_text_even_when_numeric() {
    let fields = EntityKind::Teacher.form_fields();
    let mut values = FormValues::new();
    values.insert("name".to_string(), json!("1984"));
    let cleaned = clean_form_data(&values, fields);
    assert_eq!(cleaned.get("name"), Some(&json!("1984")));
}

#[test]
fn editing_flattens_nested_records_to_ids() {
    let record = json!({
        "id": 2,
        "name": "Robotics",
        "description": null,
        "department": { "id": 5, "name": "Mechatronics" },
        "year": 2024
    });
    let values = form_data_from_item(&record, EntityKind::StudyProgram.form_fields());
    assert_eq!(values.get("name"), Some(&json!("Robotics")));
    assert_eq!(values.get("description"), Some(&json!("")));
    assert_eq!(values.get("department"), Some(&json!("5")));
    assert_eq!(values.get("year"), Some(&json!("2024")));
}

#[test]
fn required_fields_are_reported() {
    let fields = EntityKind::Department.form_fields();
    let mut values = empty_form(fields);
    values.insert("name".to_string(), json!("Chemistry"));
    assert_eq!(missing_required_fields(&values, fields), vec!["Institute"]);
}

#[test]
fn api_errors_are_condensed() {
    assert_eq!(describe_api_error(r#""Not allowed""#, "Course"), "Not allowed");
    assert_eq!(describe_api_error(r#"{"detail":"Token expired"}"#, "Course"), "Token expired");
    assert_eq!(describe_api_error(r#"{"error":"Bad request"}"#, "Course"), "Bad request");
    assert_eq!(
        describe_api_error(r#"{"course_code":["must match S#####"],"title":["required","too short"]}"#, "Course"),
        "course_code: must match S#####; title: required, too short"
    );
    assert_eq!(describe_api_error("", "Study Program"), "Failed to save study program");
    assert_eq!(describe_api_error("<html></html>", "Teacher"), "Failed to save teacher");
}

#[test]
fn cells_render_by_field_type() {
    assert_eq!(display_cell(Some(&json!(true)), FieldType::Boolean), "Yes");
    assert_eq!(display_cell(None, FieldType::Boolean), "No");
    assert_eq!(display_cell(Some(&json!("2025-10-01")), FieldType::Date), "2025-10-01");
    assert_eq!(display_cell(Some(&json!({ "id": 3, "name": "Ada" })), FieldType::ForeignKey), "Ada");
    assert_eq!(display_cell(Some(&json!({ "id": 3 })), FieldType::ForeignKey), "ID: 3");
    assert_eq!(display_cell(Some(&json!(8)), FieldType::ForeignKey), "ID: 8");
    assert_eq!(
        display_cell(Some(&json!([{ "id": 1, "name": "2025W" }, { "id": 2, "name": "2026S" }])), FieldType::ForeignKey),
        "2025W, 2026S"
    );
    assert_eq!(display_cell(Some(&Value::Null), FieldType::Text), "-");
    assert_eq!(display_cell(Some(&json!("")), FieldType::Text), "-");
    assert_eq!(display_cell(Some(&json!(6)), FieldType::Number), "6");
}

#[test]
fn entity_slugs_round_trip_through_routes() {
    for kind in EntityKind::ALL {
        assert_eq!(kind.to_string().parse::<EntityKind>(), Ok(kind));
    }
    assert!("students".parse::<EntityKind>().is_err());
    assert_eq!(EntityKind::StudyProgram.update_endpoint(4), "/api/study-programs/4/update/");
    assert_eq!(EntityKind::CourseType.create_endpoint(), "/api/course-types/add/");
}

#[test]
fn option_labels_add_context() {
    let teacher = json!({ "id": 1, "name": "Ada", "subject": "Math" });
    assert_eq!(EntityKind::Teacher.option_label(&teacher), "Ada (Math)");
    let department = json!({ "id": 2, "name": "Optics", "institute": { "id": 1, "name": "Physics" } });
    assert_eq!(EntityKind::Department.option_label(&department), "Optics (Physics)");
    assert_eq!(EntityKind::Course.option_sources(), vec![
        EntityKind::Teacher,
        EntityKind::CourseType,
        EntityKind::Institute,
        EntityKind::Department,
        EntityKind::StudyProgram,
    ]);
}
