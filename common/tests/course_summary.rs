//! Tests for course card summaries.

use common::course::Course;
use common::course_summary::{CourseSummary, truncate_with_ellipsis};

#[test]
fn short_text_is_unchanged() {
    assert_eq!(truncate_with_ellipsis("Intro", 300), "Intro");
    assert_eq!(truncate_with_ellipsis("", 300), "");
}

#[test]
fn long_text_is_cut_with_ellipsis() {
    let text = "a".repeat(301);
    let excerpt = truncate_with_ellipsis(&text, 300);
    assert_eq!(excerpt.len(), 303);
    assert!(excerpt.ends_with("..."));
}

#[test]
fn truncation_respects_char_boundaries() {
    let text = "ü".repeat(10);
    assert_eq!(truncate_with_ellipsis(&text, 4), "üüüü...");
}

#[test]
fn summary_from_course_json() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "id": 12,
        "title": "Numerical Methods",
        "description": "Solving equations",
        "teacher": { "id": 3, "name": "Ada Lovelace", "email": "ada@example.org", "subject": "Math" },
        "type": { "id": 1, "name": "Lecture" },
        "semesters": [ { "id": 1, "name": "2025W" }, { "id": 2, "name": "2026S" } ],
        "gender_diversity": false
    }))
    .expect("course json");

    let summary = CourseSummary::from_course(&course);
    assert_eq!(summary.course_id, 12);
    assert_eq!(summary.teacher, Some((3, "Ada Lovelace".to_string())));
    assert_eq!(summary.description_excerpt, "Solving equations");
    assert_eq!(summary.semester_label, "2025W, 2026S");
}

#[test]
fn summary_without_teacher_or_semester() {
    let course: Course =
        serde_json::from_value(serde_json::json!({ "id": 1, "title": "Seminar", "teacher": null })).expect("json");
    let summary = CourseSummary::from_course(&course);
    assert_eq!(summary.teacher, None);
    assert_eq!(summary.semester_label, "-");
}
