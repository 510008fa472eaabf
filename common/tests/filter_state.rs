//! Tests for facet selection, the cascade invariant and query-string translation.

use common::facet::{FacetItem, FacetKind};
use common::filter_state::FilterState;

fn item(id: u64, name: &str) -> FacetItem {
    FacetItem::new(id, name)
}

#[test]
fn toggling_twice_restores_selection() {
    let mut state = FilterState::default();
    state.toggle(FacetKind::Teacher, item(1, "Ada"));
    let before = state.clone();

    assert!(state.toggle(FacetKind::Teacher, item(2, "Grace")));
    assert!(state.is_selected(FacetKind::Teacher, 2));
    assert!(state.toggle(FacetKind::Teacher, item(2, "Grace")));

    assert_eq!(state, before);
}

#[test]
fn membership_is_by_id() {
    let mut state = FilterState::default();
    state.toggle(FacetKind::Institute, item(7, "Physics"));
    state.toggle(FacetKind::Institute, item(7, "Physics (renamed)"));
    assert!(state.selected(FacetKind::Institute).is_empty());
    assert_eq!(state, FilterState::default());
}

#[test]
fn semester_is_single_select() {
    let mut state = FilterState::default();
    state.toggle(FacetKind::Semester, item(1, "2025W"));
    state.toggle(FacetKind::Semester, item(2, "2026S"));
    assert_eq!(state.selected_ids(FacetKind::Semester), vec![2]);

    state.toggle(FacetKind::Semester, item(2, "2026S"));
    assert!(state.selected(FacetKind::Semester).is_empty());
}

#[test]
fn dependent_facet_needs_parent_selection() {
    let mut state = FilterState::default();
    assert!(!state.is_facet_enabled(FacetKind::CurriculumSubject));
    assert!(!state.toggle(FacetKind::CurriculumSubject, item(3, "Algebra")));
    assert!(state.selected(FacetKind::CurriculumSubject).is_empty());

    state.toggle(FacetKind::StudyProgram, item(10, "Mathematics"));
    assert!(state.toggle(FacetKind::CurriculumSubject, item(3, "Algebra")));
    assert!(state.toggle(FacetKind::StudySubject, item(30, "Linear Algebra I")));
    assert!(state.is_consistent());
}

#[test]
fn removing_last_parent_item_clears_descendants() {
    let mut state = FilterState::default();
    state.toggle(FacetKind::StudyProgram, item(10, "Mathematics"));
    state.toggle(FacetKind::CurriculumSubject, item(3, "Algebra"));
    state.toggle(FacetKind::StudySubject, item(30, "Linear Algebra I"));

    assert!(state.remove(FacetKind::StudyProgram, 10));

    assert!(state.selected(FacetKind::CurriculumSubject).is_empty());
    assert!(state.selected(FacetKind::StudySubject).is_empty());
    assert!(state.is_consistent());
}

#[test]
fn clearing_empty_facet_reports_no_change() {
    let mut state = FilterState::default();
    assert!(!state.clear_facet(FacetKind::Department));
    assert!(!state.remove(FacetKind::Department, 4));
}

#[test]
fn clear_all_filters_keeps_query() {
    let mut state = FilterState {
        free_text_query: "robotics".to_string(),
        gender_diversity_only: true,
        ..Default::default()
    };
    state.toggle(FacetKind::Teacher, item(1, "Ada"));
    state.toggle(FacetKind::StudyProgram, item(10, "Mathematics"));

    state.clear_all_filters();

    assert_eq!(state.free_text_query, "robotics");
    assert!(!state.gender_diversity_only);
    assert!(state.selected_facets.is_empty());
}

#[test]
fn active_filter_count_counts_items() {
    let mut state = FilterState::default();
    assert!(!state.has_active_filters());
    assert_eq!(state.active_filter_count(), 0);

    state.free_text_query = "   ".to_string();
    assert!(!state.has_active_filters());

    state.toggle(FacetKind::Teacher, item(1, "Ada"));
    state.toggle(FacetKind::Teacher, item(2, "Grace"));
    state.gender_diversity_only = true;
    assert!(state.has_active_filters());
    assert_eq!(state.active_filter_count(), 3);
}

#[test]
fn query_params_follow_filter_state() {
    let mut state = FilterState {
        free_text_query: "  data science ".to_string(),
        gender_diversity_only: true,
        ..Default::default()
    };
    state.toggle(FacetKind::Semester, item(5, "2025W"));
    state.toggle(FacetKind::Teacher, item(1, "Ada"));
    state.toggle(FacetKind::Teacher, item(2, "Grace"));
    state.toggle(FacetKind::CourseType, item(9, "Lecture"));
    state.toggle(FacetKind::StudyProgram, item(10, "Mathematics"));
    state.toggle(FacetKind::CurriculumSubject, item(3, "Algebra"));

    let params = state.course_query_params();
    let pairs = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect::<Vec<_>>();

    assert_eq!(
        pairs,
        vec![
            ("search", "data science"),
            ("gender_diversity", "true"),
            ("semester_format", "2025W"),
            ("teacher", "1"),
            ("teacher", "2"),
            ("type", "9"),
            ("study_program", "10"),
            ("curriculum_subject", "3"),
        ]
    );
}

#[test]
fn empty_state_has_no_query_params() {
    assert!(FilterState::default().course_query_params().is_empty());
}
