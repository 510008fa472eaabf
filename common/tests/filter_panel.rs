//! Tests for facet option lists and the study-program cascade.

use common::facet::{FacetItem, FacetKind};
use common::filter_panel::FilterPanel;

fn item(id: u64, name: &str) -> FacetItem {
    FacetItem::new(id, name)
}

fn panel_with_program_selected() -> FilterPanel {
    let mut panel = FilterPanel::default();
    let request = panel
        .toggle(FacetKind::StudyProgram, item(10, "Mathematics"))
        .expect("selecting a program fetches its curriculum subjects");
    assert_eq!(request.kind, FacetKind::CurriculumSubject);
    assert_eq!(request.parent_ids, vec![10]);
    assert!(panel.apply_options(&request, Ok(vec![item(3, "Algebra"), item(4, "Analysis")])));
    panel
}

#[test]
fn initial_requests_cover_root_facets() {
    let mut panel = FilterPanel::default();
    let requests = panel.initial_requests();
    let kinds = requests.iter().map(|r| r.kind).collect::<Vec<_>>();
    assert_eq!(kinds, FacetKind::ROOTS.to_vec());
    assert!(requests.iter().all(|r| r.parent_ids.is_empty()));
    assert!(panel.options(FacetKind::Teacher).loading);
    assert!(!panel.options(FacetKind::CurriculumSubject).loading);
}

#[test]
fn failed_options_fetch_keeps_items_and_sets_error() {
    let mut panel = FilterPanel::default();
    let first = panel.begin_options_fetch(FacetKind::Teacher, Vec::new());
    panel.apply_options(&first, Ok(vec![item(1, "Ada")]));

    let second = panel.begin_options_fetch(FacetKind::Teacher, Vec::new());
    assert!(panel.apply_options(&second, Err("connection refused".to_string())));

    let options = panel.options(FacetKind::Teacher);
    assert_eq!(options.items, vec![item(1, "Ada")]);
    assert_eq!(options.error.as_deref(), Some("connection refused"));
    assert!(!options.loading);
}

#[test]
fn stale_options_response_is_dropped() {
    let mut panel = FilterPanel::default();
    let old = panel.begin_options_fetch(FacetKind::CurriculumSubject, vec![10]);
    let new = panel.begin_options_fetch(FacetKind::CurriculumSubject, vec![10, 11]);

    assert!(panel.apply_options(&new, Ok(vec![item(4, "Analysis")])));
    assert!(!panel.apply_options(&old, Ok(vec![item(3, "Algebra")])));
    assert_eq!(panel.options(FacetKind::CurriculumSubject).items, vec![item(4, "Analysis")]);
}

#[test]
fn clearing_study_program_empties_descendants() {
    let mut panel = panel_with_program_selected();
    let request = panel.toggle(FacetKind::CurriculumSubject, item(3, "Algebra")).expect("study subjects fetch");
    assert_eq!(request.kind, FacetKind::StudySubject);
    panel.apply_options(&request, Ok(vec![item(30, "Linear Algebra I")]));
    panel.toggle(FacetKind::StudySubject, item(30, "Linear Algebra I"));
    panel.set_option_search(FacetKind::CurriculumSubject, "alg".to_string());

    assert!(panel.clear_facet(FacetKind::StudyProgram).is_none());

    let filter = panel.filter();
    assert!(filter.selected(FacetKind::CurriculumSubject).is_empty());
    assert!(filter.selected(FacetKind::StudySubject).is_empty());
    assert!(panel.options(FacetKind::CurriculumSubject).items.is_empty());
    assert!(panel.options(FacetKind::StudySubject).items.is_empty());
    assert_eq!(panel.option_search(FacetKind::CurriculumSubject), "");
}

#[test]
fn response_arriving_after_cascade_reset_is_dropped() {
    let mut panel = FilterPanel::default();
    let request = panel.toggle(FacetKind::StudyProgram, item(10, "Mathematics")).expect("fetch");
    panel.toggle(FacetKind::StudyProgram, item(10, "Mathematics"));

    assert!(!panel.apply_options(&request, Ok(vec![item(3, "Algebra")])));
    assert!(panel.options(FacetKind::CurriculumSubject).items.is_empty());
}

#[test]
fn adding_second_program_refetches_with_both_ids() {
    let mut panel = panel_with_program_selected();
    let request = panel.toggle(FacetKind::StudyProgram, item(11, "Physics")).expect("fetch");
    assert_eq!(request.parent_ids, vec![10, 11]);
}

#[test]
fn visible_options_filter_by_search_and_keep_missing_selection() {
    let mut panel = panel_with_program_selected();
    panel.toggle(FacetKind::CurriculumSubject, item(4, "Analysis"));

    let refetch = panel.toggle(FacetKind::StudyProgram, item(11, "Physics")).expect("fetch");
    panel.apply_options(&refetch, Ok(vec![item(3, "Algebra"), item(5, "Mechanics")]));

    let rows = panel.visible_options(FacetKind::CurriculumSubject);
    let names = rows.iter().map(|r| r.item.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Algebra", "Mechanics", "Analysis"]);
    assert!(rows[2].missing && rows[2].selected);

    panel.set_option_search(FacetKind::CurriculumSubject, "ME".to_string());
    let rows = panel.visible_options(FacetKind::CurriculumSubject);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].item.name, "Mechanics");
    assert!(!rows[0].selected);
}

#[test]
fn clear_all_filters_resets_dependent_options() {
    let mut panel = panel_with_program_selected();
    panel.set_query("calculus".to_string());
    panel.set_gender_diversity_only(true);

    panel.clear_all_filters();

    assert_eq!(panel.filter().free_text_query, "calculus");
    assert!(!panel.filter().gender_diversity_only);
    assert!(panel.options(FacetKind::CurriculumSubject).items.is_empty());
}

#[test]
fn options_of_unfetched_facet_are_empty() {
    let panel = FilterPanel::default();
    let options = panel.options(FacetKind::StudySubject);
    assert!(options.items.is_empty());
    assert!(!options.loading);
    assert!(options.error.is_none());
    assert!(panel.visible_options(FacetKind::StudySubject).is_empty());
}

#[test]
fn deselecting_a_program_drops_its_curriculum_subjects_after_refetch() {
    let mut panel = FilterPanel::default();
    let request = panel.toggle(FacetKind::StudyProgram, item(10, "Mathematics")).expect("fetch");
    panel.apply_options(&request, Ok(vec![item(3, "Algebra")]));
    let request = panel.toggle(FacetKind::StudyProgram, item(11, "Physics")).expect("fetch");
    panel.apply_options(&request, Ok(vec![item(3, "Algebra"), item(50, "Mechanics")]));
    let request = panel.toggle(FacetKind::CurriculumSubject, item(50, "Mechanics")).expect("fetch");
    panel.apply_options(&request, Ok(vec![item(500, "Statics")]));
    panel.toggle(FacetKind::StudySubject, item(500, "Statics"));

    let refetch = panel.toggle(FacetKind::StudyProgram, item(11, "Physics")).expect("fetch");
    assert_eq!(refetch.parent_ids, vec![10]);
    assert!(panel.apply_options(&refetch, Ok(vec![item(3, "Algebra")])));

    assert!(panel.drop_unlisted_selections(FacetKind::CurriculumSubject).is_none());
    let filter = panel.filter();
    assert!(filter.selected(FacetKind::CurriculumSubject).is_empty());
    assert!(filter.selected(FacetKind::StudySubject).is_empty());
    assert!(panel.options(FacetKind::StudySubject).items.is_empty());
    assert_eq!(filter.course_query_params(), vec![("study_program".to_string(), "10".to_string())]);
}

#[test]
fn pruned_curriculum_subjects_refetch_study_subjects_for_the_rest() {
    let mut panel = FilterPanel::default();
    let request = panel.toggle(FacetKind::StudyProgram, item(10, "Mathematics")).expect("fetch");
    panel.apply_options(&request, Ok(vec![item(3, "Algebra"), item(4, "Analysis")]));
    panel.toggle(FacetKind::CurriculumSubject, item(3, "Algebra"));
    panel.toggle(FacetKind::CurriculumSubject, item(4, "Analysis"));

    let refetch = panel.begin_options_fetch(FacetKind::CurriculumSubject, vec![10]);
    panel.apply_options(&refetch, Ok(vec![item(3, "Algebra")]));

    let follow_up = panel
        .drop_unlisted_selections(FacetKind::CurriculumSubject)
        .expect("remaining subjects fetch their study subjects");
    assert_eq!(follow_up.kind, FacetKind::StudySubject);
    assert_eq!(follow_up.parent_ids, vec![3]);
    assert_eq!(panel.filter().selected_ids(FacetKind::CurriculumSubject), vec![3]);
}

#[test]
fn unlisted_selections_are_kept_while_loading_or_failed() {
    let mut panel = panel_with_program_selected();
    panel.toggle(FacetKind::CurriculumSubject, item(4, "Analysis"));

    panel.begin_options_fetch(FacetKind::CurriculumSubject, vec![10]);
    assert!(panel.drop_unlisted_selections(FacetKind::CurriculumSubject).is_none());

    let failed = panel.begin_options_fetch(FacetKind::CurriculumSubject, vec![10]);
    panel.apply_options(&failed, Err("timeout".to_string()));
    assert!(panel.drop_unlisted_selections(FacetKind::CurriculumSubject).is_none());
    assert_eq!(panel.filter().selected_ids(FacetKind::CurriculumSubject), vec![4]);
}
