//! Tests for filter change emission.

use common::facet::{FacetItem, FacetKind};
use common::filter_change::FilterChangeEmitter;
use common::filter_panel::FilterPanel;

#[test]
fn mount_emits_nothing_and_each_action_emits_once() {
    let mut panel = FilterPanel::default();
    let mut emitter = FilterChangeEmitter::default();
    let mut emitted = Vec::new();

    emitted.extend(emitter.observe(panel.filter()));
    assert!(emitted.is_empty());

    panel.toggle(FacetKind::Teacher, FacetItem::new(1, "Ada"));
    emitted.extend(emitter.observe(panel.filter()));
    // a re-render without a state change
    emitted.extend(emitter.observe(panel.filter()));
    assert_eq!(emitted.len(), 1);

    panel.set_query("ml".to_string());
    emitted.extend(emitter.observe(panel.filter()));
    assert_eq!(emitted.len(), 2);
    assert_eq!(emitted[1].free_text_query, "ml");
}

#[test]
fn no_op_action_emits_nothing() {
    let mut panel = FilterPanel::default();
    let mut emitter = FilterChangeEmitter::default();
    emitter.observe(panel.filter());

    panel.clear_facet(FacetKind::Department);
    panel.clear_all_filters();
    assert!(emitter.observe(panel.filter()).is_none());
}

#[test]
fn cascade_counts_as_one_change() {
    let mut panel = FilterPanel::default();
    panel.toggle(FacetKind::StudyProgram, FacetItem::new(10, "Mathematics"));
    panel.toggle(FacetKind::CurriculumSubject, FacetItem::new(3, "Algebra"));
    let mut emitter = FilterChangeEmitter::default();
    emitter.observe(panel.filter());

    panel.clear_facet(FacetKind::StudyProgram);
    let emitted = emitter.observe(panel.filter()).expect("one emission");
    assert!(emitted.selected_facets.is_empty());
    assert!(emitter.observe(panel.filter()).is_none());
}
