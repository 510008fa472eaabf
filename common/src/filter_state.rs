//! The complete snapshot of the user's search and filter inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::facet::{FacetItem, FacetKind};

/// Search text, facet selections and the gender/diversity flag.
///
/// Facets without a selection have no entry in `selected_facets`, so two states with the
/// same effective selection always compare equal. Dependent facets only hold a selection
/// while their parent facet does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub free_text_query: String,
    pub selected_facets: BTreeMap<FacetKind, Vec<FacetItem>>,
    pub gender_diversity_only: bool,
}

impl FilterState {
    pub fn selected(&self, kind: FacetKind) -> &[FacetItem] {
        self.selected_facets.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_ids(&self, kind: FacetKind) -> Vec<u64> {
        self.selected(kind).iter().map(|item| item.id).collect()
    }

    pub fn is_selected(&self, kind: FacetKind, id: u64) -> bool {
        self.selected(kind).iter().any(|item| item.id == id)
    }

    /// Whether the facet may currently take a selection.
    pub fn is_facet_enabled(&self, kind: FacetKind) -> bool {
        match kind.parent() {
            Some(parent) => !self.selected(parent).is_empty(),
            None => true,
        }
    }

    /// Adds the item if absent, removes it if present. Single-select facets replace their
    /// selection instead. Returns `false` when nothing changed, which is the case for a
    /// dependent facet whose parent has no selection.
    pub fn toggle(&mut self, kind: FacetKind, item: FacetItem) -> bool {
        if !self.is_facet_enabled(kind) {
            return false;
        }
        let already_selected = self.is_selected(kind, item.id);
        let entry = self.selected_facets.entry(kind).or_default();
        if kind.is_single_select() {
            entry.clear();
            if !already_selected {
                entry.push(item);
            }
        } else if already_selected {
            entry.retain(|selected| selected.id != item.id);
        } else {
            entry.push(item);
        }
        self.drop_orphaned_selections();
        true
    }

    /// Removes one item from a facet. Returns `false` if it was not selected.
    pub fn remove(&mut self, kind: FacetKind, id: u64) -> bool {
        if !self.is_selected(kind, id) {
            return false;
        }
        if let Some(entry) = self.selected_facets.get_mut(&kind) {
            entry.retain(|selected| selected.id != id);
        }
        self.drop_orphaned_selections();
        true
    }

    /// Empties one facet along with every facet depending on it.
    pub fn clear_facet(&mut self, kind: FacetKind) -> bool {
        let removed = self.selected_facets.remove(&kind).is_some();
        self.drop_orphaned_selections();
        removed
    }

    /// Resets every facet and the gender/diversity flag. The search text is kept.
    pub fn clear_all_filters(&mut self) {
        self.selected_facets.clear();
        self.gender_diversity_only = false;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.free_text_query.trim().is_empty()
            || self.gender_diversity_only
            || self.selected_facets.values().any(|items| !items.is_empty())
    }

    /// Number of active filters, counting each selected facet item once.
    pub fn active_filter_count(&self) -> usize {
        let query = usize::from(!self.free_text_query.trim().is_empty());
        let flag = usize::from(self.gender_diversity_only);
        query + flag + self.selected_facets.values().map(Vec::len).sum::<usize>()
    }

    /// Query string pairs for `GET /api/courses/`. Multi-select facets become repeated id
    /// parameters; the semester travels by name as `semester_format`.
    pub fn course_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        let query = self.free_text_query.trim();
        if !query.is_empty() {
            params.push(("search".to_string(), query.to_string()));
        }
        if self.gender_diversity_only {
            params.push(("gender_diversity".to_string(), "true".to_string()));
        }
        if let Some(semester) = self.selected(FacetKind::Semester).first() {
            params.push(("semester_format".to_string(), semester.name.clone()));
        }
        for kind in FacetKind::ALL {
            let Some(param) = kind.id_query_param() else { continue };
            for item in self.selected(kind) {
                params.push((param.to_string(), item.id.to_string()));
            }
        }
        params
    }

    /// Checks the cascade invariant: no dependent selection without a parent selection.
    pub fn is_consistent(&self) -> bool {
        FacetKind::ALL.iter().all(|kind| {
            self.selected(*kind).is_empty() || self.is_facet_enabled(*kind)
        }) && self.selected_facets.values().all(|items| !items.is_empty())
    }

    fn drop_orphaned_selections(&mut self) {
        self.selected_facets.retain(|_, items| !items.is_empty());
        // parents come before their dependents in FacetKind::ALL
        for kind in FacetKind::ALL {
            if !self.is_facet_enabled(kind) {
                self.selected_facets.remove(&kind);
            }
        }
    }
}
