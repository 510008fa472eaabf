//! State behind the search bar: the filter state plus the option lists of every facet.

use std::collections::BTreeMap;

use crate::{
    facet::{FacetItem, FacetKind},
    filter_state::FilterState,
    request_generation::{RequestGeneration, RequestTicket},
};

/// Options of one facet as last fetched from the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacetOptions {
    pub items: Vec<FacetItem>,
    pub loading: bool,
    pub error: Option<String>,
    generation: RequestGeneration,
}

static NO_OPTIONS: FacetOptions = FacetOptions {
    items: Vec::new(),
    loading: false,
    error: None,
    generation: RequestGeneration::new(),
};

/// A fetch of facet options the panel wants performed.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsRequest {
    pub kind: FacetKind,
    /// Ids of the selected parent items; empty for root facets.
    pub parent_ids: Vec<u64>,
    pub ticket: RequestTicket,
}

/// One row of a facet dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetOptionRow {
    pub item: FacetItem,
    pub selected: bool,
    /// Selected, but absent from the current option list.
    pub missing: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPanel {
    filter: FilterState,
    options: BTreeMap<FacetKind, FacetOptions>,
    option_search: BTreeMap<FacetKind, String>,
}

impl FilterPanel {
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn options(&self, kind: FacetKind) -> &FacetOptions {
        self.options.get(&kind).unwrap_or(&NO_OPTIONS)
    }

    pub fn option_search(&self, kind: FacetKind) -> &str {
        self.option_search.get(&kind).map(String::as_str).unwrap_or("")
    }

    pub fn set_option_search(&mut self, kind: FacetKind, text: String) {
        if text.is_empty() {
            self.option_search.remove(&kind);
        } else {
            self.option_search.insert(kind, text);
        }
    }

    /// Requests for the facets that are loaded once when the panel mounts.
    pub fn initial_requests(&mut self) -> Vec<OptionsRequest> {
        FacetKind::ROOTS
            .into_iter()
            .map(|kind| self.begin_options_fetch(kind, Vec::new()))
            .collect()
    }

    pub fn begin_options_fetch(&mut self, kind: FacetKind, parent_ids: Vec<u64>) -> OptionsRequest {
        let options = self.options.entry(kind).or_default();
        options.loading = true;
        let ticket = options.generation.begin();
        OptionsRequest { kind, parent_ids, ticket }
    }

    /// Stores the outcome of an options fetch. Responses to superseded requests are
    /// dropped and `false` is returned. A failure keeps the previous items.
    pub fn apply_options(&mut self, request: &OptionsRequest, result: Result<Vec<FacetItem>, String>) -> bool {
        let options = self.options.entry(request.kind).or_default();
        if !options.generation.is_current(request.ticket) {
            return false;
        }
        options.loading = false;
        match result {
            Ok(items) => {
                options.items = items;
                options.error = None;
            }
            Err(e) => options.error = Some(e),
        }
        true
    }

    /// Deselects items of a dependent facet that its freshly fetched option list no longer
    /// offers, then applies the cascade below it. Call after a successful [`Self::apply_options`].
    pub fn drop_unlisted_selections(&mut self, kind: FacetKind) -> Option<OptionsRequest> {
        kind.parent()?;
        let options = self.options.get(&kind)?;
        if options.loading || options.error.is_some() {
            return None;
        }
        let unlisted = self
            .filter
            .selected(kind)
            .iter()
            .filter(|selected| !options.items.contains(selected))
            .map(|selected| selected.id)
            .collect::<Vec<_>>();
        if unlisted.is_empty() {
            return None;
        }
        for id in unlisted {
            self.filter.remove(kind, id);
        }
        self.cascade_from(kind)
    }

    /// Dropdown rows: options matching the facet's search box, followed by selected items
    /// the option list no longer contains.
    pub fn visible_options(&self, kind: FacetKind) -> Vec<FacetOptionRow> {
        let search = self.option_search(kind);
        let items = &self.options(kind).items;
        let mut rows = items
            .iter()
            .filter(|item| item.matches_search(search))
            .map(|item| FacetOptionRow {
                item: item.clone(),
                selected: self.filter.is_selected(kind, item.id),
                missing: false,
            })
            .collect::<Vec<_>>();
        for selected in self.filter.selected(kind) {
            if !items.contains(selected) && selected.matches_search(search) {
                rows.push(FacetOptionRow { item: selected.clone(), selected: true, missing: true });
            }
        }
        rows
    }

    /// Toggles an item and applies the cascade. A returned request must be performed to
    /// refresh the dependent facet's options.
    pub fn toggle(&mut self, kind: FacetKind, item: FacetItem) -> Option<OptionsRequest> {
        if !self.filter.toggle(kind, item) {
            return None;
        }
        self.cascade_from(kind)
    }

    pub fn remove(&mut self, kind: FacetKind, id: u64) -> Option<OptionsRequest> {
        if !self.filter.remove(kind, id) {
            return None;
        }
        self.cascade_from(kind)
    }

    pub fn clear_facet(&mut self, kind: FacetKind) -> Option<OptionsRequest> {
        if !self.filter.clear_facet(kind) {
            return None;
        }
        self.cascade_from(kind)
    }

    pub fn clear_all_filters(&mut self) {
        self.filter.clear_all_filters();
        self.reset_options_below(FacetKind::StudyProgram);
    }

    pub fn set_query(&mut self, query: String) {
        self.filter.free_text_query = query;
    }

    pub fn set_gender_diversity_only(&mut self, enabled: bool) {
        self.filter.gender_diversity_only = enabled;
    }

    fn cascade_from(&mut self, kind: FacetKind) -> Option<OptionsRequest> {
        let dependent = kind.dependent()?;
        let parent_ids = self.filter.selected_ids(kind);
        if parent_ids.is_empty() {
            self.reset_options_below(kind);
            None
        } else {
            Some(self.begin_options_fetch(dependent, parent_ids))
        }
    }

    fn reset_options_below(&mut self, kind: FacetKind) {
        let mut next = kind.dependent();
        while let Some(dependent) = next {
            let options = self.options.entry(dependent).or_default();
            options.items.clear();
            options.error = None;
            options.loading = false;
            options.generation.invalidate();
            self.option_search.remove(&dependent);
            next = dependent.dependent();
        }
    }
}
