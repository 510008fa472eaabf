//! Free-text search, facet filters and the diversity flag.
//!
//! The bar owns a [`FilterPanel`] and reports every change of its filter state through
//! `on_filter_change`, never on mount.

use common::{
    facet::FacetKind,
    filter_change::FilterChangeEmitter,
    filter_panel::{FilterPanel, OptionsRequest},
    filter_state::FilterState,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::{
    api::{catalog_api::list_facet_options, error_message},
    components::search_components::{facet_dropdown::FacetDropdown, filter_chips::FilterChips},
};

#[derive(Clone, Copy)]
pub(crate) struct FacetContext {
    pub panel: Signal<FilterPanel>,
    pub expanded_facet: Signal<Option<FacetKind>>,
    /// Performs an options fetch and stores its outcome in the panel.
    pub run_request: Callback<OptionsRequest>,
}

async fn fetch_options(request: &OptionsRequest) -> Result<Vec<common::facet::FacetItem>, String> {
    let result = list_facet_options(request.kind, request.parent_ids.clone()).await;
    result.map_err(|e| {
        dioxus::logger::tracing::warn!("failed to load {} options: {}", request.kind.display_name(), e);
        error_message(&e)
    })
}

#[component]
pub fn SearchBar(on_filter_change: Callback<FilterState>) -> Element {
    let mut panel = use_signal(FilterPanel::default);
    let mut emitter = use_signal(FilterChangeEmitter::default);
    let expanded_facet = use_signal(|| None::<FacetKind>);

    let run_request = use_callback(move |request: OptionsRequest| {
        spawn(async move {
            let mut next = Some(request);
            while let Some(request) = next.take() {
                let result = fetch_options(&request).await;
                let mut guard = panel.write();
                if guard.apply_options(&request, result) {
                    // selections of removed parents are gone from the new list
                    next = guard.drop_unlisted_selections(request.kind);
                }
            }
        });
    });

    // root facet options, loaded together once
    use_future(move || async move {
        let requests = panel.write().initial_requests();
        let results = futures_util::future::join_all(requests.iter().map(fetch_options)).await;
        let mut guard = panel.write();
        for (request, result) in requests.iter().zip(results) {
            guard.apply_options(request, result);
        }
    });

    use_effect(move || {
        let state = panel.read().filter().clone();
        let changed = emitter.write().observe(&state);
        if let Some(changed) = changed {
            dioxus::logger::tracing::info!("filters changed: {} active", changed.active_filter_count());
            on_filter_change.call(changed);
        }
    });

    use_context_provider(|| FacetContext { panel, expanded_facet, run_request });

    let query = use_memo(move || panel.read().filter().free_text_query.clone());
    let gender_diversity_only = use_memo(move || panel.read().filter().gender_diversity_only);
    let active_filter_count = use_memo(move || {
        let filter = panel.read();
        let filter = filter.filter();
        filter.active_filter_count() - usize::from(!filter.free_text_query.trim().is_empty())
    });
    let filter_count = active_filter_count();

    rsx! {
        div {
            id: "x-search-bar",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 100%;
                padding: 18px;
                background: white;
                border-radius: 16px;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",

            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 16px; flex-wrap: wrap;",
                div {
                    id: "x-search-input-box",
                    style: "
                        display:flex;
                        align-items:center;
                        gap: 10px;
                        background-color: white;
                        border-radius: 9999px;
                        padding: 10px 14px;
                        height: 44px;
                        border: 1px solid rgba(101, 101, 101, 0.8);
                        flex: 1;
                        min-width: 280px;
                    ",
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                    input {
                        r#type: "text",
                        placeholder: "Search courses by title, code or description",
                        style: "
                            flex:1;
                            border: none;
                            outline: none;
                            background: transparent;
                            color: #111827;
                            font-size: 16px;
                        ",
                        value: "{query()}",
                        oninput: move |e: Event<FormData>| panel.write().set_query(e.value()),
                    }
                }

                button {
                    style: "display:flex; align-items:center; gap: 6px; border: none; background: none; cursor: pointer; font-size: 15px;",
                    onclick: move |_| {
                        let enabled = !gender_diversity_only();
                        panel.write().set_gender_diversity_only(enabled);
                    },
                    if gender_diversity_only() {
                        Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color:#4F46E5;" }
                    } else {
                        Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px;" }
                    }
                    "Gender & diversity only"
                }

                button {
                    disabled: filter_count == 0,
                    style: "
                        height: 34px;
                        padding: 0 12px;
                        font-size: 14px;
                        border-radius: 8px;
                        background: white;
                        color: #111827;
                        border: 1px solid #D1D5DB;
                        cursor: pointer;
                    ",
                    onclick: move |_| panel.write().clear_all_filters(),
                    if filter_count > 0 {
                        "Clear All Filters ({filter_count})"
                    } else {
                        "Clear All Filters"
                    }
                }
            }

            div {
                id: "x-facet-button-strip",
                style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 10px; align-items: center;",
                for kind in FacetKind::ALL {
                    FacetDropdown { key: "{kind:?}", kind }
                }
            }

            FilterChips {}
        }
    }
}
