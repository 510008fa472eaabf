use common::facet::FacetKind;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::MdArrowDropDown, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::components::{search_components::search_bar::FacetContext, suspend_boundary::LoadingIndicator};

/// Facet button; opens a dropdown with a search box and the selectable options.
#[component]
pub fn FacetDropdown(kind: FacetKind) -> Element {
    let facet_context = use_context::<FacetContext>();
    let panel = facet_context.panel;
    let mut expanded_facet = facet_context.expanded_facet;

    let enabled = use_memo(move || panel.read().filter().is_facet_enabled(kind));
    let selected_count = use_memo(move || panel.read().filter().selected(kind).len());
    let is_expanded = use_memo(move || *expanded_facet.read() == Some(kind) && enabled());
    let border_color = use_memo(move || if selected_count() > 0 { "rgba(79,70,229,0.9)" } else { "rgba(0,0,0,0.5)" });
    let text_color = if enabled() { "#111827" } else { "rgba(0,0,0,0.35)" };
    let cursor = if enabled() { "pointer" } else { "not-allowed" };
    let z_level = if is_expanded() { 1000 } else { 888 };
    let disabled_hint = kind
        .parent()
        .map(|parent| format!("Select {} first", parent.display_name().to_lowercase()))
        .unwrap_or_default();
    let button_title = if enabled() { String::new() } else { disabled_hint.clone() };

    rsx! {
        div {
            style: "position: relative;",
            button {
                disabled: !enabled(),
                title: "{button_title}",
                onclick: move |_| {
                    if *expanded_facet.peek() == Some(kind) {
                        expanded_facet.set(None);
                    } else {
                        expanded_facet.set(Some(kind));
                    }
                },
                style: "
                    cursor: {cursor};
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    border: 2px solid {border_color()};
                    border-radius: 1000px;
                    background-color: white;
                    color: {text_color};
                    height: 36px;
                    padding: 0 10px 0 14px;
                    font-size: 15px;
                    white-space: nowrap;
                    position: relative;
                    z-index: {z_level};
                ",
                "{kind.display_name()}"
                if selected_count() > 0 {
                    span {
                        style: "background: #4F46E5; color: white; border-radius: 1000px; padding: 0 7px; font-size: 12px;",
                        "{selected_count()}"
                    }
                }
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
            }
            if !enabled() {
                div {
                    style: "font-size: 11px; color: rgba(0,0,0,0.45); padding-left: 14px;",
                    "{disabled_hint}"
                }
            }

            if is_expanded() {
                div {
                    style: "
                        position: fixed;
                        top: 0px;
                        left: 0px;
                        z-index: 999;
                        background-color: rgba(0,0,0,0.05);
                        width: 100vw;
                        height: 100vh;
                    ",
                    onclick: move |_| expanded_facet.set(None),
                }
                div {
                    style: "
                        position: absolute;
                        top: 42px;
                        left: 0px;
                        min-width: 300px;
                        max-width: 420px;
                        max-height: 420px;
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 10px;
                        padding: 10px;
                        background-color: white;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        z-index: 1000;
                    ",
                    FacetOptionList { kind }
                }
            }
        }
    }
}

#[component]
fn FacetOptionList(kind: FacetKind) -> Element {
    let facet_context = use_context::<FacetContext>();
    let mut panel = facet_context.panel;
    let run_request = facet_context.run_request;

    let rows = use_memo(move || panel.read().visible_options(kind));
    let option_search = use_memo(move || panel.read().option_search(kind).to_string());
    let loading = use_memo(move || panel.read().options(kind).loading);
    let error = use_memo(move || panel.read().options(kind).error.clone());
    let has_selection = use_memo(move || !panel.read().filter().selected(kind).is_empty());

    rsx! {
        div {
            style: "display:flex; flex-direction: row; gap: 8px; align-items: center;",
            input {
                r#type: "text",
                placeholder: "Search {kind.display_name().to_lowercase()}",
                style: "flex: 1; height: 32px; border: 1px solid #D1D5DB; border-radius: 8px; padding: 0 10px;",
                value: "{option_search()}",
                oninput: move |e: Event<FormData>| panel.write().set_option_search(kind, e.value()),
            }
            button {
                disabled: !has_selection(),
                style: "height: 32px; padding: 0 10px; border-radius: 8px; border: 1px solid #D1D5DB; background: white; cursor: pointer;",
                onclick: move |_| {
                    let request = panel.write().clear_facet(kind);
                    if let Some(request) = request {
                        run_request.call(request);
                    }
                },
                "Clear All"
            }
        }

        if let Some(error) = error() {
            div {
                style: "color: #B91C1C; font-size: 13px;",
                "Failed to load options: {error}"
            }
        }
        if loading() {
            LoadingIndicator {}
        }

        div {
            style: "display:flex; flex-direction: column; overflow-y: auto; max-height: 320px;",
            if rows.read().is_empty() && !loading() {
                div { style: "color: rgba(0,0,0,0.5); padding: 6px;", "No options found." }
            }
            for (id, item, name, selected, missing) in rows.read().iter().map(|r| (r.item.id, r.item.clone(), r.item.name.clone(), r.selected, r.missing)) {
                button {
                    key: "{id}",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        border: none;
                        background: none;
                        cursor: pointer;
                        text-align: left;
                        padding: 5px 4px;
                        font-size: 14px;
                    ",
                    onclick: move |_| {
                        let request = panel.write().toggle(kind, item.clone());
                        if let Some(request) = request {
                            run_request.call(request);
                        }
                    },
                    if selected {
                        Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color:#4F46E5; flex-shrink: 0;" }
                    } else {
                        Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; flex-shrink: 0;" }
                    }
                    span { "{name}" }
                    if missing {
                        span { style: "color: rgba(0,0,0,0.45); font-size: 12px;", "(no longer listed)" }
                    }
                }
            }
        }
    }
}
