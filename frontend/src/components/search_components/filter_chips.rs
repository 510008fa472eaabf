use common::facet::FacetKind;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::search_components::search_bar::FacetContext;

/// One removable chip per selected facet item.
#[component]
pub fn FilterChips() -> Element {
    let facet_context = use_context::<FacetContext>();
    let mut panel = facet_context.panel;
    let run_request = facet_context.run_request;

    let chips = use_memo(move || {
        let panel = panel.read();
        FacetKind::ALL
            .into_iter()
            .flat_map(|kind| panel.filter().selected(kind).iter().map(move |item| (kind, item.clone())).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    });

    if chips.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-filter-chips",
            style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
            for (kind, item) in chips.read().iter().cloned() {
                span {
                    key: "{kind:?}-{item.id}",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        background: #EEF2FF;
                        border: 1px solid #C7D2FE;
                        color: #3730A3;
                        border-radius: 1000px;
                        padding: 3px 6px 3px 12px;
                        font-size: 13px;
                    ",
                    "{kind.display_name()}: {item.name}"
                    button {
                        title: "Remove",
                        style: "display:flex; border: none; background: none; cursor: pointer; padding: 0; color: #3730A3;",
                        onclick: move |_| {
                            let request = panel.write().remove(kind, item.id);
                            if let Some(request) = request {
                                run_request.call(request);
                            }
                        },
                        Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
                    }
                }
            }
        }
    }
}
