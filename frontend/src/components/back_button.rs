use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowBack};

/// Returns to the previous history entry.
#[component]
pub fn BackButton() -> Element {
    rsx! {
        button {
            style: "
                display:flex;
                align-items:center;
                gap: 4px;
                width: fit-content;
                padding: 6px 12px;
                border-radius: 8px;
                border: 1px solid #D1D5DB;
                background: white;
                color: #374151;
                cursor: pointer;
            ",
            onclick: move |_| navigator().go_back(),
            Icon { icon: MdArrowBack, style: "width: 16px; height: 16px;" }
            "Back"
        }
    }
}
