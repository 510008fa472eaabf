//! Page navigation below the course list.

use common::pagination::PageButton;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

#[component]
pub fn PaginationControls(
    current_page: ReadSignal<usize>,
    total_pages: ReadSignal<usize>,
    buttons: ReadSignal<Vec<PageButton>>,
    on_page_change: Callback<usize>,
) -> Element {
    let mut go_to_input = use_signal(String::new);
    let can_go_to_previous_page = use_memo(move || current_page() > 1);
    let can_go_to_next_page = use_memo(move || current_page() < total_pages());

    let mut submit_go_to = move || {
        if let Ok(page) = go_to_input.peek().trim().parse::<usize>() {
            on_page_change.call(page);
        }
        go_to_input.set(String::new());
    };

    if total_pages() <= 1 {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-pagination-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                flex-wrap: wrap;
                gap: 8px;
                padding: 16px 0;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| on_page_change.call(current_page() - 1),
            }
            for (index, button) in buttons().into_iter().enumerate() {
                PageStripItem { key: "{index}", button, current_page: current_page(), on_page_change }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next",
                disabled: !can_go_to_next_page(),
                onclick: move |_| on_page_change.call(current_page() + 1),
            }

            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 6px; margin-left: 16px; font-size: 14px;",
                "Go to page"
                input {
                    r#type: "number",
                    min: "1",
                    max: "{total_pages()}",
                    style: "width: 64px; height: 30px; border: 1px solid #D1D5DB; border-radius: 6px; padding: 0 6px;",
                    value: "{go_to_input.read()}",
                    oninput: move |e: Event<FormData>| go_to_input.set(e.value()),
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            submit_go_to();
                        }
                    },
                }
                button {
                    style: "height: 30px; padding: 0 10px; border-radius: 6px; border: 1px solid #D1D5DB; background: white; cursor: pointer;",
                    onclick: move |_| submit_go_to(),
                    "Go"
                }
            }
        }
    }
}

#[component]
fn PageStripItem(button: PageButton, current_page: usize, on_page_change: Callback<usize>) -> Element {
    match button {
        PageButton::Page(page) => rsx! {
            PageNumberButton { page, active: page == current_page, onclick: move |_| on_page_change.call(page) }
        },
        PageButton::Ellipsis => rsx! {
            span { style: "padding: 0 4px; color: #6B7280;", "..." }
        },
    }
}

#[component]
fn PageNumberButton(page: usize, active: bool, onclick: Callback<()>) -> Element {
    let (background, color) = if active { ("#4F46E5", "white") } else { ("white", "#111827") };
    rsx! {
        button {
            style: "
                min-width: 34px;
                height: 34px;
                border-radius: 8px;
                border: 1px solid #D1D5DB;
                background: {background};
                color: {color};
                cursor: pointer;
                font-size: 14px;
            ",
            onclick: move |_| onclick(()),
            "{page}"
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                height: 34px;
                background: white;
                border-radius: 8px;
                border: none;
                padding: 4px 10px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
                color: {btn_color};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 20px; height: 20px;" }
            "{label}"
        }
    }
}
