//! The fetched course results, one page at a time.

use common::{
    course_list_state::{CourseListState, EmptyState, FetchReason},
    filter_state::FilterState,
};
use dioxus::prelude::*;

use crate::{
    api::{catalog_api::search_courses, error_message},
    components::{
        error_boundary::{ComponentErrorDisplay, RetryButton},
        search_components::{course_short_card::CourseShortCard, pagination_controls::PaginationControls},
        suspend_boundary::LoadingIndicator,
    },
};

#[component]
pub fn CourseList(filter: ReadSignal<FilterState>) -> Element {
    let mut list = use_signal(CourseListState::default);
    let mut list_top = use_signal(|| None::<Event<MountedData>>);

    let start_fetch = use_callback(move |reason: FetchReason| {
        let filter = filter.peek().clone();
        let ticket = list.write().begin_fetch(reason, filter.has_active_filters());
        spawn(async move {
            let result = search_courses(filter).await.map_err(|e| {
                dioxus::logger::tracing::error!("course fetch failed: {}", e);
                error_message(&e)
            });
            if !list.write().apply_response(ticket, result) {
                dioxus::logger::tracing::debug!("dropped stale course response {}", ticket.value());
            }
        });
    });

    // mount and every reported filter change
    use_effect(move || {
        let _ = filter.read();
        let reason = if list.peek().has_fetched() { FetchReason::FilterChanged } else { FetchReason::Initial };
        start_fetch.call(reason);
    });

    let go_to_page = use_callback(move |page: usize| {
        list.write().go_to_page(page);
        if let Some(top) = list_top.peek().as_ref() {
            let _x = top.scroll_to_with_options(ScrollToOptions {
                behavior: ScrollBehavior::Smooth,
                vertical: ScrollLogicalPosition::Start,
                horizontal: ScrollLogicalPosition::Nearest,
            });
        }
    });

    let current_page = use_memo(move || list.read().current_page());
    let total_pages = use_memo(move || list.read().total_pages());
    let buttons = use_memo(move || list.read().page_buttons());

    let state = list.read();
    let query = filter.read().free_text_query.trim().to_string();
    let course_count = state.courses().len();
    let page_label = format!("(Page {} of {})", state.current_page(), state.total_pages());

    rsx! {
        div {
            id: "x-course-list",
            style: "display:flex; flex-direction: column; gap: 12px; width: 100%;",
            onmounted: move |e| list_top.set(Some(e)),

            if let Some((first, last)) = state.visible_range() {
                div {
                    style: "font-size: 15px; color: #374151;",
                    "Showing {first}–{last} of {course_count} courses"
                    if !query.is_empty() {
                        " for \"{query}\""
                    }
                    span { style: "color: #6B7280;", " {page_label}" }
                }
            }

            if state.is_loading() {
                LoadingIndicator { label: "Loading courses..." }
            }

            if let Some(error) = state.error() {
                ComponentErrorDisplay {
                    title: "Could not load courses",
                    error_txt: error.to_string(),
                    RetryButton { onclick: move |_| start_fetch.call(FetchReason::Retry) }
                }
            }

            if let Some(empty) = state.empty_state() {
                EmptyMessage { empty }
            }

            for course in state.visible_courses().iter().cloned() {
                CourseShortCard { key: "{course.id}", course }
            }

            PaginationControls {
                current_page,
                total_pages,
                buttons,
                on_page_change: go_to_page,
            }
        }
    }
}

#[component]
fn EmptyMessage(empty: EmptyState) -> Element {
    let (text, hint) = match empty {
        EmptyState::NoCoursesAvailable => ("No courses available.", None),
        EmptyState::NoMatch { available } => (
            "No courses match your current filters.",
            Some(match available {
                Some(n) => format!("{n} courses are available without filters. Try removing some filters."),
                None => "Try removing some filters.".to_string(),
            }),
        ),
    };
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                align-items: center;
                gap: 6px;
                padding: 36px;
                background: white;
                border: 1px dashed #D1D5DB;
                border-radius: 12px;
                color: #374151;
            ",
            div { style: "font-size: 18px; font-weight: 500;", "{text}" }
            if let Some(hint) = hint {
                div { style: "font-size: 14px; color: #6B7280;", "{hint}" }
            }
        }
    }
}
