use common::filter_state::FilterState;
use dioxus::prelude::*;

use crate::components::search_components::{course_list::CourseList, search_bar::SearchBar};

/// Home page: the search bar above the course list.
#[component]
pub fn HomePage() -> Element {
    let mut filter = use_signal(FilterState::default);

    rsx! {
        Title { "Course Catalog" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                max-width: 1100px;
                margin: 0 auto;
                padding: 28px 32px;
                box-sizing: border-box;
            ",
            SearchBar {
                on_filter_change: move |changed: FilterState| filter.set(changed),
            }
            CourseList { filter }
        }
    }
}
