use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Course Catalog - Not Found" }
        div {
            style: "display:flex; flex-direction: column; align-items: center; gap: 12px; padding: 48px;",
            h1 { style: "margin: 0; font-size: 36px; font-weight: 500;", "404 - Not Found" }
            p { style: "margin: 0; color: #6B7280;", "Page not found: /{path}" }
            Link { to: Route::HomePage {}, "Back to the course catalog" }
        }
    }
}
