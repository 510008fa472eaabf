use dioxus::prelude::*;

const FEATURES: &[&str] = &[
    "Search courses by title, description or teacher",
    "Cascading filters: institute, department, study program, curriculum and study subject",
    "Filters for teachers, course types and semesters",
    "Gender and diversity course filter",
    "Paginated course listings with course, teacher and department pages",
    "Admin area with token-based sign-in",
    "Create, edit and delete courses, teachers, course types, institutes, departments and study programs",
];

const STACK: &[(&str, &str)] = &[
    ("Frontend", "Dioxus"),
    ("Server functions", "Dioxus fullstack + axum"),
    ("HTTP client", "reqwest"),
    ("Catalog data", "REST API"),
];

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Title { "Course Catalog - About" }
        div {
            id: "x-about-page",
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                max-width: 900px;
                margin: 0 auto;
                padding: 32px;
                box-sizing: border-box;
                color: #111827;
            ",
            h1 { style: "margin: 0; font-size: 36px; font-weight: 500;", "About the Course Catalog" }
            AboutSection {
                title: "Overview",
                p {
                    "A catalog for browsing university courses with combinable filters, "
                    "plus an administration area for maintaining the catalog data."
                }
                p {
                    em { "Intended for development, testing and staging. Do not use it as a production system." }
                }
            }
            AboutSection {
                title: "Technology",
                div {
                    style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 12px;",
                    for (name, value) in STACK.iter() {
                        div {
                            key: "{name}",
                            style: "padding: 12px 16px; border: 1px solid #E5E7EB; border-radius: 10px; background: white; min-width: 160px;",
                            strong { "{name}" }
                            br {}
                            "{value}"
                        }
                    }
                }
            }
            AboutSection {
                title: "Features",
                ul {
                    style: "margin: 0; padding-left: 20px; display:flex; flex-direction: column; gap: 6px;",
                    for feature in FEATURES.iter() {
                        li { key: "{feature}", "{feature}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AboutSection(title: String, children: Element) -> Element {
    rsx! {
        section {
            style: "display:flex; flex-direction: column; gap: 10px;",
            h2 { style: "margin: 0; font-size: 24px; font-weight: 500; color: #4F46E5;", "{title}" }
            {children}
        }
    }
}
