use dioxus::prelude::*;

use crate::{
    api::{catalog_api::get_department, error_message},
    components::{back_button::BackButton, error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
};

#[component]
pub fn DepartmentPage(id: ReadSignal<u64>) -> Element {
    rsx! {
        Title { "Course Catalog - Department" }
        div {
            id: "x-department-page",
            style: "display:flex; flex-direction: column; gap: 16px; max-width: 900px; margin: 0 auto; padding: 28px 32px; box-sizing: border-box;",
            BackButton {}
            SuspendWrapper {
                DepartmentView { id }
            }
        }
    }
}

#[component]
fn DepartmentView(id: ReadSignal<u64>) -> Element {
    let department = use_resource(move || {
        let id = *id.read();
        get_department(id)
    })
    .suspend()?
    .cloned();
    let department = match department {
        Err(e) => return rsx! {
            ComponentErrorDisplay { error_txt: format!("Failed to fetch department: {}", error_message(&e)) }
        },
        Ok(department) => department,
    };

    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 12px; padding: 24px; background: white; border: 1px solid #E5E7EB; border-radius: 12px;",
            h1 { style: "margin: 0; font-size: 30px; font-weight: 500;", "{department.name}" }
            if let Some(institute) = department.institute.as_ref() {
                div {
                    strong { "Institute: " }
                    "{institute.name}"
                }
            }
        }
    }
}
