use common::course::Teacher;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdEmail};

use crate::{
    api::{catalog_api::get_teacher, error_message},
    components::{back_button::BackButton, error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
};

/// Teacher profile page
#[component]
pub fn TeacherPage(id: ReadSignal<u64>) -> Element {
    rsx! {
        Title { "Course Catalog - Teacher" }
        div {
            id: "x-teacher-page",
            style: "display:flex; flex-direction: column; gap: 16px; max-width: 900px; margin: 0 auto; padding: 28px 32px; box-sizing: border-box;",
            BackButton {}
            SuspendWrapper {
                TeacherView { id }
            }
        }
    }
}

#[component]
fn TeacherView(id: ReadSignal<u64>) -> Element {
    let teacher = use_resource(move || {
        let id = *id.read();
        get_teacher(id)
    })
    .suspend()?
    .cloned();
    let teacher = match teacher {
        Err(e) => return rsx! {
            ComponentErrorDisplay { error_txt: format!("Failed to fetch teacher: {}", error_message(&e)) }
        },
        Ok(teacher) => teacher,
    };

    rsx! {
        TeacherProfile { teacher }
    }
}

#[component]
fn TeacherProfile(teacher: Teacher) -> Element {
    let mailto = format!("mailto:{}", teacher.email);
    rsx! {
        Title { "Course Catalog - {teacher.name}" }
        div {
            style: "display:flex; flex-direction: column; gap: 12px; padding: 24px; background: white; border: 1px solid #E5E7EB; border-radius: 12px;",
            h1 { style: "margin: 0; font-size: 30px; font-weight: 500;", "{teacher.name}" }
            div {
                strong { "Email: " }
                a { href: "{mailto}", "{teacher.email}" }
            }
            div {
                strong { "Subject: " }
                "{teacher.subject}"
            }
            a {
                href: "{mailto}",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 6px;
                    width: fit-content;
                    padding: 8px 16px;
                    border-radius: 8px;
                    background: #4F46E5;
                    color: white;
                    text-decoration: none;
                ",
                Icon { icon: MdEmail, style: "width: 18px; height: 18px;" }
                "Contact Teacher"
            }
        }
    }
}
