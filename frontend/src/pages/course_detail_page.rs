use common::course::Course;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_social_icons::{MdPerson, MdSchool}};

use crate::{
    api::{catalog_api::get_course, error_message},
    components::{back_button::BackButton, error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    routes::Route,
};

/// Course detail page
#[component]
pub fn CourseDetailPage(id: ReadSignal<u64>) -> Element {
    rsx! {
        Title { "Course Catalog - Course" }
        div {
            id: "x-course-detail-page",
            style: "display:flex; flex-direction: column; gap: 16px; max-width: 900px; margin: 0 auto; padding: 28px 32px; box-sizing: border-box;",
            BackButton {}
            SuspendWrapper {
                CourseDetailView { id }
            }
        }
    }
}

#[component]
fn CourseDetailView(id: ReadSignal<u64>) -> Element {
    let course = use_resource(move || {
        let id = *id.read();
        get_course(id)
    })
    .suspend()?
    .cloned();
    let course = match course {
        Err(e) => {
            dioxus::logger::tracing::warn!("failed to load course {}: {}", id.peek(), e);
            return rsx! {
                ComponentErrorDisplay { error_txt: format!("Failed to fetch course: {}", error_message(&e)) }
            };
        }
        Ok(course) => course,
    };

    rsx! {
        CourseDetailCard { course }
    }
}

#[component]
fn CourseDetailCard(course: Course) -> Element {
    let semester = course.semester_label().unwrap_or_default();
    let year = course.year.map(|y| y.to_string()).unwrap_or_default();
    let enrollment = course.start_date.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        Title { "Course Catalog - {course.title}" }
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                padding: 24px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                color: #111827;
            ",
            h2 { style: "margin: 0; font-size: 28px; font-weight: 500;", "{course.title}" }
            if let Some(code) = course.course_code.as_ref() {
                div { style: "color: #6B7280; font-size: 14px;", "{code}" }
            }
            if let Some(teacher) = course.teacher.as_ref() {
                div {
                    style: "display:flex; align-items:center; gap: 6px;",
                    Icon { icon: MdPerson, style: "width: 18px; height: 18px; color: #6B7280;" }
                    Link { to: Route::TeacherPage { id: teacher.id }, "{teacher.name}" }
                }
            }
            if let Some(institute) = course.institute.as_ref() {
                div {
                    style: "display:flex; align-items:center; gap: 6px;",
                    Icon { icon: MdSchool, style: "width: 18px; height: 18px; color: #6B7280;" }
                    span { "{institute.name}" }
                    if let Some(department) = course.department.as_ref() {
                        span { style: "color: #6B7280;", "·" }
                        Link { to: Route::DepartmentPage { id: department.id }, "{department.name}" }
                    }
                }
            }
            if !course.description.is_empty() {
                p { style: "margin: 0; line-height: 1.6; white-space: pre-wrap;", "{course.description}" }
            }
            div {
                strong { "Semester: " }
                "{semester} {year}"
            }
            div {
                strong { "Course enrollment: " }
                "{enrollment}"
                p { style: "margin: 4px 0 0 0; color: #6B7280;", "Via online registration" }
            }
            if let Some(course_type) = course.course_type.as_ref() {
                div {
                    strong { "Type: " }
                    "{course_type.name}"
                }
            }
        }
    }
}
