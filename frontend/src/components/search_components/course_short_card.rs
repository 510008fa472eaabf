use common::{catalog_const::NO_TEACHER_PLACEHOLDER, course::Course, course_summary::CourseSummary};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_social_icons::MdPerson};

use crate::routes::Route;

#[component]
pub fn CourseShortCard(course: ReadSignal<Course>) -> Element {
    let summary = use_memo(move || CourseSummary::from_course(&course.read()));
    let summary = summary.read().clone();

    rsx! {
        div {
            class: "catalog-hover-shadow",
            style: "
                display:flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px 18px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
            ",
            Link {
                to: Route::CourseDetailPage { id: summary.course_id },
                span { style: "font-size: 20px; font-weight: 500;", "{summary.title}" }
            }
            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 6px; font-size: 14px; color: #374151;",
                Icon { icon: MdPerson, style: "width: 18px; height: 18px; color: #6B7280;" }
                if let Some((teacher_id, teacher_name)) = summary.teacher.clone() {
                    Link { to: Route::TeacherPage { id: teacher_id }, "{teacher_name}" }
                } else {
                    span { style: "color: #9CA3AF;", "{NO_TEACHER_PLACEHOLDER}" }
                }
            }
            if !summary.description_excerpt.is_empty() {
                p {
                    style: "margin: 0; font-size: 15px; line-height: 1.5; color: #1F2937;",
                    "{summary.description_excerpt}"
                }
            }
            div {
                style: "font-size: 13px; color: #6B7280;",
                "Semester: {summary.semester_label}"
            }
        }
    }
}
