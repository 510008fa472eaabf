//! Presentation data for one course card in the result list.

use crate::{
    catalog_const::{DESCRIPTION_EXCERPT_CHARS, ELLIPSIS},
    course::Course,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub course_id: u64,
    pub title: String,
    /// Id and name of the teacher, `None` renders the placeholder.
    pub teacher: Option<(u64, String)>,
    pub description_excerpt: String,
    pub semester_label: String,
}

impl CourseSummary {
    pub fn from_course(course: &Course) -> Self {
        Self {
            course_id: course.id,
            title: course.title.clone(),
            teacher: course.teacher.as_ref().map(|t| (t.id, t.name.clone())),
            description_excerpt: truncate_with_ellipsis(&course.description, DESCRIPTION_EXCERPT_CHARS),
            semester_label: course.semester_label().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Cuts `text` to at most `max_chars` characters and marks the cut with an ellipsis.
/// Text that already fits is returned unchanged.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}{}", text[..byte_index].trim_end(), ELLIPSIS),
        None => text.to_string(),
    }
}
