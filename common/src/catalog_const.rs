//! Constants shared by the course list, pagination and card rendering.

/// Number of courses shown on one page of the course list.
pub const PAGE_SIZE: usize = 20;

/// Up to this many pages every page gets its own button.
pub const MAX_VISIBLE_PAGE_BUTTONS: usize = 5;

/// Characters of the course description shown on a summary card.
pub const DESCRIPTION_EXCERPT_CHARS: usize = 300;

pub const ELLIPSIS: &str = "...";

pub const NO_TEACHER_PLACEHOLDER: &str = "No teacher assigned";
