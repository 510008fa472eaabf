//! Fetched course results, the current page and the fetch status of the course list.

use crate::{
    catalog_const::PAGE_SIZE,
    course::Course,
    pagination::{clamp_page, page_buttons, page_item_range, page_slice, total_pages, PageButton},
    request_generation::{RequestGeneration, RequestTicket},
};

/// Why the course list is fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchReason {
    /// First fetch after the list mounted.
    Initial,
    /// The filter state changed; the fetched set replaces the old one.
    FilterChanged,
    /// The user asked to repeat the last fetch for unchanged filters.
    Retry,
}

/// Which message to show when there is nothing to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoCoursesAvailable,
    /// Filters are active and matched nothing; carries the unfiltered course count when known.
    NoMatch { available: Option<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingFetch {
    ticket: RequestTicket,
    reason: FetchReason,
    filters_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseListState {
    courses: Vec<Course>,
    current_page: usize,
    loading: bool,
    error: Option<String>,
    filters_active: bool,
    unfiltered_total: Option<usize>,
    generation: RequestGeneration,
    pending: Option<PendingFetch>,
}

impl Default for CourseListState {
    fn default() -> Self {
        Self {
            courses: Vec::new(),
            current_page: 1,
            loading: false,
            error: None,
            filters_active: false,
            unfiltered_total: None,
            generation: RequestGeneration::new(),
            pending: None,
        }
    }
}

impl CourseListState {
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether any fetch was ever started.
    pub fn has_fetched(&self) -> bool {
        self.pending.is_some()
    }

    /// Marks a new fetch as in flight. Any earlier fetch becomes stale.
    pub fn begin_fetch(&mut self, reason: FetchReason, filters_active: bool) -> RequestTicket {
        let ticket = self.generation.begin();
        self.loading = true;
        if reason == FetchReason::FilterChanged {
            self.current_page = 1;
        }
        self.pending = Some(PendingFetch { ticket, reason, filters_active });
        ticket
    }

    /// Applies a fetch outcome. Returns `false` for responses of superseded fetches.
    ///
    /// A failed retry keeps the courses already shown; a failed fetch for new filters
    /// clears them, as they no longer describe the filters on screen.
    pub fn apply_response(&mut self, ticket: RequestTicket, result: Result<Vec<Course>, String>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        let Some(pending) = self.pending.filter(|p| p.ticket == ticket) else {
            return false;
        };
        // a ticket is answered once
        self.generation.invalidate();
        self.loading = false;
        match result {
            Ok(courses) => {
                if !pending.filters_active {
                    self.unfiltered_total = Some(courses.len());
                }
                self.courses = courses;
                self.filters_active = pending.filters_active;
                self.error = None;
                self.current_page = match pending.reason {
                    FetchReason::Retry => clamp_page(self.current_page, self.total_pages()),
                    FetchReason::Initial | FetchReason::FilterChanged => 1,
                };
            }
            Err(e) => {
                self.error = Some(format!("Failed to fetch courses: {e}"));
                if pending.reason != FetchReason::Retry {
                    self.courses.clear();
                    self.filters_active = pending.filters_active;
                    self.current_page = 1;
                }
            }
        }
        true
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.courses.len(), PAGE_SIZE)
    }

    /// Moves to `page`, clamped to the existing pages. Returns the page now shown.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.current_page = clamp_page(page, self.total_pages());
        self.current_page
    }

    pub fn visible_courses(&self) -> &[Course] {
        page_slice(&self.courses, self.current_page, PAGE_SIZE)
    }

    pub fn page_buttons(&self) -> Vec<PageButton> {
        page_buttons(self.current_page, self.total_pages())
    }

    /// 1-based bounds of the visible courses within the whole result set.
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        page_item_range(self.courses.len(), self.current_page, PAGE_SIZE)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.loading || self.error.is_some() || !self.courses.is_empty() || !self.has_fetched() {
            return None;
        }
        if self.filters_active {
            Some(EmptyState::NoMatch { available: self.unfiltered_total })
        } else {
            Some(EmptyState::NoCoursesAvailable)
        }
    }
}
