//! Decides when the search bar reports a new filter state to its parent.

use crate::filter_state::FilterState;

/// Remembers the last reported state. The first observation only records the state, so
/// mounting the search bar never triggers a redundant course fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChangeEmitter {
    last: Option<FilterState>,
}

impl FilterChangeEmitter {
    /// Returns the state to report, or `None` on the first call and when nothing changed.
    pub fn observe(&mut self, state: &FilterState) -> Option<FilterState> {
        match &self.last {
            None => {
                self.last = Some(state.clone());
                None
            }
            Some(last) if last == state => None,
            Some(_) => {
                self.last = Some(state.clone());
                Some(state.clone())
            }
        }
    }
}
