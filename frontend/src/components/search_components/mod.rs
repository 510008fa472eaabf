//! Search bar, facet filters and the paginated course list.

pub mod search_bar;
pub mod facet_dropdown;
pub mod filter_chips;
pub mod course_list;
pub mod course_short_card;
pub mod pagination_controls;
