//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod catalog_const;
pub mod facet;
pub mod filter_state;
pub mod filter_panel;
pub mod filter_change;
pub mod request_generation;
pub mod course;
pub mod course_summary;
pub mod pagination;
pub mod course_list_state;
pub mod session;
pub mod admin_entity;
pub mod form_data;
