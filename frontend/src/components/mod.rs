//! Shared UI components.

pub mod navbar;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod back_button;
pub mod search_components;
pub mod admin_components;
