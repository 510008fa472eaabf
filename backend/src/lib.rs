//! Server-side access to the course catalog REST API.

pub mod config;
pub mod rest_utils;
pub mod api;
