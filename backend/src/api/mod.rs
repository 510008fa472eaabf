//! Catalog API operations and module exports.

pub mod courses;
pub mod facets;
pub mod directory;
pub mod admin;
