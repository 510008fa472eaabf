//! HTTP plumbing shared by the API modules.

pub mod catalog_client;
