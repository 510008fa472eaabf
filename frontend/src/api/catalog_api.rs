//! Client API calls for the public catalog.

use common::{
    course::{Course, Department, Teacher},
    facet::{FacetItem, FacetKind},
    filter_state::FilterState,
};
use dioxus::prelude::*;

#[cfg(feature = "server")]
use crate::api::server_error;
#[cfg(feature = "server")]
use backend::rest_utils::catalog_client::get_catalog_client;

#[server]
pub async fn search_courses(filter: FilterState) -> Result<Vec<Course>, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    backend::api::courses::search_courses(&client, &filter).await.map_err(server_error)
}

#[server]
pub async fn list_facet_options(kind: FacetKind, parent_ids: Vec<u64>) -> Result<Vec<FacetItem>, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    backend::api::facets::list_facet_options(&client, kind, &parent_ids).await.map_err(server_error)
}

#[server]
pub async fn get_course(course_id: u64) -> Result<Course, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    backend::api::courses::get_course(&client, course_id).await.map_err(server_error)
}

#[server]
pub async fn get_teacher(teacher_id: u64) -> Result<Teacher, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    backend::api::directory::get_teacher(&client, teacher_id).await.map_err(server_error)
}

#[server]
pub async fn get_department(department_id: u64) -> Result<Department, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    backend::api::directory::get_department(&client, department_id).await.map_err(server_error)
}
