//! Course search and course detail.

use common::{course::Course, filter_state::FilterState};

use crate::rest_utils::catalog_client::CatalogClient;

/// Every course matching `filter`. The API filters server-side and does not paginate.
pub async fn search_courses(client: &CatalogClient, filter: &FilterState) -> anyhow::Result<Vec<Course>> {
    let query = filter.course_query_params();
    let courses: Vec<Course> = client.get_json("/api/courses/", &query, None).await?;
    tracing::debug!("search_courses: {} params -> {} courses", query.len(), courses.len());
    Ok(courses)
}

pub async fn get_course(client: &CatalogClient, course_id: u64) -> anyhow::Result<Course> {
    client.get_json(&format!("/api/courses/{course_id}/"), &[], None).await
}
