//! Teacher and department profiles.

use common::course::{Department, Teacher};

use crate::rest_utils::catalog_client::CatalogClient;

pub async fn get_teacher(client: &CatalogClient, teacher_id: u64) -> anyhow::Result<Teacher> {
    client.get_json(&format!("/api/teachers/{teacher_id}/"), &[], None).await
}

pub async fn get_department(client: &CatalogClient, department_id: u64) -> anyhow::Result<Department> {
    client.get_json(&format!("/api/departments/{department_id}/"), &[], None).await
}
