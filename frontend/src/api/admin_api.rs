//! Client API calls for the admin area. Every call but the login carries the access token.

use common::{
    admin_entity::{DashboardStats, EntityKind},
    session::{AdminStatus, LoginCredentials, LoginResponse},
};
use dioxus::prelude::*;
use serde_json::{Map, Value};

#[cfg(feature = "server")]
use crate::api::server_error;
#[cfg(feature = "server")]
use backend::{api::admin, rest_utils::catalog_client::get_catalog_client};

#[server]
pub async fn admin_login(credentials: LoginCredentials) -> Result<LoginResponse, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    admin::admin_login(&client, &credentials).await.map_err(server_error)
}

#[server]
pub async fn check_admin(token: String) -> Result<AdminStatus, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    admin::check_admin(&client, &token).await.map_err(server_error)
}

#[server]
pub async fn dashboard_stats(token: String) -> Result<DashboardStats, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    admin::dashboard_stats(&client, &token).await.map_err(server_error)
}

#[server]
pub async fn list_entities(token: String, kind: EntityKind) -> Result<Vec<Value>, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    admin::list_entities(&client, &token, kind).await.map_err(server_error)
}

#[server]
pub async fn create_entity(token: String, kind: EntityKind, data: Map<String, Value>) -> Result<Value, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    admin::create_entity(&client, &token, kind, data).await.map_err(server_error)
}

#[server]
pub async fn update_entity(
    token: String,
    kind: EntityKind,
    id: u64,
    data: Map<String, Value>,
) -> Result<Value, ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    admin::update_entity(&client, &token, kind, id, data).await.map_err(server_error)
}

#[server]
pub async fn delete_entity(token: String, kind: EntityKind, id: u64) -> Result<(), ServerFnError> {
    let client = get_catalog_client().map_err(server_error)?;
    admin::delete_entity(&client, &token, kind, id).await.map_err(server_error)
}
