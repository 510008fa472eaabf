use common::admin_entity::{DashboardStats, EntityKind};
use common::form_data::describe_api_error;
use reqwest::Method;
use serde_json::{Map, Value};

use super::session::{ensure_token_valid, map_auth_error};
use crate::rest_utils::catalog_client::{ApiStatusError, CatalogClient};

/// Replaces the generic status error of a failed save with the condensed API message.
fn map_save_error(kind: EntityKind, err: anyhow::Error) -> anyhow::Error {
    let err = map_auth_error(err);
    match err.downcast_ref::<ApiStatusError>() {
        Some(api_err) => anyhow::anyhow!(describe_api_error(&api_err.body, kind.entity_name())),
        None => err,
    }
}

pub async fn list_entities(client: &CatalogClient, token: &str, kind: EntityKind) -> anyhow::Result<Vec<Value>> {
    ensure_token_valid(token)?;
    client
        .get_json(&kind.endpoint(), &[], Some(token))
        .await
        .map_err(map_auth_error)
}

pub async fn create_entity(
    client: &CatalogClient,
    token: &str,
    kind: EntityKind,
    data: Map<String, Value>,
) -> anyhow::Result<Value> {
    ensure_token_valid(token)?;
    let created = client
        .send_json(Method::POST, &kind.create_endpoint(), &Value::Object(data), Some(token))
        .await
        .map_err(|e| map_save_error(kind, e))?;
    tracing::info!("created {}", kind.entity_name());
    Ok(created)
}

pub async fn update_entity(
    client: &CatalogClient,
    token: &str,
    kind: EntityKind,
    id: u64,
    data: Map<String, Value>,
) -> anyhow::Result<Value> {
    ensure_token_valid(token)?;
    let updated = client
        .send_json(Method::PUT, &kind.update_endpoint(id), &Value::Object(data), Some(token))
        .await
        .map_err(|e| map_save_error(kind, e))?;
    tracing::info!("updated {} {}", kind.entity_name(), id);
    Ok(updated)
}

pub async fn delete_entity(client: &CatalogClient, token: &str, kind: EntityKind, id: u64) -> anyhow::Result<()> {
    ensure_token_valid(token)?;
    client
        .delete(&kind.delete_endpoint(id), Some(token))
        .await
        .map_err(map_auth_error)?;
    tracing::info!("deleted {} {}", kind.entity_name(), id);
    Ok(())
}

/// Record counts of every entity, fetched concurrently.
pub async fn dashboard_stats(client: &CatalogClient, token: &str) -> anyhow::Result<DashboardStats> {
    ensure_token_valid(token)?;
    let counts = futures::future::try_join_all(EntityKind::ALL.into_iter().map(|kind| async move {
        let records = list_entities(client, token, kind).await?;
        anyhow::Ok((kind, records.len()))
    }))
    .await?;
    Ok(DashboardStats { counts })
}
