use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

use common::session::{AdminStatus, LoginCredentials, LoginResponse, is_token_valid};
use reqwest::{Method, StatusCode};

use crate::rest_utils::catalog_client::{ApiStatusError, CatalogClient};

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// The access token is missing, malformed, expired or was refused by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExpired;

impl Display for SessionExpired {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session expired. Please log in again.")
    }
}

impl std::error::Error for SessionExpired {}

fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Fails with [`SessionExpired`] unless `token` is a JWT whose `exp` lies in the future.
pub fn ensure_token_valid(token: &str) -> anyhow::Result<()> {
    if is_token_valid(token, now_unix_secs()) {
        Ok(())
    } else {
        tracing::info!("rejecting expired or malformed admin token");
        Err(SessionExpired.into())
    }
}

/// Turns a 401/403 answer of the API into [`SessionExpired`].
pub(super) fn map_auth_error(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<ApiStatusError>() {
        Some(api_err) if matches!(api_err.status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
            SessionExpired.into()
        }
        _ => err,
    }
}

pub async fn admin_login(client: &CatalogClient, credentials: &LoginCredentials) -> anyhow::Result<LoginResponse> {
    let body = serde_json::to_value(credentials)?;
    let result = client
        .send_json::<LoginResponse>(Method::POST, "/api/auth/admin-login/", &body, None)
        .await;
    match result {
        Ok(login) => {
            tracing::info!("admin login: {}", login.user.username);
            Ok(login)
        }
        Err(err) => match err.downcast_ref::<ApiStatusError>() {
            Some(api_err) => {
                let message = common::form_data::api_error_message(&api_err.body)
                    .unwrap_or(LOGIN_FAILED.to_string());
                anyhow::bail!(message)
            }
            None => Err(err),
        },
    }
}

pub async fn check_admin(client: &CatalogClient, token: &str) -> anyhow::Result<AdminStatus> {
    ensure_token_valid(token)?;
    client
        .get_json("/api/auth/check-admin/", &[], Some(token))
        .await
        .map_err(map_auth_error)
}
