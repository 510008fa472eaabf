//! Admin session: login payloads, the client-side token store and JWT expiry checks.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: AdminUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStatus {
    pub is_admin: bool,
    #[serde(default)]
    pub is_superuser: bool,
    pub username: String,
}

/// Tokens and user of the signed-in administrator.
///
/// Starts empty, is filled by [`SessionStore::store_login`] and emptied by
/// [`SessionStore::clear`]. The application owns one instance and hands it to the
/// components that need it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStore {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<AdminUser>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_login(&mut self, login: LoginResponse) {
        self.access_token = Some(login.access);
        self.refresh_token = Some(login.refresh);
        self.user = Some(login.user);
    }

    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.user = None;
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Whether an access token is held and has not expired at `now_unix_secs`.
    pub fn is_authenticated(&self, now_unix_secs: u64) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| is_token_valid(token, now_unix_secs))
    }
}

#[derive(Debug)]
pub enum TokenParseError {
    Malformed,
    DecodeError(base64::DecodeError),
    JsonError(serde_json::Error),
    MissingExpiry,
}

impl std::fmt::Display for TokenParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed => write!(f, "Token is not a JWT"),
            Self::DecodeError(err) => write!(f, "Failed to decode token payload: {}", err),
            Self::JsonError(err) => write!(f, "Failed to parse token payload: {}", err),
            Self::MissingExpiry => write!(f, "Token payload has no exp claim"),
        }
    }
}

impl std::error::Error for TokenParseError {}

#[derive(Deserialize)]
struct JwtClaims {
    exp: Option<u64>,
}

/// Reads the `exp` claim (seconds since the epoch) of a JWT without verifying it.
pub fn token_expiry(token: &str) -> Result<u64, TokenParseError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TokenParseError::Malformed);
    };
    let payload = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(TokenParseError::DecodeError)?;
    let claims: JwtClaims = serde_json::from_slice(&payload).map_err(TokenParseError::JsonError)?;
    claims.exp.ok_or(TokenParseError::MissingExpiry)
}

pub fn is_token_valid(token: &str, now_unix_secs: u64) -> bool {
    token_expiry(token).is_ok_and(|exp| exp > now_unix_secs)
}
