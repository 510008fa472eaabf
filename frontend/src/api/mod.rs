//! Server functions wrapping the backend crate.

pub mod catalog_api;
pub mod admin_api;

use dioxus::prelude::*;

/// Status code carried by server errors of an expired admin session.
pub const SESSION_EXPIRED_CODE: u16 = 401;

#[cfg(feature = "server")]
pub(crate) fn server_error(e: anyhow::Error) -> ServerFnError {
    let code = if e.downcast_ref::<backend::api::admin::SessionExpired>().is_some() {
        SESSION_EXPIRED_CODE
    } else {
        500
    };
    ServerFnError::ServerError { message: e.to_string(), code, details: None }
}

pub fn is_session_expired(err: &ServerFnError) -> bool {
    matches!(err, ServerFnError::ServerError { code, .. } if *code == SESSION_EXPIRED_CODE)
}

/// The message to show for a failed server call.
pub fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
