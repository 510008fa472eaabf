//! The admin session held by the running application.

use common::session::{AdminUser, LoginResponse, SessionStore};
use dioxus::prelude::*;

use crate::api::{error_message, is_session_expired};
use crate::routes::Route;

/// Handle on the application's [`SessionStore`], provided as context by `App`.
#[derive(Clone, Copy)]
pub struct AdminSession {
    store: Signal<SessionStore>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self { store: Signal::new(SessionStore::new()) }
    }

    pub fn token(&self) -> Option<String> {
        self.store.read().access_token().map(str::to_string)
    }

    pub fn user(&self) -> Option<AdminUser> {
        self.store.read().user().cloned()
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.read().has_token()
    }

    pub fn store_login(&mut self, login: LoginResponse) {
        self.store.write().store_login(login);
    }

    pub fn logout(&mut self) {
        self.store.write().clear();
    }

    /// Message for a failed admin call. An expired session is cleared and the user is sent
    /// to the login page.
    pub fn handle_error(&mut self, err: &ServerFnError) -> String {
        if is_session_expired(err) {
            dioxus::logger::tracing::info!("admin session expired, redirecting to login");
            self.logout();
            navigator().replace(Route::AdminLoginPage {});
        }
        error_message(err)
    }
}

pub fn use_admin_session() -> AdminSession {
    use_context::<AdminSession>()
}
