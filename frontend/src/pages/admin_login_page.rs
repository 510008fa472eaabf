use common::session::LoginCredentials;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdLock};

use crate::{
    api::{admin_api::admin_login, error_message},
    data_definitions::session::use_admin_session,
    routes::Route,
};

const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 10px 12px; border: 1px solid #D1D5DB; border-radius: 8px; font-size: 15px;";

#[component]
pub fn AdminLoginPage() -> Element {
    let mut session = use_admin_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *loading.peek() {
            return;
        }
        let credentials = LoginCredentials {
            username: username.peek().trim().to_string(),
            password: password.peek().clone(),
        };
        loading.set(true);
        error.set(None);
        spawn(async move {
            match admin_login(credentials).await {
                Ok(login) => {
                    dioxus::logger::tracing::info!("admin {} signed in", login.user.username);
                    session.store_login(login);
                    navigator().push(Route::AdminDashboardPage {});
                }
                Err(e) => {
                    dioxus::logger::tracing::warn!("admin login failed: {}", e);
                    error.set(Some(error_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        Title { "Course Catalog - Admin Login" }
        div {
            id: "x-admin-login",
            style: "display:flex; justify-content: center; padding: 48px 16px;",
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 16px;
                    width: min(420px, 100%);
                    padding: 28px;
                    background: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 14px;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.08);
                ",
                div {
                    style: "display:flex; flex-direction: column; align-items: center; gap: 6px;",
                    Icon { icon: MdLock, style: "width: 36px; height: 36px; color: #4F46E5;" }
                    h2 { style: "margin: 0; font-size: 26px; font-weight: 500;", "Admin Login" }
                    p { style: "margin: 0; color: #6B7280;", "Please enter your admin credentials" }
                }
                form {
                    onsubmit: submit,
                    style: "display:flex; flex-direction: column; gap: 14px;",
                    if let Some(error) = error() {
                        div {
                            style: "color:#B91C1C; background:#FEF2F2; border: 1px solid #FCA5A5; border-radius: 8px; padding: 10px;",
                            "{error}"
                        }
                    }
                    label {
                        style: "display:flex; flex-direction: column; gap: 4px; font-size: 14px; color: #374151;",
                        "Username"
                        input {
                            r#type: "text",
                            style: INPUT_STYLE,
                            required: true,
                            placeholder: "Enter your username",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    label {
                        style: "display:flex; flex-direction: column; gap: 4px; font-size: 14px; color: #374151;",
                        "Password"
                        input {
                            r#type: "password",
                            style: INPUT_STYLE,
                            required: true,
                            placeholder: "Enter your password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: loading(),
                        style: "padding: 10px; border-radius: 8px; border: none; background: #4F46E5; color: white; font-size: 15px; cursor: pointer;",
                        if loading() { "Signing in..." } else { "Login as Admin" }
                    }
                }
                Link {
                    to: Route::HomePage {},
                    style: "text-align: center; color: #4F46E5; text-decoration: none; font-size: 14px;",
                    "Back to Main Site"
                }
            }
        }
    }
}
