//! List, create, edit and delete the records of one admin entity.

use common::admin_entity::{EntityKind, display_name, record_id};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdAdd, icons::md_navigation_icons::MdArrowBack};
use dioxus_primitives::toast::{ToastOptions, consume_toast};
use serde_json::Value;

use crate::{
    api::admin_api::{delete_entity, list_entities},
    components::{
        admin_components::{entity_form::EntityForm, entity_table::EntityTable},
        error_boundary::{ComponentErrorDisplay, RetryButton},
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::session::use_admin_session,
    routes::Route,
};

#[derive(Debug, Clone, PartialEq)]
enum FormState {
    Closed,
    Create,
    Edit(Value),
}

fn confirm_delete(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn notify(title: String, description: String) {
    consume_toast().info(
        title,
        ToastOptions::new()
            .description(description)
            .duration(std::time::Duration::from_secs(5))
            .permanent(false),
    );
}

#[component]
pub fn AdminCrud(kind: EntityKind) -> Element {
    let mut session = use_admin_session();
    let mut records = use_signal(Vec::<Value>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut action_error = use_signal(|| None::<String>);
    let mut form = use_signal(|| FormState::Closed);

    let reload = use_callback(move |_: ()| {
        let Some(token) = session.token() else {
            navigator().replace(Route::AdminLoginPage {});
            return;
        };
        loading.set(true);
        spawn(async move {
            match list_entities(token, kind).await {
                Ok(items) => {
                    dioxus::logger::tracing::info!("loaded {} {}", items.len(), kind);
                    records.set(items);
                    load_error.set(None);
                }
                Err(e) => {
                    let message = session.handle_error(&e);
                    load_error.set(Some(format!("Failed to load {}: {message}", kind.plural_name().to_lowercase())));
                }
            }
            loading.set(false);
        });
    });

    use_effect(move || reload.call(()));

    let delete_record = use_callback(move |record: Value| {
        let Some(id) = record_id(&record) else {
            return;
        };
        let entity = kind.entity_name().to_lowercase();
        if !confirm_delete(&format!("Are you sure you want to delete this {entity}?")) {
            return;
        }
        let Some(token) = session.token() else {
            navigator().replace(Route::AdminLoginPage {});
            return;
        };
        let name = display_name(&record).unwrap_or_else(|| format!("ID: {id}"));
        spawn(async move {
            match delete_entity(token, kind, id).await {
                Ok(()) => {
                    action_error.set(None);
                    notify(format!("{} deleted.", kind.entity_name()), format!("\"{name}\" was removed."));
                    reload.call(());
                }
                Err(e) => {
                    let message = session.handle_error(&e);
                    action_error.set(Some(format!("Failed to delete {entity}: {message}")));
                }
            }
        });
    });

    let on_saved = use_callback(move |saved: Value| {
        let title = match *form.peek() {
            FormState::Edit(_) => format!("{} updated.", kind.entity_name()),
            _ => format!("{} created.", kind.entity_name()),
        };
        let name = display_name(&saved).unwrap_or_default();
        form.set(FormState::Closed);
        action_error.set(None);
        notify(title, name);
        reload.call(());
    });

    let entity_name = kind.entity_name();
    let entity_lower = entity_name.to_lowercase();
    let plural_name = kind.plural_name();

    rsx! {
        div {
            id: "x-admin-crud",
            style: "display:flex; flex-direction: column; gap: 16px; width: 100%;",
            div {
                style: "display:flex; flex-direction: row; align-items: center; justify-content: space-between; gap: 16px; flex-wrap: wrap;",
                div {
                    style: "display:flex; flex-direction: column; gap: 6px;",
                    Link {
                        to: Route::AdminDashboardPage {},
                        style: "display:flex; align-items:center; gap: 4px; color: #4F46E5; text-decoration: none; font-size: 14px;",
                        Icon { icon: MdArrowBack, style: "width: 16px; height: 16px;" }
                        "Back to Dashboard"
                    }
                    h1 { style: "margin: 0; font-size: 28px; font-weight: 500;", "Manage {plural_name}" }
                }
                button {
                    style: "display:flex; align-items:center; gap: 6px; padding: 8px 16px; border-radius: 8px; border: none; background: #4F46E5; color: white; cursor: pointer;",
                    onclick: move |_| {
                        action_error.set(None);
                        form.set(FormState::Create);
                    },
                    Icon { icon: MdAdd, style: "width: 18px; height: 18px;" }
                    "Add New {entity_name}"
                }
            }

            if let Some(error) = action_error() {
                div {
                    style: "color:#B91C1C; background:#FEF2F2; border: 1px solid #FCA5A5; border-radius: 8px; padding: 10px;",
                    "{error}"
                }
            }

            if let Some(error) = load_error() {
                ComponentErrorDisplay {
                    title: "Could not load {plural_name}",
                    error_txt: error,
                    RetryButton { onclick: move |_| reload.call(()) }
                }
            } else if loading() && records.read().is_empty() {
                LoadingIndicator { label: "Loading {plural_name}..." }
            } else if records.read().is_empty() {
                div {
                    style: "display:flex; flex-direction: column; align-items: center; gap: 10px; padding: 36px; background: white; border: 1px dashed #D1D5DB; border-radius: 12px;",
                    p { style: "margin: 0; color: #374151;", "No {entity_lower} found." }
                    button {
                        style: "padding: 8px 16px; border-radius: 8px; border: none; background: #4F46E5; color: white; cursor: pointer;",
                        onclick: move |_| form.set(FormState::Create),
                        "Add the first {entity_lower}"
                    }
                }
            } else {
                EntityTable {
                    kind,
                    records,
                    on_edit: move |record: Value| {
                        action_error.set(None);
                        form.set(FormState::Edit(record));
                    },
                    on_delete: delete_record,
                }
            }

            if let FormState::Edit(record) = form() {
                EntityForm {
                    kind,
                    record,
                    on_saved,
                    on_cancel: move |_| form.set(FormState::Closed),
                }
            } else if form() == FormState::Create {
                EntityForm {
                    kind,
                    on_saved,
                    on_cancel: move |_| form.set(FormState::Closed),
                }
            }
        }
    }
}
