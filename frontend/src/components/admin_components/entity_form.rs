//! Create/edit form for one admin entity.
//!
//! Select inputs list the records of the entity they reference; those lists are loaded when
//! the form opens. The payload is cleaned with [`clean_form_data`] before it is sent.

use std::collections::BTreeMap;

use common::{
    admin_entity::{EntityKind, FieldDescriptor, FieldType, record_id},
    form_data::{clean_form_data, empty_form, form_data_from_item, missing_required_fields},
};
use dioxus::prelude::*;
use serde_json::Value;

use crate::{
    api::admin_api::{create_entity, list_entities, update_entity},
    data_definitions::session::use_admin_session,
};

/// `(value, label)` pairs of a select input.
type SelectOptions = Vec<(String, String)>;

/// Modal form; `record` is the record being edited, `None` creates a new one.
#[component]
pub fn EntityForm(
    kind: EntityKind,
    record: Option<Value>,
    on_saved: Callback<Value>,
    on_cancel: Callback<()>,
) -> Element {
    let mut session = use_admin_session();
    let fields = kind.form_fields();
    let edit_id = record.as_ref().and_then(record_id);
    let is_edit = record.is_some();

    let mut values = use_signal(|| match &record {
        Some(record) => form_data_from_item(record, fields),
        None => empty_form(fields),
    });
    let mut options = use_signal(BTreeMap::<EntityKind, SelectOptions>::new);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    use_future(move || async move {
        let Some(token) = session.token() else {
            return;
        };
        let sources = kind.option_sources();
        let requests = sources.iter().map(|source| list_entities(token.clone(), *source));
        let results = futures_util::future::join_all(requests).await;
        for (source, result) in sources.into_iter().zip(results) {
            match result {
                Ok(records) => {
                    let source_options = records
                        .iter()
                        .filter_map(|r| record_id(r).map(|id| (id.to_string(), source.option_label(r))))
                        .collect();
                    options.write().insert(source, source_options);
                }
                Err(e) => {
                    let message = session.handle_error(&e);
                    error.set(Some(format!("Failed to load {}: {message}", source.plural_name().to_lowercase())));
                }
            }
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *saving.peek() {
            return;
        }
        let current = values.peek().clone();
        let missing = missing_required_fields(&current, fields);
        if !missing.is_empty() {
            error.set(Some(format!("Please fill in: {}", missing.join(", "))));
            return;
        }
        let Some(token) = session.token() else {
            session.logout();
            navigator().replace(crate::routes::Route::AdminLoginPage {});
            return;
        };
        let data = clean_form_data(&current, fields);
        dioxus::logger::tracing::info!("saving {} with {} fields", kind.entity_name(), data.len());
        saving.set(true);
        spawn(async move {
            let result = match edit_id {
                Some(id) => update_entity(token, kind, id, data).await,
                None => create_entity(token, kind, data).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    error.set(None);
                    on_saved.call(saved);
                }
                Err(e) => error.set(Some(session.handle_error(&e))),
            }
        });
    };

    let heading = if is_edit {
        format!("Edit {}", kind.entity_name())
    } else {
        format!("Add New {}", kind.entity_name())
    };
    let submit_label = match (is_edit, saving()) {
        (_, true) => "Saving...",
        (true, false) => "Update",
        (false, false) => "Create",
    };

    rsx! {
        div {
            style: "
                position: fixed;
                inset: 0;
                z-index: 100;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(17, 24, 39, 0.45);
            ",
            div {
                style: "
                    width: min(640px, 94vw);
                    max-height: 90vh;
                    overflow-y: auto;
                    background: white;
                    border-radius: 12px;
                    padding: 24px;
                    box-shadow: 0 10px 30px rgba(0,0,0,0.25);
                ",
                h3 { style: "margin: 0 0 16px 0; font-size: 22px; font-weight: 500;", "{heading}" }
                if let Some(error) = error() {
                    div {
                        style: "color:#B91C1C; background:#FEF2F2; border: 1px solid #FCA5A5; border-radius: 8px; padding: 10px; margin-bottom: 12px;",
                        "{error}"
                    }
                }
                form {
                    onsubmit: submit,
                    style: "display:flex; flex-direction: column; gap: 14px;",
                    for field in fields.iter().copied() {
                        FormField {
                            key: "{field.key}",
                            field,
                            value: values.read().get(field.key).cloned().unwrap_or(Value::Null),
                            options: select_options(&options.read(), field),
                            on_change: move |value: Value| {
                                values.write().insert(field.key.to_string(), value);
                            },
                        }
                    }
                    div {
                        style: "display:flex; flex-direction: row; gap: 10px; justify-content: flex-end;",
                        button {
                            r#type: "submit",
                            disabled: saving(),
                            style: "padding: 8px 18px; border-radius: 8px; border: none; background: #4F46E5; color: white; cursor: pointer;",
                            "{submit_label}"
                        }
                        button {
                            r#type: "button",
                            style: "padding: 8px 18px; border-radius: 8px; border: 1px solid #D1D5DB; background: white; cursor: pointer;",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

fn select_options(options: &BTreeMap<EntityKind, SelectOptions>, field: FieldDescriptor) -> SelectOptions {
    match field.field_type {
        FieldType::Select(source) => options.get(&source).cloned().unwrap_or_default(),
        _ => Vec::new(),
    }
}

#[component]
fn FormField(field: FieldDescriptor, value: Value, options: SelectOptions, on_change: Callback<Value>) -> Element {
    let label = if field.required { format!("{} *", field.label) } else { field.label.to_string() };
    let text = match &value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(_) => String::new(),
        other => other.to_string(),
    };
    let placeholder = field
        .placeholder
        .map(str::to_string)
        .unwrap_or_else(|| format!("Enter {}", field.label.to_lowercase()));
    let input_style = "width: 100%; box-sizing: border-box; padding: 8px 10px; border: 1px solid #D1D5DB; border-radius: 8px; font-size: 14px;";

    if field.field_type == FieldType::Boolean {
        let checked = value.as_bool().unwrap_or(false);
        return rsx! {
            label {
                style: "display:flex; align-items:center; gap: 8px; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |e: FormEvent| on_change.call(Value::Bool(e.checked())),
                }
                "{field.label}"
            }
        };
    }

    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 4px;",
            label { style: "font-size: 14px; color: #374151; font-weight: 500;", "{label}" }
            if let FieldType::Select(_) = field.field_type {
                select {
                    style: input_style,
                    required: field.required,
                    value: "{text}",
                    onchange: move |e: FormEvent| on_change.call(Value::String(e.value())),
                    option { value: "", "Select {field.label}" }
                    for (option_value, option_label) in options {
                        option {
                            key: "{option_value}",
                            selected: option_value == text,
                            value: "{option_value}",
                            "{option_label}"
                        }
                    }
                }
            } else if field.field_type == FieldType::TextArea {
                textarea {
                    style: input_style,
                    rows: 3,
                    required: field.required,
                    placeholder: "{placeholder}",
                    value: "{text}",
                    oninput: move |e: FormEvent| on_change.call(Value::String(e.value())),
                }
            } else {
                input {
                    style: input_style,
                    r#type: input_type(field.field_type),
                    required: field.required,
                    placeholder: "{placeholder}",
                    value: "{text}",
                    oninput: move |e: FormEvent| on_change.call(Value::String(e.value())),
                }
            }
        }
    }
}

fn input_type(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Email => "email",
        FieldType::Number => "number",
        FieldType::Date => "date",
        _ => "text",
    }
}
