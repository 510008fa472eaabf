//! Values of the admin create/edit form and the payload sent to the API.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::admin_entity::{FieldDescriptor, FieldType};

/// Raw form values keyed by field key. Text inputs hold strings, checkboxes hold booleans.
pub type FormValues = BTreeMap<String, Value>;

/// Blank values for every field of a form.
pub fn empty_form(fields: &[FieldDescriptor]) -> FormValues {
    fields
        .iter()
        .map(|field| {
            let blank = match field.field_type {
                FieldType::Boolean => Value::Bool(false),
                _ => Value::String(String::new()),
            };
            (field.key.to_string(), blank)
        })
        .collect()
}

/// Form values prefilled from an existing record. Nested records become their id.
pub fn form_data_from_item(record: &Value, fields: &[FieldDescriptor]) -> FormValues {
    let mut values = empty_form(fields);
    for field in fields {
        let Some(value) = record.get(field.key) else {
            continue;
        };
        let form_value = match (field.field_type, value) {
            (FieldType::Boolean, Value::Bool(b)) => Value::Bool(*b),
            (FieldType::Boolean, _) => Value::Bool(false),
            (_, Value::Null) => Value::String(String::new()),
            (_, Value::Object(obj)) => obj
                .get("id")
                .map(|id| Value::String(scalar_text(id)))
                .unwrap_or_else(|| Value::String(String::new())),
            (_, other) => Value::String(scalar_text(other)),
        };
        values.insert(field.key.to_string(), form_value);
    }
    values
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Builds the request body from form values.
///
/// Empty and null values are left out so the server applies its defaults. Numeric text of
/// number and select fields is sent as a JSON number. Keys not described by `fields` are
/// dropped.
pub fn clean_form_data(values: &FormValues, fields: &[FieldDescriptor]) -> Map<String, Value> {
    let mut cleaned = Map::new();
    for field in fields {
        let Some(value) = values.get(field.key) else {
            continue;
        };
        let cleaned_value = match value {
            Value::Null => continue,
            Value::String(s) if s.trim().is_empty() => continue,
            Value::String(s) if matches!(field.field_type, FieldType::Number | FieldType::Select(_)) => {
                parse_number(s.trim()).unwrap_or_else(|| Value::String(s.clone()))
            }
            other => other.clone(),
        };
        cleaned.insert(field.key.to_string(), cleaned_value);
    }
    cleaned
}

fn parse_number(text: &str) -> Option<Value> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(Value::from(n));
    }
    text.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}

/// Labels of required fields left blank.
pub fn missing_required_fields(values: &FormValues, fields: &[FieldDescriptor]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|field| field.required && field.field_type != FieldType::Boolean)
        .filter(|field| match values.get(field.key) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        })
        .map(|field| field.label)
        .collect()
}

/// Message carried by an API error body, if there is one.
///
/// Understands a bare string, `{"detail": ..}`, `{"error": ..}` and per-field
/// validation errors, which are listed as `field: message, message; field: message`.
pub fn api_error_message(body: &str) -> Option<String> {
    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        let text = body.trim();
        return (!text.is_empty() && !text.starts_with('<')).then(|| text.to_string());
    };
    match parsed {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Object(obj) => {
            for key in ["detail", "error"] {
                if let Some(Value::String(s)) = obj.get(key) {
                    return Some(s.clone());
                }
            }
            let field_errors = obj
                .iter()
                .map(|(field, messages)| format!("{field}: {}", join_messages(messages)))
                .collect::<Vec<_>>();
            (!field_errors.is_empty()).then(|| field_errors.join("; "))
        }
        _ => None,
    }
}

/// Message for a failed save of an `entity_name` record.
pub fn describe_api_error(body: &str, entity_name: &str) -> String {
    api_error_message(body).unwrap_or_else(|| format!("Failed to save {}", entity_name.to_lowercase()))
}

fn join_messages(messages: &Value) -> String {
    match messages {
        Value::Array(items) => items.iter().map(scalar_text).collect::<Vec<_>>().join(", "),
        other => scalar_text(other),
    }
}
