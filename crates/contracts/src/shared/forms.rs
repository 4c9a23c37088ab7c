//! Form values of the add/edit components
//!
//! Inputs hold raw strings. `validate` checks them against the field rules,
//! `to_input` turns them into the typed JSON `input` of the create/update
//! mutations.

use crate::shared::display::resolve_path;
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

/// Broken rule of one field, `message_key` is an i18n key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message_key: &'static str,
}

impl FormValues {
    /// Empty values for the create-editable fields
    pub fn for_create(descriptor: &ModelDescriptor) -> Self {
        let values = descriptor
            .form_fields(true)
            .map(|f| {
                let initial = match f.field_type {
                    FieldType::Boolean => "false",
                    _ => "",
                };
                (f.name.to_string(), initial.to_string())
            })
            .collect();
        Self { values }
    }

    /// Update-editable fields filled from a fetched item
    pub fn from_item(descriptor: &ModelDescriptor, item: &Value) -> Self {
        let values = descriptor
            .form_fields(false)
            .map(|f| (f.name.to_string(), raw_value(f, resolve_path(item, f.name))))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn raw_value(field: &FieldMetadata, value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => match field.field_type {
            // `<input type="datetime-local">` wants the local form
            FieldType::DateTime => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.naive_utc().format(DATETIME_LOCAL).to_string())
                .unwrap_or_else(|_| s.clone()),
            FieldType::Date => s.get(..10).unwrap_or(s).to_string(),
            _ => s.clone(),
        },
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ if field.field_type == FieldType::Boolean => "false".to_string(),
        _ => String::new(),
    }
}

fn parse_datetime(raw: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL)
        .ok()
        .map(|naive| naive.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn check_field(field: &FieldMetadata, raw: &str) -> Result<(), &'static str> {
    let rules = field.validation;
    if raw.is_empty() {
        return if rules.is_required() {
            Err("messages:error-required")
        } else {
            Ok(())
        };
    }
    rules.validate_string(raw)?;

    match field.field_type {
        t if t.is_numeric() => {
            let number = raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or("messages:error-not-a-number")?;
            if t.is_integral() && raw.parse::<i64>().is_err() {
                return Err("messages:error-not-an-integer");
            }
            rules.validate_number(number)
        }
        FieldType::Boolean => match raw {
            "true" | "false" => Ok(()),
            _ => Err("messages:error-invalid-value"),
        },
        FieldType::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| "messages:error-invalid-date"),
        FieldType::DateTime => parse_datetime(raw)
            .map(|_| ())
            .ok_or("messages:error-invalid-date"),
        _ => Ok(()),
    }
}

/// Check every editable field of the operation, collecting all errors
pub fn validate(
    descriptor: &ModelDescriptor,
    values: &FormValues,
    for_create: bool,
) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = descriptor
        .form_fields(for_create)
        .filter_map(|field| {
            check_field(field, values.get(field.name).trim())
                .err()
                .map(|message_key| FieldError {
                    field: field.name,
                    message_key,
                })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Typed mutation input. Call after `validate`: unparsable values become `null`.
pub fn to_input(descriptor: &ModelDescriptor, values: &FormValues, for_create: bool) -> Value {
    let mut input = Map::new();
    for field in descriptor.form_fields(for_create) {
        let raw = values.get(field.name).trim();
        let value = if raw.is_empty() && field.field_type != FieldType::Boolean {
            Value::Null
        } else {
            match field.field_type {
                t if t.is_integral() => raw.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
                FieldType::Number => raw
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                FieldType::Boolean => Value::Bool(raw == "true"),
                FieldType::DateTime => parse_datetime(raw).map(Value::String).unwrap_or(Value::Null),
                _ => Value::String(raw.to_string()),
            }
        };
        input.insert(field.name.to_string(), value);
    }
    Value::Object(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::DEFAULT_RULES;
    use serde_json::json;

    const FIELDS: &[FieldMetadata] = &[
        FieldMetadata::new("id", FieldType::String).detail(),
        FieldMetadata::new("name", FieldType::String)
            .shown()
            .editable()
            .required()
            .max_length(10),
        FieldMetadata::new("length", FieldType::Number).detail().editable().min(0.0),
        FieldMetadata::new("status", FieldType::Status("article_status")).detail().updatable(),
        FieldMetadata::new("featured", FieldType::Boolean).detail().editable(),
        FieldMetadata::new("availableFrom", FieldType::Date).detail().creatable(),
        FieldMetadata::new("lastCountAt", FieldType::DateTime).detail().updatable(),
    ];

    const ARTICLE: ModelDescriptor = ModelDescriptor {
        entity_index: "t001",
        resolver_name: "Article",
        table_name: "article",
        route: "articles",
        menu_group: "menu:configuration",
        list_endpoint: None,
        is_editable: true,
        is_deletable: true,
        is_soft_deletable: false,
        status_field: Some("status"),
        label_field: Some("name"),
        fields: FIELDS,
        actions: DEFAULT_RULES,
    };

    #[test]
    fn test_create_defaults() {
        let values = FormValues::for_create(&ARTICLE);
        assert_eq!(values.len(), 4);
        assert_eq!(values.get("featured"), "false");
        assert_eq!(values.get("name"), "");
        assert_eq!(values.get("status"), "");
    }

    #[test]
    fn test_from_item_keeps_update_fields() {
        let item = json!({
            "id": "a1", "name": "Box", "length": 1.5, "status": 10,
            "featured": true, "lastCountAt": "2024-03-15T14:02:26Z"
        });
        let values = FormValues::from_item(&ARTICLE, &item);
        assert_eq!(values.get("name"), "Box");
        assert_eq!(values.get("length"), "1.5");
        assert_eq!(values.get("status"), "10");
        assert_eq!(values.get("featured"), "true");
        assert_eq!(values.get("lastCountAt"), "2024-03-15T14:02");
        assert_eq!(values.get("availableFrom"), "");
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut values = FormValues::for_create(&ARTICLE);
        values.set("length", "-2");
        values.set("availableFrom", "15/03/2024");
        let errors = validate(&ARTICLE, &values, true).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError { field: "name", message_key: "messages:error-required" },
                FieldError { field: "length", message_key: "messages:error-min-value" },
                FieldError { field: "availableFrom", message_key: "messages:error-invalid-date" },
            ]
        );
    }

    #[test]
    fn test_validate_numbers_and_lengths() {
        let mut values = FormValues::from_item(&ARTICLE, &json!({ "name": "Box" }));
        values.set("status", "1.5");
        values.set("length", "abc");
        let errors = validate(&ARTICLE, &values, false).unwrap_err();
        assert_eq!(errors[0].message_key, "messages:error-not-a-number");
        assert_eq!(errors[1].message_key, "messages:error-not-an-integer");

        values.set("name", "a name far too long");
        values.set("length", "3");
        values.set("status", "20");
        let errors = validate(&ARTICLE, &values, false).unwrap_err();
        assert_eq!(errors, vec![FieldError { field: "name", message_key: "messages:error-max-length" }]);
    }

    #[test]
    fn test_validate_rejects_non_finite_numbers() {
        let mut values = FormValues::for_create(&ARTICLE);
        values.set("name", "Box");
        for raw in ["NaN", "inf", "-infinity", "1e400"] {
            values.set("length", raw);
            let errors = validate(&ARTICLE, &values, true).unwrap_err();
            assert_eq!(
                errors,
                vec![FieldError { field: "length", message_key: "messages:error-not-a-number" }],
                "{}",
                raw
            );
        }
        values.set("length", "1e3");
        assert!(validate(&ARTICLE, &values, true).is_ok());
    }

    #[test]
    fn test_to_input_is_typed() {
        let mut values = FormValues::for_create(&ARTICLE);
        values.set("name", " Box ");
        values.set("length", "2.5");
        values.set("featured", "true");
        assert!(validate(&ARTICLE, &values, true).is_ok());
        assert_eq!(
            to_input(&ARTICLE, &values, true),
            json!({ "name": "Box", "length": 2.5, "featured": true, "availableFrom": null })
        );
    }

    #[test]
    fn test_to_input_update() {
        let mut values = FormValues::from_item(&ARTICLE, &json!({ "name": "Box", "status": 10 }));
        values.set("lastCountAt", "2024-03-15T14:02");
        assert_eq!(
            to_input(&ARTICLE, &values, false),
            json!({
                "name": "Box", "length": null, "status": 10,
                "featured": false, "lastCountAt": "2024-03-15T14:02:00Z"
            })
        );
    }
}
