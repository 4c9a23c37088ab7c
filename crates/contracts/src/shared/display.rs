//! Read-only rendering of fetched items: detail rows and list cells.

use crate::shared::config::StatusConfig;
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// What a cell shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    Text(String),
    /// i18n key, resolved by the view
    Translated(String),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub field: &'static str,
    pub label_key: String,
    pub value: DisplayValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailGroup {
    pub name: Option<&'static str>,
    pub rows: Vec<DetailRow>,
}

/// Follow a dotted path through nested objects
pub fn resolve_path<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(item, |current, key| current.get(key))
}

/// Display form of one value
pub fn format_value(field: &FieldMetadata, value: Option<&Value>, config: &StatusConfig) -> DisplayValue {
    let value = match value {
        None | Some(Value::Null) => return DisplayValue::Empty,
        Some(value) => value,
    };

    match (field.field_type, value) {
        (FieldType::Boolean, Value::Bool(b)) => {
            DisplayValue::Translated(if *b { "common:yes" } else { "common:no" }.to_string())
        }
        (FieldType::Status(scope) | FieldType::Parameter(scope), Value::Number(n)) => {
            match n.as_i64().and_then(|code| config.label_key(scope, code)) {
                Some(key) => DisplayValue::Translated(key.to_string()),
                None => DisplayValue::Text(n.to_string()),
            }
        }
        (FieldType::Date, Value::String(s)) => DisplayValue::Text(format_date(s)),
        (FieldType::DateTime, Value::String(s)) => DisplayValue::Text(format_datetime(s)),
        (_, Value::String(s)) if s.is_empty() => DisplayValue::Empty,
        (_, Value::String(s)) => DisplayValue::Text(s.clone()),
        (_, Value::Number(n)) => DisplayValue::Text(n.to_string()),
        (_, Value::Bool(b)) => DisplayValue::Text(b.to_string()),
        (_, other) => DisplayValue::Text(other.to_string()),
    }
}

/// `2024-03-15` (or a timestamp) as `15/03/2024`
pub fn format_date(s: &str) -> String {
    let day = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| s.to_string())
}

/// RFC 3339 timestamp as `15/03/2024 14:02` (UTC)
pub fn format_datetime(s: &str) -> String {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_utc().format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|_| s.to_string())
}

/// Detail-visible fields grouped by `detail_group`.
///
/// Groups appear in order of their first field; rows keep declaration order.
pub fn detail_rows(descriptor: &ModelDescriptor, item: &Value, config: &StatusConfig) -> Vec<DetailGroup> {
    let mut groups: Vec<DetailGroup> = Vec::new();
    for field in descriptor.detail_fields() {
        let row = DetailRow {
            field: field.name,
            label_key: field.label_key(),
            value: format_value(field, resolve_path(item, field.name), config),
        };
        let group = field.ui.detail_group;
        match groups.iter_mut().find(|g| g.name == group) {
            Some(existing) => existing.rows.push(row),
            None => groups.push(DetailGroup {
                name: group,
                rows: vec![row],
            }),
        }
    }
    groups
}

/// List-visible cells of one row
pub fn list_cells(descriptor: &ModelDescriptor, item: &Value, config: &StatusConfig) -> Vec<DisplayValue> {
    descriptor
        .list_fields()
        .map(|field| format_value(field, resolve_path(item, field.name), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::DEFAULT_RULES;
    use serde_json::json;

    const FIELDS: &[FieldMetadata] = &[
        FieldMetadata::new("id", FieldType::String).detail().group("general"),
        FieldMetadata::new("name", FieldType::String).shown().group("general"),
        FieldMetadata::new("stockOwner.name", FieldType::String).shown().group("links"),
        FieldMetadata::new("status", FieldType::Status("delivery_status")).shown().group("general"),
        FieldMetadata::new("isFragile", FieldType::Boolean).detail(),
        FieldMetadata::new("expectedDate", FieldType::Date).list(),
        FieldMetadata::new("created", FieldType::DateTime).list(),
    ];

    const DELIVERY: ModelDescriptor = ModelDescriptor {
        entity_index: "t006",
        resolver_name: "Delivery",
        table_name: "delivery",
        route: "deliveries",
        menu_group: "menu:outbound",
        list_endpoint: None,
        is_editable: true,
        is_deletable: true,
        is_soft_deletable: true,
        status_field: Some("status"),
        label_field: Some("name"),
        fields: FIELDS,
        actions: DEFAULT_RULES,
    };

    #[test]
    fn test_resolve_path() {
        let item = json!({ "stockOwner": { "name": "ACME" }, "name": "D1" });
        assert_eq!(resolve_path(&item, "stockOwner.name"), Some(&json!("ACME")));
        assert_eq!(resolve_path(&item, "name"), Some(&json!("D1")));
        assert_eq!(resolve_path(&item, "stockOwner.code"), None);
        assert_eq!(resolve_path(&json!({ "stockOwner": null }), "stockOwner.name"), None);
    }

    #[test]
    fn test_detail_rows_are_grouped() {
        let config = StatusConfig::embedded();
        let item = json!({
            "id": "d1", "name": "D1", "status": 20,
            "stockOwner": { "name": "ACME" }, "isFragile": false
        });
        let groups = detail_rows(&DELIVERY, &item, config);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].name, Some("general"));
        let fields: Vec<_> = groups[0].rows.iter().map(|r| r.field).collect();
        assert_eq!(fields, vec!["id", "name", "status"]);
        assert_eq!(
            groups[0].rows[2].value,
            DisplayValue::Translated("d:status-estimated".into())
        );
        assert_eq!(groups[1].rows[0].value, DisplayValue::Text("ACME".into()));
        assert_eq!(groups[2].name, None);
        assert_eq!(groups[2].rows[0].value, DisplayValue::Translated("common:no".into()));
        assert_eq!(groups[2].rows[0].label_key, "d:isFragile");
    }

    #[test]
    fn test_list_cells_format_dates() {
        let config = StatusConfig::embedded();
        let item = json!({
            "name": "D1", "status": 999, "expectedDate": "2024-03-15",
            "created": "2024-03-15T14:02:26Z"
        });
        assert_eq!(
            list_cells(&DELIVERY, &item, config),
            vec![
                DisplayValue::Text("D1".into()),
                DisplayValue::Empty,
                DisplayValue::Text("999".into()),
                DisplayValue::Text("15/03/2024".into()),
                DisplayValue::Text("15/03/2024 14:02".into()),
            ]
        );
    }

    #[test]
    fn test_unparsable_dates_are_kept() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_datetime("2024-13-01"), "2024-13-01");
        assert_eq!(format_date("2024-03-15T00:00:00Z"), "15/03/2024");
    }
}
