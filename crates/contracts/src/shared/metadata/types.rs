//! Core descriptor types for entities and their fields
//!
//! All types use 'static lifetimes: descriptors are compile-time constants
//! declared once per entity in `crate::domain`.

use super::field_type::{FieldType, SortDirection};
use super::validation::ValidationRules;
use crate::shared::actions::ActionRule;
use crate::shared::display::resolve_path;
use serde_json::Value;
use std::collections::HashSet;

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// camelCase API name, dotted for joined data (`stockOwner.name`)
    pub name: &'static str,
    /// Explicit i18n key, defaults to `d:<name>`
    pub label: Option<&'static str>,
    pub field_type: FieldType,
    pub ui: FieldUiMetadata,
    pub edit: EditRules,
    pub validation: ValidationRules,
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldUiMetadata {
    pub visible_in_list: bool,
    pub visible_in_detail: bool,
    pub detail_group: Option<&'static str>,
    pub sortable: bool,
    pub default_sort: Option<SortDirection>,
}

/// Which form operations may write the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditRules {
    pub on_create: bool,
    pub on_update: bool,
}

impl FieldMetadata {
    /// Hidden, read-only field. Chain the builders below to expose it.
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label: None,
            field_type,
            ui: FieldUiMetadata {
                visible_in_list: false,
                visible_in_detail: false,
                detail_group: None,
                sortable: false,
                default_sort: None,
            },
            edit: EditRules {
                on_create: false,
                on_update: false,
            },
            validation: ValidationRules::none(),
        }
    }

    pub const fn label(self, key: &'static str) -> Self {
        Self {
            label: Some(key),
            ..self
        }
    }

    pub const fn list(self) -> Self {
        Self {
            ui: FieldUiMetadata {
                visible_in_list: true,
                ..self.ui
            },
            ..self
        }
    }

    pub const fn detail(self) -> Self {
        Self {
            ui: FieldUiMetadata {
                visible_in_detail: true,
                ..self.ui
            },
            ..self
        }
    }

    /// Shortcut for `list().detail()`
    pub const fn shown(self) -> Self {
        self.list().detail()
    }

    pub const fn group(self, group: &'static str) -> Self {
        Self {
            ui: FieldUiMetadata {
                detail_group: Some(group),
                ..self.ui
            },
            ..self
        }
    }

    pub const fn sortable(self) -> Self {
        Self {
            ui: FieldUiMetadata {
                sortable: true,
                ..self.ui
            },
            ..self
        }
    }

    pub const fn default_sort(self, direction: SortDirection) -> Self {
        Self {
            ui: FieldUiMetadata {
                sortable: true,
                default_sort: Some(direction),
                ..self.ui
            },
            ..self
        }
    }

    pub const fn creatable(self) -> Self {
        Self {
            edit: EditRules {
                on_create: true,
                ..self.edit
            },
            ..self
        }
    }

    pub const fn updatable(self) -> Self {
        Self {
            edit: EditRules {
                on_update: true,
                ..self.edit
            },
            ..self
        }
    }

    /// Editable both on create and on update
    pub const fn editable(self) -> Self {
        self.creatable().updatable()
    }

    pub const fn required(self) -> Self {
        Self {
            validation: ValidationRules {
                required: true,
                ..self.validation
            },
            ..self
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            validation: ValidationRules {
                max_length: Some(max),
                ..self.validation
            },
            ..self
        }
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        Self {
            validation: ValidationRules {
                min: Some(min),
                max: Some(max),
                ..self.validation
            },
            ..self
        }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            validation: ValidationRules {
                min: Some(min),
                ..self.validation
            },
            ..self
        }
    }

    /// i18n key of the field label
    pub fn label_key(&self) -> String {
        match self.label {
            Some(key) => key.to_string(),
            None => format!("d:{}", self.name),
        }
    }

    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    pub fn visible_in_detail(&self) -> bool {
        self.ui.visible_in_detail
    }

    pub fn editable_for(&self, for_create: bool) -> bool {
        if for_create {
            self.edit.on_create
        } else {
            self.edit.on_update
        }
    }
}

// ============================================================================
// Entity-level descriptor
// ============================================================================

/// Declarative description of one WMS entity: API names, capability flags,
/// fields and page action rules. Consumed by the generic CRUD components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelDescriptor {
    /// Index in the system (e.g. "a006")
    pub entity_index: &'static str,
    /// GraphQL type name (e.g. "Delivery")
    pub resolver_name: &'static str,
    /// Permission table (e.g. "delivery")
    pub table_name: &'static str,
    /// Route segment of the pages (e.g. "deliveries")
    pub route: &'static str,
    /// i18n key of the sidebar group
    pub menu_group: &'static str,
    /// Overrides the derived list endpoint
    pub list_endpoint: Option<&'static str>,
    pub is_editable: bool,
    pub is_deletable: bool,
    pub is_soft_deletable: bool,
    pub status_field: Option<&'static str>,
    pub label_field: Option<&'static str>,
    pub fields: &'static [FieldMetadata],
    pub actions: &'static [ActionRule],
}

impl ModelDescriptor {
    /// Full name in the system (e.g. "a006_delivery")
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.entity_index, self.table_name)
    }

    /// i18n key of the plural name
    pub fn list_key(&self) -> String {
        format!("menu:{}", self.route)
    }

    /// i18n key of the singular name
    pub fn element_key(&self) -> String {
        format!("d:{}", self.table_name)
    }

    pub fn list_endpoint(&self) -> String {
        match self.list_endpoint {
            Some(endpoint) => endpoint.to_string(),
            None => pluralize(&lower_first(self.resolver_name)),
        }
    }

    pub fn detail_endpoint(&self) -> String {
        lower_first(self.resolver_name)
    }

    pub fn create_endpoint(&self) -> String {
        format!("create{}", self.resolver_name)
    }

    pub fn update_endpoint(&self) -> String {
        format!("update{}", self.resolver_name)
    }

    pub fn delete_endpoint(&self) -> String {
        format!("delete{}", self.resolver_name)
    }

    pub fn soft_delete_endpoint(&self) -> String {
        format!("softDelete{}", self.resolver_name)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn list_fields(&self) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(|f| f.ui.visible_in_list)
    }

    pub fn detail_fields(&self) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(|f| f.ui.visible_in_detail)
    }

    pub fn form_fields(&self, for_create: bool) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(move |f| f.editable_for(for_create))
    }

    /// Columns sorted by default, in declaration order
    pub fn default_sort(&self) -> Vec<(&'static str, SortDirection)> {
        self.fields
            .iter()
            .filter_map(|f| f.ui.default_sort.map(|dir| (f.name, dir)))
            .collect()
    }

    /// Config scope of the status field
    pub fn status_scope(&self) -> Option<&'static str> {
        self.status_field
            .and_then(|name| self.field(name))
            .and_then(|f| f.field_type.scope())
    }

    /// Numeric status of a fetched item
    pub fn status_of(&self, item: &Value) -> Option<i64> {
        let name = self.status_field?;
        resolve_path(item, name).and_then(Value::as_i64)
    }

    /// Human label of a fetched item (breadcrumbs, titles)
    pub fn label_of(&self, item: &Value) -> Option<String> {
        let name = self.label_field?;
        match resolve_path(item, name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Check descriptor consistency
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for field in self.fields {
            if !seen.insert(field.name) {
                return Err(format!(
                    "{}: duplicated field '{}'",
                    self.full_name(),
                    field.name
                ));
            }
        }
        if self.field("id").is_none() {
            return Err(format!("{}: no 'id' field", self.full_name()));
        }
        for (role, name) in [("status", self.status_field), ("label", self.label_field)] {
            if let Some(name) = name {
                if self.field(name).is_none() {
                    return Err(format!(
                        "{}: {} field '{}' is not declared",
                        self.full_name(),
                        role,
                        name
                    ));
                }
            }
        }
        if self.status_field.is_some() && self.status_scope().is_none() {
            return Err(format!(
                "{}: status field must have a config scope",
                self.full_name()
            ));
        }
        Ok(())
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn pluralize(s: &str) -> String {
    let consonant_y = s.len() > 1
        && s.ends_with('y')
        && !s[..s.len() - 1].ends_with(['a', 'e', 'i', 'o', 'u']);
    if consonant_y {
        format!("{}ies", &s[..s.len() - 1])
    } else if s.ends_with('s') || s.ends_with('x') || s.ends_with("ch") || s.ends_with("sh") {
        format!("{}es", s)
    } else {
        format!("{}s", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::DEFAULT_RULES;

    const FIELDS: &[FieldMetadata] = &[
        FieldMetadata::new("id", FieldType::String).detail(),
        FieldMetadata::new("name", FieldType::String)
            .shown()
            .editable()
            .required()
            .default_sort(SortDirection::Ascending),
        FieldMetadata::new("status", FieldType::Status("delivery_status")).shown(),
        FieldMetadata::new("stockOwner.name", FieldType::String).list(),
    ];

    const BOX: ModelDescriptor = ModelDescriptor {
        entity_index: "t001",
        resolver_name: "HandlingUnitBox",
        table_name: "handling_unit_box",
        route: "boxes",
        menu_group: "menu:stock",
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
    fn test_endpoints_are_derived_from_resolver() {
        assert_eq!(BOX.list_endpoint(), "handlingUnitBoxes");
        assert_eq!(BOX.detail_endpoint(), "handlingUnitBox");
        assert_eq!(BOX.create_endpoint(), "createHandlingUnitBox");
        assert_eq!(BOX.soft_delete_endpoint(), "softDeleteHandlingUnitBox");
        assert_eq!(BOX.full_name(), "t001_handling_unit_box");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("delivery"), "deliveries");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("article"), "articles");
        assert_eq!(pluralize("box"), "boxes");
    }

    #[test]
    fn test_field_builders() {
        let name = BOX.field("name").unwrap();
        assert!(name.visible_in_list() && name.visible_in_detail());
        assert!(name.editable_for(true) && name.editable_for(false));
        assert!(!name.is_optional());
        assert_eq!(name.label_key(), "d:name");
        assert_eq!(BOX.default_sort(), vec![("name", SortDirection::Ascending)]);
        assert_eq!(BOX.list_fields().count(), 3);
        assert_eq!(BOX.form_fields(true).count(), 1);
    }

    #[test]
    fn test_status_and_label_of_item() {
        let item = serde_json::json!({ "id": "x", "name": "B-01", "status": 20 });
        assert_eq!(BOX.status_of(&item), Some(20));
        assert_eq!(BOX.label_of(&item), Some("B-01".to_string()));
        assert_eq!(BOX.status_scope(), Some("delivery_status"));
        assert!(BOX.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_status_field() {
        let broken = ModelDescriptor {
            status_field: Some("state"),
            ..BOX
        };
        assert!(broken.validate().unwrap_err().contains("state"));
    }
}
