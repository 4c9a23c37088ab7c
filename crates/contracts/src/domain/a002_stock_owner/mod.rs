use crate::shared::actions::DEFAULT_RULES;
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor, SortDirection};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("id", FieldType::String).detail(),
    FieldMetadata::new("name", FieldType::String)
        .shown()
        .default_sort(SortDirection::Ascending)
        .editable()
        .required()
        .max_length(100),
    FieldMetadata::new("contactName", FieldType::String).shown().editable(),
    FieldMetadata::new("contactPhone", FieldType::String)
        .detail()
        .editable()
        .max_length(30),
    FieldMetadata::new("isEnabled", FieldType::Boolean).shown().editable(),
    FieldMetadata::new("created", FieldType::DateTime).detail(),
    FieldMetadata::new("modified", FieldType::DateTime).detail(),
];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a002",
    resolver_name: "StockOwner",
    table_name: "stock_owner",
    route: "stock-owners",
    menu_group: "menu:configuration",
    list_endpoint: None,
    is_editable: true,
    is_deletable: true,
    is_soft_deletable: false,
    status_field: None,
    label_field: Some("name"),
    fields: FIELDS,
    actions: DEFAULT_RULES,
};
