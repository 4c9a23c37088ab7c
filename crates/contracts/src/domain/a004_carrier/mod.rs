use crate::shared::actions::DEFAULT_RULES;
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor, SortDirection};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("id", FieldType::String).detail(),
    FieldMetadata::new("code", FieldType::String)
        .shown()
        .creatable()
        .required()
        .max_length(20),
    FieldMetadata::new("name", FieldType::String)
        .shown()
        .default_sort(SortDirection::Ascending)
        .editable()
        .required()
        .max_length(100),
    FieldMetadata::new("service", FieldType::Parameter("carrier_service"))
        .shown()
        .editable(),
    FieldMetadata::new("trackingUrl", FieldType::String).detail().editable(),
    FieldMetadata::new("isEnabled", FieldType::Boolean).shown().editable(),
    FieldMetadata::new("created", FieldType::DateTime).detail(),
    FieldMetadata::new("modified", FieldType::DateTime).detail(),
];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a004",
    resolver_name: "Carrier",
    table_name: "carrier",
    route: "carriers",
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
