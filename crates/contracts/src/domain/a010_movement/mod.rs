//! Stock movements are created by the WMS itself, the UI only lists and
//! cancels them.

use crate::shared::actions::{ActionRule, PageAction, StatusCondition};
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor, SortDirection};
use crate::system::permissions::Mode;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("id", FieldType::String).detail(),
    FieldMetadata::new("article.name", FieldType::String).shown().sortable(),
    FieldMetadata::new("quantity", FieldType::Number).shown(),
    FieldMetadata::new("originalLocation.name", FieldType::String).shown(),
    FieldMetadata::new("finalLocation.name", FieldType::String).shown(),
    FieldMetadata::new("stockStatus", FieldType::Parameter("stock_status")).shown(),
    FieldMetadata::new("status", FieldType::Status("movement_status"))
        .shown()
        .sortable(),
    FieldMetadata::new("created", FieldType::DateTime)
        .shown()
        .default_sort(SortDirection::Descending),
    FieldMetadata::new("createdBy", FieldType::String).detail(),
];

const RULES: &[ActionRule] = &[ActionRule::new(
    PageAction::CANCEL,
    Mode::Delete,
    StatusCondition::Eq("MOVEMENT_STATUS_CREATED"),
)];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a010",
    resolver_name: "Movement",
    table_name: "movement",
    route: "movements",
    menu_group: "menu:stock",
    list_endpoint: None,
    is_editable: false,
    is_deletable: false,
    is_soft_deletable: true,
    status_field: Some("status"),
    label_field: None,
    fields: FIELDS,
    actions: RULES,
};
