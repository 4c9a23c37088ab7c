use crate::shared::actions::{ActionRule, PageAction, StatusCondition};
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor, SortDirection};
use crate::system::permissions::Mode;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("id", FieldType::String).detail(),
    FieldMetadata::new("name", FieldType::String)
        .shown()
        .default_sort(SortDirection::Ascending)
        .editable()
        .required()
        .max_length(50),
    FieldMetadata::new("aisle", FieldType::String).shown().editable().max_length(10),
    FieldMetadata::new("column", FieldType::String).shown().editable().max_length(10),
    FieldMetadata::new("level", FieldType::String).shown().editable().max_length(10),
    FieldMetadata::new("position", FieldType::String).detail().editable().max_length(10),
    FieldMetadata::new("category", FieldType::Parameter("location_category"))
        .shown()
        .editable()
        .required(),
    FieldMetadata::new("stockStatus", FieldType::Parameter("stock_status"))
        .shown()
        .editable(),
    FieldMetadata::new("replenish", FieldType::Boolean).detail().editable(),
    FieldMetadata::new("status", FieldType::Status("location_status")).shown(),
    FieldMetadata::new("created", FieldType::DateTime).detail(),
    FieldMetadata::new("modified", FieldType::DateTime).detail(),
];

const RULES: &[ActionRule] = &[
    ActionRule::new(PageAction::EDIT, Mode::Update, StatusCondition::Any),
    ActionRule::new(PageAction::DELETE, Mode::Delete, StatusCondition::Any),
    ActionRule::new(
        PageAction::DISABLE,
        Mode::Delete,
        StatusCondition::NotEq("LOCATION_STATUS_DISABLED"),
    ),
];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a003",
    resolver_name: "Location",
    table_name: "location",
    route: "locations",
    menu_group: "menu:configuration",
    list_endpoint: None,
    is_editable: true,
    is_deletable: true,
    is_soft_deletable: true,
    status_field: Some("status"),
    label_field: Some("name"),
    fields: FIELDS,
    actions: RULES,
};
