//! Articles: the catalogue of stored items.

use crate::shared::actions::{ActionRule, PageAction, StatusCondition};
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor, SortDirection};
use crate::system::permissions::Mode;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("id", FieldType::String).detail().group("common:general"),
    FieldMetadata::new("name", FieldType::String)
        .shown()
        .group("common:general")
        .default_sort(SortDirection::Ascending)
        .editable()
        .required()
        .max_length(100),
    FieldMetadata::new("description", FieldType::String)
        .detail()
        .group("common:general")
        .editable()
        .max_length(255),
    FieldMetadata::new("stockOwner.name", FieldType::String)
        .shown()
        .group("common:general")
        .sortable(),
    FieldMetadata::new("stockOwnerId", FieldType::ForeignKey("stock-owners"))
        .creatable()
        .required(),
    FieldMetadata::new("status", FieldType::Status("article_status"))
        .shown()
        .group("common:general")
        .sortable(),
    FieldMetadata::new("length", FieldType::Number)
        .detail()
        .group("common:dimensions")
        .editable()
        .min(0.0),
    FieldMetadata::new("width", FieldType::Number)
        .detail()
        .group("common:dimensions")
        .editable()
        .min(0.0),
    FieldMetadata::new("height", FieldType::Number)
        .detail()
        .group("common:dimensions")
        .editable()
        .min(0.0),
    FieldMetadata::new("baseUnitWeight", FieldType::Number)
        .shown()
        .group("common:dimensions")
        .editable()
        .min(0.0),
    FieldMetadata::new("created", FieldType::DateTime).detail().group("common:dates"),
    FieldMetadata::new("modified", FieldType::DateTime).detail().group("common:dates"),
];

const RULES: &[ActionRule] = &[
    ActionRule::new(PageAction::EDIT, Mode::Update, StatusCondition::Any),
    ActionRule::new(PageAction::DELETE, Mode::Delete, StatusCondition::Any),
    ActionRule::new(
        PageAction::DISABLE,
        Mode::Delete,
        StatusCondition::NotEq("ARTICLE_STATUS_DISABLED"),
    ),
];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a001",
    resolver_name: "Article",
    table_name: "article",
    route: "articles",
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
