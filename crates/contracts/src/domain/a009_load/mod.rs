//! Truck loads grouping dispatched boxes

use crate::shared::actions::{ActionKind, ActionRule, PageAction, StatusCondition};
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor, SortDirection};
use crate::system::permissions::Mode;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("id", FieldType::String).detail(),
    FieldMetadata::new("name", FieldType::String)
        .shown()
        .default_sort(SortDirection::Descending)
        .creatable()
        .required()
        .max_length(50),
    FieldMetadata::new("carrier.name", FieldType::String).shown(),
    FieldMetadata::new("carrierId", FieldType::ForeignKey("carriers"))
        .editable()
        .required(),
    FieldMetadata::new("loadDate", FieldType::Date)
        .shown()
        .sortable()
        .editable(),
    FieldMetadata::new("nbBoxes", FieldType::Integer).shown(),
    FieldMetadata::new("weight", FieldType::Number).detail(),
    FieldMetadata::new("status", FieldType::Status("load_status"))
        .shown()
        .sortable(),
    FieldMetadata::new("comment", FieldType::String)
        .detail()
        .editable()
        .max_length(255),
    FieldMetadata::new("created", FieldType::DateTime).detail(),
];

const DISPATCH: PageAction = PageAction {
    id: "dispatch",
    kind: ActionKind::Transition {
        target: "LOAD_STATUS_DISPATCHED",
    },
    label_key: "actions:dispatch",
    confirm: true,
};

const PRINT_LABEL: PageAction = PageAction {
    id: "print-label",
    kind: ActionKind::Print {
        endpoint: "/api/loads/print/label",
        id_param: "loadId",
    },
    label_key: "actions:print-label",
    confirm: false,
};

const RULES: &[ActionRule] = &[
    ActionRule::new(
        PageAction::EDIT,
        Mode::Update,
        StatusCondition::Eq("LOAD_STATUS_CREATED"),
    ),
    ActionRule::new(
        DISPATCH,
        Mode::Update,
        StatusCondition::Eq("LOAD_STATUS_IN_PROGRESS"),
    ),
    ActionRule::new(
        PRINT_LABEL,
        Mode::Read,
        StatusCondition::NotEq("LOAD_STATUS_CANCELED"),
    ),
    ActionRule::new(
        PageAction::DELETE,
        Mode::Delete,
        StatusCondition::Eq("LOAD_STATUS_CREATED"),
    ),
];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a009",
    resolver_name: "Load",
    table_name: "load",
    route: "loads",
    menu_group: "menu:outbound",
    list_endpoint: None,
    is_editable: true,
    is_deletable: true,
    is_soft_deletable: false,
    status_field: Some("status"),
    label_field: Some("name"),
    fields: FIELDS,
    actions: RULES,
};
