use crate::shared::actions::{ActionKind, ActionRule, PageAction, StatusCondition};
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor, SortDirection};
use crate::system::permissions::Mode;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("id", FieldType::String).detail().group("common:general"),
    FieldMetadata::new("name", FieldType::String)
        .shown()
        .group("common:general")
        .default_sort(SortDirection::Descending)
        .editable()
        .required()
        .max_length(50),
    FieldMetadata::new("stockOwner.name", FieldType::String)
        .shown()
        .group("common:general"),
    FieldMetadata::new("stockOwnerId", FieldType::ForeignKey("stock-owners"))
        .creatable()
        .required(),
    FieldMetadata::new("status", FieldType::Status("cycle_count_status"))
        .shown()
        .group("common:general")
        .sortable(),
    FieldMetadata::new("model", FieldType::String)
        .detail()
        .group("common:general")
        .editable(),
    FieldMetadata::new("comment", FieldType::String)
        .detail()
        .group("common:general")
        .editable()
        .max_length(255),
    FieldMetadata::new("startedAt", FieldType::DateTime)
        .shown()
        .group("common:dates")
        .sortable(),
    FieldMetadata::new("completedAt", FieldType::DateTime).detail().group("common:dates"),
    FieldMetadata::new("created", FieldType::DateTime).detail().group("common:dates"),
    FieldMetadata::new("createdBy", FieldType::String).detail().group("common:dates"),
];

const START: PageAction = PageAction {
    id: "start",
    kind: ActionKind::Workflow {
        endpoint: "/api/cycle-count/start",
        id_param: "cycleCountId",
    },
    label_key: "actions:start-cycle-count",
    confirm: true,
};

const RULES: &[ActionRule] = &[
    ActionRule::new(
        PageAction::EDIT,
        Mode::Update,
        StatusCondition::Eq("CYCLE_COUNT_STATUS_CREATED"),
    ),
    ActionRule::new(
        START,
        Mode::Update,
        StatusCondition::Eq("CYCLE_COUNT_STATUS_CREATED"),
    ),
    ActionRule::new(
        PageAction::CANCEL,
        Mode::Delete,
        StatusCondition::Lt("CYCLE_COUNT_STATUS_COMPLETED"),
    ),
    ActionRule::new(
        PageAction::DELETE,
        Mode::Delete,
        StatusCondition::Eq("CYCLE_COUNT_STATUS_CREATED"),
    ),
];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a008",
    resolver_name: "CycleCount",
    table_name: "cycle_count",
    route: "cycle-counts",
    menu_group: "menu:stock",
    list_endpoint: None,
    is_editable: true,
    is_deletable: true,
    is_soft_deletable: true,
    status_field: Some("status"),
    label_field: Some("name"),
    fields: FIELDS,
    actions: RULES,
};
