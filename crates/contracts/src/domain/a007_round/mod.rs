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
    FieldMetadata::new("stockOwner.name", FieldType::String).shown(),
    FieldMetadata::new("stockOwnerId", FieldType::ForeignKey("stock-owners"))
        .creatable()
        .required(),
    FieldMetadata::new("equipment", FieldType::String).shown().creatable(),
    FieldMetadata::new("status", FieldType::Status("round_status"))
        .shown()
        .sortable(),
    FieldMetadata::new("nbBoxes", FieldType::Integer).detail(),
    FieldMetadata::new("created", FieldType::DateTime).shown().sortable(),
    FieldMetadata::new("modified", FieldType::DateTime).detail(),
];

const CALCULATE: PageAction = PageAction {
    id: "calculate",
    kind: ActionKind::ExecuteFunction {
        function_name: "round_calculate",
        id_param: "roundId",
    },
    label_key: "actions:calculate-round",
    confirm: false,
};

const RULES: &[ActionRule] = &[
    ActionRule::new(CALCULATE, Mode::Update, StatusCondition::Eq("ROUND_STATUS_CREATED")),
    ActionRule::new(
        PageAction::CANCEL,
        Mode::Delete,
        StatusCondition::Lt("ROUND_STATUS_STARTED"),
    ),
    ActionRule::new(
        PageAction::DELETE,
        Mode::Delete,
        StatusCondition::Eq("ROUND_STATUS_CREATED"),
    ),
];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a007",
    resolver_name: "Round",
    table_name: "round",
    route: "rounds",
    menu_group: "menu:outbound",
    list_endpoint: None,
    is_editable: false,
    is_deletable: true,
    is_soft_deletable: true,
    status_field: Some("status"),
    label_field: Some("name"),
    fields: FIELDS,
    actions: RULES,
};
