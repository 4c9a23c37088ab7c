//! Customer orders. Deliveries are generated from a confirmed order.

use crate::shared::actions::{ActionKind, ActionRule, PageAction, StatusCondition};
use crate::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor, SortDirection};
use crate::system::permissions::Mode;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("id", FieldType::String).detail().group("common:general"),
    FieldMetadata::new("name", FieldType::String)
        .shown()
        .group("common:general")
        .default_sort(SortDirection::Descending)
        .creatable()
        .required()
        .max_length(50),
    FieldMetadata::new("stockOwner.name", FieldType::String)
        .shown()
        .group("common:general")
        .sortable(),
    FieldMetadata::new("stockOwnerId", FieldType::ForeignKey("stock-owners"))
        .creatable()
        .required(),
    FieldMetadata::new("status", FieldType::Status("order_status"))
        .shown()
        .group("common:general")
        .sortable(),
    FieldMetadata::new("priority", FieldType::Integer)
        .shown()
        .group("common:general")
        .editable()
        .range(1.0, 9.0),
    FieldMetadata::new("orderDate", FieldType::Date)
        .shown()
        .group("common:dates")
        .sortable()
        .creatable()
        .required(),
    FieldMetadata::new("expectedDeliveryDate", FieldType::Date)
        .shown()
        .group("common:dates")
        .sortable()
        .editable(),
    FieldMetadata::new("totalAmount", FieldType::Number).detail().group("common:general"),
    FieldMetadata::new("comment", FieldType::String)
        .detail()
        .group("common:general")
        .editable()
        .max_length(255),
    FieldMetadata::new("created", FieldType::DateTime).detail().group("common:dates"),
    FieldMetadata::new("modified", FieldType::DateTime).detail().group("common:dates"),
];

const CONFIRM: PageAction = PageAction {
    id: "confirm",
    kind: ActionKind::Transition {
        target: "ORDER_STATUS_CONFIRMED",
    },
    label_key: "actions:confirm-order",
    confirm: true,
};

const CREATE_DELIVERY: PageAction = PageAction {
    id: "create-delivery",
    kind: ActionKind::ExecuteFunction {
        function_name: "create_delivery_from_order",
        id_param: "orderId",
    },
    label_key: "actions:create-delivery",
    confirm: false,
};

const RULES: &[ActionRule] = &[
    ActionRule::new(
        PageAction::EDIT,
        Mode::Update,
        StatusCondition::Eq("ORDER_STATUS_CREATED"),
    ),
    ActionRule::new(CONFIRM, Mode::Update, StatusCondition::Eq("ORDER_STATUS_CREATED")),
    ActionRule::new(
        CREATE_DELIVERY,
        Mode::Create,
        StatusCondition::Eq("ORDER_STATUS_CONFIRMED"),
    ),
    ActionRule::new(
        PageAction::CANCEL,
        Mode::Delete,
        StatusCondition::Lt("ORDER_STATUS_CLOSED"),
    ),
    ActionRule::new(
        PageAction::DELETE,
        Mode::Delete,
        StatusCondition::Eq("ORDER_STATUS_CREATED"),
    ),
];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a005",
    resolver_name: "Order",
    table_name: "order",
    route: "orders",
    menu_group: "menu:outbound",
    list_endpoint: None,
    is_editable: true,
    is_deletable: true,
    is_soft_deletable: true,
    status_field: Some("status"),
    label_field: Some("name"),
    fields: FIELDS,
    actions: RULES,
};
