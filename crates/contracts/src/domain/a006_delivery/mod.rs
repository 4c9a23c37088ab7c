//! Deliveries: the unit that is estimated, prepared and dispatched.

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
    FieldMetadata::new("status", FieldType::Status("delivery_status"))
        .shown()
        .group("common:general")
        .sortable(),
    FieldMetadata::new("order.name", FieldType::String).shown().group("common:links"),
    FieldMetadata::new("carrier.name", FieldType::String).shown().group("common:links"),
    FieldMetadata::new("carrierId", FieldType::ForeignKey("carriers")).editable(),
    FieldMetadata::new("expectedDeliveryDate", FieldType::Date)
        .shown()
        .group("common:dates")
        .sortable()
        .editable(),
    FieldMetadata::new("nbBoxes", FieldType::Integer).shown().group("common:dimensions"),
    FieldMetadata::new("weight", FieldType::Number).detail().group("common:dimensions"),
    FieldMetadata::new("comment", FieldType::String)
        .detail()
        .group("common:general")
        .editable()
        .max_length(255),
    FieldMetadata::new("created", FieldType::DateTime).detail().group("common:dates"),
    FieldMetadata::new("modified", FieldType::DateTime).detail().group("common:dates"),
];

const ESTIMATE: PageAction = PageAction {
    id: "estimate",
    kind: ActionKind::ExecuteFunction {
        function_name: "cubing_of_delivery",
        id_param: "deliveryId",
    },
    label_key: "actions:estimate",
    confirm: false,
};

const START_PREPARATION: PageAction = PageAction {
    id: "start-preparation",
    kind: ActionKind::Workflow {
        endpoint: "/api/preparation/start",
        id_param: "deliveryId",
    },
    label_key: "actions:start-preparation",
    confirm: true,
};

const PRINT_DELIVERY_NOTE: PageAction = PageAction {
    id: "print-delivery-note",
    kind: ActionKind::Print {
        endpoint: "/api/deliveries/print/delivery-note",
        id_param: "deliveryId",
    },
    label_key: "actions:print-delivery-note",
    confirm: false,
};

const RULES: &[ActionRule] = &[
    ActionRule::new(
        PageAction::EDIT,
        Mode::Update,
        StatusCondition::Eq("DELIVERY_STATUS_CREATED"),
    ),
    ActionRule::new(
        ESTIMATE,
        Mode::Update,
        StatusCondition::In(&["DELIVERY_STATUS_CREATED", "DELIVERY_STATUS_ESTIMATED"]),
    ),
    ActionRule::new(
        START_PREPARATION,
        Mode::Update,
        StatusCondition::Eq("DELIVERY_STATUS_ESTIMATED"),
    ),
    ActionRule::new(
        PRINT_DELIVERY_NOTE,
        Mode::Read,
        StatusCondition::Gte("DELIVERY_STATUS_PREPARED"),
    ),
    ActionRule::new(
        PageAction::CANCEL,
        Mode::Delete,
        StatusCondition::Lt("DELIVERY_STATUS_DISPATCHED"),
    ),
    ActionRule::new(
        PageAction::DELETE,
        Mode::Delete,
        StatusCondition::Eq("DELIVERY_STATUS_CREATED"),
    ),
];

pub static DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_index: "a006",
    resolver_name: "Delivery",
    table_name: "delivery",
    route: "deliveries",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::visible_actions;
    use crate::shared::config::StatusConfig;

    fn ids(status: i64, modes: &[Mode]) -> Vec<&'static str> {
        visible_actions(&DESCRIPTOR, modes, Some(status), StatusConfig::embedded())
            .into_iter()
            .map(|a| a.id)
            .collect()
    }

    #[test]
    fn test_delivery_lifecycle_buttons() {
        assert_eq!(ids(10, &Mode::ALL), vec!["edit", "estimate", "cancel", "delete"]);
        assert_eq!(ids(20, &Mode::ALL), vec!["estimate", "start-preparation", "cancel"]);
        assert_eq!(ids(30, &Mode::ALL), vec!["cancel"]);
        assert_eq!(ids(40, &Mode::ALL), vec!["print-delivery-note", "cancel"]);
        assert_eq!(ids(50, &Mode::ALL), vec!["print-delivery-note"]);
    }

    #[test]
    fn test_reader_only_prints() {
        assert!(ids(10, &[Mode::Read]).is_empty());
        assert_eq!(ids(40, &[Mode::Read]), vec!["print-delivery-note"]);
    }
}
