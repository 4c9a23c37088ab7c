//! Page action rules
//!
//! A detail page shows a button per [`PageAction`] whose rule holds for the
//! current user's modes and the entity status. Status conditions name
//! `configs.json` constants and are resolved through [`StatusConfig`].

use crate::shared::config::StatusConfig;
use crate::shared::metadata::ModelDescriptor;
use crate::system::permissions::Mode;

/// What pressing the button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Open the edit route
    Edit,
    /// Hard delete, then back to the list
    Delete,
    /// Disable/cancel through the soft delete mutation
    SoftDelete,
    /// Update mutation setting the status to the named config code
    Transition { target: &'static str },
    /// `executeFunction` RPC, the id is sent as `event.input.<id_param>`
    ExecuteFunction {
        function_name: &'static str,
        id_param: &'static str,
    },
    /// POST to a local REST route with `{ <id_param>: id }`
    Workflow {
        endpoint: &'static str,
        id_param: &'static str,
    },
    /// POST to a local print route, the response is a document
    Print {
        endpoint: &'static str,
        id_param: &'static str,
    },
}

/// Button descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAction {
    pub id: &'static str,
    pub kind: ActionKind,
    pub label_key: &'static str,
    pub confirm: bool,
}

impl PageAction {
    pub const EDIT: PageAction = PageAction {
        id: "edit",
        kind: ActionKind::Edit,
        label_key: "actions:edit",
        confirm: false,
    };

    pub const DELETE: PageAction = PageAction {
        id: "delete",
        kind: ActionKind::Delete,
        label_key: "actions:delete",
        confirm: true,
    };

    pub const DISABLE: PageAction = PageAction {
        id: "disable",
        kind: ActionKind::SoftDelete,
        label_key: "actions:disable",
        confirm: true,
    };

    pub const CANCEL: PageAction = PageAction {
        id: "cancel",
        kind: ActionKind::SoftDelete,
        label_key: "actions:cancel",
        confirm: true,
    };

    pub fn requires_confirmation(&self) -> bool {
        self.confirm
    }
}

/// Condition on the entity status, constants are `configs.json` names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCondition {
    Any,
    Eq(&'static str),
    NotEq(&'static str),
    Lt(&'static str),
    Gte(&'static str),
    In(&'static [&'static str]),
}

impl StatusCondition {
    /// Unknown constants and missing statuses never match (except `Any`)
    pub fn holds(&self, status: Option<i64>, config: &StatusConfig) -> bool {
        let status = match (self, status) {
            (StatusCondition::Any, _) => return true,
            (_, None) => return false,
            (_, Some(status)) => status,
        };
        let code = |name: &str| config.code(name);

        match self {
            StatusCondition::Any => true,
            StatusCondition::Eq(name) => code(name).is_some_and(|c| status == c),
            StatusCondition::NotEq(name) => code(name).is_some_and(|c| status != c),
            StatusCondition::Lt(name) => code(name).is_some_and(|c| status < c),
            StatusCondition::Gte(name) => code(name).is_some_and(|c| status >= c),
            StatusCondition::In(names) => names
                .iter()
                .any(|name| code(name).is_some_and(|c| status == c)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRule {
    pub action: PageAction,
    pub mode: Mode,
    pub status: StatusCondition,
}

impl ActionRule {
    pub const fn new(action: PageAction, mode: Mode, status: StatusCondition) -> Self {
        Self {
            action,
            mode,
            status,
        }
    }
}

/// Rules of entities without bespoke buttons
pub const DEFAULT_RULES: &[ActionRule] = &[
    ActionRule::new(PageAction::EDIT, Mode::Update, StatusCondition::Any),
    ActionRule::new(PageAction::DELETE, Mode::Delete, StatusCondition::Any),
    ActionRule::new(PageAction::DISABLE, Mode::Delete, StatusCondition::Any),
];

/// Actions to render, in rule order.
///
/// Capability flags of the descriptor gate the generic kinds: `Edit` needs
/// `is_editable`, `Delete` needs `is_deletable`, `SoftDelete` needs
/// `is_soft_deletable`.
pub fn visible_actions(
    descriptor: &ModelDescriptor,
    modes: &[Mode],
    status: Option<i64>,
    config: &StatusConfig,
) -> Vec<PageAction> {
    descriptor
        .actions
        .iter()
        .filter(|rule| modes.contains(&rule.mode))
        .filter(|rule| match rule.action.kind {
            ActionKind::Edit => descriptor.is_editable,
            ActionKind::Delete => descriptor.is_deletable,
            ActionKind::SoftDelete => descriptor.is_soft_deletable,
            _ => true,
        })
        .filter(|rule| rule.status.holds(status, config))
        .map(|rule| rule.action)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{FieldMetadata, FieldType};

    const FIELDS: &[FieldMetadata] = &[
        FieldMetadata::new("id", FieldType::String),
        FieldMetadata::new("status", FieldType::Status("delivery_status")),
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

    const RULES: &[ActionRule] = &[
        ActionRule::new(
            PageAction::EDIT,
            Mode::Update,
            StatusCondition::Eq("DELIVERY_STATUS_CREATED"),
        ),
        ActionRule::new(
            PageAction::CANCEL,
            Mode::Delete,
            StatusCondition::Lt("DELIVERY_STATUS_DISPATCHED"),
        ),
        ActionRule::new(
            ESTIMATE,
            Mode::Update,
            StatusCondition::In(&["DELIVERY_STATUS_CREATED", "DELIVERY_STATUS_ESTIMATED"]),
        ),
        ActionRule::new(PageAction::DELETE, Mode::Delete, StatusCondition::Any),
    ];

    const DELIVERY: ModelDescriptor = ModelDescriptor {
        entity_index: "t006",
        resolver_name: "Delivery",
        table_name: "delivery",
        route: "deliveries",
        menu_group: "menu:outbound",
        list_endpoint: None,
        is_editable: true,
        is_deletable: false,
        is_soft_deletable: true,
        status_field: Some("status"),
        label_field: None,
        fields: FIELDS,
        actions: RULES,
    };

    fn ids(actions: Vec<PageAction>) -> Vec<&'static str> {
        actions.into_iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_all_modes_created_status() {
        let config = StatusConfig::embedded();
        let actions = visible_actions(&DELIVERY, &Mode::ALL, Some(10), config);
        // delete is dropped: the descriptor is not deletable
        assert_eq!(ids(actions), vec!["edit", "cancel", "estimate"]);
    }

    #[test]
    fn test_status_gates_buttons() {
        let config = StatusConfig::embedded();
        let estimated = visible_actions(&DELIVERY, &Mode::ALL, Some(20), config);
        assert_eq!(ids(estimated), vec!["cancel", "estimate"]);

        let dispatched = visible_actions(&DELIVERY, &Mode::ALL, Some(50), config);
        assert!(dispatched.is_empty());
    }

    #[test]
    fn test_modes_gate_buttons() {
        let config = StatusConfig::embedded();
        let read_only = visible_actions(&DELIVERY, &[Mode::Read], Some(10), config);
        assert!(read_only.is_empty());

        let updater = visible_actions(&DELIVERY, &[Mode::Read, Mode::Update], Some(10), config);
        assert_eq!(ids(updater), vec!["edit", "estimate"]);
    }

    #[test]
    fn test_missing_status_only_matches_any() {
        let config = StatusConfig::embedded();
        let deletable = ModelDescriptor {
            is_deletable: true,
            ..DELIVERY
        };
        let actions = visible_actions(&deletable, &Mode::ALL, None, config);
        assert_eq!(ids(actions), vec!["delete"]);
    }

    #[test]
    fn test_unknown_constant_never_matches() {
        let config = StatusConfig::embedded();
        assert!(!StatusCondition::Eq("NOPE").holds(Some(10), config));
        assert!(!StatusCondition::NotEq("NOPE").holds(Some(10), config));
        assert!(StatusCondition::NotEq("DELIVERY_STATUS_CANCELED").holds(Some(10), config));
        assert!(StatusCondition::Gte("DELIVERY_STATUS_PREPARED").holds(Some(40), config));
    }

    #[test]
    fn test_default_rules_follow_capability_flags() {
        let config = StatusConfig::embedded();
        let plain = ModelDescriptor {
            is_deletable: true,
            is_soft_deletable: false,
            actions: DEFAULT_RULES,
            ..DELIVERY
        };
        let actions = visible_actions(&plain, &Mode::ALL, Some(10), config);
        assert_eq!(ids(actions), vec!["edit", "delete"]);
    }
}
