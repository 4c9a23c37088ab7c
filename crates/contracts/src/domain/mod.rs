pub mod a001_article;
pub mod a002_stock_owner;
pub mod a003_location;
pub mod a004_carrier;
pub mod a005_order;
pub mod a006_delivery;
pub mod a007_round;
pub mod a008_cycle_count;
pub mod a009_load;
pub mod a010_movement;

use crate::shared::metadata::ModelDescriptor;

/// Sidebar order of the groups
pub const MENU_GROUPS: &[&str] = &["menu:configuration", "menu:stock", "menu:outbound"];

static ALL: &[&ModelDescriptor] = &[
    &a001_article::DESCRIPTOR,
    &a002_stock_owner::DESCRIPTOR,
    &a003_location::DESCRIPTOR,
    &a004_carrier::DESCRIPTOR,
    &a005_order::DESCRIPTOR,
    &a006_delivery::DESCRIPTOR,
    &a007_round::DESCRIPTOR,
    &a008_cycle_count::DESCRIPTOR,
    &a009_load::DESCRIPTOR,
    &a010_movement::DESCRIPTOR,
];

/// Lookup over the entity descriptors
#[derive(Debug, Clone, Copy)]
pub struct ModelRegistry {
    models: &'static [&'static ModelDescriptor],
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self { models: ALL }
    }
}

impl ModelRegistry {
    pub fn new(models: &'static [&'static ModelDescriptor]) -> Self {
        Self { models }
    }

    pub fn all(&self) -> impl Iterator<Item = &'static ModelDescriptor> {
        self.models.iter().copied()
    }

    pub fn by_route(&self, route: &str) -> Option<&'static ModelDescriptor> {
        self.all().find(|d| d.route == route)
    }

    pub fn by_table(&self, table: &str) -> Option<&'static ModelDescriptor> {
        self.all().find(|d| d.table_name.eq_ignore_ascii_case(table.trim()))
    }

    pub fn by_index(&self, index: &str) -> Option<&'static ModelDescriptor> {
        self.all().find(|d| d.entity_index == index)
    }

    /// Groups in sidebar order with their entities, empty groups skipped
    pub fn menu_groups(&self) -> Vec<(&'static str, Vec<&'static ModelDescriptor>)> {
        let mut groups: Vec<(&'static str, Vec<&'static ModelDescriptor>)> = Vec::new();
        for descriptor in self.all() {
            match groups.iter_mut().find(|(name, _)| *name == descriptor.menu_group) {
                Some((_, models)) => models.push(descriptor),
                None => groups.push((descriptor.menu_group, vec![descriptor])),
            }
        }
        groups.sort_by_key(|(name, _)| {
            MENU_GROUPS
                .iter()
                .position(|g| g == name)
                .unwrap_or(MENU_GROUPS.len())
        });
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::StatusConfig;
    use crate::shared::i18n::{Locale, Translator};
    use crate::shared::actions::{ActionKind, StatusCondition};
    use std::collections::HashSet;

    #[test]
    fn test_every_descriptor_is_valid() {
        for descriptor in ModelRegistry::default().all() {
            descriptor.validate().unwrap();
        }
    }

    #[test]
    fn test_routes_tables_and_indexes_are_unique() {
        let registry = ModelRegistry::default();
        let routes: HashSet<_> = registry.all().map(|d| d.route).collect();
        let tables: HashSet<_> = registry.all().map(|d| d.table_name).collect();
        let indexes: HashSet<_> = registry.all().map(|d| d.entity_index).collect();
        assert_eq!(routes.len(), ALL.len());
        assert_eq!(tables.len(), ALL.len());
        assert_eq!(indexes.len(), ALL.len());
    }

    #[test]
    fn test_status_constants_exist() {
        let config = StatusConfig::embedded();
        for descriptor in ModelRegistry::default().all() {
            for rule in descriptor.actions {
                let names: Vec<&str> = match rule.status {
                    StatusCondition::Any => vec![],
                    StatusCondition::Eq(n)
                    | StatusCondition::NotEq(n)
                    | StatusCondition::Lt(n)
                    | StatusCondition::Gte(n) => vec![n],
                    StatusCondition::In(ns) => ns.to_vec(),
                };
                if let ActionKind::Transition { target } = rule.action.kind {
                    assert!(config.code(target).is_some(), "{}", target);
                }
                for name in names {
                    assert!(config.code(name).is_some(), "{}: {}", descriptor.full_name(), name);
                }
            }
        }
    }

    #[test]
    fn test_labels_are_translated() {
        let t = Translator::new(Locale::En);
        for descriptor in ModelRegistry::default().all() {
            assert!(t.has(&descriptor.list_key()), "{}", descriptor.list_key());
            assert!(t.has(&descriptor.element_key()), "{}", descriptor.element_key());
            assert!(t.has(descriptor.menu_group));
            for field in descriptor.fields {
                assert!(t.has(&field.label_key()), "{}", field.label_key());
            }
            for rule in descriptor.actions {
                assert!(t.has(rule.action.label_key), "{}", rule.action.label_key);
            }
        }
    }

    #[test]
    fn test_lookups() {
        let registry = ModelRegistry::default();
        assert_eq!(registry.by_route("deliveries").map(|d| d.table_name), Some("delivery"));
        assert_eq!(registry.by_table(" Cycle_Count ").map(|d| d.route), Some("cycle-counts"));
        assert_eq!(registry.by_index("a009").map(|d| d.resolver_name), Some("Load"));
        assert!(registry.by_route("nope").is_none());
    }

    #[test]
    fn test_menu_groups_order() {
        let groups = ModelRegistry::default().menu_groups();
        let names: Vec<_> = groups.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, MENU_GROUPS.to_vec());
        let stock: Vec<_> = groups[1].1.iter().map(|d| d.route).collect();
        assert_eq!(stock, vec!["cycle-counts", "movements"]);
    }
}
