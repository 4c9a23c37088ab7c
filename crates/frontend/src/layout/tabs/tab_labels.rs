//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Заголовок хранится как список частей (`CrumbLabel`), ключи i18n
//! переводятся при отрисовке, поэтому смена языка обновляет открытые табы.

use crate::shared::i18n::I18nContext;
use contracts::domain::ModelRegistry;
use contracts::shared::routes::{CrumbLabel, PageRoute};

/// Заголовок таба по его ключу. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> Vec<CrumbLabel> {
    let registry = ModelRegistry::default();
    let route = PageRoute::parse(key);
    let descriptor = route
        .as_ref()
        .and_then(|r| r.entity_route())
        .and_then(|r| registry.by_route(r));

    match (route, descriptor) {
        (Some(PageRoute::List { .. }), Some(d)) => vec![CrumbLabel::Key(d.list_key())],
        (Some(PageRoute::Add { .. }), Some(d)) => vec![
            CrumbLabel::Key(d.element_key()),
            CrumbLabel::Key("actions:add".into()),
        ],
        (Some(PageRoute::Detail { id, .. }), Some(d)) => detail_tab_label(d.element_key(), &id, false),
        (Some(PageRoute::Edit { id, .. }), Some(d)) => detail_tab_label(d.element_key(), &id, true),
        (Some(PageRoute::Home), _) => vec![CrumbLabel::Key("common:home".into())],
        _ => vec![CrumbLabel::Text(key.to_string())],
    }
}

/// "Delivery · DLV-0001", с суффиксом "· Edit" для формы редактирования
pub fn detail_tab_label(element_key: String, identifier: &str, editing: bool) -> Vec<CrumbLabel> {
    let mut parts = vec![
        CrumbLabel::Key(element_key),
        CrumbLabel::Text(identifier.to_string()),
    ];
    if editing {
        parts.push(CrumbLabel::Key("actions:edit".into()));
    }
    parts
}

pub fn render_label(label: &CrumbLabel, i18n: &I18nContext) -> String {
    match label {
        CrumbLabel::Key(key) => i18n.t(key),
        CrumbLabel::Text(text) => text.clone(),
    }
}

pub fn render_title(parts: &[CrumbLabel], i18n: &I18nContext) -> String {
    parts
        .iter()
        .map(|p| render_label(p, i18n))
        .collect::<Vec<_>>()
        .join(" · ")
}
