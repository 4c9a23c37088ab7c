//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Ключ таба это маршрут страницы, см. `contracts::shared::routes::PageRoute`.

use crate::domain::render_entity_page;
use crate::shared::i18n::use_i18n;
use crate::system::pages::home::HomePage;
use contracts::shared::routes::PageRoute;
use leptos::prelude::*;

/// Рендерит контент таба по ключу
pub fn render_tab_content(key: &str) -> AnyView {
    let page = match PageRoute::parse(key) {
        Some(PageRoute::Home) => Some(view! { <HomePage /> }.into_any()),
        Some(route) => render_entity_page(&route),
        None => None,
    };
    page.unwrap_or_else(|| {
        log::warn!("no page for tab key '{}'", key);
        view! { <NotFound /> }.into_any()
    })
}

#[component]
fn NotFound() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="page page--not-found">
            <h1 class="page-header__title">{move || i18n.t("common:not-found")}</h1>
        </div>
    }
}
