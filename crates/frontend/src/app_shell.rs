//! Оболочка приложения - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - auth gate (показывает LoginPage или MainLayout)
//! - `MainLayout` - основной layout приложения (Shell + Sidebar + Tabs)

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Основной layout приложения с Sidebar и табами.
///
/// Инициализирует router integration для синхронизации табов с URL (?active=...).
/// Пока ни один таб не активен, показывается стартовая страница.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();

    // Синхронизация табов с URL, один раз при создании компонента
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <Show when=move || tabs_store.active.with(Option::is_none)>
                        <HomePage />
                    </Show>
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

/// Оболочка приложения: проверка авторизации.
///
/// Показывает:
/// - `LoginPage` если пользователь не авторизован
/// - `MainLayout` если авторизован
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access_token.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
