//! Sidebar component with collapsible menu groups
//!
//! Groups and items come from the model registry. An entity is listed only
//! when the user holds `Read` on its table, empty groups are hidden.

use crate::layout::global_context::use_app_context;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::system::auth::context::use_permissions;
use contracts::domain::ModelRegistry;
use contracts::shared::metadata::ModelDescriptor;
use contracts::shared::routes::PageRoute;
use contracts::system::permissions::{Mode, UserPermissions};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub icon: &'static str,
    pub items: Vec<&'static ModelDescriptor>,
}

fn group_icon(group: &str) -> &'static str {
    match group {
        "menu:configuration" => "settings",
        "menu:stock" => "layers",
        "menu:outbound" => "send",
        _ => "",
    }
}

pub fn get_menu_groups(permissions: Option<&UserPermissions>) -> Vec<MenuGroup> {
    let Some(permissions) = permissions else {
        return Vec::new();
    };
    ModelRegistry::default()
        .menu_groups()
        .into_iter()
        .map(|(id, items)| MenuGroup {
            id,
            icon: group_icon(id),
            items: items
                .into_iter()
                .filter(|d| permissions.can(d.table_name, Mode::Read))
                .collect(),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let permissions = use_permissions();
    let i18n = use_i18n();

    let expanded_groups = RwSignal::new(vec![
        "menu:configuration".to_string(),
        "menu:stock".to_string(),
        "menu:outbound".to_string(),
    ]);

    // Entity route of the active tab
    let active_route = Memo::new(move |_| {
        ctx.active
            .get()
            .and_then(|key| PageRoute::parse(&key))
            .and_then(|route| route.entity_route().map(str::to_string))
    });

    view! {
        <div class="app-sidebar__content">
            {move || permissions.with(|p| get_menu_groups(p.as_ref())).into_iter().map(|group| {
                let group_id = group.id;
                let group_icon = group.icon;
                let items = group.items;
                let is_expanded = move || expanded_groups.get().iter().any(|g| g == group_id);

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id.to_string());
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group_icon)}
                                <span>{move || i18n.t(group_id)}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Children
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.iter().map(|descriptor| {
                                    let route = descriptor.route;
                                    let list_key = descriptor.list_key();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                active_route.get().as_deref() == Some(route)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.navigate(&PageRoute::list(route))
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(route)}
                                                <span>{move || i18n.t(&list_key)}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
