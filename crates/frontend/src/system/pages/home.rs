use crate::layout::global_context::use_app_context;
use crate::layout::left::sidebar::get_menu_groups;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_SYSTEM};
use crate::system::auth::context::{use_auth, use_permissions};
use contracts::shared::routes::PageRoute;
use leptos::prelude::*;

/// Start page: the entity lists the user may read, by menu group
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let permissions = use_permissions();
    let (auth_state, _) = use_auth();

    let greeting = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
        })
    };

    view! {
        <PageFrame page_id=page_id("home", PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page-header__title">
                    {move || i18n.t("common:home")}
                    {move || greeting().map(|name| format!(" · {}", name))}
                </h1>
            </div>
            <div class="page__content home-groups">
                {move || {
                    get_menu_groups(permissions.get().as_ref())
                        .into_iter()
                        .map(|group| {
                            let group_id = group.id;
                            view! {
                                <section class="home-group">
                                    <h2 class="home-group__title">{i18n.t(group_id)}</h2>
                                    <div class="home-group__items">
                                        {group.items.into_iter().map(|descriptor| {
                                            let route = descriptor.route;
                                            view! {
                                                <a
                                                    class="home-group__item"
                                                    on:click=move |_| ctx.navigate(&PageRoute::list(route))
                                                >
                                                    {icon(route)}
                                                    <span>{i18n.t(&descriptor.list_key())}</span>
                                                </a>
                                            }
                                        }).collect_view()}
                                    </div>
                                </section>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </PageFrame>
    }
}
