//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle button for the sidebar
//! - Application title
//! - Language selector
//! - User info and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use contracts::shared::i18n::Locale;
use leptos::prelude::*;

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for sidebar visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let i18n = use_i18n();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        ctx.close_all();
        do_logout(set_auth_state);
    };

    let on_locale_change = move |ev| {
        if let Some(locale) = Locale::parse(&event_target_value(&ev)) {
            i18n.set_locale(locale);
        }
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"WMS Admin"</span>
            </div>

            <div class="top-header__actions">
                <select
                    class="top-header__locale"
                    title=move || i18n.t("common:language")
                    on:change=on_locale_change
                    prop:value=move || i18n.locale().code()
                >
                    {Locale::ALL.into_iter().map(|locale| view! {
                        <option value=locale.code() selected=move || i18n.locale() == locale>
                            {locale.code().to_uppercase()}
                        </option>
                    }).collect_view()}
                </select>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.full_name.unwrap_or(u.username))
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title=move || i18n.t("common:logout")>
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
