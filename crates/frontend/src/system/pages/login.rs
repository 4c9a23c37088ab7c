use contracts::shared::i18n::Locale;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::use_i18n;
use crate::system::auth::{api, context::complete_login, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (warehouse, set_warehouse) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let i18n = use_i18n();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        let warehouse_val = Some(warehouse.get().trim().to_string()).filter(|w| !w.is_empty());

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val, warehouse_val).await {
                Ok(response) => {
                    // переключит AppShell на MainLayout
                    complete_login(set_auth_state, response.access_token, response.user);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    let message = if e.code.as_deref() == Some("HTTP_401") {
                        i18n.t("messages:error-login")
                    } else {
                        i18n.error(&e)
                    };
                    set_error_message.set(Some(message));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"WMS"</h1>
                <h2>{move || i18n.t("common:login")}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">{move || i18n.t("common:username")}</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{move || i18n.t("common:password")}</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="warehouse">{move || i18n.t("common:warehouse")}</label>
                        <input
                            type="text"
                            id="warehouse"
                            value=move || warehouse.get()
                            on:input=move |ev| set_warehouse.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { i18n.t("common:loading") } else { i18n.t("common:login") }}
                    </button>
                </form>

                <div class="login-locale">
                    {Locale::ALL.into_iter().map(|locale| view! {
                        <button
                            class="login-locale__btn"
                            class:login-locale__btn--active=move || i18n.locale() == locale
                            on:click=move |_| i18n.set_locale(locale)
                        >
                            {locale.code().to_uppercase()}
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
