use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::shared::i18n::I18nProvider;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Confirmation dialogs and notifications are shared by every page
    provide_context(ModalService::new());
    provide_context(ToastService::new());

    view! {
        <I18nProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
        </I18nProvider>
    }
}
