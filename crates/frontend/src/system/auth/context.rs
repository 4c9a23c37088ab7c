use contracts::shared::graphql::GraphqlFailure;
use contracts::system::auth::UserInfo;
use contracts::system::permissions::{Mode, UserPermissions};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn permissions(&self) -> Option<UserPermissions> {
        self.user_info
            .as_ref()
            .map(|u| UserPermissions::new(u.is_admin, u.permissions.clone()))
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // The stored token opens the shell right away, the user is fetched after
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
        user_info: None,
    });

    Effect::new(move |_| {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(e) => {
                    log::warn!("stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Permissions of the logged-in user, `None` until the user is loaded
pub fn use_permissions() -> Signal<Option<UserPermissions>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.permissions()))
}

/// Modes of the logged-in user on one table
pub fn use_modes(table_name: &'static str) -> Signal<Vec<Mode>> {
    let permissions = use_permissions();
    Signal::derive(move || {
        permissions
            .get()
            .map(|p| p.modes_for(table_name))
            .unwrap_or_default()
    })
}

/// Helper: Store a fresh session
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, access_token: String, user: UserInfo) {
    storage::save_access_token(&access_token);
    set_auth_state.set(AuthState {
        access_token: Some(access_token),
        user_info: Some(user),
    });
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

/// Drop the session when the backend reports an expired token
pub fn logout_if_unauthorized(set_auth_state: WriteSignal<AuthState>, failure: &GraphqlFailure) {
    if failure.code.as_deref() == Some("HTTP_401") {
        log::info!("session expired, logging out");
        do_logout(set_auth_state);
    }
}
