//! Generic CRUD pages driven by a `ModelDescriptor`
//!
//! - `list`: paginated, sortable table (`ListItems`)
//! - `detail`: grouped read-only view with the action buttons (`ItemDetail`)
//! - `form`: add/edit form (`AddEditItem`, `AddItem`, `EditItem`)
//! - `actions`: status-gated buttons of the detail page
//! - `api`: GraphQL and REST calls behind them

pub mod actions;
pub mod api;
pub mod detail;
pub mod form;
pub mod list;
pub mod view_model;

pub use detail::ItemDetail;
pub use form::{AddEditItem, AddItem, EditItem};
pub use list::ListItems;

use crate::shared::i18n::{use_i18n, I18nContext};
use crate::shared::toast::{use_toast, ToastService};
use crate::system::auth::context::{logout_if_unauthorized, use_auth, AuthState};
use contracts::shared::display::DisplayValue;
use contracts::shared::graphql::GraphqlFailure;
use leptos::prelude::*;

/// Toasts for the outcome of a call, expired sessions log out
#[derive(Clone, Copy)]
pub struct Feedback {
    i18n: I18nContext,
    toast: ToastService,
    set_auth_state: WriteSignal<AuthState>,
}

impl Feedback {
    /// Translated message of a failure, handling an expired session
    pub fn message(&self, failure: &GraphqlFailure) -> String {
        logout_if_unauthorized(self.set_auth_state, failure);
        self.i18n.error(failure)
    }

    pub fn failure(&self, failure: &GraphqlFailure) {
        let message = self.message(failure);
        self.toast.error(message);
    }

    pub fn success(&self, key: &str) {
        self.toast.success(self.i18n.t(key));
    }
}

pub fn use_feedback() -> Feedback {
    let (_, set_auth_state) = use_auth();
    Feedback {
        i18n: use_i18n(),
        toast: use_toast(),
        set_auth_state,
    }
}

/// Text of a list cell or detail value
pub fn display_text(value: &DisplayValue, i18n: &I18nContext) -> String {
    match value {
        DisplayValue::Text(text) => text.clone(),
        DisplayValue::Translated(key) => i18n.t(key),
        DisplayValue::Empty => "-".to_string(),
    }
}
