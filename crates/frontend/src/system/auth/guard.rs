use contracts::system::permissions::Mode;
use leptos::prelude::*;
use thaw::*;

use super::context::use_permissions;
use crate::shared::i18n::use_i18n;

/// Renders `children` only when the user holds `mode` on `table_name`.
///
/// While the user is loading a spinner is shown, afterwards a refusal.
#[component]
pub fn RequireMode(table_name: &'static str, mode: Mode, children: ChildrenFn) -> impl IntoView {
    let permissions = use_permissions();
    let i18n = use_i18n();

    move || match permissions.get() {
        None => view! {
            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                <Spinner />
            </Flex>
        }
        .into_any(),
        Some(p) if p.can(table_name, mode) => children().into_any(),
        Some(_) => view! {
            <div class="access-denied">{i18n.t("common:access-denied")}</div>
        }
        .into_any(),
    }
}
