use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Left zone, collapsed with the header toggle
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </aside>
    }
}
