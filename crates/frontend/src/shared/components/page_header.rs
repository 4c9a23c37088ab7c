use crate::shared::components::breadcrumbs::Breadcrumbs;
use contracts::shared::routes::PageRoute;
use leptos::prelude::*;

/// PageHeader component - breadcrumbs, title and the page buttons
#[component]
pub fn PageHeader(
    /// Page title
    #[prop(into)]
    title: Signal<String>,

    /// Route of the page, drives the breadcrumbs
    route: PageRoute,

    /// Entity label shown in the breadcrumbs instead of the id
    #[prop(optional, into)]
    label: Signal<Option<String>>,

    /// Buttons (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page-header__content">
                <Breadcrumbs route=route label=label />
                <h1 class="page-header__title">{move || title.get()}</h1>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
