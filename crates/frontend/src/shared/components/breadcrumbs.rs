use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::render_label;
use crate::shared::i18n::use_i18n;
use contracts::domain::ModelRegistry;
use contracts::shared::routes::{breadcrumbs, PageRoute};
use leptos::prelude::*;

/// `Home > group > list > label > edit`, crumbs with a target are links
#[component]
pub fn Breadcrumbs(route: PageRoute, #[prop(into)] label: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let route = StoredValue::new(route);

    view! {
        <nav class="breadcrumbs">
            {move || {
                let registry = ModelRegistry::default();
                let crumbs = route.with_value(|r| breadcrumbs(r, &registry, label.get().as_deref()));
                let last = crumbs.len().saturating_sub(1);
                crumbs.into_iter().enumerate().map(|(i, crumb)| {
                    let text = render_label(&crumb.label, &i18n);
                    let link = crumb.target.and_then(|t| PageRoute::parse(&t));
                    view! {
                        {match link {
                            Some(target) => view! {
                                <a class="breadcrumbs__link" on:click=move |_| ctx.navigate(&target)>{text}</a>
                            }.into_any(),
                            None => view! { <span class="breadcrumbs__item">{text}</span> }.into_any(),
                        }}
                        {(i < last).then(|| view! { <span class="breadcrumbs__sep">"›"</span> })}
                    }
                }).collect_view()
            }}
        </nav>
    }
}
