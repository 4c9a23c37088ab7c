use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - previous/next around "Page x of y"
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed, as the list queries count)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let i18n = use_i18n();
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
                title=move || i18n.t("common:previous")
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get().to_string();
                    let total = total_pages.get().max(1).to_string();
                    let count = total_count.get().to_string();
                    format!(
                        "{} ({})",
                        i18n.t_with("common:page", &[("page", &page), ("total", &total)]),
                        i18n.t_with("common:total", &[("count", &count)]),
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
                title=move || i18n.t("common:next")
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
