use super::{api, display_text, use_feedback};
use crate::layout::global_context::use_app_context;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::system::auth::context::use_modes;
use contracts::shared::config::StatusConfig;
use contracts::shared::display::list_cells;
use contracts::shared::graphql::{ListPage, OrderByCriterion};
use contracts::shared::metadata::{FieldMetadata, ModelDescriptor, SortDirection};
use contracts::shared::routes::PageRoute;
use contracts::system::permissions::Mode;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

/// Clicking the current first sort column flips it, any other column
/// becomes the only (ascending) criterion.
fn next_sort(current: &[OrderByCriterion], field: &str) -> Vec<OrderByCriterion> {
    match current.first() {
        Some(first) if first.field == field => vec![OrderByCriterion {
            field: first.field.clone(),
            ascending: !first.ascending,
        }],
        _ => vec![OrderByCriterion::new(field, SortDirection::Ascending)],
    }
}

fn is_sortable(field: &FieldMetadata) -> bool {
    field.ui.sortable || field.ui.default_sort.is_some()
}

fn sort_indicator(current: &[OrderByCriterion], field: &str) -> &'static str {
    match current.first() {
        Some(first) if first.field == field && first.ascending => " ▲",
        Some(first) if first.field == field => " ▼",
        _ => "",
    }
}

/// Paginated table of an entity, rows open the detail tab
#[component]
pub fn ListItems(descriptor: &'static ModelDescriptor) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let feedback = use_feedback();
    let modes = use_modes(descriptor.table_name);
    let config = StatusConfig::embedded();

    let page = RwSignal::new(1u32);
    let order_by = RwSignal::new(OrderByCriterion::defaults(descriptor));
    let data = RwSignal::new(ListPage::<Value>::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let fetch = move || {
        let page_no = page.get_untracked();
        let sort = order_by.get_untracked();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_list(descriptor, page_no, &sort).await {
                Ok(result) => {
                    data.set(result);
                    error.set(None);
                }
                Err(failure) => error.set(Some(feedback.message(&failure))),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        page.track();
        order_by.track();
        fetch();
    });

    let toggle_sort = move |field: &'static str| {
        order_by.update(|criteria| *criteria = next_sort(criteria, field));
        page.set(1);
    };

    let can_add = Signal::derive(move || {
        modes.get().contains(&Mode::Create) && descriptor.form_fields(true).next().is_some()
    });

    let fields: Vec<&'static FieldMetadata> = descriptor.list_fields().collect();
    let columns = fields.len();

    view! {
        <PageFrame page_id=page_id(&descriptor.full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader
                title=Signal::derive(move || i18n.t(&descriptor.list_key()))
                route=PageRoute::list(descriptor.route)
            >
                <Show when=move || can_add.get()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.navigate(&PageRoute::add(descriptor.route))
                    >
                        {icon("plus")}
                        {move || i18n.t("actions:add")}
                    </Button>
                </Show>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || i18n.t("actions:refresh")}
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="page__content">
                <table class="table__data">
                    <thead>
                        <tr>
                            {fields.iter().copied().map(|field| {
                                let label_key = field.label_key();
                                let sortable = is_sortable(field);
                                view! {
                                    <th
                                        class="table__header-cell"
                                        class:table__header-cell--sortable=sortable
                                        on:click=move |_| {
                                            if sortable {
                                                toggle_sort(field.name);
                                            }
                                        }
                                    >
                                        {move || i18n.t(&label_key)}
                                        {move || order_by.with(|c| sort_indicator(c, field.name))}
                                    </th>
                                }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = data.with(|d| d.results.clone());
                            if rows.is_empty() && !loading.get() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan=columns.to_string()>
                                            {i18n.t("common:no-data")}
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|item| {
                                let id = item.get("id").and_then(Value::as_str).unwrap_or_default().to_string();
                                let cells = list_cells(descriptor, &item, config);
                                view! {
                                    <tr
                                        class="table__row table__row--clickable"
                                        on:click=move |_| {
                                            if !id.is_empty() {
                                                ctx.navigate(&PageRoute::detail(descriptor.route, &id));
                                            }
                                        }
                                    >
                                        {cells.iter().map(|cell| view! {
                                            <td class="table__cell">{display_text(cell, &i18n)}</td>
                                        }).collect_view()}
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>

                <Show when=move || loading.get()>
                    <Flex gap=FlexGap::Small style="justify-content: center; padding: var(--spacing-md);">
                        <Spinner />
                    </Flex>
                </Show>

                <PaginationControls
                    current_page=page
                    total_pages=Signal::derive(move || data.with(|d| d.total_pages))
                    total_count=Signal::derive(move || data.with(|d| d.count))
                    on_page_change=Callback::new(move |p| page.set(p))
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sort_flips_current_column() {
        let current = vec![OrderByCriterion::new("name", SortDirection::Descending)];
        let next = next_sort(&current, "name");
        assert_eq!(next, vec![OrderByCriterion::new("name", SortDirection::Ascending)]);
        assert_eq!(sort_indicator(&next, "name"), " ▲");
        assert_eq!(sort_indicator(&next, "status"), "");
    }

    #[test]
    fn test_next_sort_replaces_other_column() {
        let current = vec![
            OrderByCriterion::new("name", SortDirection::Descending),
            OrderByCriterion::new("created", SortDirection::Descending),
        ];
        assert_eq!(
            next_sort(&current, "status"),
            vec![OrderByCriterion::new("status", SortDirection::Ascending)]
        );
        assert_eq!(next_sort(&[], "name"), vec![OrderByCriterion::new("name", SortDirection::Ascending)]);
    }
}
