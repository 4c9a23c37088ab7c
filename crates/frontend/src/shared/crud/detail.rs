use super::actions::ActionBar;
use super::{api, display_text, use_feedback};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::PageHeader;
use crate::shared::i18n::{use_i18n, I18nContext};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use contracts::shared::config::StatusConfig;
use contracts::shared::display::{detail_rows, DetailGroup, DetailRow, DisplayValue};
use contracts::shared::metadata::ModelDescriptor;
use contracts::shared::routes::PageRoute;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

fn render_row(row: DetailRow, is_status: bool, i18n: I18nContext) -> impl IntoView {
    let text = display_text(&row.value, &i18n);
    let value = if is_status && row.value != DisplayValue::Empty {
        view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{text}</Badge>
        }
        .into_any()
    } else {
        view! { <span>{text}</span> }.into_any()
    };
    view! {
        <div class="detail-row">
            <dt class="detail-row__label">{i18n.t(&row.label_key)}</dt>
            <dd class="detail-row__value">{value}</dd>
        </div>
    }
}

fn render_group(
    group: DetailGroup,
    status_field: Option<&'static str>,
    i18n: I18nContext,
) -> impl IntoView {
    view! {
        <section class="detail-group">
            {group.name.map(|name| view! { <h3 class="detail-group__title">{i18n.t(name)}</h3> })}
            <dl class="detail-group__rows">
                {group.rows.into_iter().map(|row| {
                    let is_status = Some(row.field) == status_field;
                    render_row(row, is_status, i18n)
                }).collect_view()}
            </dl>
        </section>
    }
}

/// Read-only view of one element with its action buttons
#[component]
pub fn ItemDetail(descriptor: &'static ModelDescriptor, #[prop(into)] id: String) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let feedback = use_feedback();
    let tab_key = PageRoute::detail(descriptor.route, &id).key();

    let item = RwSignal::new(None::<Value>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let stored_id = StoredValue::new(id.clone());

    let fetch = move || {
        let id = stored_id.get_value();
        let tab_key = PageRoute::detail(descriptor.route, &id).key();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_item(descriptor, &id).await {
                Ok(value) => {
                    let label = descriptor.label_of(&value).unwrap_or_else(|| id.clone());
                    ctx.update_tab_title(&tab_key, detail_tab_label(descriptor.element_key(), &label, false));
                    item.set(Some(value));
                    error.set(None);
                }
                Err(failure) => error.set(Some(feedback.message(&failure))),
            }
            loading.set(false);
        });
    };
    fetch();

    let label = Signal::derive(move || item.with(|i| i.as_ref().and_then(|v| descriptor.label_of(v))));
    let status = Signal::derive(move || item.with(|i| i.as_ref().and_then(|v| descriptor.status_of(v))));
    let title = Signal::derive(move || {
        let name = label.get().unwrap_or_else(|| stored_id.get_value());
        format!("{} {}", i18n.t(&descriptor.element_key()), name)
    });
    log::debug!("ItemDetail: {}", tab_key);

    view! {
        <PageFrame page_id=page_id(&descriptor.full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <PageHeader title=title route=PageRoute::detail(descriptor.route, &id) label=label>
                <Show when=move || item.with(Option::is_some)>
                    <ActionBar
                        descriptor=descriptor
                        id=stored_id.get_value()
                        status=status
                        on_changed=Callback::new(move |_| fetch())
                    />
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
                {move || match item.get() {
                    Some(value) => {
                        let groups = detail_rows(descriptor, &value, StatusConfig::embedded());
                        groups
                            .into_iter()
                            .map(|group| render_group(group, descriptor.status_field, i18n))
                            .collect_view()
                            .into_any()
                    }
                    None if loading.get() => view! {
                        <Flex gap=FlexGap::Small style="justify-content: center; padding: var(--spacing-xl);">
                            <Spinner />
                        </Flex>
                    }
                    .into_any(),
                    None => ().into_any(),
                }}
            </div>
        </PageFrame>
    }
}
