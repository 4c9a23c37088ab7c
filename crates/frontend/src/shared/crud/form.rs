use super::api;
use super::use_feedback;
use super::view_model::FormViewModel;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::PageHeader;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_FORM};
use contracts::domain::ModelRegistry;
use contracts::shared::config::StatusConfig;
use contracts::shared::metadata::{FieldMetadata, FieldType, ModelDescriptor};
use contracts::shared::routes::PageRoute;
use leptos::prelude::*;
use thaw::*;

/// `type` of the `<input>` of a plain field
fn input_type(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Number | FieldType::Integer => "number",
        FieldType::Date => "date",
        FieldType::DateTime => "datetime-local",
        FieldType::Boolean => "checkbox",
        _ => "text",
    }
}

fn input_step(field_type: FieldType) -> Option<&'static str> {
    match field_type {
        FieldType::Number => Some("any"),
        FieldType::Integer => Some("1"),
        _ => None,
    }
}

/// Select over the elements of another entity
#[component]
fn ForeignKeySelect(route: &'static str, name: &'static str, vm: FormViewModel) -> impl IntoView {
    let feedback = use_feedback();
    let options = RwSignal::new(Vec::<(String, String)>::new());

    match ModelRegistry::default().by_route(route) {
        Some(target) => wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_options(target).await {
                Ok(loaded) => options.set(loaded),
                Err(failure) => feedback.failure(&failure),
            }
        }),
        None => log::warn!("foreign key {} points to unknown route {}", name, route),
    }

    let value = move || vm.values.with(|v| v.get(name).to_string());

    view! {
        <select
            class="form__select"
            prop:value=value
            on:change=move |ev| vm.set_value(name, event_target_value(&ev))
        >
            <option value="">"-"</option>
            <For
                each=move || options.get()
                key=|(id, _)| id.clone()
                children=move |(id, label)| {
                    let selected_id = id.clone();
                    view! {
                        <option value=id selected=move || value() == selected_id>{label}</option>
                    }
                }
            />
        </select>
    }
}

/// Input matching the type of one field, with its error below
#[component]
fn FieldInput(field: &'static FieldMetadata, vm: FormViewModel) -> impl IntoView {
    let i18n = use_i18n();
    let name = field.name;
    let value = move || vm.values.with(|v| v.get(name).to_string());
    let required = field.validation.is_required();

    let input = match field.field_type {
        FieldType::Boolean => view! {
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || value() == "true"
                on:change=move |ev| vm.set_value(name, event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        FieldType::Status(scope) | FieldType::Parameter(scope) => {
            let options = StatusConfig::embedded().options(scope);
            view! {
                <select
                    class="form__select"
                    prop:value=value
                    on:change=move |ev| vm.set_value(name, event_target_value(&ev))
                >
                    <option value="">"-"</option>
                    {options.iter().map(|entry| {
                        let code = entry.code.to_string();
                        let selected_code = code.clone();
                        let label = entry.label.clone();
                        view! {
                            <option value=code selected=move || value() == selected_code>
                                {move || i18n.t(&label)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            }
            .into_any()
        }
        FieldType::ForeignKey(route) => view! { <ForeignKeySelect route=route name=name vm=vm /> }.into_any(),
        other => view! {
            <input
                type=input_type(other)
                class="form__input"
                step=input_step(other)
                maxlength=field.validation.max_length.map(|m| m.to_string())
                prop:value=value
                on:input=move |ev| vm.set_value(name, event_target_value(&ev))
            />
        }
        .into_any(),
    };

    let label_key = field.label_key();
    view! {
        <div class="form__group" class:form__group--invalid=move || vm.error_of(name).is_some()>
            <label class="form__label">
                {move || i18n.t(&label_key)}
                {required.then_some(" *")}
            </label>
            {input}
            {move || vm.error_of(name).map(|key| view! {
                <div class="form__error">{i18n.t(key)}</div>
            })}
        </div>
    }
}

/// Add form when `id` is `None`, edit form otherwise.
///
/// Saving replaces the form tab with the detail tab of the element.
#[component]
pub fn AddEditItem(
    descriptor: &'static ModelDescriptor,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let feedback = use_feedback();

    let route = match &id {
        Some(id) => PageRoute::edit(descriptor.route, id),
        None => PageRoute::add(descriptor.route),
    };
    let tab_key = StoredValue::new(route.key());
    let vm = FormViewModel::new(descriptor, id.clone());
    vm.load_if_needed(feedback);

    // Dirty marker on the tab
    Effect::new(move |_| {
        let dirty = vm.is_dirty();
        tab_key.with_value(|key| ctx.set_dirty(key, dirty));
    });

    // Edit tab titled with the element label once loaded
    Effect::new(move |_| {
        if let (Some(label), Some(_)) = (vm.label.get(), vm.id.get_value()) {
            tab_key.with_value(|key| {
                ctx.update_tab_title(key, detail_tab_label(descriptor.element_key(), &label, true))
            });
        }
    });

    let on_saved = Callback::new(move |saved_id: String| {
        tab_key.with_value(|key| {
            ctx.set_dirty(key, false);
            ctx.replace(key, &PageRoute::detail(descriptor.route, &saved_id));
        });
    });

    let on_cancel = move |_| {
        let back = match vm.id.get_value() {
            Some(id) => PageRoute::detail(descriptor.route, &id),
            None => PageRoute::list(descriptor.route),
        };
        tab_key.with_value(|key| ctx.replace(key, &back));
    };

    let title = Signal::derive(move || {
        let element = i18n.t(&descriptor.element_key());
        match (vm.is_create(), vm.label.get()) {
            (true, _) => format!("{}: {}", element, i18n.t("actions:add")),
            (false, Some(label)) => format!("{} {}: {}", element, label, i18n.t("actions:edit")),
            (false, None) => format!("{}: {}", element, i18n.t("actions:edit")),
        }
    });

    let fields: Vec<&'static FieldMetadata> = descriptor.form_fields(vm.is_create()).collect();

    view! {
        <PageFrame page_id=page_id(&descriptor.full_name(), PAGE_CAT_FORM) category=PAGE_CAT_FORM>
            <PageHeader title=title route=route label=vm.label>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(feedback, on_saved)
                    disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                >
                    {icon("check")}
                    {move || i18n.t("actions:save")}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                    {icon("x")}
                    {move || i18n.t("actions:cancel")}
                </Button>
            </PageHeader>

            {move || vm.load_error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="page__content">
                <Show
                    when=move || !vm.loading.get()
                    fallback=|| view! {
                        <Flex gap=FlexGap::Small style="justify-content: center; padding: var(--spacing-xl);">
                            <Spinner />
                        </Flex>
                    }
                >
                    <form class="form" on:submit=move |ev| {
                        ev.prevent_default();
                        vm.save_command(feedback, on_saved);
                    }>
                        {fields.iter().copied().map(|field| view! { <FieldInput field=field vm=vm /> }).collect_view()}
                    </form>
                </Show>
            </div>
        </PageFrame>
    }
}

/// Add form of an entity
#[component]
pub fn AddItem(descriptor: &'static ModelDescriptor) -> impl IntoView {
    view! { <AddEditItem descriptor=descriptor /> }
}

/// Edit form of one element
#[component]
pub fn EditItem(descriptor: &'static ModelDescriptor, #[prop(into)] id: String) -> impl IntoView {
    view! { <AddEditItem descriptor=descriptor id=id /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_types() {
        assert_eq!(input_type(FieldType::Integer), "number");
        assert_eq!(input_step(FieldType::Integer), Some("1"));
        assert_eq!(input_type(FieldType::DateTime), "datetime-local");
        assert_eq!(input_type(FieldType::String), "text");
        assert_eq!(input_step(FieldType::Date), None);
    }
}
