//! Кнопки действий страницы детали.
//!
//! Набор кнопок пересчитывается из режимов пользователя и статуса элемента,
//! подтверждение идёт через `ModalService`.

use super::{api, use_feedback};
use crate::layout::global_context::use_app_context;
use crate::layout::modal_service::use_modal;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::system::auth::context::use_modes;
use contracts::shared::actions::{visible_actions, ActionKind, PageAction};
use contracts::shared::config::StatusConfig;
use contracts::shared::graphql::GraphqlFailure;
use contracts::shared::metadata::ModelDescriptor;
use contracts::shared::routes::PageRoute;
use leptos::prelude::*;
use thaw::*;

/// Что делать после успешного действия
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Элемент удалён: назад к списку
    Deleted,
    /// Элемент изменён: тост и перезагрузка
    Changed(&'static str),
    /// Документ уже открыт
    Printed,
}

fn outcome_of(kind: ActionKind) -> Outcome {
    match kind {
        ActionKind::Delete => Outcome::Deleted,
        ActionKind::SoftDelete => Outcome::Changed("messages:success-disabled"),
        ActionKind::Transition { .. } | ActionKind::Edit => Outcome::Changed("messages:success-updated"),
        ActionKind::ExecuteFunction { .. } | ActionKind::Workflow { .. } => {
            Outcome::Changed("messages:success-action")
        }
        ActionKind::Print { .. } => Outcome::Printed,
    }
}

fn action_icon(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Edit => "edit",
        ActionKind::Delete => "delete",
        ActionKind::SoftDelete => "x-circle",
        ActionKind::Transition { .. } => "check",
        ActionKind::ExecuteFunction { .. } | ActionKind::Workflow { .. } => "play",
        ActionKind::Print { .. } => "printer",
    }
}

fn action_appearance(kind: ActionKind) -> ButtonAppearance {
    match kind {
        ActionKind::Edit | ActionKind::Workflow { .. } => ButtonAppearance::Primary,
        _ => ButtonAppearance::Secondary,
    }
}

async fn perform(
    descriptor: &'static ModelDescriptor,
    kind: ActionKind,
    id: &str,
    language: &str,
) -> Result<(), GraphqlFailure> {
    match kind {
        ActionKind::Edit => Ok(()),
        ActionKind::Delete => api::delete_item(descriptor, id).await,
        ActionKind::SoftDelete => api::soft_delete_item(descriptor, id).await,
        ActionKind::Transition { target } => api::transition(descriptor, id, target).await,
        ActionKind::ExecuteFunction {
            function_name,
            id_param,
        } => api::run_function(function_name, id_param, id).await.map(|_| ()),
        ActionKind::Workflow { endpoint, id_param } => api::run_workflow(endpoint, id_param, id).await,
        ActionKind::Print { endpoint, id_param } => {
            api::print_document(endpoint, id_param, id, language).await
        }
    }
}

/// Кнопки, разрешённые для `status` и режимов пользователя.
///
/// `on_changed` вызывается после действий, меняющих элемент.
#[component]
pub fn ActionBar(
    descriptor: &'static ModelDescriptor,
    #[prop(into)] id: String,
    #[prop(into)] status: Signal<Option<i64>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let modal = use_modal();
    let i18n = use_i18n();
    let feedback = use_feedback();
    let modes = use_modes(descriptor.table_name);
    let busy = RwSignal::new(false);
    let id = StoredValue::new(id);

    let actions = Memo::new(move |_| {
        visible_actions(descriptor, &modes.get(), status.get(), StatusConfig::embedded())
    });

    let execute = move |action: PageAction| {
        let id = id.get_value();
        let language = i18n.locale().code();
        busy.set(true);
        log::debug!("action '{}' on {} {}", action.id, descriptor.table_name, id);
        wasm_bindgen_futures::spawn_local(async move {
            let result = perform(descriptor, action.kind, &id, language).await;
            busy.set(false);
            match (result, outcome_of(action.kind)) {
                (Err(failure), _) => feedback.failure(&failure),
                (Ok(()), Outcome::Deleted) => {
                    feedback.success("messages:success-deleted");
                    ctx.replace(
                        &PageRoute::detail(descriptor.route, &id).key(),
                        &PageRoute::list(descriptor.route),
                    );
                }
                (Ok(()), Outcome::Changed(key)) => {
                    feedback.success(key);
                    on_changed.run(());
                }
                (Ok(()), Outcome::Printed) => {}
            }
        });
    };

    let on_press = move |action: PageAction| {
        if action.kind == ActionKind::Edit {
            ctx.navigate(&PageRoute::edit(descriptor.route, &id.get_value()));
            return;
        }
        if action.requires_confirmation() {
            let verb = i18n.t(action.label_key).to_lowercase();
            let message = i18n.t_with("messages:confirm-action", &[("action", &verb)]);
            modal.confirm(message, Callback::new(move |_| execute(action)));
        } else {
            execute(action);
        }
    };

    view! {
        <Flex gap=FlexGap::Small class="action-bar">
            <For
                each=move || actions.get()
                key=|action| action.id
                children=move |action| {
                    view! {
                        <Button
                            appearance=action_appearance(action.kind)
                            on_click=move |_| on_press(action)
                            disabled=Signal::derive(move || busy.get())
                        >
                            {icon(action_icon(action.kind))}
                            {move || i18n.t(action.label_key)}
                        </Button>
                    }
                }
            />
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes() {
        assert_eq!(outcome_of(ActionKind::Delete), Outcome::Deleted);
        assert_eq!(
            outcome_of(ActionKind::SoftDelete),
            Outcome::Changed("messages:success-disabled")
        );
        assert_eq!(
            outcome_of(ActionKind::Workflow {
                endpoint: "/api/preparation/start",
                id_param: "deliveryId",
            }),
            Outcome::Changed("messages:success-action")
        );
        assert_eq!(
            outcome_of(ActionKind::Print {
                endpoint: "/api/loads/print/label",
                id_param: "loadId",
            }),
            Outcome::Printed
        );
    }

    #[test]
    fn test_icons() {
        assert_eq!(action_icon(ActionKind::Edit), "edit");
        assert_eq!(
            action_icon(ActionKind::Transition {
                target: "LOAD_STATUS_DISPATCHED"
            }),
            "check"
        );
    }
}
