use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use thaw::*;

/// Вопрос, ожидающий подтверждения пользователя
#[derive(Clone)]
pub struct ConfirmRequest {
    pub message: String,
    pub on_confirm: Callback<()>,
}

/// Сервис для централизованного управления модальными окнами
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
    request: RwSignal<Option<ConfirmRequest>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
            request: RwSignal::new(None),
        }
    }

    /// Показать модальное окно
    fn show(&self) {
        self.is_visible.set(true);
    }

    /// Скрыть модальное окно
    pub fn hide(&self) {
        self.is_visible.set(false);
        self.request.set(None);
    }

    /// Спросить подтверждение, `on_confirm` вызывается только после "Подтвердить"
    pub fn confirm(&self, message: impl Into<String>, on_confirm: Callback<()>) {
        self.request.set(Some(ConfirmRequest {
            message: message.into(),
            on_confirm,
        }));
        self.show();
    }

    fn accept(&self) {
        let request = self.request.get_untracked();
        self.hide();
        if let Some(request) = request {
            request.on_confirm.run(());
        }
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Компонент модального окна
#[component]
pub fn Modal(children: ChildrenFn) -> impl IntoView {
    let modal = use_modal();

    view! {
        {move || {
            if modal.is_visible.get() {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| modal.hide()
                    >
                        <div
                            class="modal-content"
                            on:click=|e| e.stop_propagation()
                        >
                            {children()}
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

/// Диалог подтверждения для удаления, отмены и других необратимых действий
#[component]
pub fn ConfirmModal() -> impl IntoView {
    let modal = use_modal();
    let i18n = use_i18n();

    view! {
        <Modal>
            <div class="confirm-dialog">
                <h3 class="confirm-dialog__title">{move || i18n.t("common:confirm-title")}</h3>
                <p class="confirm-dialog__message">
                    {move || modal.request.get().map(|r| r.message).unwrap_or_default()}
                </p>
                <div class="confirm-dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| modal.hide()>
                        {move || i18n.t("actions:cancel")}
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.accept()>
                        {move || i18n.t("actions:confirm")}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_runs_callback_once() {
        let modal = ModalService::new();
        let calls = RwSignal::new(0);
        modal.confirm("Supprimer ?", Callback::new(move |_| calls.update(|c| *c += 1)));
        assert!(modal.is_visible.get_untracked());
        assert_eq!(
            modal.request.get_untracked().map(|r| r.message),
            Some("Supprimer ?".to_string())
        );

        modal.accept();
        modal.accept();
        assert_eq!(calls.get_untracked(), 1);
        assert!(!modal.is_visible.get_untracked());
    }

    #[test]
    fn test_hide_drops_request() {
        let modal = ModalService::new();
        let calls = RwSignal::new(0);
        modal.confirm("?", Callback::new(move |_| calls.update(|c| *c += 1)));
        modal.hide();
        modal.accept();
        assert_eq!(calls.get_untracked(), 0);
        assert!(modal.request.get_untracked().is_none());
    }
}
