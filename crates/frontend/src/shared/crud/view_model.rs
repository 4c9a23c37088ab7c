use super::{api, Feedback};
use contracts::shared::forms::{to_input, validate, FieldError, FormValues};
use contracts::shared::metadata::ModelDescriptor;
use leptos::prelude::*;

/// ViewModel of the add/edit form
#[derive(Clone, Copy)]
pub struct FormViewModel {
    pub descriptor: &'static ModelDescriptor,
    /// `None` for the add form
    pub id: StoredValue<Option<String>>,
    pub values: RwSignal<FormValues>,
    /// Values as loaded, the tab is dirty while they differ
    pub initial: RwSignal<FormValues>,
    pub errors: RwSignal<Vec<FieldError>>,
    /// Label of the edited element (breadcrumbs)
    pub label: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl FormViewModel {
    pub fn new(descriptor: &'static ModelDescriptor, id: Option<String>) -> Self {
        let values = match id {
            Some(_) => FormValues::default(),
            None => FormValues::for_create(descriptor),
        };
        Self {
            descriptor,
            id: StoredValue::new(id),
            values: RwSignal::new(values.clone()),
            initial: RwSignal::new(values),
            errors: RwSignal::new(Vec::new()),
            label: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    pub fn is_create(&self) -> bool {
        self.id.with_value(Option::is_none)
    }

    pub fn is_dirty(&self) -> bool {
        self.values.with(|v| self.initial.with(|i| v != i))
    }

    pub fn set_value(&self, name: &str, value: String) {
        self.values.update(|v| v.set(name, value));
        self.errors.update(|errors| errors.retain(|e| e.field != name));
    }

    /// i18n key of the error of one field
    pub fn error_of(&self, name: &str) -> Option<&'static str> {
        self.errors
            .with(|errors| errors.iter().find(|e| e.field == name).map(|e| e.message_key))
    }

    /// Load the edited element, no-op for the add form
    pub fn load_if_needed(&self, feedback: Feedback) {
        let Some(id) = self.id.get_value() else {
            return;
        };
        let this = *self;
        self.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_item(this.descriptor, &id).await {
                Ok(item) => {
                    let values = FormValues::from_item(this.descriptor, &item);
                    this.label.set(this.descriptor.label_of(&item));
                    this.initial.set(values.clone());
                    this.values.set(values);
                }
                Err(failure) => this.load_error.set(Some(feedback.message(&failure))),
            }
            this.loading.set(false);
        });
    }

    /// Validate, then create or update. `on_saved` gets the element id.
    pub fn save_command(&self, feedback: Feedback, on_saved: Callback<String>) {
        let for_create = self.is_create();
        let values = self.values.get_untracked();
        if let Err(errors) = validate(self.descriptor, &values, for_create) {
            log::debug!("form of {} has {} invalid fields", self.descriptor.table_name, errors.len());
            self.errors.set(errors);
            return;
        }
        self.errors.set(Vec::new());

        let input = to_input(self.descriptor, &values, for_create);
        let this = *self;
        self.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match this.id.get_value() {
                None => api::create_item(this.descriptor, input).await,
                Some(id) => api::update_item(this.descriptor, &id, input).await.map(|_| id),
            };
            this.saving.set(false);
            match result {
                Ok(id) => {
                    this.initial.set(values);
                    feedback.success(if for_create {
                        "messages:success-created"
                    } else {
                        "messages:success-updated"
                    });
                    on_saved.run(id);
                }
                Err(failure) => feedback.failure(&failure),
            }
        });
    }
}
