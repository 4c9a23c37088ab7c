//! Translation context
//!
//! Wraps the embedded catalogs of `contracts::shared::i18n` in a signal so
//! every `t()` call inside a reactive closure re-renders on locale change.

use crate::shared::storage;
use contracts::shared::graphql::GraphqlFailure;
use contracts::shared::i18n::{error_message, Locale, Translator};
use leptos::prelude::*;

const LOCALE_KEY: &str = "ui_locale";

#[derive(Clone, Copy)]
pub struct I18nContext {
    translator: RwSignal<Translator>,
}

impl I18nContext {
    pub fn new() -> Self {
        Self {
            translator: RwSignal::new(Translator::new(initial_locale())),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.with(|t| t.t(key))
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.translator.with(|t| t.t_with(key, args))
    }

    pub fn locale(&self) -> Locale {
        self.translator.with(|t| t.locale)
    }

    pub fn set_locale(&self, locale: Locale) {
        log::debug!("locale -> {}", locale.code());
        storage::set_item(LOCALE_KEY, locale.code());
        self.translator.set(Translator::new(locale));
    }

    /// `errors:<code>` message of a failed call
    pub fn error(&self, failure: &GraphqlFailure) -> String {
        self.translator
            .with_untracked(|t| error_message(t, failure.code.as_deref(), &failure.message))
    }
}

impl Default for I18nContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Stored choice, then the browser language, then English
fn initial_locale() -> Locale {
    if let Some(locale) = storage::get_item(LOCALE_KEY).and_then(|c| Locale::parse(&c)) {
        return locale;
    }
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .and_then(|lang| Locale::parse(&lang))
        .unwrap_or_default()
}

#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    provide_context(I18nContext::new());
    children()
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nProvider not found in component tree")
}
