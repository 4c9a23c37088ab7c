//! Translation catalogs
//!
//! Keys have the `namespace:key` form (`actions:edit`, `errors:FAPI_000002`).
//! A key without namespace belongs to `common`. Lookups fall back to English,
//! then to the bare key.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

type Catalog = HashMap<String, HashMap<String, String>>;

static CATALOGS: Lazy<HashMap<Locale, Catalog>> = Lazy::new(|| {
    Locale::ALL
        .into_iter()
        .map(|locale| {
            let catalog: Catalog = serde_json::from_str(locale.source())
                .expect("embedded translation catalog is valid JSON");
            (locale, catalog)
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// `fr`, `fr-FR`, `FR` all give `Fr`
    pub fn parse(code: &str) -> Option<Locale> {
        let lang = code.trim().split(['-', '_']).next().unwrap_or("");
        Locale::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(lang))
    }

    fn source(&self) -> &'static str {
        match self {
            Locale::En => include_str!("en.json"),
            Locale::Fr => include_str!("fr.json"),
        }
    }
}

fn split_key(key: &str) -> (&str, &str) {
    key.split_once(':').unwrap_or(("common", key))
}

fn lookup(locale: Locale, namespace: &str, key: &str) -> Option<&'static str> {
    CATALOGS
        .get(&locale)?
        .get(namespace)?
        .get(key)
        .map(String::as_str)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    pub locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Translation or `None` when no catalog has the key
    pub fn try_t(&self, key: &str) -> Option<&'static str> {
        let (namespace, name) = split_key(key);
        lookup(self.locale, namespace, name).or_else(|| lookup(Locale::En, namespace, name))
    }

    pub fn t(&self, key: &str) -> String {
        match self.try_t(key) {
            Some(text) => text.to_string(),
            None => split_key(key).1.to_string(),
        }
    }

    /// Translation with `{{name}}` placeholders replaced
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{{{}}}}}", name), value)
        })
    }

    pub fn has(&self, key: &str) -> bool {
        self.try_t(key).is_some()
    }
}

/// Message for a failed call: `errors:<code>` when translated, otherwise the
/// generic message followed by the raw one.
pub fn error_message(translator: &Translator, code: Option<&str>, raw: &str) -> String {
    if let Some(text) = code.and_then(|code| translator.try_t(&format!("errors:{}", code))) {
        return text.to_string();
    }
    let generic = translator.t("messages:error-generic");
    if raw.trim().is_empty() {
        generic
    } else {
        format!("{}: {}", generic, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_load() {
        for locale in Locale::ALL {
            assert!(CATALOGS.get(&locale).is_some_and(|c| c.contains_key("errors")));
        }
    }

    #[test]
    fn test_lookup_and_fallbacks() {
        let fr = Translator::new(Locale::Fr);
        assert_eq!(fr.t("actions:edit"), "Modifier");
        assert_eq!(fr.t("yes"), "Oui");
        // missing in fr, present in en
        assert_eq!(fr.t("d:id"), "Id");
        // missing everywhere
        assert_eq!(fr.t("d:unknownField"), "unknownField");
        assert!(!fr.has("d:unknownField"));
    }

    #[test]
    fn test_placeholders() {
        let en = Translator::new(Locale::En);
        assert_eq!(
            en.t_with("common:page", &[("page", "2"), ("total", "5")]),
            "Page 2 of 5"
        );
        assert_eq!(
            en.t_with("messages:confirm-action", &[("action", "delete")]),
            "Do you really want to delete this element?"
        );
    }

    #[test]
    fn test_error_message_convention() {
        let fr = Translator::new(Locale::Fr);
        assert_eq!(error_message(&fr, Some("FAPI_000006"), "x"), "Stock insuffisant");
        assert_eq!(
            error_message(&fr, Some("FAPI_999999"), "boom"),
            "Une erreur est survenue: boom"
        );
        assert_eq!(error_message(&fr, None, ""), "Une erreur est survenue");
        // en fallback for codes only translated in en
        assert_eq!(
            error_message(&fr, Some("HTTP_502"), ""),
            "The WMS API is not reachable"
        );
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("fr-FR"), Some(Locale::Fr));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("de"), None);
    }

    #[test]
    fn test_catalogs_share_keys() {
        // every fr key must exist in en, en is the fallback
        let en = CATALOGS.get(&Locale::En).unwrap();
        let fr = CATALOGS.get(&Locale::Fr).unwrap();
        for (namespace, keys) in fr {
            for key in keys.keys() {
                assert!(
                    en.get(namespace).is_some_and(|ns| ns.contains_key(key)),
                    "{}:{} missing in en.json",
                    namespace,
                    key
                );
            }
        }
    }
}
