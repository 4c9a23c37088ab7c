use crate::layout::tabs::tab_label_for_key;
use contracts::shared::routes::{CrumbLabel, PageRoute};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs and panel state. A tab key is a page route
/// (`deliveries`, `deliveries/add`, `deliveries/<id>`, `deliveries/edit/<id>`).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            match PageRoute::parse(&active_key) {
                Some(PageRoute::Home) | None => {}
                Some(route) => self.navigate(&route),
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get().unwrap_or_default();
            let new_url = if active_key.is_empty() {
                "?".to_string()
            } else {
                let query_string =
                    serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                        .unwrap_or_default();
                format!("?{}", query_string)
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Open (or activate) the tab of a page route. Home closes nothing and
    /// just clears the active tab.
    pub fn navigate(&self, route: &PageRoute) {
        if *route == PageRoute::Home {
            self.active.set(None);
            return;
        }
        let key = route.key();
        self.open_tab(&key, tab_label_for_key(&key));
    }

    /// Navigate from `from_key` to `route`, closing the previous tab
    /// (add/edit form → detail page, deleted detail → list)
    pub fn replace(&self, from_key: &str, route: &PageRoute) {
        self.navigate(route);
        if from_key != route.key() {
            self.close_tab(from_key);
        }
    }

    pub fn open_tab(&self, key: &str, title: Vec<CrumbLabel>) {
        log::debug!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title,
                dirty: false,
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, title: Vec<CrumbLabel>) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = title;
            }
        });
    }

    pub fn set_dirty(&self, key: &str, dirty: bool) {
        let changed = self.opened.with_untracked(|tabs| {
            tabs.iter()
                .any(|t| t.key == key && t.dirty != dirty)
        });
        if changed {
            self.opened.update(|tabs| {
                if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                    tab.dirty = dirty;
                }
            });
        }
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn close_all(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    /// Parts joined with " · ", keys are translated at render time
    pub title: Vec<CrumbLabel>,
    pub dirty: bool,
}
