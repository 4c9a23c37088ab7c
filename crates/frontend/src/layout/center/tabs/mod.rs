pub mod tab;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;
use tab::Tab;

/// Strip of the open tabs above the page content
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tab-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| (tab.key.clone(), tab.title.clone(), tab.dirty)
                children=move |tab: TabData| view! { <Tab tab=tab /> }
            />
        </div>
    }
}
