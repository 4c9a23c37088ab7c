//! Entity pages
//!
//! Every entity of the registry gets a list, detail, add and edit page built
//! from the generic CRUD components. Bespoke buttons come from the action
//! rules of the descriptor. Each page checks `Read` first, the forms then
//! check `Create` or `Update`.

use crate::shared::crud::{AddItem, EditItem, ItemDetail, ListItems};
use crate::system::auth::guard::RequireMode;
use contracts::domain::ModelRegistry;
use contracts::shared::metadata::ModelDescriptor;
use contracts::shared::routes::PageRoute;
use contracts::system::permissions::Mode;
use leptos::prelude::*;

#[component]
pub fn EntityList(descriptor: &'static ModelDescriptor) -> impl IntoView {
    view! {
        <RequireMode table_name=descriptor.table_name mode=Mode::Read>
            <ListItems descriptor=descriptor />
        </RequireMode>
    }
}

#[component]
pub fn EntityDetail(descriptor: &'static ModelDescriptor, id: String) -> impl IntoView {
    view! {
        <RequireMode table_name=descriptor.table_name mode=Mode::Read>
            <ItemDetail descriptor=descriptor id=id.clone() />
        </RequireMode>
    }
}

#[component]
pub fn EntityAdd(descriptor: &'static ModelDescriptor) -> impl IntoView {
    view! {
        <RequireMode table_name=descriptor.table_name mode=Mode::Read>
            <RequireMode table_name=descriptor.table_name mode=Mode::Create>
                <AddItem descriptor=descriptor />
            </RequireMode>
        </RequireMode>
    }
}

#[component]
pub fn EntityEdit(descriptor: &'static ModelDescriptor, id: String) -> impl IntoView {
    let id = StoredValue::new(id);
    view! {
        <RequireMode table_name=descriptor.table_name mode=Mode::Read>
            <RequireMode table_name=descriptor.table_name mode=Mode::Update>
                <EditItem descriptor=descriptor id=id.get_value() />
            </RequireMode>
        </RequireMode>
    }
}

/// Page of an entity route, `None` for unknown entities and for pages the
/// descriptor rules out (edit of a read-only entity)
pub fn render_entity_page(route: &PageRoute) -> Option<AnyView> {
    let descriptor = route
        .entity_route()
        .and_then(|r| ModelRegistry::default().by_route(r))?;

    let view = match route.clone() {
        PageRoute::Home => return None,
        PageRoute::List { .. } => view! { <EntityList descriptor=descriptor /> }.into_any(),
        PageRoute::Detail { id, .. } => view! { <EntityDetail descriptor=descriptor id=id /> }.into_any(),
        PageRoute::Add { .. } if has_form(descriptor, true) => {
            view! { <EntityAdd descriptor=descriptor /> }.into_any()
        }
        PageRoute::Edit { id, .. } if descriptor.is_editable && has_form(descriptor, false) => {
            view! { <EntityEdit descriptor=descriptor id=id /> }.into_any()
        }
        PageRoute::Add { .. } | PageRoute::Edit { .. } => return None,
    };
    Some(view)
}

fn has_form(descriptor: &ModelDescriptor, for_create: bool) -> bool {
    descriptor.form_fields(for_create).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{a006_delivery, a010_movement};

    #[test]
    fn test_forms_follow_descriptor() {
        assert!(has_form(&a006_delivery::DESCRIPTOR, true));
        assert!(has_form(&a006_delivery::DESCRIPTOR, false));
        assert!(!a010_movement::DESCRIPTOR.is_editable);
    }
}
