//! Page routes and breadcrumbs
//!
//! A route is the key of a tab (`?active=<key>`):
//! `<route>`, `<route>/add`, `<route>/<id>`, `<route>/edit/<id>`.
//! Ids are escaped in the key (`%`, `/` and the literal `add`), so any id
//! survives `key` then `parse`.

use crate::domain::ModelRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRoute {
    Home,
    List { route: String },
    Add { route: String },
    Detail { route: String, id: String },
    Edit { route: String, id: String },
}

impl PageRoute {
    pub fn parse(key: &str) -> Option<PageRoute> {
        let segments: Vec<&str> = key
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => PageRoute::Home,
            [route] => PageRoute::List {
                route: route.to_string(),
            },
            [route, "add"] => PageRoute::Add {
                route: route.to_string(),
            },
            [route, "edit", id] => PageRoute::Edit {
                route: route.to_string(),
                id: decode_id(id)?,
            },
            [route, id] => PageRoute::Detail {
                route: route.to_string(),
                id: decode_id(id)?,
            },
            _ => return None,
        };
        Some(route)
    }

    pub fn key(&self) -> String {
        match self {
            PageRoute::Home => String::new(),
            PageRoute::List { route } => route.clone(),
            PageRoute::Add { route } => format!("{}/add", route),
            PageRoute::Detail { route, id } => format!("{}/{}", route, encode_id(id)),
            PageRoute::Edit { route, id } => format!("{}/edit/{}", route, encode_id(id)),
        }
    }

    /// Entity route segment, `None` for home
    pub fn entity_route(&self) -> Option<&str> {
        match self {
            PageRoute::Home => None,
            PageRoute::List { route }
            | PageRoute::Add { route }
            | PageRoute::Detail { route, .. }
            | PageRoute::Edit { route, .. } => Some(route),
        }
    }

    pub fn list(route: &str) -> Self {
        PageRoute::List {
            route: route.to_string(),
        }
    }

    pub fn detail(route: &str, id: &str) -> Self {
        PageRoute::Detail {
            route: route.to_string(),
            id: id.to_string(),
        }
    }

    pub fn edit(route: &str, id: &str) -> Self {
        PageRoute::Edit {
            route: route.to_string(),
            id: id.to_string(),
        }
    }

    pub fn add(route: &str) -> Self {
        PageRoute::Add {
            route: route.to_string(),
        }
    }
}

fn encode_id(id: &str) -> String {
    if id == "add" {
        return "%61dd".to_string();
    }
    id.replace('%', "%25").replace('/', "%2F")
}

/// `None` on a malformed escape
fn decode_id(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = raw
                .get(i + 1..i + 3)
                .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CrumbLabel {
    /// i18n key
    Key(String),
    /// Literal text (entity label or id)
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: CrumbLabel,
    /// Tab key to open on click, `None` for the current page and for groups
    pub target: Option<String>,
}

impl Breadcrumb {
    fn key(key: impl Into<String>, target: Option<String>) -> Self {
        Self {
            label: CrumbLabel::Key(key.into()),
            target,
        }
    }
}

/// `Home > group > list [> label] [> edit|add]`, `label` defaults to the id
pub fn breadcrumbs(route: &PageRoute, registry: &ModelRegistry, label: Option<&str>) -> Vec<Breadcrumb> {
    let descriptor = route.entity_route().and_then(|r| registry.by_route(r));
    let Some(descriptor) = descriptor else {
        return vec![Breadcrumb::key("common:home", None)];
    };

    let list_target = || Some(PageRoute::list(descriptor.route).key());
    let mut crumbs = vec![
        Breadcrumb::key("common:home", Some(PageRoute::Home.key())),
        Breadcrumb::key(descriptor.menu_group, None),
    ];

    let detail_crumb = |id: &str, target: Option<String>| Breadcrumb {
        label: CrumbLabel::Text(label.unwrap_or(id).to_string()),
        target,
    };

    match route {
        PageRoute::Home => {}
        PageRoute::List { .. } => crumbs.push(Breadcrumb::key(descriptor.list_key(), None)),
        PageRoute::Add { .. } => {
            crumbs.push(Breadcrumb::key(descriptor.list_key(), list_target()));
            crumbs.push(Breadcrumb::key("actions:add", None));
        }
        PageRoute::Detail { id, .. } => {
            crumbs.push(Breadcrumb::key(descriptor.list_key(), list_target()));
            crumbs.push(detail_crumb(id, None));
        }
        PageRoute::Edit { id, .. } => {
            crumbs.push(Breadcrumb::key(descriptor.list_key(), list_target()));
            crumbs.push(detail_crumb(id, Some(PageRoute::detail(descriptor.route, id).key())));
            crumbs.push(Breadcrumb::key("actions:edit", None));
        }
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(PageRoute::parse(""), Some(PageRoute::Home));
        assert_eq!(PageRoute::parse("/deliveries/"), Some(PageRoute::list("deliveries")));
        assert_eq!(PageRoute::parse("deliveries/add"), Some(PageRoute::add("deliveries")));
        assert_eq!(
            PageRoute::parse("deliveries/3f2a"),
            Some(PageRoute::detail("deliveries", "3f2a"))
        );
        assert_eq!(
            PageRoute::parse("deliveries/edit/3f2a"),
            Some(PageRoute::edit("deliveries", "3f2a"))
        );
        assert_eq!(PageRoute::parse("a/b/c/d"), None);
        assert_eq!(PageRoute::parse("a/view/c"), None);
    }

    #[test]
    fn test_keys_round_trip() {
        for key in ["", "loads", "loads/add", "loads/l1", "loads/edit/l1"] {
            assert_eq!(PageRoute::parse(key).unwrap().key(), key);
        }
    }

    #[test]
    fn test_unusual_ids_round_trip() {
        for id in ["add", "edit", "a/b", "50%", "%2F", "né"] {
            let detail = PageRoute::detail("loads", id);
            assert_eq!(PageRoute::parse(&detail.key()), Some(detail));
            let edit = PageRoute::edit("loads", id);
            assert_eq!(PageRoute::parse(&edit.key()), Some(edit));
        }
        assert_eq!(PageRoute::detail("loads", "add").key(), "loads/%61dd");
        assert_eq!(PageRoute::parse("loads/50%"), None);
        assert_eq!(PageRoute::parse("loads/%zz"), None);
    }

    #[test]
    fn test_breadcrumbs_for_edit() {
        let registry = ModelRegistry::default();
        let crumbs = breadcrumbs(&PageRoute::edit("deliveries", "d1"), &registry, Some("DLV-0001"));
        assert_eq!(
            crumbs,
            vec![
                Breadcrumb::key("common:home", Some(String::new())),
                Breadcrumb::key("menu:outbound", None),
                Breadcrumb::key("menu:deliveries", Some("deliveries".into())),
                Breadcrumb {
                    label: CrumbLabel::Text("DLV-0001".into()),
                    target: Some("deliveries/d1".into()),
                },
                Breadcrumb::key("actions:edit", None),
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_for_list_detail_add() {
        let registry = ModelRegistry::default();

        let list = breadcrumbs(&PageRoute::list("articles"), &registry, None);
        assert_eq!(list.len(), 3);
        assert_eq!(list[2], Breadcrumb::key("menu:articles", None));

        let detail = breadcrumbs(&PageRoute::detail("articles", "a1"), &registry, None);
        assert_eq!(detail[3].label, CrumbLabel::Text("a1".into()));
        assert_eq!(detail[3].target, None);

        let add = breadcrumbs(&PageRoute::add("articles"), &registry, None);
        assert_eq!(add.last(), Some(&Breadcrumb::key("actions:add", None)));
    }

    #[test]
    fn test_unknown_route_is_home_only() {
        let registry = ModelRegistry::default();
        let crumbs = breadcrumbs(&PageRoute::list("unknown"), &registry, None);
        assert_eq!(crumbs, vec![Breadcrumb::key("common:home", None)]);
    }
}
