use crate::shared::metadata::{FieldMetadata, ModelDescriptor, SortDirection};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One `orderBy` entry of a list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderByCriterion {
    pub field: String,
    pub ascending: bool,
}

impl OrderByCriterion {
    pub fn new(field: &str, direction: SortDirection) -> Self {
        Self {
            field: field.to_string(),
            ascending: direction.is_ascending(),
        }
    }

    /// Default sort declared by the descriptor
    pub fn defaults(descriptor: &ModelDescriptor) -> Vec<Self> {
        descriptor
            .default_sort()
            .into_iter()
            .map(|(field, dir)| Self::new(field, dir))
            .collect()
    }
}

#[derive(Debug, Default)]
struct SelectionNode {
    name: String,
    children: Vec<SelectionNode>,
}

impl SelectionNode {
    fn insert(&mut self, path: &str) {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let pos = match self.children.iter().position(|c| c.name == head) {
            Some(pos) => pos,
            None => {
                self.children.push(SelectionNode {
                    name: head.to_string(),
                    children: Vec::new(),
                });
                self.children.len() - 1
            }
        };
        if let Some(rest) = rest {
            self.children[pos].insert(rest);
        }
    }

    fn render(&self, out: &mut String) {
        out.push_str("{ ");
        for child in &self.children {
            out.push_str(&child.name);
            out.push(' ');
            if !child.children.is_empty() {
                child.render(out);
                out.push(' ');
            }
        }
        out.push('}');
    }
}

/// Selection set for the given field paths, `id` first.
///
/// Dotted paths nest: `["id", "stockOwner.name"]` gives
/// `{ id stockOwner { name } }`.
pub fn selection_set<'a>(paths: impl IntoIterator<Item = &'a str>) -> String {
    let mut root = SelectionNode::default();
    root.insert("id");
    for path in paths {
        if !path.is_empty() {
            root.insert(path);
        }
    }
    let mut out = String::new();
    root.render(&mut out);
    out
}

fn names<'a>(fields: impl Iterator<Item = &'a FieldMetadata>) -> Vec<&'a str> {
    fields.map(|f| f.name).collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn build_list_query(descriptor: &ModelDescriptor) -> String {
    let endpoint = descriptor.list_endpoint();
    let resolver = descriptor.resolver_name;
    format!(
        "query {op}($filters: {resolver}SearchFilters, $orderBy: [{resolver}OrderByCriterion!], \
         $page: Int!, $itemsPerPage: Int!) {{ {endpoint}(filters: $filters, orderBy: $orderBy, \
         page: $page, itemsPerPage: $itemsPerPage) {{ count itemsPerPage totalPages results {sel} }} }}",
        op = capitalize(&endpoint),
        sel = selection_set(names(descriptor.list_fields())),
    )
}

pub fn build_detail_query(descriptor: &ModelDescriptor) -> String {
    format!(
        "query Get{resolver}ById($id: String!) {{ {endpoint}(id: $id) {sel} }}",
        resolver = descriptor.resolver_name,
        endpoint = descriptor.detail_endpoint(),
        sel = selection_set(names(descriptor.detail_fields())),
    )
}

pub fn build_create_mutation(descriptor: &ModelDescriptor) -> String {
    let resolver = descriptor.resolver_name;
    format!(
        "mutation Create{resolver}($input: Create{resolver}Input!) {{ {endpoint}(input: $input) {{ id }} }}",
        endpoint = descriptor.create_endpoint(),
    )
}

pub fn build_update_mutation(descriptor: &ModelDescriptor) -> String {
    let resolver = descriptor.resolver_name;
    format!(
        "mutation Update{resolver}($id: String!, $input: Update{resolver}Input!) {{ {endpoint}(id: $id, input: $input) {{ id }} }}",
        endpoint = descriptor.update_endpoint(),
    )
}

pub fn build_delete_mutation(descriptor: &ModelDescriptor) -> String {
    format!(
        "mutation Delete{resolver}($id: String!) {{ {endpoint}(id: $id) }}",
        resolver = descriptor.resolver_name,
        endpoint = descriptor.delete_endpoint(),
    )
}

pub fn build_soft_delete_mutation(descriptor: &ModelDescriptor) -> String {
    format!(
        "mutation SoftDelete{resolver}($id: String!) {{ {endpoint}(id: $id) }}",
        resolver = descriptor.resolver_name,
        endpoint = descriptor.soft_delete_endpoint(),
    )
}

pub fn build_execute_function_mutation() -> String {
    "mutation ExecuteFunction($functionName: String!, $event: JSON!) { \
     executeFunction(functionName: $functionName, event: $event) { status output } }"
        .to_string()
}

/// Variables of a list query. `page` starts at 1.
pub fn list_variables(
    page: u32,
    items_per_page: u32,
    order_by: &[OrderByCriterion],
    filters: Option<Value>,
) -> Value {
    json!({
        "filters": filters,
        "orderBy": if order_by.is_empty() { Value::Null } else { json!(order_by) },
        "page": page.max(1),
        "itemsPerPage": items_per_page,
    })
}

/// Variables of `executeFunction`, the event wraps the payload in `input`
pub fn execute_function_variables(function_name: &str, input: Value) -> Value {
    json!({
        "functionName": function_name,
        "event": { "input": input },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::DEFAULT_RULES;
    use crate::shared::metadata::FieldType;

    const FIELDS: &[FieldMetadata] = &[
        FieldMetadata::new("id", FieldType::String).detail(),
        FieldMetadata::new("name", FieldType::String).shown(),
        FieldMetadata::new("stockOwner.name", FieldType::String).list(),
        FieldMetadata::new("stockOwner.id", FieldType::String).detail(),
        FieldMetadata::new("status", FieldType::Status("article_status")).shown(),
    ];

    const ARTICLE: ModelDescriptor = ModelDescriptor {
        entity_index: "t001",
        resolver_name: "Article",
        table_name: "article",
        route: "articles",
        menu_group: "menu:configuration",
        list_endpoint: None,
        is_editable: true,
        is_deletable: true,
        is_soft_deletable: true,
        status_field: Some("status"),
        label_field: Some("name"),
        fields: FIELDS,
        actions: DEFAULT_RULES,
    };

    #[test]
    fn test_selection_set_nests_dotted_paths() {
        assert_eq!(
            selection_set(["name", "stockOwner.name", "stockOwner.code", "status"]),
            "{ id name stockOwner { name code } status }"
        );
        assert_eq!(selection_set(["id", "id"]), "{ id }");
        assert_eq!(selection_set(["a.b.c"]), "{ id a { b { c } } }");
    }

    #[test]
    fn test_list_query() {
        assert_eq!(
            build_list_query(&ARTICLE),
            "query Articles($filters: ArticleSearchFilters, $orderBy: [ArticleOrderByCriterion!], \
             $page: Int!, $itemsPerPage: Int!) { articles(filters: $filters, orderBy: $orderBy, \
             page: $page, itemsPerPage: $itemsPerPage) { count itemsPerPage totalPages \
             results { id name stockOwner { name } status } } }"
        );
    }

    #[test]
    fn test_detail_query() {
        assert_eq!(
            build_detail_query(&ARTICLE),
            "query GetArticleById($id: String!) { article(id: $id) { id name stockOwner { id } status } }"
        );
    }

    #[test]
    fn test_mutations() {
        assert_eq!(
            build_create_mutation(&ARTICLE),
            "mutation CreateArticle($input: CreateArticleInput!) { createArticle(input: $input) { id } }"
        );
        assert_eq!(
            build_update_mutation(&ARTICLE),
            "mutation UpdateArticle($id: String!, $input: UpdateArticleInput!) { updateArticle(id: $id, input: $input) { id } }"
        );
        assert_eq!(
            build_delete_mutation(&ARTICLE),
            "mutation DeleteArticle($id: String!) { deleteArticle(id: $id) }"
        );
        assert_eq!(
            build_soft_delete_mutation(&ARTICLE),
            "mutation SoftDeleteArticle($id: String!) { softDeleteArticle(id: $id) }"
        );
    }

    #[test]
    fn test_list_variables() {
        let order = vec![OrderByCriterion::new("name", SortDirection::Descending)];
        let vars = list_variables(0, 20, &order, None);
        assert_eq!(vars["page"], 1);
        assert_eq!(vars["itemsPerPage"], 20);
        assert_eq!(vars["orderBy"][0]["field"], "name");
        assert_eq!(vars["orderBy"][0]["ascending"], false);
        assert!(vars["filters"].is_null());
        assert!(list_variables(2, 20, &[], None)["orderBy"].is_null());
    }

    #[test]
    fn test_execute_function_variables() {
        let vars = execute_function_variables("cycle_count_start", json!({ "cycleCountId": "c1" }));
        assert_eq!(vars["functionName"], "cycle_count_start");
        assert_eq!(vars["event"]["input"]["cycleCountId"], "c1");
    }
}
