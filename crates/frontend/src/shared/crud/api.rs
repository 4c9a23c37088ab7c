//! GraphQL and REST calls of the generic CRUD pages

use crate::shared::api_utils::post_json;
use crate::shared::download::open_document;
use crate::shared::graphql::{execute_function, query};
use contracts::shared::config::StatusConfig;
use contracts::shared::graphql::{
    build_create_mutation, build_delete_mutation, build_detail_query, build_list_query,
    build_soft_delete_mutation, build_update_mutation, list_variables, GraphqlFailure, ListPage,
    OrderByCriterion,
};
use contracts::shared::metadata::ModelDescriptor;
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Code the WMS API uses for missing elements
const NOT_FOUND: &str = "FAPI_000005";

/// Choices loaded for a foreign key select
const OPTIONS_PAGE_SIZE: u32 = 200;

#[derive(Debug, Deserialize)]
struct Created {
    id: String,
}

pub async fn fetch_list(
    descriptor: &ModelDescriptor,
    page: u32,
    order_by: &[OrderByCriterion],
) -> Result<ListPage<Value>, GraphqlFailure> {
    let page_size = StatusConfig::embedded().list_page_size;
    query(
        build_list_query(descriptor),
        list_variables(page, page_size, order_by, None),
        &descriptor.list_endpoint(),
    )
    .await
}

pub async fn fetch_item(descriptor: &ModelDescriptor, id: &str) -> Result<Value, GraphqlFailure> {
    let item: Option<Value> = query(
        build_detail_query(descriptor),
        json!({ "id": id }),
        &descriptor.detail_endpoint(),
    )
    .await?;
    item.filter(|v| !v.is_null()).ok_or_else(|| {
        GraphqlFailure::with_code(NOT_FOUND, format!("{} {} not found", descriptor.table_name, id))
    })
}

/// `(id, label)` choices of a foreign key select
pub async fn fetch_options(descriptor: &ModelDescriptor) -> Result<Vec<(String, String)>, GraphqlFailure> {
    let page: ListPage<Value> = query(
        build_list_query(descriptor),
        list_variables(1, OPTIONS_PAGE_SIZE, &OrderByCriterion::defaults(descriptor), None),
        &descriptor.list_endpoint(),
    )
    .await?;
    Ok(page
        .results
        .iter()
        .filter_map(|item| option_of(descriptor, item))
        .collect())
}

fn option_of(descriptor: &ModelDescriptor, item: &Value) -> Option<(String, String)> {
    let id = item.get("id")?.as_str()?.to_string();
    let label = descriptor.label_of(item).unwrap_or_else(|| id.clone());
    Some((id, label))
}

/// Returns the id of the new element
pub async fn create_item(descriptor: &ModelDescriptor, input: Value) -> Result<String, GraphqlFailure> {
    let created: Created = query(
        build_create_mutation(descriptor),
        json!({ "input": input }),
        &descriptor.create_endpoint(),
    )
    .await?;
    Ok(created.id)
}

pub async fn update_item(
    descriptor: &ModelDescriptor,
    id: &str,
    input: Value,
) -> Result<(), GraphqlFailure> {
    let _: Value = query(
        build_update_mutation(descriptor),
        json!({ "id": id, "input": input }),
        &descriptor.update_endpoint(),
    )
    .await?;
    Ok(())
}

pub async fn delete_item(descriptor: &ModelDescriptor, id: &str) -> Result<(), GraphqlFailure> {
    let _: Value = query(
        build_delete_mutation(descriptor),
        json!({ "id": id }),
        &descriptor.delete_endpoint(),
    )
    .await?;
    Ok(())
}

pub async fn soft_delete_item(descriptor: &ModelDescriptor, id: &str) -> Result<(), GraphqlFailure> {
    let _: Value = query(
        build_soft_delete_mutation(descriptor),
        json!({ "id": id }),
        &descriptor.soft_delete_endpoint(),
    )
    .await?;
    Ok(())
}

/// Status change through the update mutation, `target` is a config constant
pub async fn transition(
    descriptor: &ModelDescriptor,
    id: &str,
    target: &str,
) -> Result<(), GraphqlFailure> {
    let input = transition_input(descriptor, target, StatusConfig::embedded())?;
    update_item(descriptor, id, input).await
}

fn transition_input(
    descriptor: &ModelDescriptor,
    target: &str,
    config: &StatusConfig,
) -> Result<Value, GraphqlFailure> {
    let field = descriptor
        .status_field
        .ok_or_else(|| GraphqlFailure::new(format!("{} has no status", descriptor.table_name)))?;
    let code = config
        .code(target)
        .ok_or_else(|| GraphqlFailure::new(format!("unknown status {}", target)))?;
    let mut input = Map::new();
    input.insert(field.to_string(), json!(code));
    Ok(Value::Object(input))
}

/// `executeFunction` with `{ <id_param>: id }`
pub async fn run_function(function_name: &str, id_param: &str, id: &str) -> Result<Value, GraphqlFailure> {
    execute_function(function_name, id_body(id_param, id, None)).await
}

/// POST `{ <id_param>: id }` to a workflow route
pub async fn run_workflow(endpoint: &str, id_param: &str, id: &str) -> Result<(), GraphqlFailure> {
    post_json(endpoint, &id_body(id_param, id, None)).await?;
    Ok(())
}

/// POST `{ <id_param>: id, language }` to a print route and show the document
pub async fn print_document(
    endpoint: &str,
    id_param: &str,
    id: &str,
    language: &str,
) -> Result<(), GraphqlFailure> {
    let response = post_json(endpoint, &id_body(id_param, id, Some(language))).await?;
    open_document(response, &format!("{}.pdf", id)).await
}

fn id_body(id_param: &str, id: &str, language: Option<&str>) -> Value {
    let mut body = Map::new();
    body.insert(id_param.to_string(), json!(id));
    if let Some(language) = language {
        body.insert("language".to_string(), json!(language));
    }
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{a004_carrier, a006_delivery};

    #[test]
    fn test_id_body() {
        assert_eq!(id_body("loadId", "L1", Some("fr")), json!({ "loadId": "L1", "language": "fr" }));
        assert_eq!(id_body("cycleCountId", "C1", None), json!({ "cycleCountId": "C1" }));
    }

    #[test]
    fn test_option_of() {
        let descriptor = &a004_carrier::DESCRIPTOR;
        let item = json!({ "id": "c1", "name": "DHL" });
        assert_eq!(option_of(descriptor, &item), Some(("c1".into(), "DHL".into())));
        assert_eq!(option_of(descriptor, &json!({ "id": "c2" })), Some(("c2".into(), "c2".into())));
        assert_eq!(option_of(descriptor, &json!({ "name": "x" })), None);
    }

    #[test]
    fn test_transition_input() {
        let config = StatusConfig::embedded();
        let code = config.code("DELIVERY_STATUS_ESTIMATED").unwrap();
        assert_eq!(
            transition_input(&a006_delivery::DESCRIPTOR, "DELIVERY_STATUS_ESTIMATED", config).unwrap(),
            json!({ "status": code })
        );
        assert!(transition_input(&a006_delivery::DESCRIPTOR, "NOPE", config).is_err());
    }

    #[test]
    fn test_transition_needs_status_field() {
        let config = StatusConfig::embedded();
        assert!(transition_input(&a004_carrier::DESCRIPTOR, "DELIVERY_STATUS_ESTIMATED", config).is_err());
    }
}
