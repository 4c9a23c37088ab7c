//! GraphQL documents and wire types for the WMS API
//!
//! - `builder`: query/mutation documents derived from a `ModelDescriptor`
//! - `types`: request/response envelopes, list pages, function results

mod builder;
mod types;

pub use builder::{
    build_create_mutation, build_delete_mutation, build_detail_query,
    build_execute_function_mutation, build_list_query, build_soft_delete_mutation,
    build_update_mutation, execute_function_variables, list_variables, selection_set,
    OrderByCriterion,
};
pub use types::{
    extract_field, FunctionResult, GraphqlError, GraphqlErrorExtensions, GraphqlFailure,
    GraphqlRequest, GraphqlResponse, ListPage,
};
