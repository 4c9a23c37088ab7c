//! Workflow execution: a local REST body becomes an `executeFunction` call

pub mod executor;

pub use executor::{print_document, run_workflow};
