//! Common types and traits for all UseCases

pub mod usecase_metadata;
pub mod usecase_result;
pub mod workflow;

// Re-exports
pub use usecase_metadata::UseCaseMetadata;
pub use usecase_result::{UseCaseError, UseCaseResult};
pub use workflow::{PrintOutput, PrintResponse, WorkflowRequest, WorkflowResponse};
