//! Model descriptors for the generic CRUD components
//!
//! Every entity declares one `ModelDescriptor` (see `crate::domain`). The
//! descriptor drives list columns, detail rows, form inputs, GraphQL
//! documents and the page action buttons.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a006_delivery::DESCRIPTOR;
//!
//! for field in DESCRIPTOR.list_fields() {
//!     println!("{}: {}", field.name, field.label_key());
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::{FieldType, SortDirection};
pub use types::{EditRules, FieldMetadata, FieldUiMetadata, ModelDescriptor};
pub use validation::ValidationRules;
