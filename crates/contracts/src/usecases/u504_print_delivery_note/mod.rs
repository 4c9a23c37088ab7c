use crate::usecases::common::{UseCaseMetadata, WorkflowRequest};
use crate::usecases::u503_print_load_label::print_language;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub struct PrintDeliveryNote;

impl UseCaseMetadata for PrintDeliveryNote {
    fn usecase_index() -> &'static str {
        "u504"
    }

    fn usecase_name() -> &'static str {
        "print_delivery_note"
    }
}

/// `POST /api/deliveries/print/delivery-note`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintDeliveryNoteRequest {
    pub delivery_id: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl WorkflowRequest for PrintDeliveryNoteRequest {
    const FUNCTION_NAME: &'static str = "print_delivery_note";
    const ID_PARAM: &'static str = "deliveryId";

    fn id(&self) -> &str {
        &self.delivery_id
    }

    fn extra_input(&self) -> Map<String, Value> {
        print_language(self.language.as_deref())
    }
}
