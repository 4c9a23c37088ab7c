use crate::usecases::common::{UseCaseMetadata, WorkflowRequest};
use serde::{Deserialize, Serialize};

pub struct StartPreparation;

impl UseCaseMetadata for StartPreparation {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "start_preparation"
    }

    fn description() -> &'static str {
        "Releases an estimated delivery to the pickers"
    }
}

/// `POST /api/preparation/start`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPreparationRequest {
    pub delivery_id: String,
}

impl WorkflowRequest for StartPreparationRequest {
    const FUNCTION_NAME: &'static str = "preparation_start";
    const ID_PARAM: &'static str = "deliveryId";

    fn id(&self) -> &str {
        &self.delivery_id
    }
}
