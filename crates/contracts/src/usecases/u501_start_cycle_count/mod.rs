use crate::usecases::common::{UseCaseMetadata, WorkflowRequest};
use serde::{Deserialize, Serialize};

pub struct StartCycleCount;

impl UseCaseMetadata for StartCycleCount {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "start_cycle_count"
    }

    fn description() -> &'static str {
        "Generates the counting tasks and moves the cycle count to STARTED"
    }
}

/// `POST /api/cycle-count/start`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCycleCountRequest {
    pub cycle_count_id: String,
}

impl WorkflowRequest for StartCycleCountRequest {
    const FUNCTION_NAME: &'static str = "cycle_count_start";
    const ID_PARAM: &'static str = "cycleCountId";

    fn id(&self) -> &str {
        &self.cycle_count_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_to_input() {
        let request: StartCycleCountRequest =
            serde_json::from_value(json!({ "cycleCountId": " cc-1 " })).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.to_input(), json!({ "cycleCountId": "cc-1" }));
        assert_eq!(StartCycleCount::full_name(), "u501_start_cycle_count");
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let request = StartCycleCountRequest {
            cycle_count_id: "  ".into(),
        };
        assert_eq!(request.validate().unwrap_err().code, "VALIDATION_ERROR");
    }
}
