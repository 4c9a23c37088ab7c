use super::usecase_result::UseCaseError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Body of a workflow route, turned into an `executeFunction` event
pub trait WorkflowRequest: DeserializeOwned + Send {
    /// Name of the WMS function
    const FUNCTION_NAME: &'static str;
    /// Name of the id in the body and in the event input
    const ID_PARAM: &'static str;

    fn id(&self) -> &str;

    /// Extra entries of the event input
    fn extra_input(&self) -> Map<String, Value> {
        Map::new()
    }

    fn validate(&self) -> Result<(), UseCaseError> {
        if self.id().trim().is_empty() {
            return Err(UseCaseError::validation(format!("{} is required", Self::ID_PARAM)));
        }
        Ok(())
    }

    /// `{ <id_param>: id, ...extra }`
    fn to_input(&self) -> Value {
        let mut input = self.extra_input();
        input.insert(Self::ID_PARAM.to_string(), json!(self.id().trim()));
        Value::Object(input)
    }
}

/// Successful workflow answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResponse {
    pub status: String,
    #[serde(default)]
    pub output: Value,
}

/// Output of the print functions: an inline base64 document or a link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOutput {
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl PrintOutput {
    pub fn from_output(output: Value) -> Result<Self, UseCaseError> {
        let parsed: PrintOutput = serde_json::from_value(output)
            .map_err(|e| UseCaseError::upstream(format!("unexpected print output: {}", e)))?;
        if parsed.document.is_none() && parsed.url.is_none() {
            return Err(UseCaseError::upstream("print output has neither document nor url"));
        }
        Ok(parsed)
    }
}

/// JSON answer of a print route when the document is not inline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_output() {
        let output = PrintOutput::from_output(json!({ "document": "JVBERi0=", "fileName": "l.pdf" })).unwrap();
        assert_eq!(output.document.as_deref(), Some("JVBERi0="));
        assert_eq!(output.file_name.as_deref(), Some("l.pdf"));

        let err = PrintOutput::from_output(json!({})).unwrap_err();
        assert_eq!(err.code, UseCaseError::UPSTREAM);
        assert!(PrintOutput::from_output(json!("oops")).is_err());
    }
}
