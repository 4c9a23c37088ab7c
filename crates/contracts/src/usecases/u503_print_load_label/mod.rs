use crate::shared::config::StatusConfig;
use crate::usecases::common::{UseCaseMetadata, WorkflowRequest};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub struct PrintLoadLabel;

impl UseCaseMetadata for PrintLoadLabel {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "print_load_label"
    }
}

/// `POST /api/loads/print/label`, the language defaults to
/// `DEFAULT_PRINT_LANGUAGE`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintLoadLabelRequest {
    pub load_id: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl WorkflowRequest for PrintLoadLabelRequest {
    const FUNCTION_NAME: &'static str = "print_load_label";
    const ID_PARAM: &'static str = "loadId";

    fn id(&self) -> &str {
        &self.load_id
    }

    fn extra_input(&self) -> Map<String, Value> {
        print_language(self.language.as_deref())
    }
}

/// `{ language }` entry of the print events
pub(crate) fn print_language(language: Option<&str>) -> Map<String, Value> {
    let language = language
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| StatusConfig::embedded().default_print_language.clone());
    let mut map = Map::new();
    map.insert("language".to_string(), Value::String(language));
    map
}
