use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn new(query: String, variables: Value) -> Self {
        Self { query, variables }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<GraphqlErrorExtensions>,
}

impl GraphqlError {
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref().and_then(|e| e.code.as_deref())
    }
}

/// Response envelope, `data` may be partial when `errors` is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// First error of a failed call, or a transport/decoding problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlFailure {
    pub code: Option<String>,
    pub message: String,
}

impl GraphqlFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for GraphqlFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for GraphqlFailure {}

impl<T> GraphqlResponse<T> {
    /// Any error wins over data
    pub fn into_result(self) -> Result<T, GraphqlFailure> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(GraphqlFailure {
                code: error.code().map(str::to_string),
                message: error.message,
            });
        }
        self.data
            .ok_or_else(|| GraphqlFailure::new("empty GraphQL response"))
    }
}

/// Take `data.<endpoint>` and decode it
pub fn extract_field<T: DeserializeOwned>(data: Value, endpoint: &str) -> Result<T, GraphqlFailure> {
    let Value::Object(mut map) = data else {
        return Err(GraphqlFailure::new("GraphQL data is not an object"));
    };
    let field = map
        .remove(endpoint)
        .ok_or_else(|| GraphqlFailure::new(format!("missing '{}' in response", endpoint)))?;
    serde_json::from_value(field)
        .map_err(|e| GraphqlFailure::new(format!("cannot decode '{}': {}", endpoint, e)))
}

/// Paginated list result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub count: u64,
    pub items_per_page: u32,
    pub total_pages: u32,
    pub results: Vec<T>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            count: 0,
            items_per_page: 0,
            total_pages: 0,
            results: Vec::new(),
        }
    }
}

/// Result of `executeFunction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResult {
    pub status: String,
    #[serde(default)]
    pub output: Value,
}

impl FunctionResult {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("OK")
    }

    /// Error code reported by a failed function (`output.code`)
    pub fn error_code(&self) -> Option<&str> {
        if self.is_ok() {
            return None;
        }
        self.output.get("code").and_then(Value::as_str)
    }

    pub fn into_result(self) -> Result<Value, GraphqlFailure> {
        if self.is_ok() {
            return Ok(self.output);
        }
        let message = self
            .output
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(self.status.as_str())
            .to_string();
        Err(match self.error_code() {
            Some(code) => GraphqlFailure::with_code(code, message),
            None => GraphqlFailure::new(message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_errors_win_over_data() {
        let response: GraphqlResponse<Value> = serde_json::from_value(json!({
            "data": { "article": null },
            "errors": [{ "message": "forbidden", "extensions": { "code": "FAPI_000002" } }]
        }))
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.code.as_deref(), Some("FAPI_000002"));
        assert_eq!(err.to_string(), "FAPI_000002: forbidden");
    }

    #[test]
    fn test_missing_data_is_a_failure() {
        let response: GraphqlResponse<Value> = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_result().is_err());
    }

    #[test]
    fn test_extract_list_page() {
        let data = json!({
            "articles": {
                "count": 1, "itemsPerPage": 20, "totalPages": 1,
                "results": [{ "id": "a1", "name": "Box" }]
            }
        });
        let page: ListPage<Value> = extract_field(data, "articles").unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0]["name"], "Box");
        assert!(extract_field::<ListPage<Value>>(json!({}), "articles").is_err());
    }

    #[test]
    fn test_function_result() {
        let ok = FunctionResult {
            status: "OK".into(),
            output: json!({ "document": "JVBERi0=" }),
        };
        assert_eq!(ok.error_code(), None);
        assert!(ok.into_result().is_ok());

        let failed = FunctionResult {
            status: "ERROR".into(),
            output: json!({ "code": "FAPI_000006", "message": "no stock" }),
        };
        assert_eq!(failed.error_code(), Some("FAPI_000006"));
        let err = failed.into_result().unwrap_err();
        assert_eq!(err, GraphqlFailure::with_code("FAPI_000006", "no stock"));
    }
}
