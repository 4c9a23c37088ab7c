use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::{engine::general_purpose, Engine as _};
use contracts::usecases::common::{PrintOutput, PrintResponse, UseCaseMetadata, WorkflowRequest, WorkflowResponse};
use serde_json::Value;

use crate::shared::error::ApiError;
use crate::shared::wms::WmsGateway;

/// Validate the body, run the WMS function, return its output
pub async fn run_workflow<U: UseCaseMetadata, R: WorkflowRequest>(
    gateway: &dyn WmsGateway,
    request: &R,
    token: &str,
    username: &str,
) -> Result<Value, ApiError> {
    request.validate()?;

    let run_id = uuid::Uuid::new_v4();
    tracing::info!(
        "{} [{}] {}={} by {}",
        U::full_name(),
        run_id,
        R::ID_PARAM,
        request.id(),
        username
    );

    let started = std::time::Instant::now();
    let result = gateway
        .execute_function(R::FUNCTION_NAME, request.to_input(), Some(token))
        .await;

    match &result {
        Ok(_) => tracing::info!(
            "{} [{}] done in {}ms",
            U::full_name(),
            run_id,
            started.elapsed().as_millis()
        ),
        Err(e) => tracing::warn!("{} [{}] failed: {}", U::full_name(), run_id, e),
    }
    result
}

/// Workflow answer for the non-print routes
pub fn workflow_response(output: Value) -> Json<WorkflowResponse> {
    Json(WorkflowResponse {
        status: "OK".into(),
        output,
    })
}

/// Print output as a PDF response, or `{ url }` when the WMS only gives a link
pub fn print_document(output: Value, default_file_name: &str) -> Result<Response, ApiError> {
    let output = PrintOutput::from_output(output)?;

    let Some(document) = output.document else {
        let url = output.url.unwrap_or_default();
        return Ok(Json(PrintResponse { url }).into_response());
    };

    let bytes = general_purpose::STANDARD
        .decode(document.trim())
        .map_err(|e| ApiError::Upstream(format!("document is not valid base64: {}", e)))?;
    let file_name = output
        .file_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| default_file_name.to_string());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", file_name.replace('"', "")),
            ),
        ],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_inline_document_is_pdf() {
        let encoded = general_purpose::STANDARD.encode(b"%PDF-1.4 test");
        let response = print_document(json!({ "document": encoded }), "label.pdf").unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "inline; filename=\"label.pdf\""
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_link_is_json() {
        let response = print_document(json!({ "url": "https://files/l1.pdf" }), "label.pdf").unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: PrintResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.url, "https://files/l1.pdf");
    }

    #[test]
    fn test_broken_document() {
        let err = print_document(json!({ "document": "***" }), "x.pdf").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(print_document(json!({}), "x.pdf").is_err());
    }
}
