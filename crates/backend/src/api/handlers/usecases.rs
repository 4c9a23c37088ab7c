use axum::extract::{Json, State};
use axum::response::Response;
use contracts::usecases::common::WorkflowResponse;
use contracts::usecases::u501_start_cycle_count::{StartCycleCount, StartCycleCountRequest};
use contracts::usecases::u502_start_preparation::{StartPreparation, StartPreparationRequest};
use contracts::usecases::u503_print_load_label::{PrintLoadLabel, PrintLoadLabelRequest};
use contracts::usecases::u504_print_delivery_note::{PrintDeliveryNote, PrintDeliveryNoteRequest};

use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{BearerToken, CurrentUser};
use crate::usecases::executor::workflow_response;
use crate::usecases::{print_document, run_workflow};

// ============================================================================
// UseCase u501: Start cycle count
// ============================================================================

/// POST /api/cycle-count/start
pub async fn u501_start_cycle_count(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    BearerToken(token): BearerToken,
    Json(request): Json<StartCycleCountRequest>,
) -> Result<Json<WorkflowResponse>, ApiError> {
    let output = run_workflow::<StartCycleCount, _>(
        state.gateway.as_ref(),
        &request,
        &token,
        &user.username,
    )
    .await?;
    Ok(workflow_response(output))
}

// ============================================================================
// UseCase u502: Start preparation
// ============================================================================

/// POST /api/preparation/start
pub async fn u502_start_preparation(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    BearerToken(token): BearerToken,
    Json(request): Json<StartPreparationRequest>,
) -> Result<Json<WorkflowResponse>, ApiError> {
    let output = run_workflow::<StartPreparation, _>(
        state.gateway.as_ref(),
        &request,
        &token,
        &user.username,
    )
    .await?;
    Ok(workflow_response(output))
}

// ============================================================================
// UseCase u503: Print load label
// ============================================================================

/// POST /api/loads/print/label
pub async fn u503_print_load_label(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    BearerToken(token): BearerToken,
    Json(request): Json<PrintLoadLabelRequest>,
) -> Result<Response, ApiError> {
    let output = run_workflow::<PrintLoadLabel, _>(
        state.gateway.as_ref(),
        &request,
        &token,
        &user.username,
    )
    .await?;
    print_document(output, &format!("load-label-{}.pdf", request.load_id.trim()))
}

// ============================================================================
// UseCase u504: Print delivery note
// ============================================================================

/// POST /api/deliveries/print/delivery-note
pub async fn u504_print_delivery_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    BearerToken(token): BearerToken,
    Json(request): Json<PrintDeliveryNoteRequest>,
) -> Result<Response, ApiError> {
    let output = run_workflow::<PrintDeliveryNote, _>(
        state.gateway.as_ref(),
        &request,
        &token,
        &user.username,
    )
    .await?;
    print_document(
        output,
        &format!("delivery-note-{}.pdf", request.delivery_id.trim()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_state;
    use crate::shared::wms::mock::MockGateway;
    use crate::system::auth::jwt::testing;
    use axum::http::{header, StatusCode};
    use base64::{engine::general_purpose, Engine as _};
    use serde_json::json;

    fn ok(output: serde_json::Value) -> serde_json::Value {
        json!({ "data": { "executeFunction": { "status": "OK", "output": output } } })
    }

    #[tokio::test]
    async fn test_start_cycle_count() {
        let (state, gateway) = test_state(MockGateway::answering(ok(json!({ "tasks": 12 }))));
        let request = StartCycleCountRequest {
            cycle_count_id: "cc1".into(),
        };

        let Json(response) = u501_start_cycle_count(
            State(state),
            CurrentUser(testing::claims(60)),
            BearerToken("tok".into()),
            Json(request),
        )
        .await
        .unwrap();
        assert_eq!(response.status, "OK");
        assert_eq!(response.output["tasks"], 12);

        let (sent, token) = &gateway.requests()[0];
        assert_eq!(token.as_deref(), Some("tok"));
        assert_eq!(sent.variables["functionName"], "cycle_count_start");
        assert_eq!(sent.variables["event"], json!({ "input": { "cycleCountId": "cc1" } }));
    }

    #[tokio::test]
    async fn test_start_preparation_failure_is_422() {
        let (state, _) = test_state(MockGateway::answering(json!({
            "data": { "executeFunction": {
                "status": "ERROR",
                "output": { "code": "FAPI_000006", "message": "not enough stock" }
            } }
        })));
        let err = u502_start_preparation(
            State(state),
            CurrentUser(testing::claims(60)),
            BearerToken("tok".into()),
            Json(StartPreparationRequest {
                delivery_id: "d1".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.body().code, "FAPI_000006");
    }

    #[tokio::test]
    async fn test_missing_id_never_reaches_the_wms() {
        let (state, gateway) = test_state(MockGateway::new(vec![]));
        let err = u502_start_preparation(
            State(state),
            CurrentUser(testing::claims(60)),
            BearerToken("tok".into()),
            Json(StartPreparationRequest {
                delivery_id: " ".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_print_load_label_serves_pdf() {
        let document = general_purpose::STANDARD.encode(b"%PDF-label");
        let (state, gateway) = test_state(MockGateway::answering(ok(json!({ "document": document }))));

        let response = u503_print_load_label(
            State(state),
            CurrentUser(testing::claims(60)),
            BearerToken("tok".into()),
            Json(PrintLoadLabelRequest {
                load_id: "l1".into(),
                language: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "inline; filename=\"load-label-l1.pdf\""
        );

        let (sent, _) = &gateway.requests()[0];
        assert_eq!(sent.variables["functionName"], "print_load_label");
        assert_eq!(
            sent.variables["event"]["input"],
            json!({ "loadId": "l1", "language": "fr" })
        );
    }

    #[tokio::test]
    async fn test_print_delivery_note_link() {
        let (state, _) = test_state(MockGateway::answering(ok(json!({ "url": "https://files/d1.pdf" }))));
        let response = u504_print_delivery_note(
            State(state),
            CurrentUser(testing::claims(60)),
            BearerToken("tok".into()),
            Json(PrintDeliveryNoteRequest {
                delivery_id: "d1".into(),
                language: Some("en".into()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn test_unreachable_wms_is_502() {
        let (state, _) = test_state(MockGateway::new(vec![Err(ApiError::Upstream(
            "connection refused".into(),
        ))]));
        let err = u501_start_cycle_count(
            State(state),
            CurrentUser(testing::claims(60)),
            BearerToken("tok".into()),
            Json(StartCycleCountRequest {
                cycle_count_id: "cc1".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
