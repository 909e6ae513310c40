//! HTTP request handlers for the salary slip API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::SlipComponent;

use super::request::SalarySlipRequest;
use super::response::{ApiError, ApiErrorResponse, ComponentResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary-slip", post(salary_slip_handler))
        .route("/salary-slip/:component", post(component_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: PayrollError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /salary-slip.
///
/// Calculates every component and returns the full [`SalarySlip`](crate::models::SalarySlip).
async fn salary_slip_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalarySlipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary slip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match state.processor().calculate_salary_slip(&request.employee) {
        Ok(slip) => {
            info!(
                correlation_id = %correlation_id,
                slip_id = %slip.slip_id,
                gross_pay = %slip.totals.gross_pay,
                net_pay = %slip.totals.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Salary slip calculated"
            );
            json_response(StatusCode::OK, slip)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /salary-slip/{component}.
///
/// Calculates a single component, e.g. `/salary-slip/danger-pay`.
async fn component_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<SalarySlipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        component = %slug,
        "Processing component request"
    );

    let Some(component) = SlipComponent::from_slug(&slug) else {
        warn!(correlation_id = %correlation_id, component = %slug, "Unknown component");
        return json_response(StatusCode::NOT_FOUND, ApiError::unknown_component(&slug));
    };

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state
        .processor()
        .calculate_component(component, &request.employee)
    {
        Ok(amount) => {
            info!(
                correlation_id = %correlation_id,
                component = component.rule_id(),
                amount = %amount,
                "Component calculated"
            );
            json_response(StatusCode::OK, ComponentResponse { component, amount })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{Employee, SalarySlip};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post(uri: &str, body: String) -> (StatusCode, serde_json::Value) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_slip() {
        let request = SalarySlipRequest {
            employee: Some(Employee {
                wage: dec!(500),
                working_days: 20,
                duty_station: "Head Office".to_string(),
                ..Employee::default()
            }),
        };

        let (status, body) = post("/salary-slip", serde_json::to_string(&request).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        let slip: SalarySlip = serde_json::from_value(body).unwrap();
        assert_eq!(slip.totals.basic_salary, dec!(10000));
        // basic + office transportation
        assert_eq!(slip.totals.gross_pay, dec!(10100));
    }

    #[tokio::test]
    async fn test_missing_employee_returns_400() {
        let (status, body) = post("/salary-slip", "{}".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_ARGUMENT");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = post("/salary-slip", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_component_endpoint_returns_amount() {
        let body = r#"{"employee": {"is_married": true}}"#.to_string();
        let (status, body) = post("/salary-slip/spouse-allowance", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["component"], "spouse_allowance");
        assert_eq!(body["amount"], "150");
    }

    #[tokio::test]
    async fn test_unknown_component_returns_404() {
        let (status, body) = post("/salary-slip/overtime", "{}".to_string()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "UNKNOWN_COMPONENT");
    }
}
