//! HTTP request handlers for the liquidation API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::CaseConfig;
use crate::models::{MAX_AMOUNT, PayPeriodRecord};
use crate::report::assemble_report;

use super::request::LiquidationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/liquidation", post(liquidation_handler))
        .with_state(state)
}

/// Handler for POST /liquidation endpoint.
///
/// Evaluates the submitted pay stubs and returns the full case report.
async fn liquidation_handler(
    State(state): State<AppState>,
    payload: Result<Json<LiquidationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing liquidation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if let Some((index, field)) = request
        .pay_periods
        .iter()
        .enumerate()
        .find_map(|(index, period)| period.oversized_field().map(|field| (index, field)))
    {
        warn!(
            correlation_id = %correlation_id,
            index,
            field,
            "Pay period amount out of range"
        );
        let error = ApiError::with_details(
            "VALIDATION_ERROR",
            format!("pay_periods[{}].{} is out of range", index, field),
            format!("Amounts must not exceed {}", MAX_AMOUNT),
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(error),
        )
            .into_response();
    }

    // A case sent with the request bypassed CaseConfig::new
    let mut config: CaseConfig = match request.case {
        Some(case) => {
            if let Err(err) = case.validate() {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Rejected case configuration"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
            case
        }
        None => state.config().clone(),
    };
    if let Some(evaluation_date) = request.evaluation_date {
        config = config.with_evaluation_date(evaluation_date);
    }

    let records: Vec<PayPeriodRecord> = request.pay_periods.into_iter().map(Into::into).collect();
    let report = assemble_report(&config, &records, Vec::new());

    info!(
        correlation_id = %correlation_id,
        report_id = %report.report_id,
        pay_periods = records.len(),
        total_claim = %report.total_claim,
        "Liquidation completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}
