//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_salary_components, compute_payable_days, compute_working_hours, validate_structure,
};
use crate::error::EngineError;

use super::request::{
    CalculationRequest, EmployeePayrollRequest, PayableDaysRequest, ValidationRequest,
    WorkingHoursRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, EmployeePayrollResponse, EmployeeSummary, ValidationResponse,
    WorkingHoursResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/validate", post(validate_handler))
        .route("/payroll/employee", post(employee_payroll_handler))
        .route("/payroll/payable-days", post(payable_days_handler))
        .route("/attendance/working-hours", post(working_hours_handler))
        .with_state(state)
}

/// Maps a JSON extractor rejection to a structured 400 error.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn ok_json<T: serde::Serialize>(body: T) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(error: EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /payroll/calculate.
///
/// Resolves the salary breakdown for a wage, using the configured default
/// structure when the request carries none.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    if request.wage < Decimal::ZERO {
        warn!(correlation_id = %correlation_id, wage = %request.wage, "Negative wage rejected");
        return engine_error_response(EngineError::InvalidWage {
            message: format!("wage must not be negative, got {}", request.wage),
        });
    }

    let structure = request
        .salary_structure
        .unwrap_or_else(|| state.default_structure().clone());
    let resolved = calculate_salary_components(request.wage, Some(&structure));

    info!(
        correlation_id = %correlation_id,
        wage = %resolved.wage,
        net_salary = %resolved.totals.net_salary,
        "Salary calculation completed"
    );
    ok_json(resolved)
}

/// Handler for POST /payroll/validate.
///
/// Validates a structure edit before it is persisted. Over-commit answers
/// 200 with `valid: false`; only transport-level problems answer 400.
async fn validate_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing structure validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    match validate_structure(request.wage, &request.salary_structure) {
        Ok(resolved) => {
            info!(
                correlation_id = %correlation_id,
                wage = %request.wage,
                total_components = %resolved.totals.total_components,
                "Structure validated"
            );
            ok_json(ValidationResponse::valid(resolved))
        }
        Err(error @ EngineError::OverCommitted { .. }) => {
            warn!(
                correlation_id = %correlation_id,
                wage = %request.wage,
                error = %error,
                "Structure overcommits wage"
            );
            ok_json(ValidationResponse::invalid(error.to_string()))
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Validation failed");
            engine_error_response(error)
        }
    }
}

/// Handler for POST /payroll/employee.
///
/// Resolves payroll for an employee record, applying the embedded structure
/// or the configured default.
async fn employee_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeePayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let employee = request.employee;
    let structure = employee
        .salary_structure
        .clone()
        .unwrap_or_else(|| state.default_structure().clone());
    let salary = calculate_salary_components(employee.wage, Some(&structure));

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        net_salary = %salary.totals.net_salary,
        "Employee payroll resolved"
    );
    ok_json(EmployeePayrollResponse {
        employee: EmployeeSummary {
            id: employee.id,
            name: employee.name,
        },
        salary,
    })
}

/// Handler for POST /payroll/payable-days.
async fn payable_days_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PayableDaysRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payable days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    match compute_payable_days(
        &request.attendance,
        &request.leaves,
        request.employee_id.as_deref(),
        request.month,
        request.year,
    ) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                month = request.month,
                year = request.year,
                payable_days = summary.payable_days,
                "Payable days computed"
            );
            ok_json(summary)
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Payable days failed");
            engine_error_response(error)
        }
    }
}

/// Handler for POST /attendance/working-hours.
async fn working_hours_handler(
    State(_state): State<AppState>,
    payload: Result<Json<WorkingHoursRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working hours request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let working_hours =
        compute_working_hours(request.check_in, request.check_out, request.break_time);

    info!(
        correlation_id = %correlation_id,
        working_hours = %working_hours,
        "Working hours computed"
    );
    ok_json(WorkingHoursResponse { working_hours })
}
