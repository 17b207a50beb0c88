//! HTTP API module for the Salary Component Computation Engine.
//!
//! This module provides the REST API endpoints for salary calculation,
//! structure validation, employee payroll, payable days and working hours.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, EmployeePayrollRequest, PayableDaysRequest, ValidationRequest,
    WorkingHoursRequest,
};
pub use response::{ApiError, EmployeePayrollResponse, ValidationResponse, WorkingHoursResponse};
pub use state::AppState;
