//! Request types for the salary engine API.
//!
//! This module defines the JSON request structures for the payroll and
//! attendance endpoints. Field names follow the camelCase wire contract.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Employee, LeaveRequest, SalaryStructure};

/// Request body for `POST /payroll/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// The monthly gross wage.
    pub wage: Decimal,
    /// Optional structure override; the configured default applies when
    /// absent.
    #[serde(default)]
    pub salary_structure: Option<SalaryStructure>,
}

/// Request body for `POST /payroll/validate`.
///
/// Unlike calculation, validation always names the structure being edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    /// The monthly gross wage the structure is being configured against.
    pub wage: Decimal,
    /// The structure to validate before persisting.
    pub salary_structure: SalaryStructure,
}

/// Request body for `POST /payroll/employee`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayrollRequest {
    /// The employee record to resolve payroll for.
    pub employee: Employee,
}

/// Request body for `POST /payroll/payable-days`.
///
/// The caller supplies the month's attendance and leave records; retrieval
/// belongs to the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableDaysRequest {
    /// The employee to compute for; records for other employees are ignored.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// The attendance records to count from.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// The leave requests to count from.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
}

/// Request body for `POST /attendance/working-hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursRequest {
    /// The check-in instant.
    pub check_in: NaiveDateTime,
    /// The check-out instant.
    pub check_out: NaiveDateTime,
    /// Break time in hours; defaults to 1 when absent.
    #[serde(default)]
    pub break_time: Option<Decimal>,
}
