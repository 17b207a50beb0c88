//! Attendance and leave request models.
//!
//! Input shapes for the working-hours and payable-days computations. The
//! persistence collaborator owns these records; in particular it enforces the
//! at-most-one-record-per-employee-per-day constraint atomically, which is not
//! recomputed here.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recorded status of an attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// The employee was present.
    Present,
    /// The employee was absent.
    Absent,
    /// The employee worked half a day.
    HalfDay,
    /// The employee was on leave.
    Leave,
}

/// One attendance record for an (employee, calendar-day) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day of the record.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
    /// Check-in instant, if the employee has checked in.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Check-out instant, if the employee has checked out.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Break time in hours deducted from the working hours.
    #[serde(default)]
    pub break_time: Option<Decimal>,
}

/// The category of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    /// Paid leave; does not reduce payable days.
    Paid,
    /// Sick leave; does not reduce payable days.
    Sick,
    /// Unpaid leave; approved requests reduce payable days.
    Unpaid,
}

/// The workflow state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Awaiting an HR decision.
    Pending,
    /// Approved by HR.
    Approved,
    /// Rejected by HR.
    Rejected,
}

/// A leave request spanning an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// The employee the request belongs to.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The category of leave.
    pub leave_type: LeaveType,
    /// The workflow state.
    pub status: LeaveStatus,
}
