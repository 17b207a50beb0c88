//! Payable-days computation for a calendar month.
//!
//! Payable days are the attendance days marked present minus the days covered
//! by approved unpaid leave, clamped at zero. `total_working_days` is the
//! number of calendar days in the month, not business days; that matches the
//! stored behavior of the payroll views and is pinned by tests.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, LeaveRequest, LeaveStatus, LeaveType};

/// The payable-days summary for one employee and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableDays {
    /// Calendar days in the month.
    pub total_working_days: u32,
    /// Attendance records with status "present" inside the month.
    pub present_days: u32,
    /// Days of approved unpaid leave overlapping the month.
    pub unpaid_leave_days: u32,
    /// `max(0, present_days - unpaid_leave_days)`.
    pub payable_days: u32,
}

/// Returns the first and last day of a calendar month.
fn month_bounds(month: u32, year: i32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::InvalidMonth { month })?;
    // First day of the next month, stepped back one day.
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .ok_or(EngineError::InvalidMonth { month })?;
    Ok((start, end))
}

/// The inclusive day count of a leave clamped to the month window.
fn overlapping_days(leave: &LeaveRequest, month_start: NaiveDate, month_end: NaiveDate) -> u32 {
    if leave.end_date < month_start || leave.start_date > month_end {
        return 0;
    }
    let clamped_start = leave.start_date.max(month_start);
    let clamped_end = leave.end_date.min(month_end);
    ((clamped_end - clamped_start).num_days() + 1) as u32
}

/// Computes the payable days for one employee in a calendar month.
///
/// The caller supplies the employee's attendance records and leave requests
/// (the persistence collaborator owns retrieval); records belonging to other
/// employees are ignored when `employee_id` is given. Only attendance marked
/// present counts, and only approved unpaid leave reduces the count. Leaves
/// extending beyond the month are clamped to the month window.
///
/// # Errors
///
/// [`EngineError::InvalidMonth`] if `month` is outside 1..=12.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_payable_days;
///
/// let summary = compute_payable_days(&[], &[], None, 6, 2026).unwrap();
/// assert_eq!(summary.total_working_days, 30);
/// assert_eq!(summary.payable_days, 0);
/// ```
pub fn compute_payable_days(
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRequest],
    employee_id: Option<&str>,
    month: u32,
    year: i32,
) -> EngineResult<PayableDays> {
    let (month_start, month_end) = month_bounds(month, year)?;

    let present_days = attendance
        .iter()
        .filter(|record| employee_id.is_none_or(|id| record.employee_id == id))
        .filter(|record| record.status == AttendanceStatus::Present)
        .filter(|record| record.date >= month_start && record.date <= month_end)
        .count() as u32;

    let unpaid_leave_days: u32 = leaves
        .iter()
        .filter(|leave| employee_id.is_none_or(|id| leave.employee_id == id))
        .filter(|leave| leave.status == LeaveStatus::Approved)
        .filter(|leave| leave.leave_type == LeaveType::Unpaid)
        .map(|leave| overlapping_days(leave, month_start, month_end))
        .sum();

    Ok(PayableDays {
        total_working_days: month_end.day(),
        present_days,
        unpaid_leave_days,
        payable_days: present_days.saturating_sub(unpaid_leave_days),
    })
}
