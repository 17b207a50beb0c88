//! Attendance working-hours computation.
//!
//! Working hours are the span between check-in and check-out minus the break
//! time, clamped at zero. Enforcement of the check-in/check-out ordering rules
//! (no double check-in per day, no check-out without a check-in) belongs to
//! the persistence collaborator; this module only computes.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::aggregate::round_currency;

/// Default break time in hours when a record carries none.
pub const DEFAULT_BREAK_TIME_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Computes the working hours between a check-in and a check-out.
///
/// `break_time_hours` defaults to 1 hour when absent. The result is clamped
/// at zero (a break longer than the span, or a check-out before the check-in,
/// yields 0 rather than a negative duration) and rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_working_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let check_in: NaiveDateTime = "2026-06-15T09:00:00".parse().unwrap();
/// let check_out: NaiveDateTime = "2026-06-15T18:00:00".parse().unwrap();
///
/// let hours = compute_working_hours(check_in, check_out, None);
/// assert_eq!(hours, Decimal::from(8));
/// ```
pub fn compute_working_hours(
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    break_time_hours: Option<Decimal>,
) -> Decimal {
    let break_time = break_time_hours.unwrap_or(DEFAULT_BREAK_TIME_HOURS);

    let worked_seconds = Decimal::from((check_out - check_in).num_seconds());
    let worked_hours = worked_seconds / Decimal::from(3600) - break_time;

    round_currency(worked_hours.max(Decimal::ZERO))
}
